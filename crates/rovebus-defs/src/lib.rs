//! Message identifiers and field layouts for the rovebus vehicle network.
//!
//! This crate is the registry side of the codec: it maps the 32-bit message
//! identifiers used on the bus to their
//! [`MessageKind`](rovebus_frame::MessageKind) (which selects the
//! error-subfield policy in `rovebus-frame`) and publishes the per-message
//! field layouts, so every node packs the same value into the same bits.
//!
//! The codec itself never looks at identifiers; transport code resolves the
//! kind here and passes it in.

mod ids;
mod layout;

pub use ids::*;
pub use layout::*;
