//! Plain geometric values.
//!
//! Currently just [`Rectangle`], a width/height pair that knows its own area.

/// Rectangle value.
pub mod rectangle;

pub use rectangle::Rectangle;
