//! JSON text helpers.
//!
//! - [`to_text`] turns any [`serde::Serialize`] value into compact JSON.
//! - [`from_text`] parses JSON into a plain record and then builds a value of
//!   the requested type from it. The type parameter plays the role of the
//!   "capability set": the result gains that type's methods while carrying the
//!   parsed fields as its own data.
//!
//! # Example
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Size {
//!     width: u32,
//!     height: u32,
//! }
//!
//! let text = koan_json::to_text(&Size { width: 10, height: 20 }).unwrap();
//! assert_eq!(text, r#"{"width":10,"height":20}"#);
//!
//! let size: Size = koan_json::from_text(&text).unwrap();
//! assert_eq!(size, Size { width: 10, height: 20 });
//! ```

mod error;
mod record;
/// Conversion between values and JSON text.
pub mod text;

pub use error::JsonError;
pub use text::{from_text, to_text, to_text_pretty};
