//! A rectangle described by its width and height.

use serde::{Deserialize, Serialize};

/// A rectangle with a width and a height.
///
/// No validation is performed on the dimensions: negative, zero, and
/// non-finite values are stored as given.
///
/// # Example
/// ```
/// use koan_shapes::Rectangle;
///
/// let r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.width, 10.0);
/// assert_eq!(r.height, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a new `Rectangle` with the dimensions stored verbatim.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width multiplied by height.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
