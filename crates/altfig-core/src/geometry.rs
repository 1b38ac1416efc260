//! Rectangles in the two coordinate conventions this crate deals with.
//!
//! PDF user space puts the origin at the bottom-left of the page with y
//! growing upwards ([`PdfRect`]). Image-based consumers expect a top-left
//! origin with y growing downwards ([`BBox`]). Converting between the two
//! only needs the page height.

use lopdf::Object;

/// Bounding box with top-left origin coordinate system.
///
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Convert back to bottom-up PDF user space for a page of the given height.
    pub fn unflip(&self, page_height: f64) -> PdfRect {
        PdfRect::new(
            self.x0,
            page_height - self.bottom,
            self.x1,
            page_height - self.top,
        )
    }
}

/// A `/BBox`-style rectangle as stored in the file: `[left, bottom, right, top]`
/// in bottom-up user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfRect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl PdfRect {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Read a rectangle from a lopdf array of exactly 4 numbers.
    ///
    /// Returns `None` for any other length or for non-numeric entries.
    pub fn from_array(array: &[Object]) -> Option<Self> {
        if array.len() != 4 {
            return None;
        }
        Some(Self::new(
            object_to_f64(&array[0])?,
            object_to_f64(&array[1])?,
            object_to_f64(&array[2])?,
            object_to_f64(&array[3])?,
        ))
    }

    pub fn height(&self) -> f64 {
        (self.top - self.bottom).abs()
    }

    /// Project into top-down coordinates for a page of the given height.
    ///
    /// X values pass through; `top = height - self.top` and
    /// `bottom = height - self.bottom`.
    pub fn flip(&self, page_height: f64) -> BBox {
        BBox::new(
            self.left,
            page_height - self.top,
            self.right,
            page_height - self.bottom,
        )
    }
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
pub fn object_to_f64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(*f as f64),
        _ => None,
    }
}
