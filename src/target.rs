// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Reference-area abstraction.
//!
//! The normalizer needs exactly one thing from its surroundings: the
//! current rendered width and height of the rectangle the coordinates
//! live in. There is no ambient default; callers pass the reference area
//! explicitly, whether that is a viewport, a widget's box, or plain
//! dimensions they measured themselves.

use crate::models::geometry::Size;

/// Anything with a queryable rendered width and height, in pixels.
///
/// Only the size is ever read; the area's position on screen is
/// irrelevant to normalization.
pub trait ReferenceArea {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// The area's dimensions as a [`Size`].
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Explicit dimensions, for callers that measure the area themselves.
impl ReferenceArea for Size {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

/// An egui rectangle: a screen rect for viewport-relative normalization,
/// or a widget's rect for element-relative normalization.
impl ReferenceArea for egui::Rect {
    fn width(&self) -> f64 {
        egui::Rect::width(self) as f64
    }

    fn height(&self) -> f64 {
        egui::Rect::height(self) as f64
    }
}
