// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric value types.
//!
//! This module defines the plain data carried into and out of the
//! normalization: pixel points, reference-area sizes, and the result
//! record that echoes the transform's basis back to the caller.

use serde::{Deserialize, Serialize};

/// A 2D point in absolute pixel coordinates.
///
/// Values may be negative or beyond the reference area's bounds; the
/// normalizer either clamps or passes them through, per configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Dimensions of a reference area, in pixels.
///
/// Both values are expected to be non-negative finite numbers; this is a
/// caller contract, not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A normalized mouse position together with the basis it was computed in.
///
/// `x`/`y` are the normalized coordinates, in [-1, 1] when clamping is on
/// (or beyond when it is off). `origin` is the origin point as decimal
/// fractions of the reference area, and `size` is the resolved reference
/// size, so a caller never needs a second query to reconstruct the
/// transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPosition {
    pub x: f64,
    pub y: f64,
    pub origin: Point,
    pub size: Size,
}
