// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The coordinate normalizer.
//!
//! This module provides the core transform: mapping an absolute pixel
//! position to a signed normalized position relative to a configurable
//! origin inside a reference area, with optional clamping to [-1, 1] and
//! per-axis inversion.

use crate::models::geometry::{NormalizedPosition, Point};
use crate::origin::Origin;
use crate::target::ReferenceArea;

/// Configuration for [`normalize`].
///
/// The defaults match the common case: origin at the center, results
/// clamped to [-1, 1], no inversion. Construct with struct-update syntax
/// to override individual fields:
///
/// ```
/// use mousenorm::{NormalizeOptions, Origin};
///
/// let options = NormalizeOptions {
///     origin: Origin::parse("0 0"),
///     clamp: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    /// Origin point as decimal fractions of the reference area
    pub origin: Origin,
    /// Restrict each axis of the result to [-1, 1]
    pub clamp: bool,
    /// Negate the x axis (applied before clamping)
    pub invert_x: bool,
    /// Negate the y axis (applied before clamping)
    pub invert_y: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            origin: Origin::CENTER,
            clamp: true,
            invert_x: false,
            invert_y: false,
        }
    }
}

/// Normalize an absolute pixel position against a reference area.
///
/// The origin's pixel position divides the area into two spans per axis;
/// the normalization denominator is the *larger* span, so the result
/// reaches exactly ±1 only at the farther edge while the nearer edge
/// yields a magnitude below 1. With a centered origin both edges map to
/// ±1.
///
/// Never errors and never panics: out-of-range positions are clamped or
/// passed through per `options`, and degenerate inputs (zero-size area,
/// NaN origin fractions) propagate as non-finite values under the usual
/// floating-point rules.
pub fn normalize(
    point: Point,
    area: &impl ReferenceArea,
    options: &NormalizeOptions,
) -> NormalizedPosition {
    let size = area.size();
    let origin = options.origin;

    // Origin in absolute pixels
    let origin_px_x = size.width * origin.x;
    let origin_px_y = size.height * origin.y;

    // Distance from the origin to the farther edge on each axis
    let max_dist_x = origin_px_x.max(size.width - origin_px_x);
    let max_dist_y = origin_px_y.max(size.height - origin_px_y);

    let mut x = (point.x - origin_px_x) / max_dist_x;
    let mut y = (point.y - origin_px_y) / max_dist_y;

    if options.invert_x {
        x = -x;
    }
    if options.invert_y {
        y = -y;
    }

    if options.clamp {
        x = x.clamp(-1.0, 1.0);
        y = y.clamp(-1.0, 1.0);
    }

    NormalizedPosition {
        x,
        y,
        origin: Point::new(origin.x, origin.y),
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geometry::Size;

    const AREA: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_center_point_with_default_origin_is_zero() {
        let result = normalize(Point::new(400.0, 300.0), &AREA, &NormalizeOptions::default());
        assert_close(result.x, 0.0);
        assert_close(result.y, 0.0);
        assert_eq!(result.origin, Point::new(0.5, 0.5));
        assert_eq!(result.size, AREA);
    }

    #[test]
    fn test_corners_with_centered_origin_hit_unit_magnitude() {
        let corners = [
            (0.0, 0.0, -1.0, -1.0),
            (800.0, 0.0, 1.0, -1.0),
            (0.0, 600.0, -1.0, 1.0),
            (800.0, 600.0, 1.0, 1.0),
        ];
        for (x, y, expected_x, expected_y) in corners {
            let result = normalize(Point::new(x, y), &AREA, &NormalizeOptions::default());
            assert_close(result.x, expected_x);
            assert_close(result.y, expected_y);
        }
    }

    #[test]
    fn test_top_left_origin() {
        let options = NormalizeOptions {
            origin: Origin::parse("0 0"),
            ..Default::default()
        };

        let at_origin = normalize(Point::new(0.0, 0.0), &AREA, &options);
        assert_close(at_origin.x, 0.0);
        assert_close(at_origin.y, 0.0);

        let far_corner = normalize(Point::new(800.0, 600.0), &AREA, &options);
        assert_close(far_corner.x, 1.0);
        assert_close(far_corner.y, 1.0);
    }

    #[test]
    fn test_bottom_right_origin() {
        let options = NormalizeOptions {
            origin: Origin::parse("100% 100%"),
            ..Default::default()
        };

        let at_origin = normalize(Point::new(800.0, 600.0), &AREA, &options);
        assert_close(at_origin.x, 0.0);
        assert_close(at_origin.y, 0.0);

        let far_corner = normalize(Point::new(0.0, 0.0), &AREA, &options);
        assert_close(far_corner.x, -1.0);
        assert_close(far_corner.y, -1.0);
    }

    #[test]
    fn test_asymmetric_origin_reaches_unit_only_at_farther_edge() {
        // Origin at 25% of 800 = 200px; farther edge is 600px away
        let options = NormalizeOptions {
            origin: Origin::parse("25% 50%"),
            ..Default::default()
        };

        let at_origin = normalize(Point::new(200.0, 300.0), &AREA, &options);
        assert_close(at_origin.x, 0.0);

        let right = normalize(Point::new(800.0, 300.0), &AREA, &options);
        assert_close(right.x, 1.0);

        // The nearer (left) edge is only 200/600 of the denominator away
        let left = normalize(Point::new(0.0, 300.0), &AREA, &options);
        assert_close(left.x, -1.0 / 3.0);
    }

    #[test]
    fn test_symmetry_about_centered_origin() {
        let options = NormalizeOptions::default();

        let right = normalize(Point::new(600.0, 300.0), &AREA, &options);
        let left = normalize(Point::new(200.0, 300.0), &AREA, &options);
        assert_close(right.x, -left.x);
        assert_close(right.y, left.y);

        let top = normalize(Point::new(400.0, 150.0), &AREA, &options);
        let bottom = normalize(Point::new(400.0, 450.0), &AREA, &options);
        assert_close(top.x, bottom.x);
        assert_close(top.y, -bottom.y);
    }

    #[test]
    fn test_out_of_range_input_clamps_by_default() {
        let result = normalize(Point::new(1200.0, 900.0), &AREA, &NormalizeOptions::default());
        assert_eq!(result.x, 1.0);
        assert_eq!(result.y, 1.0);

        let negative = normalize(Point::new(-400.0, -300.0), &AREA, &NormalizeOptions::default());
        assert_eq!(negative.x, -1.0);
        assert_eq!(negative.y, -1.0);
    }

    #[test]
    fn test_unclamped_magnitudes_exceed_one() {
        let options = NormalizeOptions {
            clamp: false,
            ..Default::default()
        };
        // origin_px = (400, 300), max_dist = (400, 300), raw = (800/400, 600/300)
        let result = normalize(Point::new(1200.0, 900.0), &AREA, &options);
        assert_close(result.x, 2.0);
        assert_close(result.y, 2.0);
    }

    #[test]
    fn test_invert_x_negates_only_x() {
        let point = Point::new(600.0, 450.0);
        let normal = normalize(point, &AREA, &NormalizeOptions::default());
        let inverted = normalize(
            point,
            &AREA,
            &NormalizeOptions {
                invert_x: true,
                ..Default::default()
            },
        );
        assert_close(inverted.x, -normal.x);
        assert_close(inverted.y, normal.y);
    }

    #[test]
    fn test_invert_y_negates_only_y() {
        let point = Point::new(600.0, 450.0);
        let normal = normalize(point, &AREA, &NormalizeOptions::default());
        let inverted = normalize(
            point,
            &AREA,
            &NormalizeOptions {
                invert_y: true,
                ..Default::default()
            },
        );
        assert_close(inverted.x, normal.x);
        assert_close(inverted.y, -normal.y);
    }

    #[test]
    fn test_invert_both_axes() {
        let point = Point::new(600.0, 450.0);
        let normal = normalize(point, &AREA, &NormalizeOptions::default());
        let inverted = normalize(
            point,
            &AREA,
            &NormalizeOptions {
                invert_x: true,
                invert_y: true,
                ..Default::default()
            },
        );
        assert_close(inverted.x, -normal.x);
        assert_close(inverted.y, -normal.y);
    }

    #[test]
    fn test_inversion_applies_before_clamping() {
        // Raw x would be +2; inversion makes it -2, then clamping pins -1
        let options = NormalizeOptions {
            invert_x: true,
            ..Default::default()
        };
        let result = normalize(Point::new(1200.0, 300.0), &AREA, &options);
        assert_eq!(result.x, -1.0);
    }

    #[test]
    fn test_origin_echo_is_unaffected_by_flags() {
        let options = NormalizeOptions {
            origin: Origin::parse("25% 75%"),
            clamp: false,
            invert_x: true,
            invert_y: true,
        };
        let result = normalize(Point::new(9999.0, -9999.0), &AREA, &options);
        assert_eq!(result.origin, Point::new(0.25, 0.75));
        assert_eq!(result.size, AREA);
    }

    #[test]
    fn test_element_sized_reference_area() {
        let element = Size::new(400.0, 300.0);
        let result = normalize(Point::new(200.0, 150.0), &element, &NormalizeOptions::default());
        assert_close(result.x, 0.0);
        assert_close(result.y, 0.0);
        assert_eq!(result.size, element);
    }

    #[test]
    fn test_egui_rect_as_reference_area() {
        let rect = egui::Rect::from_min_size(egui::pos2(50.0, 50.0), egui::vec2(400.0, 300.0));
        let result = normalize(Point::new(400.0, 300.0), &rect, &NormalizeOptions::default());
        // Position of the rect is irrelevant; only its 400x300 size counts
        assert_close(result.x, 1.0);
        assert_close(result.y, 1.0);
        assert_eq!(result.size, Size::new(400.0, 300.0));
    }

    #[test]
    fn test_zero_size_area_propagates_nonfinite() {
        let degenerate = Size::new(0.0, 0.0);
        let unclamped = NormalizeOptions {
            clamp: false,
            ..Default::default()
        };

        // 0/0 at the origin itself is NaN
        let at_origin = normalize(Point::new(0.0, 0.0), &degenerate, &unclamped);
        assert!(at_origin.x.is_nan());
        assert!(at_origin.y.is_nan());

        // Any other point divides a finite offset by zero
        let elsewhere = normalize(Point::new(10.0, -10.0), &degenerate, &unclamped);
        assert_eq!(elsewhere.x, f64::INFINITY);
        assert_eq!(elsewhere.y, f64::NEG_INFINITY);

        // Clamping pins the infinities but leaves NaN alone
        let clamped = normalize(Point::new(10.0, -10.0), &degenerate, &NormalizeOptions::default());
        assert_eq!(clamped.x, 1.0);
        assert_eq!(clamped.y, -1.0);
    }

    #[test]
    fn test_malformed_origin_propagates_nan() {
        let options = NormalizeOptions {
            origin: Origin::parse("left top"),
            ..Default::default()
        };
        let result = normalize(Point::new(400.0, 300.0), &AREA, &options);
        assert!(result.x.is_nan());
        assert!(result.y.is_nan());
        assert!(result.origin.x.is_nan());
        assert!(result.origin.y.is_nan());
        // The reference size is still echoed
        assert_eq!(result.size, AREA);
    }
}
