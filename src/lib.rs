// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! mousenorm - normalized mouse position relative to a configurable origin.
//!
//! Converts absolute pixel coordinates into a signed coordinate space
//! anchored at an arbitrary origin point inside a rectangular reference
//! area (a viewport or a widget's box), with optional clamping to [-1, 1]
//! and per-axis inversion.
//!
//! The core is a single stateless function, [`normalize`]. Measuring the
//! reference area is the caller's job: anything implementing
//! [`ReferenceArea`] (a plain [`Size`], or an `egui::Rect`) can serve as
//! the coordinate space.
//!
//! ```
//! use mousenorm::{normalize, NormalizeOptions, Point, Size};
//!
//! let area = Size::new(800.0, 600.0);
//! let result = normalize(Point::new(400.0, 300.0), &area, &NormalizeOptions::default());
//! assert!(result.x.abs() < 1e-9 && result.y.abs() < 1e-9);
//! ```

pub mod models;
pub mod normalizer;
pub mod origin;
pub mod target;

pub use models::geometry::{NormalizedPosition, Point, Size};
pub use normalizer::{normalize, NormalizeOptions};
pub use origin::Origin;
pub use target::ReferenceArea;
