// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building a [`DockGeometry`](crate::geometry::DockGeometry).
//!
//! Runtime failures never surface as errors: a banner that fails to load is
//! reported through [`CellListener::on_failed`](crate::host::CellListener::on_failed)
//! and collapses the cell, and a host without a stick surface simply never docks
//! the element visually.

/// Invalid docking geometry.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// An aspect ratio was zero, negative, or not finite.
    #[error("aspect ratio must be finite and positive, got {0}")]
    NonPositiveRatio(f64),
    /// The maximum-size ratio was not strictly smaller than the docking ratio.
    #[error("max ratio {max} must be smaller than min ratio {min}")]
    InvertedRatios {
        /// Ratio of the fully expanded header.
        max: f64,
        /// Ratio at which the header docks.
        min: f64,
    },
    /// The container width was zero, negative, or not finite.
    #[error("container width must be finite and positive, got {0}")]
    InvalidWidth(f64),
}
