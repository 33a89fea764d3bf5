// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docking geometry: aspect ratios and the heights derived from them.
//!
//! Ratios are `width / height`, so the *maximum* ratio yields the *largest*
//! height and the *minimum* ratio the smallest one:
//!
//! ```
//! use headliner_dock::geometry::DockGeometry;
//!
//! let g = DockGeometry::with_default_ratios(360.0).unwrap();
//! assert!((g.max_height() - 202.5).abs() < 1e-9);
//! assert!((g.min_height() - 101.25).abs() < 1e-9);
//! assert!(g.docks_at(150.0));
//! assert!(!g.docks_at(50.0));
//! ```

use crate::error::GeometryError;

/// Ratio of the fully expanded header. 16:9 is the usual video ratio.
pub const DEFAULT_MAX_RATIO: f64 = 16.0 / 9.0;

/// Ratio at which the header leaves the list and docks over it.
pub const DEFAULT_MIN_RATIO: f64 = 32.0 / 9.0;

/// Unvalidated geometry settings, as read from configuration.
///
/// The width has no default; the ratios fall back to [`DEFAULT_MAX_RATIO`]
/// and [`DEFAULT_MIN_RATIO`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryConfig {
    /// Width of the list container the header spans.
    pub container_width: f64,
    /// The header never grows higher than needed to reach this ratio.
    #[cfg_attr(feature = "serde", serde(default = "default_max_ratio"))]
    pub max_ratio: f64,
    /// The header docks once its ratio reaches this value.
    #[cfg_attr(feature = "serde", serde(default = "default_min_ratio"))]
    pub min_ratio: f64,
}

#[cfg(feature = "serde")]
fn default_max_ratio() -> f64 {
    DEFAULT_MAX_RATIO
}

#[cfg(feature = "serde")]
fn default_min_ratio() -> f64 {
    DEFAULT_MIN_RATIO
}

impl GeometryConfig {
    /// Settings for `container_width` with the default ratios.
    pub fn with_width(container_width: f64) -> Self {
        Self {
            container_width,
            max_ratio: DEFAULT_MAX_RATIO,
            min_ratio: DEFAULT_MIN_RATIO,
        }
    }
}

/// Validated, immutable docking geometry for one cell.
///
/// Invariants: `container_width > 0` and `max_ratio < min_ratio`, hence
/// `max_height > min_height > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockGeometry {
    config: GeometryConfig,
    max_height: f64,
    min_height: f64,
}

impl DockGeometry {
    /// Validate ratios and width and derive the header heights.
    pub fn new(
        container_width: f64,
        max_ratio: f64,
        min_ratio: f64,
    ) -> Result<Self, GeometryError> {
        for ratio in [max_ratio, min_ratio] {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(GeometryError::NonPositiveRatio(ratio));
            }
        }
        if max_ratio >= min_ratio {
            return Err(GeometryError::InvertedRatios {
                max: max_ratio,
                min: min_ratio,
            });
        }
        if !(container_width.is_finite() && container_width > 0.0) {
            return Err(GeometryError::InvalidWidth(container_width));
        }
        Ok(Self {
            config: GeometryConfig {
                container_width,
                max_ratio,
                min_ratio,
            },
            max_height: container_width / max_ratio,
            min_height: container_width / min_ratio,
        })
    }

    /// Geometry using [`DEFAULT_MAX_RATIO`] and [`DEFAULT_MIN_RATIO`].
    pub fn with_default_ratios(container_width: f64) -> Result<Self, GeometryError> {
        Self::new(container_width, DEFAULT_MAX_RATIO, DEFAULT_MIN_RATIO)
    }

    /// The settings this geometry was built from.
    pub fn config(&self) -> GeometryConfig {
        self.config
    }

    /// Width of the list container.
    pub fn container_width(&self) -> f64 {
        self.config.container_width
    }

    /// Height of the fully expanded header (`width / max_ratio`).
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Height of the docked header (`width / min_ratio`).
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Height the header would take inline at vertical scroll offset `y`.
    pub fn candidate_height(&self, y: f64) -> f64 {
        self.max_height - y
    }

    /// Whether the header is docked at vertical scroll offset `y`.
    ///
    /// The boundary itself docks.
    pub fn docks_at(&self, y: f64) -> bool {
        self.candidate_height(y) <= self.min_height
    }

    /// Smallest scroll offset at which the header docks.
    pub fn docking_offset(&self) -> f64 {
        self.max_height - self.min_height
    }
}

impl TryFrom<GeometryConfig> for DockGeometry {
    type Error = GeometryError;

    fn try_from(config: GeometryConfig) -> Result<Self, Self::Error> {
        Self::new(config.container_width, config.max_ratio, config.min_ratio)
    }
}
