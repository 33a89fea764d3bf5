// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration for the table demo.

use headliner_dock::geometry::GeometryConfig;
use headliner_dock::types::AdPlacement;
use serde::{Deserialize, Serialize};

/// Outcome the scripted renderer reports for a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    /// An ad is delivered.
    Fill,
    /// No ad is available; the cell collapses.
    NoFill,
}

/// One step of the scripted session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Scroll the list to an absolute content offset.
    Scroll {
        /// Vertical content offset.
        y: f64,
    },
    /// The user taps the ad.
    Click,
    /// The user taps the ad's close button.
    CloseButton,
}

/// The whole demo session.
///
/// Plain values come before tables so the struct serializes back to valid TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Screen height.
    #[serde(default = "default_screen_height")]
    pub screen_height: f64,
    /// Number of rows in the table, the header ad row included.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Height of each content row.
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    /// Whether the screen acts as a stick-to-top surface.
    #[serde(default = "default_true")]
    pub stick_to_top: bool,
    /// What the renderer answers.
    #[serde(default = "default_outcome")]
    pub outcome: LoadOutcome,
    /// Docking geometry; `container_width` is also the screen width.
    pub geometry: GeometryConfig,
    /// Where the ad is requested from.
    pub placement: AdPlacement,
    /// Scripted user input, in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_screen_height() -> f64 {
    640.0
}

fn default_rows() -> usize {
    40
}

fn default_row_height() -> f64 {
    44.0
}

fn default_true() -> bool {
    true
}

fn default_outcome() -> LoadOutcome {
    LoadOutcome::Fill
}

/// Session used when no configuration file is given.
pub const DEFAULT_CONFIG: &str = r#"
screen_height = 640.0
rows = 40
row_height = 44.0
stick_to_top = true
outcome = "fill"

[geometry]
container_width = 360.0

[placement]
site_id = 507206
page_id = 1579908
format_id = 15048
keyword_targeting = "header01"

[[steps]]
action = "scroll"
y = 0.0

[[steps]]
action = "scroll"
y = 60.0

[[steps]]
action = "scroll"
y = 150.0

[[steps]]
action = "scroll"
y = 400.0

[[steps]]
action = "click"

[[steps]]
action = "scroll"
y = 50.0

[[steps]]
action = "scroll"
y = -30.0

[[steps]]
action = "scroll"
y = 150.0

[[steps]]
action = "close_button"

[[steps]]
action = "scroll"
y = 20.0
"#;

impl DemoConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The built-in session.
    pub fn builtin() -> Result<Self, toml::de::Error> {
        Self::from_toml(DEFAULT_CONFIG)
    }
}
