// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted stand-in for the ad SDK's banner.

use std::collections::VecDeque;

use headliner_dock::host::{AdRenderer, CellListener};
use headliner_dock::types::{AdPlacement, BannerEvent};

use crate::config::LoadOutcome;

/// What the banner reports after a successful load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdInfo {
    /// Placement the ad was served for.
    pub placement: AdPlacement,
    /// Identifier of the served insertion.
    pub insertion_id: u64,
}

/// Why a load failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// No ad matched the placement.
    #[error("no ad available for format {format_id}")]
    NoFill {
        /// Requested format.
        format_id: u64,
    },
}

/// Banner events the demo feeds to the cell.
pub type DemoEvent = BannerEvent<AdInfo, LoadError>;

/// Answers every load with a fixed outcome, queued until [`ScriptedRenderer::drain`].
#[derive(Debug)]
pub struct ScriptedRenderer {
    outcome: LoadOutcome,
    next_insertion: u64,
    pending: VecDeque<DemoEvent>,
    loads: usize,
}

impl ScriptedRenderer {
    /// Renderer answering with `outcome`.
    pub fn new(outcome: LoadOutcome) -> Self {
        Self {
            outcome,
            next_insertion: 1,
            pending: VecDeque::new(),
            loads: 0,
        }
    }

    /// Number of load requests received.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Queue a user click, as the banner would report it.
    pub fn click(&mut self) {
        self.pending.push_back(BannerEvent::Clicked);
    }

    /// Queue a tap on the banner's close button.
    pub fn tap_close_button(&mut self) {
        self.pending.push_back(BannerEvent::CloseRequested);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = DemoEvent> + '_ {
        self.pending.drain(..)
    }
}

impl AdRenderer for ScriptedRenderer {
    type Placement = AdPlacement;

    fn load(&mut self, placement: &AdPlacement) {
        self.loads += 1;
        let event = match self.outcome {
            LoadOutcome::Fill => {
                let insertion_id = self.next_insertion;
                self.next_insertion += 1;
                BannerEvent::Loaded(AdInfo {
                    placement: placement.clone(),
                    insertion_id,
                })
            }
            LoadOutcome::NoFill => BannerEvent::FailedToLoad(LoadError::NoFill {
                format_id: placement.format_id,
            }),
        };
        self.pending.push_back(event);
    }
}

/// The owner's view of the cell: logs every notification and counts them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionLog {
    /// Loaded ads.
    pub loaded: Vec<u64>,
    /// Load failures.
    pub failures: usize,
    /// Clicks.
    pub clicks: usize,
    /// Closes.
    pub closes: usize,
}

impl CellListener<AdInfo, LoadError> for SessionLog {
    fn on_loaded(&mut self, info: &AdInfo) {
        tracing::info!(
            insertion_id = info.insertion_id,
            site_id = info.placement.site_id,
            "video header ad did load"
        );
        self.loaded.push(info.insertion_id);
    }

    fn on_failed(&mut self, error: &LoadError) {
        tracing::info!(%error, "video header ad did fail to load");
        self.failures += 1;
    }

    fn on_clicked(&mut self) {
        tracing::info!("video header ad was clicked");
        self.clicks += 1;
    }

    fn on_closed(&mut self) {
        tracing::info!("video header ad did close");
        self.closes += 1;
    }
}
