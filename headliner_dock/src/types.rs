// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the docking header: state, phases, element ownership, and banner events.
//!
//! These types are referenced by the [`cell`](crate::cell) controller and by hosts
//! implementing [`CellHost`](crate::host::CellHost).

use alloc::string::String;

/// Lifecycle event reported by the banner that renders the ad.
///
/// Fed into [`AdCell::handle_banner_event`](crate::cell::AdCell::handle_banner_event).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BannerEvent<I, E> {
    /// An ad was loaded; carries the renderer's ad info.
    Loaded(I),
    /// No ad could be loaded. Terminal for the load attempt.
    FailedToLoad(E),
    /// The user clicked the ad.
    Clicked,
    /// The user asked to close the ad (for example with its close button).
    CloseRequested,
}

/// Which parent currently holds the cell's visual element.
///
/// Exactly one of these is true at any time; only the controller decides transfers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum ElementParent {
    /// Inside the header cell's container, in the list.
    Inline,
    /// On the host's stick-to-top surface, over the list.
    Stuck,
    /// Removed from any parent; media playback stops.
    #[default]
    Detached,
}

/// How the host lays the element out in its new parent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ElementLayout {
    /// Pinned to all edges of the inline container, which the host sizes from
    /// [`AdCellState::current_height`].
    FillContainer,
    /// Pinned to the top (safe area) of the stick surface with a fixed height.
    PinnedTop {
        /// Fixed element height, the docked height.
        height: f64,
    },
    /// Not laid out at all.
    Hidden,
}

/// Presentation phase of a cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CellPhase {
    /// In the list, sized from the scroll offset.
    Inline,
    /// Docked at the minimum height.
    Stuck,
    /// Collapsed to zero height. Terminal.
    Closed,
}

/// Observable state of a header cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdCellState {
    /// The cell collapsed and stopped reacting to scrolls.
    pub is_closed: bool,
    /// The cell is docked (logically, even when no stick surface exists).
    pub is_stuck: bool,
    /// Height of the ad container.
    pub current_height: f64,
    /// Height of the padding that keeps the container bottom-aligned in the cell.
    pub padding_height: f64,
}

impl AdCellState {
    /// The frozen state of a closed cell.
    pub const CLOSED: Self = Self {
        is_closed: true,
        is_stuck: false,
        current_height: 0.0,
        padding_height: 0.0,
    };

    /// A fresh, open, inline state at `max_height`.
    pub const fn open(max_height: f64) -> Self {
        Self {
            is_closed: false,
            is_stuck: false,
            current_height: max_height,
            padding_height: max_height,
        }
    }

    /// Phase derived from the flags.
    pub const fn phase(&self) -> CellPhase {
        if self.is_closed {
            CellPhase::Closed
        } else if self.is_stuck {
            CellPhase::Stuck
        } else {
            CellPhase::Inline
        }
    }
}

bitflags::bitflags! {
    /// What an operation on a cell changed, so hosts can skip redundant work.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CellChanges: u8 {
        /// [`AdCellState::current_height`] changed.
        const HEIGHT   = 0b0000_0001;
        /// [`AdCellState::padding_height`] changed.
        const PADDING  = 0b0000_0010;
        /// The cell entered the stuck phase.
        const DOCKED   = 0b0000_0100;
        /// The cell left the stuck phase.
        const UNDOCKED = 0b0000_1000;
        /// The cell closed.
        const CLOSED   = 0b0001_0000;
        /// The element moved to another parent.
        const REPARENTED = 0b0010_0000;
    }
}

impl CellChanges {
    /// Whether the host must recompute the list layout (row heights changed).
    pub fn needs_layout(self) -> bool {
        self.intersects(Self::HEIGHT | Self::PADDING | Self::CLOSED)
    }
}

/// Why a cell closed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CloseReason {
    /// The banner failed to load an ad.
    LoadFailed,
    /// The user asked the banner to close.
    UserRequested,
    /// The host called [`AdCell::close`](crate::cell::AdCell::close).
    Host,
}

/// Where an ad is requested from.
///
/// Opaque to the controller; forwarded to the [`AdRenderer`](crate::host::AdRenderer).
/// The placement must target a header-ad template, otherwise the ad may lack a close button.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdPlacement {
    /// Site identifier.
    pub site_id: u64,
    /// Page identifier.
    pub page_id: u64,
    /// Format identifier.
    pub format_id: u64,
    /// Optional keyword targeting string.
    #[cfg_attr(feature = "serde", serde(default))]
    pub keyword_targeting: Option<String>,
}

impl AdPlacement {
    /// Placement without keyword targeting.
    pub fn new(site_id: u64, page_id: u64, format_id: u64) -> Self {
        Self {
            site_id,
            page_id,
            format_id,
            keyword_targeting: None,
        }
    }

    /// Set the keyword targeting string.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keyword_targeting = Some(keywords.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_flags() {
        assert_eq!(AdCellState::open(100.0).phase(), CellPhase::Inline);
        let stuck = AdCellState {
            is_stuck: true,
            ..AdCellState::open(100.0)
        };
        assert_eq!(stuck.phase(), CellPhase::Stuck);
        assert_eq!(AdCellState::CLOSED.phase(), CellPhase::Closed);
    }

    #[test]
    fn closed_state_is_zero_sized() {
        assert_eq!(AdCellState::CLOSED.current_height, 0.0);
        assert_eq!(AdCellState::CLOSED.padding_height, 0.0);
        assert!(!AdCellState::CLOSED.is_stuck);
    }

    #[test]
    fn layout_needed_only_for_size_changes() {
        assert!(CellChanges::HEIGHT.needs_layout());
        assert!(CellChanges::CLOSED.needs_layout());
        assert!(!(CellChanges::DOCKED | CellChanges::REPARENTED).needs_layout());
        assert!(!CellChanges::empty().needs_layout());
    }

    #[test]
    fn placement_builder() {
        let p = AdPlacement::new(507_206, 1_579_908, 15_048).with_keywords("header01");
        assert_eq!(p.keyword_targeting.as_deref(), Some("header01"));
    }
}
