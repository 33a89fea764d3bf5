// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the surface tree: identifiers, flags, and local geometry.

use kurbo::{Rect, Vec2};

/// Identifier for a surface in the tree.
///
/// A small, copyable handle that stays stable while the surface is alive and
/// becomes stale once its slot is freed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any `SurfaceId` that pointed to it is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new,
///   distinct `SurfaceId`.
///
/// Use [`SurfaceTree::is_alive`](crate::SurfaceTree::is_alive) to check liveness.
/// Stale ids never alias a different live surface because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SurfaceId(pub(crate) u32, pub(crate) u32);

impl SurfaceId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Generation of the slot this id refers to.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Surface flags controlling visibility and media playback.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SurfaceFlags: u8 {
        /// Surface is visible (participates in hit testing and damage).
        const VISIBLE = 0b0000_0001;
        /// Surface hosts media that is currently playing.
        const PLAYING = 0b0000_0010;
    }
}

impl Default for SurfaceFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Local geometry for a surface.
#[derive(Clone, Debug)]
pub struct LocalSurface {
    /// Local bounds, in the parent's coordinate space before `offset` is applied.
    pub local_bounds: Rect,
    /// Translation relative to the parent. Scroll containers use this for their content offset.
    pub offset: Vec2,
    /// Stacking order among siblings. Higher is drawn on top.
    pub z_index: i32,
    /// Visibility and playback flags.
    pub flags: SurfaceFlags,
}

impl Default for LocalSurface {
    fn default() -> Self {
        Self {
            local_bounds: Rect::ZERO,
            offset: Vec2::ZERO,
            z_index: 0,
            flags: SurfaceFlags::default(),
        }
    }
}
