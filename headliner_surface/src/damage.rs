// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary produced by [`SurfaceTree::commit`](crate::SurfaceTree::commit).

use alloc::vec::Vec;
use kurbo::Rect;

/// A batched set of changes derived from a commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// World-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// True when nothing needs repainting.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    /// Append another damage summary.
    pub fn extend(&mut self, other: Self) {
        self.dirty_rects.extend(other.dirty_rects);
    }
}
