// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`CellHost`] over a Headliner Surface tree.
//!
//! ## Feature
//!
//! Enable with `surface_tree_adapter`.
//!
//! ## Notes
//!
//! The host is built around three surfaces the caller already inserted:
//! the header cell's ad container (inside the list), the element itself, and an
//! optional stick surface over the list. Reparenting maps directly onto
//! [`SurfaceTree::reparent`]; sizes are written back as local bounds.
//!
//! The ad container sits at the bottom of the header row:
//! its top is `padding_height - current_height` below the row's top, so the element
//! stays pinned to the top of the viewport while the row scrolls out.

use headliner_surface::{Damage, SurfaceFlags, SurfaceId, SurfaceTree};
use kurbo::{Rect, Vec2};

use crate::host::CellHost;
use crate::types::{AdCellState, ElementLayout, ElementParent};

/// A [`CellHost`] that moves the element between surfaces of a [`SurfaceTree`].
#[derive(Debug)]
pub struct SurfaceHost<'a> {
    tree: &'a mut SurfaceTree,
    container: SurfaceId,
    element: SurfaceId,
    stick_surface: Option<SurfaceId>,
    damage: Damage,
    layout_passes: usize,
}

impl<'a> SurfaceHost<'a> {
    /// Host for `element`, shown inline inside `container`.
    pub fn new(tree: &'a mut SurfaceTree, container: SurfaceId, element: SurfaceId) -> Self {
        Self {
            tree,
            container,
            element,
            stick_surface: None,
            damage: Damage::default(),
            layout_passes: 0,
        }
    }

    /// Use `surface` as the stick-to-top surface.
    pub fn with_stick_surface(mut self, surface: SurfaceId) -> Self {
        self.stick_surface = Some(surface);
        self
    }

    /// Replace (or clear) the stick-to-top surface.
    pub fn set_stick_surface(&mut self, surface: Option<SurfaceId>) {
        self.stick_surface = surface;
    }

    /// The underlying tree.
    pub fn tree(&self) -> &SurfaceTree {
        &*self.tree
    }

    /// Mutable access to the underlying tree, for the rest of the host's scene.
    pub fn tree_mut(&mut self) -> &mut SurfaceTree {
        &mut *self.tree
    }

    /// Number of re-layout requests received.
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// Damage accumulated by re-layouts since the last call.
    pub fn take_damage(&mut self) -> Damage {
        core::mem::take(&mut self.damage)
    }

    /// Size the inline ad container (and the element, when inline) from `state`.
    pub fn sync_container(&mut self, state: &AdCellState) {
        let width = self
            .tree
            .local(self.container)
            .map_or(0.0, |l| l.local_bounds.width());
        let height = state.current_height.max(0.0);
        let bounds = Rect::new(0.0, 0.0, width, height);
        self.tree.set_local_bounds(self.container, bounds);
        self.tree.set_offset(
            self.container,
            Vec2::new(0.0, state.padding_height - state.current_height),
        );
        if self.tree.parent_of(self.element) == Some(self.container) {
            self.tree.set_local_bounds(self.element, bounds);
        }
    }

    fn live_stick_surface(&self) -> Option<SurfaceId> {
        self.stick_surface.filter(|s| self.tree.is_alive(*s))
    }
}

impl CellHost for SurfaceHost<'_> {
    fn has_stick_surface(&self) -> bool {
        self.live_stick_surface().is_some()
    }

    fn reparent_element(&mut self, from: ElementParent, to: ElementParent, layout: ElementLayout) {
        tracing::trace!(?from, ?to, "surface host reparent");
        let mut flags = self.tree.flags(self.element);
        match to {
            ElementParent::Inline => {
                let bounds = self
                    .tree
                    .local(self.container)
                    .map_or(Rect::ZERO, |l| l.local_bounds);
                self.tree.reparent(self.element, Some(self.container));
                self.tree.set_local_bounds(
                    self.element,
                    Rect::from_origin_size((0.0, 0.0), bounds.size()),
                );
                flags.insert(SurfaceFlags::VISIBLE);
            }
            ElementParent::Stuck => {
                let Some(surface) = self.live_stick_surface() else {
                    tracing::warn!("asked to dock without a stick surface; element left in place");
                    return;
                };
                let width = self
                    .tree
                    .local(surface)
                    .map_or(0.0, |l| l.local_bounds.width());
                let height = match layout {
                    ElementLayout::PinnedTop { height } => height,
                    ElementLayout::FillContainer | ElementLayout::Hidden => 0.0,
                };
                self.tree.reparent(self.element, Some(surface));
                self.tree
                    .set_local_bounds(self.element, Rect::new(0.0, 0.0, width, height));
                flags.insert(SurfaceFlags::VISIBLE);
            }
            ElementParent::Detached => {
                self.tree.reparent(self.element, None);
                flags.remove(SurfaceFlags::VISIBLE | SurfaceFlags::PLAYING);
            }
        }
        self.tree.set_offset(self.element, Vec2::ZERO);
        self.tree.set_flags(self.element, flags);
    }

    fn re_layout(&mut self) {
        self.layout_passes += 1;
        let damage = self.tree.commit();
        self.damage.extend(damage);
    }
}
