// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

use crate::damage::Damage;
use crate::types::{LocalSurface, SurfaceFlags, SurfaceId};

/// World-space data cached per surface, refreshed on [`SurfaceTree::commit`].
#[derive(Clone, Debug, Default)]
struct WorldSurface {
    origin: Vec2,
    bounds: Rect,
    visible: bool,
}

#[derive(Clone, Debug)]
struct Surface {
    generation: u32,
    parent: Option<SurfaceId>,
    children: Vec<SurfaceId>,
    local: LocalSurface,
    world: WorldSurface,
}

impl Surface {
    fn new(generation: u32, local: LocalSurface) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
            world: WorldSurface::default(),
        }
    }
}

/// A tree of surfaces with parent/child ownership and cached world bounds.
///
/// Mutations are cheap and only touch local data; world bounds are refreshed
/// in one pass by [`SurfaceTree::commit`], which also reports damage.
pub struct SurfaceTree {
    surfaces: Vec<Option<Surface>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    epoch: u64,
    // Bounds of removed or hidden surfaces, flushed into the next commit's damage.
    pending: Damage,
}

impl core::fmt::Debug for SurfaceTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.surfaces.len();
        let alive = self.surfaces.iter().filter(|n| n.is_some()).count();
        f.debug_struct("SurfaceTree")
            .field("surfaces_total", &total)
            .field("surfaces_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl Default for SurfaceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            epoch: 0,
            pending: Damage::default(),
        }
    }

    /// Number of commits performed so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of live surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.iter().filter(|s| s.is_some()).count()
    }

    /// True when the tree holds no live surface.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a new surface as a child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the surface as a root.
    pub fn insert(&mut self, parent: Option<SurfaceId>, local: LocalSurface) -> SurfaceId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.surfaces[idx] = Some(Surface::new(generation, local));
            (idx, generation)
        } else {
            self.surfaces.push(Some(Surface::new(1, local)));
            self.generations.push(1);
            (self.surfaces.len() - 1, 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "SurfaceId uses 32-bit indices by design."
        )]
        let id = SurfaceId::new(idx as u32, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a surface (and its subtree) from the tree.
    pub fn remove(&mut self, id: SurfaceId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.surface(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.surface(id).children.clone();
        for child in children {
            self.remove(child);
        }
        let (visible, old_bounds) = {
            let world = &self.surface(id).world;
            (world.visible, world.bounds)
        };
        if visible && has_area(old_bounds) {
            self.pending.dirty_rects.push(old_bounds);
        }
        self.surfaces[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent`, or detach it as a root when `None`.
    ///
    /// Moving a surface under itself or one of its descendants is ignored.
    pub fn reparent(&mut self, id: SurfaceId, new_parent: Option<SurfaceId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent {
            if !self.is_alive(p) {
                tracing::warn!(?id, parent = ?p, "reparent onto a stale surface ignored");
                return;
            }
            if self.path_to_root(p).contains(&id) {
                tracing::warn!(?id, parent = ?p, "reparent would create a cycle; ignored");
                return;
            }
        }
        if self.surface(id).parent == new_parent {
            return;
        }
        if let Some(parent) = self.surface(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Current parent of `id`, if any.
    pub fn parent_of(&self, id: SurfaceId) -> Option<SurfaceId> {
        self.surface_opt(id)?.parent
    }

    /// Children of `id` in insertion order. Empty for stale ids.
    pub fn children_of(&self, id: SurfaceId) -> &[SurfaceId] {
        self.surface_opt(id)
            .map(|s| s.children.as_slice())
            .unwrap_or_default()
    }

    /// Local data of `id`.
    pub fn local(&self, id: SurfaceId) -> Option<&LocalSurface> {
        self.surface_opt(id).map(|s| &s.local)
    }

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: SurfaceId, bounds: Rect) {
        if let Some(s) = self.surface_opt_mut(id) {
            s.local.local_bounds = bounds;
        }
    }

    /// Update the translation relative to the parent.
    pub fn set_offset(&mut self, id: SurfaceId, offset: Vec2) {
        if let Some(s) = self.surface_opt_mut(id) {
            s.local.offset = offset;
        }
    }

    /// Update z index.
    pub fn set_z_index(&mut self, id: SurfaceId, z: i32) {
        if let Some(s) = self.surface_opt_mut(id) {
            s.local.z_index = z;
        }
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: SurfaceId, flags: SurfaceFlags) {
        if let Some(s) = self.surface_opt_mut(id) {
            s.local.flags = flags;
        }
    }

    /// Flags of `id`; empty for stale ids.
    pub fn flags(&self, id: SurfaceId) -> SurfaceFlags {
        self.surface_opt(id)
            .map_or(SurfaceFlags::empty(), |s| s.local.flags)
    }

    /// World-space bounds as of the last commit.
    pub fn world_bounds(&self, id: SurfaceId) -> Option<Rect> {
        self.surface_opt(id).map(|s| s.world.bounds)
    }

    /// Whether `id` and all its ancestors were visible at the last commit.
    pub fn is_world_visible(&self, id: SurfaceId) -> bool {
        self.surface_opt(id).is_some_and(|s| s.world.visible)
    }

    /// Path from the root to `id` (inclusive). Empty for stale ids.
    pub fn path_to_root(&self, id: SurfaceId) -> Vec<SurfaceId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            let Some(s) = self.surface_opt(c) else {
                break;
            };
            out.push(c);
            cur = s.parent;
        }
        out.reverse();
        out
    }

    /// Whether `id` still refers to a live surface.
    pub fn is_alive(&self, id: SurfaceId) -> bool {
        self.surface_opt(id).is_some()
    }

    /// Commit pending changes, updating world-space caches and returning coarse damage.
    pub fn commit(&mut self) -> Damage {
        self.epoch = self.epoch.wrapping_add(1);
        let mut damage = core::mem::take(&mut self.pending);

        // Recompute world data by walking from each root.
        let roots: Vec<SurfaceId> = self
            .surfaces
            .iter()
            .enumerate()
            .filter_map(|(i, s)| match s {
                Some(s) if s.parent.is_none() => {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "SurfaceId uses 32-bit indices by design."
                    )]
                    Some(SurfaceId::new(i as u32, s.generation))
                }
                _ => None,
            })
            .collect();

        for root in roots {
            self.update_world_recursive(root, Vec2::ZERO, true, &mut damage);
        }
        tracing::trace!(
            epoch = self.epoch,
            rects = damage.dirty_rects.len(),
            "surface tree committed"
        );
        damage
    }

    /// Returns the topmost visible surface containing `pt`, with its root→surface path.
    ///
    /// Higher z wins; equal z prefers the later slot.
    pub fn hit_test_point(&self, pt: Point) -> Option<(SurfaceId, Vec<SurfaceId>)> {
        let mut best: Option<(SurfaceId, i32)> = None;
        for (i, s) in self.surfaces.iter().enumerate() {
            let Some(s) = s else {
                continue;
            };
            if !s.world.visible || !s.world.bounds.contains(pt) {
                continue;
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "SurfaceId uses 32-bit indices by design."
            )]
            let id = SurfaceId::new(i as u32, s.generation);
            match best {
                Some((_, z_best)) if s.local.z_index < z_best => {}
                _ => best = Some((id, s.local.z_index)),
            }
        }
        best.map(|(id, _)| (id, self.path_to_root(id)))
    }

    // --- internals ---

    fn surface(&self, id: SurfaceId) -> &Surface {
        self.surfaces[id.idx()].as_ref().expect("dangling SurfaceId")
    }

    fn surface_mut(&mut self, id: SurfaceId) -> &mut Surface {
        self.surfaces[id.idx()].as_mut().expect("dangling SurfaceId")
    }

    fn surface_opt(&self, id: SurfaceId) -> Option<&Surface> {
        let s = self.surfaces.get(id.idx())?.as_ref()?;
        (s.generation == id.1).then_some(s)
    }

    fn surface_opt_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        let s = self.surfaces.get_mut(id.idx())?.as_mut()?;
        (s.generation == id.1).then_some(s)
    }

    fn link_parent(&mut self, id: SurfaceId, parent: SurfaceId) {
        self.surface_mut(parent).children.push(id);
        self.surface_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: SurfaceId, parent: SurfaceId) {
        self.surface_mut(parent).children.retain(|c| *c != id);
        self.surface_mut(id).parent = None;
    }

    fn update_world_recursive(
        &mut self,
        id: SurfaceId,
        parent_origin: Vec2,
        parent_visible: bool,
        damage: &mut Damage,
    ) {
        let (old, new, children) = {
            let s = self.surface_mut(id);
            let old = s.world.clone();
            let origin = parent_origin + s.local.offset;
            s.world = WorldSurface {
                origin,
                bounds: s.local.local_bounds + origin,
                visible: parent_visible && s.local.flags.contains(SurfaceFlags::VISIBLE),
            };
            (old, s.world.clone(), s.children.clone())
        };

        if old.bounds != new.bounds || old.visible != new.visible {
            if old.visible && has_area(old.bounds) {
                damage.dirty_rects.push(old.bounds);
            }
            if new.visible && has_area(new.bounds) {
                damage.dirty_rects.push(new.bounds);
            }
        }

        for child in children {
            self.update_world_recursive(child, new.origin, new.visible, damage);
        }
    }
}

fn has_area(r: Rect) -> bool {
    r.width() > 0.0 && r.height() > 0.0
}
