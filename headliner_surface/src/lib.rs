// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headliner Surface: a Kurbo-native tree of host surfaces.
//!
//! A host that shows a docking header needs to move one visual element between
//! containers: the list's first cell, a surface pinned over the list, or nowhere.
//! This crate models those containers as a small tree.
//!
//! - Surfaces have local bounds, a translation relative to their parent, z-order, and flags.
//! - [`SurfaceTree::reparent`] moves a subtree under a new parent, or detaches it as a root.
//! - [`SurfaceTree::commit`] refreshes world-space bounds and yields coarse [`Damage`].
//!
//! ## Not a layout engine
//!
//! Upstream code computes sizes (for example from a docking controller) and writes
//! them back with [`SurfaceTree::set_local_bounds`]. The tree only composes translations.
//!
//! ## API overview
//!
//! - [`SurfaceTree`]: container managing surfaces.
//! - [`LocalSurface`]: per-surface local data (bounds, offset, z, flags).
//! - [`SurfaceFlags`]: visibility and media playback bits.
//! - [`SurfaceId`]: generational handle of a surface.
//!
//! ### Minimal usage
//!
//! ```
//! use headliner_surface::{LocalSurface, SurfaceTree};
//! use kurbo::{Rect, Vec2};
//!
//! let mut tree = SurfaceTree::new();
//! let screen = tree.insert(
//!     None,
//!     LocalSurface { local_bounds: Rect::new(0.0, 0.0, 360.0, 640.0), ..Default::default() },
//! );
//! let list = tree.insert(
//!     Some(screen),
//!     LocalSurface { local_bounds: Rect::new(0.0, 0.0, 360.0, 4000.0), ..Default::default() },
//! );
//! let cell = tree.insert(
//!     Some(list),
//!     LocalSurface { local_bounds: Rect::new(0.0, 0.0, 360.0, 202.5), ..Default::default() },
//! );
//! let _ = tree.commit();
//!
//! // Scroll the list and move the cell onto the screen surface.
//! tree.set_offset(list, Vec2::new(0.0, -150.0));
//! tree.reparent(cell, Some(screen));
//! let damage = tree.commit();
//! assert!(damage.union_rect().is_some());
//! assert_eq!(tree.parent_of(cell), Some(screen));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod tree;
mod types;

pub use damage::Damage;
pub use tree::SurfaceTree;
pub use types::{LocalSurface, SurfaceFlags, SurfaceId};
