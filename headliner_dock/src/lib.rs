// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headliner Dock: a deterministic, `no_std` docking controller for scroll-driven header ads.
//!
//! ## Overview
//!
//! A header ad sits in the first cell of a scrollable list. As the list scrolls
//! up, the ad shrinks; once it would become smaller than its docking ratio it
//! leaves the list and sticks to the top of the screen. Scrolling back undocks it.
//! Closing (by the user, the host, or a failed load) collapses the cell for good.
//!
//! This crate holds only that state machine. It does not render ads, fetch them,
//! or lay out the list: it tells a [`CellHost`](crate::host::CellHost) where the
//! element belongs and exposes the heights the host should apply.
//!
//! ## Geometry
//!
//! Sizes derive from aspect ratios of the container width, see
//! [`DockGeometry`](crate::geometry::DockGeometry). With the default 16:9 / 32:9
//! ratios, a 360 wide list gives a 202.5 high header that docks at 101.25.
//!
//! ## Workflow
//!
//! 1) Build an [`AdCell`](crate::cell::AdCell) from a geometry and attach it to its host.
//! 2) Load an ad through an [`AdRenderer`](crate::host::AdRenderer) and feed the
//!    resulting [`BannerEvent`](crate::types::BannerEvent)s back in delivery order.
//! 3) Forward every scroll of the list; read the returned
//!    [`CellChanges`](crate::types::CellChanges) and the cell state to resize the first row.
//!
//! ```
//! use headliner_dock::cell::AdCell;
//! use headliner_dock::geometry::DockGeometry;
//! use headliner_dock::host::CellHost;
//! use headliner_dock::types::{CellPhase, ElementLayout, ElementParent};
//! use kurbo::Point;
//!
//! #[derive(Default)]
//! struct Host {
//!     element: ElementParent,
//!     layouts: u32,
//! }
//!
//! impl CellHost for Host {
//!     fn has_stick_surface(&self) -> bool {
//!         true
//!     }
//!     fn reparent_element(
//!         &mut self,
//!         _from: ElementParent,
//!         to: ElementParent,
//!         _layout: ElementLayout,
//!     ) {
//!         self.element = to;
//!     }
//!     fn re_layout(&mut self) {
//!         self.layouts += 1;
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut cell: AdCell<(), ()> = AdCell::new(DockGeometry::new(360.0, 2.0, 4.0).unwrap());
//! let _ = cell.attach(&mut host);
//!
//! let _ = cell.on_scroll(Point::new(0.0, 40.0), &mut host);
//! assert_eq!(cell.current_height(), 140.0);
//!
//! let _ = cell.on_scroll(Point::new(0.0, 120.0), &mut host);
//! assert_eq!(cell.phase(), CellPhase::Stuck);
//! assert_eq!(host.element, ElementParent::Stuck);
//!
//! let _ = cell.close(&mut host);
//! assert_eq!(cell.phase(), CellPhase::Closed);
//! assert_eq!(host.element, ElementParent::Detached);
//! assert_eq!(host.layouts, 1);
//! ```
//!
//! ## Threading
//!
//! Every operation is synchronous and meant for the host's UI thread. Events are
//! processed strictly in the order they are delivered; nothing is queued.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod cell;
pub mod error;
pub mod geometry;
pub mod host;
pub mod types;
