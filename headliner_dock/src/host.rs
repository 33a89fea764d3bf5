// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams between the controller and its collaborators.
//!
//! - [`CellHost`]: the list host that owns the containers and performs reparenting.
//! - [`CellListener`]: the owner that observes cell notifications.
//! - [`AdRenderer`]: the banner that loads ads and reports
//!   [`BannerEvent`](crate::types::BannerEvent)s.
//!
//! Hosts and listeners are non-owning associations: the host is borrowed per call
//! and the listener can be swapped for [`NoListener`] at any time.

use alloc::vec::Vec;

use crate::types::{ElementLayout, ElementParent};

/// The list host a header cell lives in.
pub trait CellHost {
    /// Whether a stick-to-top surface is currently available.
    ///
    /// Queried on every docking decision, so a surface may come and go.
    /// Without one the cell still tracks its docked state but never moves the element.
    fn has_stick_surface(&self) -> bool;

    /// Move the visual element from `from` to `to` and lay it out with `layout`.
    ///
    /// Moving to [`ElementParent::Detached`] must stop any media playback.
    fn reparent_element(&mut self, from: ElementParent, to: ElementParent, layout: ElementLayout);

    /// Recompute and redraw the list layout (row heights changed).
    fn re_layout(&mut self);
}

impl<H: CellHost + ?Sized> CellHost for &mut H {
    fn has_stick_surface(&self) -> bool {
        (**self).has_stick_surface()
    }

    fn reparent_element(&mut self, from: ElementParent, to: ElementParent, layout: ElementLayout) {
        (**self).reparent_element(from, to, layout);
    }

    fn re_layout(&mut self) {
        (**self).re_layout();
    }
}

/// Notifications a cell sends to its owner.
///
/// Every method defaults to a no-op; implement only what you observe.
/// Each notification fires at most once per corresponding input event.
pub trait CellListener<I, E> {
    /// An ad was loaded.
    fn on_loaded(&mut self, _info: &I) {}

    /// No ad could be loaded. The cell closes right after this call.
    fn on_failed(&mut self, _error: &E) {}

    /// The ad was clicked.
    fn on_clicked(&mut self) {}

    /// The cell closed and collapsed. Fires once per cell.
    fn on_closed(&mut self) {}
}

/// A listener that ignores every notification. Used when no owner listens.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoListener;

impl<I, E> CellListener<I, E> for NoListener {}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellEvent<I, E> {
    /// See [`CellListener::on_loaded`].
    Loaded(I),
    /// See [`CellListener::on_failed`].
    Failed(E),
    /// See [`CellListener::on_clicked`].
    Clicked,
    /// See [`CellListener::on_closed`].
    Closed,
}

/// Collects notifications in delivery order.
impl<I: Clone, E: Clone> CellListener<I, E> for Vec<CellEvent<I, E>> {
    fn on_loaded(&mut self, info: &I) {
        self.push(CellEvent::Loaded(info.clone()));
    }

    fn on_failed(&mut self, error: &E) {
        self.push(CellEvent::Failed(error.clone()));
    }

    fn on_clicked(&mut self) {
        self.push(CellEvent::Clicked);
    }

    fn on_closed(&mut self) {
        self.push(CellEvent::Closed);
    }
}

/// The banner that fetches and renders ads.
///
/// `load` returns immediately; the renderer later reports the outcome as
/// [`BannerEvent`](crate::types::BannerEvent)s, which the host feeds into
/// [`AdCell::handle_banner_event`](crate::cell::AdCell::handle_banner_event) in delivery order.
///
/// Presentation state, such as the parent a click-through is shown from, is owned
/// by the implementation and set up by the host; the cell never sees it.
pub trait AdRenderer {
    /// Descriptor of where to request the ad from.
    type Placement;

    /// Start loading an ad for `placement`.
    fn load(&mut self, placement: &Self::Placement);
}
