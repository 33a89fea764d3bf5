// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The header cell controller.
//!
//! ## Overview
//!
//! [`AdCell`] turns scroll offsets into a header height and decides when the
//! header leaves the list and docks over it.
//!
//! ## Phases
//!
//! - `Inline`: height is `max_height - y` while that is greater than `min_height`.
//! - `Stuck`: once `max_height - y <= min_height`, the header is pinned at `min_height`
//!   on the host's stick surface (if it has one).
//! - `Closed`: zero height, element detached, scrolls ignored. Terminal.
//!
//! Re-entering the current phase never repeats a reparent, so feeding the same
//! offset twice is a no-op for the host.
//!
//! ## See Also
//!
//! [`host`](crate::host) for the traits a host and an owner implement.

use kurbo::Point;

use crate::geometry::DockGeometry;
use crate::host::{AdRenderer, CellHost, CellListener, NoListener};
use crate::types::{
    AdCellState, BannerEvent, CellChanges, CellPhase, CloseReason, ElementLayout, ElementParent,
};

/// Docking controller for a scroll-driven header ad.
///
/// `I` and `E` are the renderer's ad-info and error types, and `L` the owner's listener.
///
/// ## Usage
///
/// - Build with [`AdCell::new`] (no listener) or [`AdCell::with_listener`].
/// - Call [`AdCell::attach`] once the host has created the cell's container.
/// - Forward every list scroll with [`AdCell::on_scroll`], and every banner event with
///   [`AdCell::handle_banner_event`].
/// - Read [`AdCell::state`] afterwards to size the cell.
pub struct AdCell<I, E, L = NoListener> {
    geometry: DockGeometry,
    state: AdCellState,
    parent: ElementParent,
    close_reason: Option<CloseReason>,
    listener: L,
    _phantom: core::marker::PhantomData<fn(&I, &E)>,
}

impl<I, E, L> core::fmt::Debug for AdCell<I, E, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdCell")
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("parent", &self.parent)
            .field("close_reason", &self.close_reason)
            .finish_non_exhaustive()
    }
}

impl<I, E, L: CellListener<I, E> + Default> AdCell<I, E, L> {
    /// Create an open, inline cell at maximum height with a default listener.
    pub fn new(geometry: DockGeometry) -> Self {
        Self::with_listener(geometry, L::default())
    }
}

impl<I, E, L: CellListener<I, E>> AdCell<I, E, L> {
    /// Create an open, inline cell at maximum height notifying `listener`.
    ///
    /// The element starts detached until [`AdCell::attach`].
    pub fn with_listener(geometry: DockGeometry, listener: L) -> Self {
        Self {
            geometry,
            state: AdCellState::open(geometry.max_height()),
            parent: ElementParent::Detached,
            close_reason: None,
            listener,
            _phantom: core::marker::PhantomData,
        }
    }

    /// The cell's geometry.
    pub fn geometry(&self) -> &DockGeometry {
        &self.geometry
    }

    /// Snapshot of the observable state.
    pub fn state(&self) -> AdCellState {
        self.state
    }

    /// Current phase.
    pub fn phase(&self) -> CellPhase {
        self.state.phase()
    }

    /// Height of the ad container.
    pub fn current_height(&self) -> f64 {
        self.state.current_height
    }

    /// Height of the padding above the ad container.
    pub fn padding_height(&self) -> f64 {
        self.state.padding_height
    }

    /// Whether the cell is docked.
    pub fn is_stuck(&self) -> bool {
        self.state.is_stuck
    }

    /// Whether the cell closed.
    pub fn is_closed(&self) -> bool {
        self.state.is_closed
    }

    /// Which parent holds the element.
    pub fn element_parent(&self) -> ElementParent {
        self.parent
    }

    /// Why the cell closed, once it has.
    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close_reason
    }

    /// The owner's listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the owner's listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Replace the listener, returning the previous one.
    pub fn set_listener(&mut self, listener: L) -> L {
        core::mem::replace(&mut self.listener, listener)
    }

    /// Consume the cell and return its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Ask `renderer` to load an ad for `placement`.
    ///
    /// Returns `false` without loading when the cell is closed: a closed cell
    /// is never revived, the host has to create a new one.
    pub fn load_ad<R: AdRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        placement: &R::Placement,
    ) -> bool {
        if self.state.is_closed {
            tracing::warn!("load requested on a closed header cell; ignored");
            return false;
        }
        renderer.load(placement);
        true
    }

    /// Put the element into its first parent.
    ///
    /// Normally the inline container; a cell that is already docked goes straight
    /// to the stick surface when the host has one. No-op once attached or closed.
    pub fn attach<H: CellHost + ?Sized>(&mut self, host: &mut H) -> CellChanges {
        if self.state.is_closed || self.parent != ElementParent::Detached {
            return CellChanges::empty();
        }
        if self.state.is_stuck && host.has_stick_surface() {
            self.move_element(host, ElementParent::Stuck)
        } else {
            self.move_element(host, ElementParent::Inline)
        }
    }

    /// Recompute the header for the list's content offset. Only `offset.y` is read.
    ///
    /// Ignored once closed, and for non-finite offsets.
    pub fn on_scroll<H: CellHost + ?Sized>(&mut self, offset: Point, host: &mut H) -> CellChanges {
        if self.state.is_closed {
            return CellChanges::empty();
        }
        if !offset.y.is_finite() {
            tracing::warn!(y = offset.y, "non-finite scroll offset ignored");
            return CellChanges::empty();
        }

        let min_height = self.geometry.min_height();
        let candidate = self.geometry.candidate_height(offset.y);
        tracing::trace!(y = offset.y, candidate, "header cell scroll");

        let mut changes = CellChanges::empty();
        if candidate > min_height {
            if self.state.is_stuck {
                changes |= self.unstick(host);
            }
            changes |= self.set_heights(candidate, self.geometry.max_height());
        } else {
            if !self.state.is_stuck {
                changes |= self.stick(host);
            } else if self.parent == ElementParent::Inline && host.has_stick_surface() {
                // Docked while the host had no stick surface; it has one now.
                changes |= self.move_element(host, ElementParent::Stuck);
            }
            changes |= self.set_heights(min_height, self.state.padding_height);
        }
        changes
    }

    /// Close the cell on behalf of the host.
    ///
    /// Detaches the element (stopping playback), collapses the cell to zero height,
    /// asks the host to re-layout, and notifies [`CellListener::on_closed`].
    /// No-op when already closed.
    pub fn close<H: CellHost + ?Sized>(&mut self, host: &mut H) -> CellChanges {
        self.close_with(CloseReason::Host, host)
    }

    /// Process one banner lifecycle event.
    ///
    /// - `Loaded` and `Clicked` are forwarded to the listener.
    /// - `FailedToLoad` is forwarded, then closes the cell.
    /// - `CloseRequested` closes the cell.
    pub fn handle_banner_event<H: CellHost + ?Sized>(
        &mut self,
        event: BannerEvent<I, E>,
        host: &mut H,
    ) -> CellChanges {
        match event {
            BannerEvent::Loaded(info) => {
                tracing::debug!("header ad loaded");
                self.listener.on_loaded(&info);
                CellChanges::empty()
            }
            BannerEvent::FailedToLoad(error) => {
                tracing::debug!("header ad failed to load");
                self.listener.on_failed(&error);
                self.close_with(CloseReason::LoadFailed, host)
            }
            BannerEvent::Clicked => {
                self.listener.on_clicked();
                CellChanges::empty()
            }
            BannerEvent::CloseRequested => self.close_with(CloseReason::UserRequested, host),
        }
    }

    // --- internals ---

    fn close_with<H: CellHost + ?Sized>(
        &mut self,
        reason: CloseReason,
        host: &mut H,
    ) -> CellChanges {
        if self.state.is_closed {
            return CellChanges::empty();
        }
        let mut changes = CellChanges::CLOSED;
        if self.parent != ElementParent::Detached {
            changes |= self.move_element(host, ElementParent::Detached);
        }
        if self.state.is_stuck {
            changes |= CellChanges::UNDOCKED;
        }
        changes |= self.set_heights(0.0, 0.0);
        host.re_layout();

        self.state = AdCellState::CLOSED;
        self.close_reason = Some(reason);
        tracing::debug!(?reason, "header cell closed");
        self.listener.on_closed();
        changes
    }

    fn stick<H: CellHost + ?Sized>(&mut self, host: &mut H) -> CellChanges {
        self.state.is_stuck = true;
        let mut changes = CellChanges::DOCKED;
        if self.parent != ElementParent::Inline {
            return changes;
        }
        if host.has_stick_surface() {
            changes |= self.move_element(host, ElementParent::Stuck);
        } else {
            tracing::debug!("no stick surface; docked header stays in the list");
        }
        changes
    }

    fn unstick<H: CellHost + ?Sized>(&mut self, host: &mut H) -> CellChanges {
        self.state.is_stuck = false;
        let mut changes = CellChanges::UNDOCKED;
        if self.parent == ElementParent::Stuck {
            changes |= self.move_element(host, ElementParent::Inline);
        }
        changes
    }

    fn move_element<H: CellHost + ?Sized>(
        &mut self,
        host: &mut H,
        to: ElementParent,
    ) -> CellChanges {
        let from = self.parent;
        if from == to {
            return CellChanges::empty();
        }
        let layout = match to {
            ElementParent::Inline => ElementLayout::FillContainer,
            ElementParent::Stuck => ElementLayout::PinnedTop {
                height: self.geometry.min_height(),
            },
            ElementParent::Detached => ElementLayout::Hidden,
        };
        tracing::debug!(?from, ?to, "header element reparented");
        host.reparent_element(from, to, layout);
        self.parent = to;
        CellChanges::REPARENTED
    }

    fn set_heights(&mut self, height: f64, padding: f64) -> CellChanges {
        let mut changes = CellChanges::empty();
        if self.state.current_height != height {
            self.state.current_height = height;
            changes |= CellChanges::HEIGHT;
        }
        if self.state.padding_height != padding {
            self.state.padding_height = padding;
            changes |= CellChanges::PADDING;
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::CellEvent;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct RecordingHost {
        stick_surface: bool,
        moves: Vec<(ElementParent, ElementParent, ElementLayout)>,
        layouts: usize,
    }

    impl RecordingHost {
        fn with_surface() -> Self {
            Self {
                stick_surface: true,
                ..Default::default()
            }
        }
    }

    impl CellHost for RecordingHost {
        fn has_stick_surface(&self) -> bool {
            self.stick_surface
        }

        fn reparent_element(
            &mut self,
            from: ElementParent,
            to: ElementParent,
            layout: ElementLayout,
        ) {
            self.moves.push((from, to, layout));
        }

        fn re_layout(&mut self) {
            self.layouts += 1;
        }
    }

    type Log = Vec<CellEvent<&'static str, &'static str>>;

    fn scroll(y: f64) -> Point {
        Point::new(0.0, y)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    fn attached(
        geometry: DockGeometry,
        host: &mut RecordingHost,
    ) -> AdCell<&'static str, &'static str, Log> {
        let mut cell = AdCell::new(geometry);
        let _ = cell.attach(host);
        host.moves.clear();
        cell
    }

    // 360 wide at 2:1 / 4:1 gives exact heights 180 / 90.
    fn exact() -> DockGeometry {
        DockGeometry::new(360.0, 2.0, 4.0).unwrap()
    }

    #[test]
    fn fresh_cell_is_inline_at_max_height() {
        let cell: AdCell<(), ()> = AdCell::new(exact());
        assert_eq!(cell.phase(), CellPhase::Inline);
        assert_eq!(cell.current_height(), 180.0);
        assert_eq!(cell.padding_height(), 180.0);
        assert_eq!(cell.element_parent(), ElementParent::Detached);
        assert_eq!(cell.close_reason(), None);
    }

    #[test]
    fn attach_moves_element_inline_once() {
        let mut host = RecordingHost::with_surface();
        let mut cell: AdCell<(), ()> = AdCell::new(exact());
        assert_eq!(cell.attach(&mut host), CellChanges::REPARENTED);
        assert!(cell.attach(&mut host).is_empty());
        assert_eq!(
            host.moves,
            vec![(
                ElementParent::Detached,
                ElementParent::Inline,
                ElementLayout::FillContainer
            )]
        );
    }

    #[test]
    fn default_ratio_scenario() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(DockGeometry::with_default_ratios(360.0).unwrap(), &mut host);

        let _ = cell.on_scroll(scroll(0.0), &mut host);
        assert_eq!(cell.phase(), CellPhase::Inline);
        assert_close(cell.current_height(), 202.5);

        let changes = cell.on_scroll(scroll(150.0), &mut host);
        assert!(changes.contains(CellChanges::DOCKED | CellChanges::REPARENTED));
        assert_eq!(cell.phase(), CellPhase::Stuck);
        assert_close(cell.current_height(), 101.25);
        assert_eq!(cell.element_parent(), ElementParent::Stuck);

        let changes = cell.on_scroll(scroll(50.0), &mut host);
        assert!(changes.contains(CellChanges::UNDOCKED | CellChanges::REPARENTED));
        assert_eq!(cell.phase(), CellPhase::Inline);
        assert_close(cell.current_height(), 152.5);
        assert_close(cell.padding_height(), 202.5);
        assert_eq!(cell.element_parent(), ElementParent::Inline);

        assert_eq!(host.moves.len(), 2);
        match host.moves[0] {
            (ElementParent::Inline, ElementParent::Stuck, ElementLayout::PinnedTop { height }) => {
                assert_close(height, 101.25);
            }
            other => panic!("unexpected move {other:?}"),
        }
        assert_eq!(
            host.moves[1],
            (
                ElementParent::Stuck,
                ElementParent::Inline,
                ElementLayout::FillContainer
            )
        );
    }

    #[test]
    fn height_law_holds_across_offsets() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let mut y = -100.0;
        while y <= 400.0 {
            let _ = cell.on_scroll(scroll(y), &mut host);
            let candidate = 180.0 - y;
            if candidate > 90.0 {
                assert_eq!(cell.phase(), CellPhase::Inline, "y = {y}");
                assert_eq!(cell.current_height(), candidate, "y = {y}");
                assert_eq!(cell.padding_height(), 180.0);
            } else {
                assert_eq!(cell.phase(), CellPhase::Stuck, "y = {y}");
                assert_eq!(cell.current_height(), 90.0, "y = {y}");
            }
            y += 2.5;
        }
    }

    #[test]
    fn boundary_resolves_to_stuck() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let _ = cell.on_scroll(scroll(90.0), &mut host);
        assert_eq!(cell.phase(), CellPhase::Stuck);
        assert_eq!(cell.current_height(), 90.0);
    }

    #[test]
    fn repeated_offsets_do_not_reparent_again() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);

        let _ = cell.on_scroll(scroll(120.0), &mut host);
        assert_eq!(host.moves.len(), 1);
        for _ in 0..5 {
            assert!(cell.on_scroll(scroll(120.0), &mut host).is_empty());
        }
        let _ = cell.on_scroll(scroll(200.0), &mut host);
        assert_eq!(host.moves.len(), 1);

        let _ = cell.on_scroll(scroll(10.0), &mut host);
        assert_eq!(host.moves.len(), 2);
        assert!(cell.on_scroll(scroll(10.0), &mut host).is_empty());
        assert_eq!(host.moves.len(), 2);
    }

    #[test]
    fn pull_to_refresh_grows_past_max() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let changes = cell.on_scroll(scroll(-60.0), &mut host);
        assert_eq!(changes, CellChanges::HEIGHT);
        assert_eq!(cell.current_height(), 240.0);
        assert_eq!(cell.padding_height(), 180.0);
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let _ = cell.on_scroll(scroll(30.0), &mut host);
        assert!(cell.on_scroll(scroll(f64::NAN), &mut host).is_empty());
        assert!(cell.on_scroll(scroll(f64::INFINITY), &mut host).is_empty());
        assert_eq!(cell.current_height(), 150.0);
        assert!(host.moves.is_empty());
    }

    #[test]
    fn missing_stick_surface_docks_logically_only() {
        let mut host = RecordingHost::default();
        let mut cell = attached(exact(), &mut host);

        let changes = cell.on_scroll(scroll(150.0), &mut host);
        assert!(changes.contains(CellChanges::DOCKED));
        assert!(!changes.contains(CellChanges::REPARENTED));
        assert_eq!(cell.phase(), CellPhase::Stuck);
        assert_eq!(cell.current_height(), 90.0);
        assert_eq!(cell.element_parent(), ElementParent::Inline);
        assert!(host.moves.is_empty());

        // Undocking keeps the element where it is.
        let _ = cell.on_scroll(scroll(20.0), &mut host);
        assert_eq!(cell.phase(), CellPhase::Inline);
        assert!(host.moves.is_empty());
    }

    #[test]
    fn late_stick_surface_docks_on_next_tick() {
        let mut host = RecordingHost::default();
        let mut cell = attached(exact(), &mut host);
        let _ = cell.on_scroll(scroll(150.0), &mut host);
        assert!(host.moves.is_empty());

        host.stick_surface = true;
        let changes = cell.on_scroll(scroll(160.0), &mut host);
        assert_eq!(changes, CellChanges::REPARENTED);
        assert_eq!(cell.element_parent(), ElementParent::Stuck);
        assert!(cell.on_scroll(scroll(170.0), &mut host).is_empty());
        assert_eq!(host.moves.len(), 1);
    }

    #[test]
    fn close_detaches_collapses_and_notifies() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);

        let changes = cell.close(&mut host);
        assert!(changes.contains(
            CellChanges::CLOSED
                | CellChanges::HEIGHT
                | CellChanges::PADDING
                | CellChanges::REPARENTED
        ));
        assert_eq!(cell.state(), AdCellState::CLOSED);
        assert_eq!(cell.close_reason(), Some(CloseReason::Host));
        assert_eq!(host.layouts, 1);
        assert_eq!(
            host.moves,
            vec![(
                ElementParent::Inline,
                ElementParent::Detached,
                ElementLayout::Hidden
            )]
        );
        assert_eq!(cell.listener(), &vec![CellEvent::Closed]);

        // Second close is a no-op.
        assert!(cell.close(&mut host).is_empty());
        assert_eq!(host.layouts, 1);
        assert_eq!(cell.listener().len(), 1);
    }

    #[test]
    fn scrolls_after_close_are_ignored() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let _ = cell.close(&mut host);
        for y in [-50.0, 0.0, 90.0, 300.0] {
            assert!(cell.on_scroll(scroll(y), &mut host).is_empty());
            assert_eq!(cell.current_height(), 0.0);
            assert_eq!(cell.padding_height(), 0.0);
            assert!(cell.is_closed());
        }
        assert_eq!(host.moves.len(), 1);
        assert!(cell.attach(&mut host).is_empty());
    }

    #[test]
    fn failed_load_notifies_then_closes() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let changes = cell.handle_banner_event(BannerEvent::FailedToLoad("no fill"), &mut host);
        assert!(changes.contains(CellChanges::CLOSED));
        assert_eq!(
            cell.listener(),
            &vec![CellEvent::Failed("no fill"), CellEvent::Closed]
        );
        assert_eq!(cell.phase(), CellPhase::Closed);
        assert_eq!(cell.current_height(), 0.0);
        assert_eq!(cell.close_reason(), Some(CloseReason::LoadFailed));
    }

    #[test]
    fn close_request_while_stuck_detaches_from_stick_surface() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let _ = cell.on_scroll(scroll(150.0), &mut host);

        let changes = cell.handle_banner_event(BannerEvent::CloseRequested, &mut host);
        assert!(changes.contains(CellChanges::CLOSED | CellChanges::UNDOCKED));
        assert_eq!(
            host.moves.last(),
            Some(&(
                ElementParent::Stuck,
                ElementParent::Detached,
                ElementLayout::Hidden
            ))
        );
        assert_eq!(cell.phase(), CellPhase::Closed);
        assert_eq!(cell.element_parent(), ElementParent::Detached);
        assert_eq!(cell.close_reason(), Some(CloseReason::UserRequested));
        assert_eq!(cell.listener(), &vec![CellEvent::Closed]);
    }

    #[test]
    fn loaded_and_clicked_are_forwarded_without_transition() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let _ = cell.on_scroll(scroll(40.0), &mut host);
        let before = cell.state();

        assert!(cell.handle_banner_event(BannerEvent::Loaded("ad-1"), &mut host).is_empty());
        assert!(cell.handle_banner_event(BannerEvent::Clicked, &mut host).is_empty());
        assert!(cell.handle_banner_event(BannerEvent::Clicked, &mut host).is_empty());

        assert_eq!(cell.state(), before);
        assert_eq!(
            cell.listener(),
            &vec![
                CellEvent::Loaded("ad-1"),
                CellEvent::Clicked,
                CellEvent::Clicked
            ]
        );
        assert!(host.moves.is_empty());
    }

    #[test]
    fn closed_fires_once_across_close_paths() {
        let mut host = RecordingHost::with_surface();
        let mut cell = attached(exact(), &mut host);
        let _ = cell.handle_banner_event(BannerEvent::CloseRequested, &mut host);
        let _ = cell.handle_banner_event(BannerEvent::CloseRequested, &mut host);
        let _ = cell.handle_banner_event(BannerEvent::FailedToLoad("late"), &mut host);
        let _ = cell.close(&mut host);
        assert_eq!(
            cell.into_listener(),
            vec![CellEvent::Closed, CellEvent::Failed("late")]
        );
        assert_eq!(host.layouts, 1);
    }

    #[test]
    fn load_is_refused_once_closed() {
        struct Renderer(u32);
        impl AdRenderer for Renderer {
            type Placement = &'static str;
            fn load(&mut self, _placement: &Self::Placement) {
                self.0 += 1;
            }
        }

        let mut host = RecordingHost::default();
        let mut renderer = Renderer(0);
        let mut cell = attached(exact(), &mut host);
        assert!(cell.load_ad(&mut renderer, &"header01"));
        let _ = cell.close(&mut host);
        assert!(!cell.load_ad(&mut renderer, &"header01"));
        assert_eq!(renderer.0, 1);
    }

    #[test]
    fn listener_can_be_swapped() {
        let mut host = RecordingHost::default();
        let mut cell = attached(exact(), &mut host);
        let _ = cell.handle_banner_event(BannerEvent::Clicked, &mut host);
        let old = cell.set_listener(Vec::new());
        assert_eq!(old, vec![CellEvent::Clicked]);
        let _ = cell.close(&mut host);
        assert_eq!(cell.listener_mut().as_slice(), &[CellEvent::Closed]);
    }

    #[test]
    fn works_through_dyn_host() {
        let mut host = RecordingHost::with_surface();
        let mut cell: AdCell<(), ()> = AdCell::new(exact());
        let dyn_host: &mut dyn CellHost = &mut host;
        let _ = cell.attach(dyn_host);
        let _ = cell.on_scroll(scroll(100.0), dyn_host);
        assert_eq!(cell.element_parent(), ElementParent::Stuck);
        assert_eq!(host.moves.len(), 2);
    }
}
