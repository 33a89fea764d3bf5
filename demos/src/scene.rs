// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated list screen hosting a header ad cell.
//!
//! The screen is the root surface and doubles as the stick-to-top surface.
//! The list scrolls by translating its surface; row 0 is the header ad row.

use headliner_dock::adapters::surface_tree::SurfaceHost;
use headliner_dock::cell::AdCell;
use headliner_dock::error::GeometryError;
use headliner_dock::geometry::DockGeometry;
use headliner_dock::host::AdRenderer;
use headliner_dock::types::{AdPlacement, BannerEvent, CellChanges, CellPhase};
use headliner_surface::{LocalSurface, SurfaceFlags, SurfaceId, SurfaceTree};
use kurbo::{Point, Rect, Vec2};

use crate::config::DemoConfig;
use crate::renderer::{AdInfo, DemoEvent, LoadError, SessionLog};

/// The list screen: surfaces, the header cell, and the current scroll offset.
#[derive(Debug)]
pub struct TableScene {
    tree: SurfaceTree,
    screen: SurfaceId,
    list: SurfaceId,
    header_row: SurfaceId,
    container: SurfaceId,
    element: SurfaceId,
    rows: Vec<SurfaceId>,
    row_height: f64,
    stick_to_top: bool,
    scroll_y: f64,
    cell: AdCell<AdInfo, LoadError, SessionLog>,
}

impl TableScene {
    /// Build the screen described by `config` and attach the header cell.
    pub fn new(config: &DemoConfig) -> Result<Self, GeometryError> {
        let geometry = DockGeometry::try_from(config.geometry)?;
        let width = geometry.container_width();
        let content_rows = config.rows.saturating_sub(1);

        let mut tree = SurfaceTree::new();
        let screen = tree.insert(
            None,
            LocalSurface {
                local_bounds: Rect::new(0.0, 0.0, width, config.screen_height),
                ..Default::default()
            },
        );
        let list = tree.insert(Some(screen), LocalSurface::default());
        let header_row = tree.insert(Some(list), LocalSurface::default());
        let container = tree.insert(
            Some(header_row),
            LocalSurface {
                local_bounds: Rect::new(0.0, 0.0, width, geometry.max_height()),
                ..Default::default()
            },
        );
        let rows = (0..content_rows)
            .map(|_| tree.insert(Some(list), LocalSurface::default()))
            .collect();
        // Above the list whichever parent holds it.
        let element = tree.insert(
            None,
            LocalSurface {
                z_index: 10,
                ..Default::default()
            },
        );

        let mut scene = Self {
            tree,
            screen,
            list,
            header_row,
            container,
            element,
            rows,
            row_height: config.row_height,
            stick_to_top: config.stick_to_top,
            scroll_y: 0.0,
            cell: AdCell::new(geometry),
        };
        tracing::debug!(
            width,
            max_height = geometry.max_height(),
            min_height = geometry.min_height(),
            rows = config.rows,
            "table scene built"
        );

        // The cell must know the scroll state right away, not only on the first scroll.
        let mut host = Self::host_for(
            &mut scene.tree,
            scene.container,
            scene.element,
            scene.stick_to_top.then_some(scene.screen),
        );
        let _ = scene.cell.attach(&mut host);
        let _ = scene.cell.on_scroll(Point::ZERO, &mut host);
        scene.apply(CellChanges::HEIGHT);
        Ok(scene)
    }

    /// The header cell.
    pub fn cell(&self) -> &AdCell<AdInfo, LoadError, SessionLog> {
        &self.cell
    }

    /// The surface tree.
    pub fn tree(&self) -> &SurfaceTree {
        &self.tree
    }

    /// The ad element's surface.
    pub fn element(&self) -> SurfaceId {
        self.element
    }

    /// The screen surface, also used as stick-to-top surface.
    pub fn screen(&self) -> SurfaceId {
        self.screen
    }

    /// The header cell's inline ad container.
    pub fn container(&self) -> SurfaceId {
        self.container
    }

    /// Current list content offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Ask `renderer` to load the header ad.
    pub fn load<R: AdRenderer<Placement = AdPlacement>>(
        &mut self,
        renderer: &mut R,
        placement: &AdPlacement,
    ) -> bool {
        self.cell.load_ad(renderer, placement)
    }

    /// Scroll the list to content offset `y` and let the cell react.
    pub fn scroll_to(&mut self, y: f64) -> CellChanges {
        self.scroll_y = y;
        self.tree.set_offset(self.list, Vec2::new(0.0, -y));
        let mut host = Self::host_for(
            &mut self.tree,
            self.container,
            self.element,
            self.stick_to_top.then_some(self.screen),
        );
        let changes = self.cell.on_scroll(Point::new(0.0, y), &mut host);
        self.apply(changes);
        changes
    }

    /// Deliver one banner event to the cell.
    pub fn deliver(&mut self, event: DemoEvent) -> CellChanges {
        let loaded = matches!(event, BannerEvent::Loaded(_));
        let mut host = Self::host_for(
            &mut self.tree,
            self.container,
            self.element,
            self.stick_to_top.then_some(self.screen),
        );
        let changes = self.cell.handle_banner_event(event, &mut host);
        if loaded && !self.cell.is_closed() {
            let flags = self.tree.flags(self.element) | SurfaceFlags::PLAYING;
            self.tree.set_flags(self.element, flags);
        }
        self.apply(changes);
        changes
    }

    /// Close the header from the app side.
    pub fn close(&mut self) -> CellChanges {
        let mut host = Self::host_for(
            &mut self.tree,
            self.container,
            self.element,
            self.stick_to_top.then_some(self.screen),
        );
        let changes = self.cell.close(&mut host);
        self.apply(changes);
        changes
    }

    /// Indices of rows intersecting the screen, row 0 being the header row.
    pub fn visible_rows(&self) -> Vec<usize> {
        let Some(viewport) = self.tree.world_bounds(self.screen) else {
            return Vec::new();
        };
        core::iter::once(self.header_row)
            .chain(self.rows.iter().copied())
            .enumerate()
            .filter(|(_, id)| {
                self.tree.is_world_visible(*id)
                    && self
                        .tree
                        .world_bounds(*id)
                        .is_some_and(|b| b.intersect(viewport).area() > 0.0)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// On-screen frame of the ad element, if it is shown.
    pub fn element_frame(&self) -> Option<Rect> {
        if !self.tree.is_world_visible(self.element) {
            return None;
        }
        self.tree.world_bounds(self.element)
    }

    /// Topmost surface under a screen point.
    pub fn hit(&self, pt: Point) -> Option<SurfaceId> {
        self.tree.hit_test_point(pt).map(|(id, _)| id)
    }

    /// Whether the ad is playing.
    pub fn is_playing(&self) -> bool {
        self.tree.flags(self.element).contains(SurfaceFlags::PLAYING)
    }

    // --- internals ---

    fn host_for(
        tree: &mut SurfaceTree,
        container: SurfaceId,
        element: SurfaceId,
        stick_surface: Option<SurfaceId>,
    ) -> SurfaceHost<'_> {
        let mut host = SurfaceHost::new(tree, container, element);
        host.set_stick_surface(stick_surface);
        host
    }

    /// Write the cell state back into the scene and commit.
    ///
    /// A docked cell keeps its container as it was; inline and closed cells
    /// size it from their heights.
    fn apply(&mut self, changes: CellChanges) {
        let state = self.cell.state();
        if self.cell.phase() != CellPhase::Stuck {
            let (container, element) = (self.container, self.element);
            let mut host = SurfaceHost::new(&mut self.tree, container, element);
            host.sync_container(&state);
        }
        if changes.needs_layout() {
            self.layout_rows(state.padding_height);
        }
        let _ = self.tree.commit();
    }

    fn layout_rows(&mut self, header_height: f64) {
        let width = self
            .tree
            .local(self.screen)
            .map_or(0.0, |l| l.local_bounds.width());
        self.tree.set_local_bounds(
            self.header_row,
            Rect::new(0.0, 0.0, width, header_height.max(0.0)),
        );
        let mut y = header_height.max(0.0);
        for id in &self.rows {
            self.tree
                .set_local_bounds(*id, Rect::new(0.0, y, width, y + self.row_height));
            y += self.row_height;
        }
        self.tree
            .set_local_bounds(self.list, Rect::new(0.0, 0.0, width, y));
    }
}
