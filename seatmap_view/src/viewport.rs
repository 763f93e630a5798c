// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::{ContainerMetrics, Transform, ViewportNotReady};

/// Tunables for a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Factor used by [`Viewport::zoom_in`] / [`Viewport::zoom_out`].
    pub zoom_factor: f64,
    /// Share of the container the canvas may occupy after
    /// [`Viewport::fit_to_container`].
    pub fit_padding: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.4,
            max_scale: 6.0,
            zoom_factor: 1.2,
            fit_padding: 0.92,
        }
    }
}

/// Pan/zoom state of a seating chart inside a measured container.
///
/// `Viewport` tracks the container rectangle in screen space, the logical
/// canvas size, and the user [`Transform`]. Every mutation is computed as a
/// new transform from the current one and then committed in one step, so a
/// rejected operation never leaves partial state behind.
#[derive(Clone, Debug)]
pub struct Viewport {
    container: Rect,
    canvas: Size,
    transform: Transform,
    min_scale: f64,
    max_scale: f64,
    zoom_factor: f64,
    fit_padding: f64,
    revision: u64,
    scene_to_screen: Affine,
    screen_to_scene: Affine,
}

impl Viewport {
    /// Creates an unmeasured viewport at the identity transform.
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        let mut vp = Self {
            container: Rect::ZERO,
            canvas: Size::ZERO,
            transform: Transform::IDENTITY,
            min_scale: 0.4,
            max_scale: 6.0,
            zoom_factor: config.zoom_factor,
            fit_padding: config.fit_padding,
            revision: 0,
            scene_to_screen: Affine::IDENTITY,
            screen_to_scene: Affine::IDENTITY,
        };
        vp.set_scale_bounds(config.min_scale, config.max_scale);
        vp.rebuild_transforms();
        vp
    }

    /// Current user transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Container rectangle in screen pixels.
    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Sets the container rectangle in screen pixels.
    ///
    /// The transform is left as is. Callers that want the canvas re-framed on
    /// resize call [`Viewport::fit_to_container`] afterwards.
    pub fn set_container(&mut self, rect: Rect) {
        if self.container == rect {
            return;
        }
        self.container = rect;
        self.rebuild_transforms();
    }

    /// Logical canvas size in scene units.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Sets the logical canvas size in scene units.
    pub fn set_canvas_size(&mut self, size: Size) {
        if self.canvas == size {
            return;
        }
        self.canvas = size;
        self.rebuild_transforms();
    }

    /// Returns the container metrics, or [`ViewportNotReady`] while the
    /// container has no measurable size.
    pub fn metrics(&self) -> Result<ContainerMetrics, ViewportNotReady> {
        let w = self.container.width();
        let h = self.container.height();
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(ViewportNotReady);
        }
        Ok(ContainerMetrics {
            rect: self.container,
            canvas: self.canvas,
        })
    }

    /// Returns `true` once the container has been measured.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.metrics().is_ok()
    }

    /// Current scale bounds as `(min, max)`.
    #[must_use]
    pub fn scale_bounds(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the scale bounds.
    ///
    /// The provided range is normalized so that `min <= max`, and the lower
    /// bound is kept positive so the transform stays invertible. The current
    /// scale is clamped into the new range.
    pub fn set_scale_bounds(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale.max(f64::MIN_POSITIVE);
        self.max_scale = max_scale.max(self.min_scale);
        let clamped = self.clamp_scale(self.transform.scale);
        if clamped != self.transform.scale {
            self.commit(Transform {
                scale: clamped,
                ..self.transform
            });
        }
    }

    /// Monotonic counter bumped whenever the transform changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Multiplies the scale by the configured zoom factor, pivoting at the
    /// container center.
    ///
    /// Before the container is measured only the scale changes.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_about_center(self.zoom_factor)
    }

    /// Divides the scale by the configured zoom factor, pivoting at the
    /// container center.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_about_center(1.0 / self.zoom_factor)
    }

    /// Zooms by `factor` keeping the scene point under `screen` fixed.
    ///
    /// Returns `false` if nothing changed (unmeasured container, invalid
    /// factor, or the scale is already pinned at a bound).
    pub fn zoom_at_point(&mut self, screen: Point, factor: f64) -> bool {
        match self.preview_zoom_at(screen, factor) {
            Some(next) => self.commit(next),
            None => false,
        }
    }

    /// The transform [`Viewport::zoom_at_point`] would commit, without
    /// committing it.
    ///
    /// The anchor is resolved under the current transform and the
    /// translation is solved against the new scale only, so repeated samples
    /// (for example during a pinch) cannot drift.
    #[must_use]
    pub fn preview_zoom_at(&self, screen: Point, factor: f64) -> Option<Transform> {
        if !(factor.is_finite() && factor > 0.0) {
            return None;
        }
        let metrics = self.metrics().ok()?;
        let scale = self.clamp_scale(self.transform.scale * factor);
        if scale == self.transform.scale {
            return None;
        }
        let anchor = self.transform.screen_to_scene(screen, &metrics);
        Some(Transform::anchored(scale, screen, anchor, &metrics))
    }

    /// Pans by a delta in screen pixels.
    ///
    /// The delta is converted to scene units with the current scale and base
    /// scale, so the content follows the pointer exactly at every zoom level.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !(delta.x.is_finite() && delta.y.is_finite()) {
            return false;
        }
        let Ok(metrics) = self.metrics() else {
            return false;
        };
        self.commit(self.transform.panned_by_pixels(delta, &metrics))
    }

    /// Restores `{ scale: 1, tx: 0, ty: 0 }`.
    pub fn reset(&mut self) -> bool {
        let scale = self.clamp_scale(1.0);
        self.commit(Transform::new(scale, 0.0, 0.0))
    }

    /// Fits the canvas into the container using the configured padding.
    pub fn fit_to_container(&mut self) -> bool {
        self.fit_to_container_with(self.fit_padding)
    }

    /// Fits the whole canvas into `padding` of the container and centers it.
    ///
    /// The scale is the smaller of the two per-axis scales, clamped to the
    /// scale bounds. No-op without a measured container or a canvas size.
    pub fn fit_to_container_with(&mut self, padding: f64) -> bool {
        match self.fitted_transform(padding) {
            Some(next) => self.commit(next),
            None => false,
        }
    }

    /// The transform [`Viewport::fit_to_container_with`] would commit.
    #[must_use]
    pub fn fitted_transform(&self, padding: f64) -> Option<Transform> {
        if !(padding.is_finite() && padding > 0.0) {
            return None;
        }
        let metrics = self.metrics().ok()?;
        if !metrics.has_canvas() {
            return None;
        }
        let view = metrics.rect.size();
        let base = metrics.base_scale();
        let target = (view.width * padding / self.canvas.width)
            .min(view.height * padding / self.canvas.height);
        let scale = self.clamp_scale(target / base);
        let ppu = scale * base;
        let left = (view.width - self.canvas.width * ppu) / 2.0;
        let top = (view.height - self.canvas.height * ppu) / 2.0;
        Some(Transform::new(scale, left / ppu, top / ppu))
    }

    /// Maps a screen point into scene space under `transform`, or under the
    /// live transform when `None`.
    ///
    /// Returns `None` while the container is unmeasured.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point, transform: Option<Transform>) -> Option<Point> {
        match transform {
            None => self.is_ready().then(|| self.screen_to_scene * screen),
            Some(t) => Some(t.screen_to_scene(screen, &self.metrics().ok()?)),
        }
    }

    /// Maps a scene point into screen space under `transform`, or under the
    /// live transform when `None`.
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point, transform: Option<Transform>) -> Option<Point> {
        match transform {
            None => self.is_ready().then(|| self.scene_to_screen * scene),
            Some(t) => Some(t.scene_to_screen(scene, &self.metrics().ok()?)),
        }
    }

    /// Scene to container-local pixels for the scene root.
    #[must_use]
    pub fn root_affine(&self) -> Affine {
        let base = self.metrics().map_or(1.0, |m| m.base_scale());
        self.transform.root_affine(base)
    }

    /// The scene-space rectangle currently visible in the container.
    #[must_use]
    pub fn visible_scene_rect(&self) -> Option<Rect> {
        self.is_ready()
            .then(|| self.screen_to_scene.transform_rect_bbox(self.container))
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            container: self.container,
            canvas: self.canvas,
            transform: self.transform,
            base_scale: self.metrics().ok().map(|m| m.base_scale()),
            visible_scene_rect: self.visible_scene_rect(),
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            revision: self.revision,
        }
    }

    fn zoom_about_center(&mut self, factor: f64) -> bool {
        if self.is_ready() {
            return self.zoom_at_point(self.container.center(), factor);
        }
        let scale = self.clamp_scale(self.transform.scale * factor);
        self.commit(Transform {
            scale,
            ..self.transform
        })
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    fn commit(&mut self, next: Transform) -> bool {
        if !next.is_valid() || next == self.transform {
            return false;
        }
        self.transform = next;
        self.revision = self.revision.wrapping_add(1);
        self.rebuild_transforms();
        true
    }

    fn rebuild_transforms(&mut self) {
        let metrics = ContainerMetrics {
            rect: self.container,
            canvas: self.canvas,
        };
        // An unmeasured container has base scale 0 and no inverse; keep the
        // cached mappings at identity until it is laid out.
        if self.is_ready() {
            self.scene_to_screen = self.transform.scene_to_screen_affine(&metrics);
            self.screen_to_scene = self.scene_to_screen.inverse();
        } else {
            self.scene_to_screen = Affine::IDENTITY;
            self.screen_to_scene = Affine::IDENTITY;
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Container rectangle in screen pixels.
    pub container: Rect,
    /// Logical canvas size.
    pub canvas: Size,
    /// Current user transform.
    pub transform: Transform,
    /// Pixels per scene unit at scale 1, when measured.
    pub base_scale: Option<f64>,
    /// Scene-space rectangle currently visible, when measured.
    pub visible_scene_rect: Option<Rect>,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Transform revision.
    pub revision: u64,
}
