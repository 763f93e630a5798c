// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::ContainerMetrics;

/// User pan/zoom state: uniform `scale` plus a translation in scene units.
///
/// `Transform` is a plain value. All math here is pure; committing a new
/// transform is [`Viewport`](crate::Viewport)'s job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform zoom factor, always `> 0`.
    pub scale: f64,
    /// Horizontal translation in scene units.
    pub tx: f64,
    /// Vertical translation in scene units.
    pub ty: f64,
}

impl Transform {
    /// `{ scale: 1, tx: 0, ty: 0 }`.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Creates a transform.
    #[must_use]
    pub const fn new(scale: f64, tx: f64, ty: f64) -> Self {
        Self { scale, tx, ty }
    }

    /// Translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    /// Scene to container-local pixels: `translate(t)` then `scale(scale * base)`.
    #[must_use]
    pub fn root_affine(&self, base_scale: f64) -> Affine {
        Affine::scale(self.scale * base_scale) * Affine::translate(self.translation())
    }

    /// Scene to screen pixels under `metrics`.
    #[must_use]
    pub fn scene_to_screen_affine(&self, metrics: &ContainerMetrics) -> Affine {
        Affine::translate(metrics.origin().to_vec2()) * self.root_affine(metrics.base_scale())
    }

    /// Maps a screen point into scene space.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point, metrics: &ContainerMetrics) -> Point {
        let ppu = self.scale * metrics.base_scale();
        let local = screen - metrics.origin();
        Point::new(local.x / ppu - self.tx, local.y / ppu - self.ty)
    }

    /// Maps a scene point into screen space.
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point, metrics: &ContainerMetrics) -> Point {
        let ppu = self.scale * metrics.base_scale();
        metrics.origin() + Vec2::new((scene.x + self.tx) * ppu, (scene.y + self.ty) * ppu)
    }

    /// Translation that places `scene` under `screen` at `scale`.
    ///
    /// This is the solve step of anchor-preserving zoom: it depends only on
    /// the target scale and the anchor pair, never on the transform being
    /// replaced.
    #[must_use]
    pub fn anchored(scale: f64, screen: Point, scene: Point, metrics: &ContainerMetrics) -> Self {
        let ppu = scale * metrics.base_scale();
        let local = screen - metrics.origin();
        Self {
            scale,
            tx: local.x / ppu - scene.x,
            ty: local.y / ppu - scene.y,
        }
    }

    /// Returns this transform panned by a pixel delta.
    #[must_use]
    pub fn panned_by_pixels(&self, delta: Vec2, metrics: &ContainerMetrics) -> Self {
        let ppu = self.scale * metrics.base_scale();
        Self {
            scale: self.scale,
            tx: self.tx + delta.x / ppu,
            ty: self.ty + delta.y / ppu,
        }
    }

    /// Returns `true` if every component is finite and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.tx.is_finite() && self.ty.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::Transform;
    use crate::ContainerMetrics;

    fn metrics() -> ContainerMetrics {
        ContainerMetrics {
            rect: Rect::new(40.0, 20.0, 840.0, 620.0),
            canvas: Size::new(400.0, 300.0),
        }
    }

    #[test]
    fn affine_matches_direct_mapping() {
        let m = metrics();
        let t = Transform::new(1.7, -12.0, 33.0);
        let p = Point::new(10.0, -5.0);

        let direct = t.scene_to_screen(p, &m);
        let via_affine = t.scene_to_screen_affine(&m) * p;
        assert!((direct - via_affine).hypot() < 1e-9);
    }

    #[test]
    fn screen_scene_roundtrip() {
        let m = metrics();
        let t = Transform::new(0.45, 100.0, -7.5);
        let p = Point::new(123.0, 456.0);

        let back = t.screen_to_scene(t.scene_to_screen(p, &m), &m);
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn anchored_places_scene_point_under_screen_point() {
        let m = metrics();
        let screen = Point::new(300.0, 200.0);
        let scene = Point::new(50.0, 60.0);
        let t = Transform::anchored(3.0, screen, scene, &m);

        let mapped = t.scene_to_screen(scene, &m);
        assert!((mapped - screen).hypot() < 1e-9);
    }

    #[test]
    fn pixel_pan_is_scaled_into_scene_units() {
        let m = metrics();
        // base scale is 2 px per unit; at scale 2 a 40 px drag is 10 units.
        let t = Transform::new(2.0, 0.0, 0.0).panned_by_pixels(Vec2::new(40.0, -20.0), &m);
        assert_eq!(t.tx, 10.0);
        assert_eq!(t.ty, -5.0);
    }
}
