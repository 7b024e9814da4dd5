//! Per-frame integration and pointer-driven drag handling.

use crate::config::MotionParams;
use crate::drag::DragSession;
use crate::scene::{Scene, Sphere};
use glam::Vec2;

/// Stateless driver over a [`Scene`] and a [`DragSession`]; it keeps only its
/// tuning constants.
#[derive(Clone, Debug, Default)]
pub struct MotionEngine {
    pub params: MotionParams,
}

impl MotionEngine {
    pub fn new(params: MotionParams) -> Self {
        Self { params }
    }

    /// Advance one frame: bump the rotation phase, then for every sphere move
    /// by the current velocity and only afterwards apply friction.
    pub fn advance_frame(&self, scene: &mut Scene) {
        scene.rotation_phase += self.params.rotation_step;
        let friction = self.params.friction;
        for sphere in &mut scene.spheres {
            sphere.position.x += sphere.velocity.x;
            sphere.position.y += sphere.velocity.y;
            sphere.velocity *= friction;
        }
    }

    /// Pointer pressed at `screen` on a surface of size `viewport`. Selects the
    /// sphere nearest to the pointer in the x/y plane; stays idle when the scene
    /// is empty.
    pub fn begin_drag(
        &self,
        scene: &Scene,
        drag: &mut DragSession,
        screen: Vec2,
        viewport: Vec2,
    ) {
        let point = normalize_pointer(screen, viewport);
        *drag = match nearest_sphere(&scene.spheres, point) {
            Some(sphere) => {
                log::debug!("[drag] begin on sphere {}", sphere);
                DragSession::Dragging {
                    sphere,
                    last_pointer: screen,
                }
            }
            None => DragSession::Idle,
        };
    }

    /// Pointer moved while pressed. The selected sphere follows the pointer and
    /// its velocity is replaced by this step's displacement so a release flings
    /// it.
    pub fn continue_drag(&self, scene: &mut Scene, drag: &mut DragSession, screen: Vec2) {
        let DragSession::Dragging {
            sphere,
            last_pointer,
        } = drag
        else {
            return;
        };
        let Some(target) = scene.spheres.get_mut(*sphere) else {
            return;
        };
        let delta = screen - *last_pointer;
        let step = Vec2::new(delta.x, -delta.y) * self.params.drag_scale;
        target.position.x += step.x;
        target.position.y += step.y;
        target.velocity = step;
        *last_pointer = screen;
    }

    /// Pointer released or left the surface. Velocity is left as the last move
    /// set it.
    pub fn end_drag(&self, drag: &mut DragSession) {
        if let Some(sphere) = drag.selected() {
            log::debug!("[drag] end on sphere {}", sphere);
        }
        *drag = DragSession::Idle;
    }
}

/// Map host pixels into [-1, 1] on both axes with y pointing up.
#[inline]
pub fn normalize_pointer(screen: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (screen.x / viewport.x) * 2.0 - 1.0,
        (screen.y / viewport.y) * -2.0 + 1.0,
    )
}

/// Index of the sphere whose (x, y) is closest to `point`, ignoring z. Ties
/// go to the earlier sphere. There is no distance cutoff.
#[inline]
pub fn nearest_sphere(spheres: &[Sphere], point: Vec2) -> Option<usize> {
    let mut best_i = None;
    let mut best_d = f32::INFINITY;
    for (i, s) in spheres.iter().enumerate() {
        let d = Vec2::new(s.position.x, s.position.y).distance(point);
        if d < best_d {
            best_d = d;
            best_i = Some(i);
        }
    }
    best_i
}
