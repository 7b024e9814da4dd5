//! Authoritative scene state: the spheres and the shared rotation phase.
//!
//! This is plain data. The motion engine mutates it in place and the renderer
//! only reads it.

use crate::config::{SceneConfig, SphereSeed};
use crate::constants::{PITCH_FACTOR, YAW_FACTOR};
use glam::{Mat4, Vec2, Vec3};
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    /// Screen-plane velocity in world units per frame; there is no z component.
    pub velocity: Vec2,
    angular_speed: f32,
}

impl Sphere {
    pub fn new(position: Vec3, angular_speed: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            angular_speed,
        }
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Yaw and pitch (radians) for the given rotation phase.
    pub fn rotation_angles(&self, phase: f32) -> (f32, f32) {
        let spin = phase * self.angular_speed;
        (spin * YAW_FACTOR, spin * PITCH_FACTOR)
    }

    pub fn model_matrix(&self, phase: f32) -> Mat4 {
        let (yaw, pitch) = self.rotation_angles(phase);
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(yaw)
            * Mat4::from_rotation_x(pitch)
    }
}

impl From<SphereSeed> for Sphere {
    fn from(seed: SphereSeed) -> Self {
        Sphere::new(seed.position, seed.angular_speed)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub rotation_phase: f32,
}

impl Scene {
    /// Fill the scene with `seeds` followed by `random_count` spheres placed
    /// uniformly inside a cube of edge `bounds_cube` centred on the origin.
    ///
    /// Meant to run once on an empty scene; a second call appends.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        seeds: &[SphereSeed],
        random_count: usize,
        bounds_cube: f32,
        angular_speed_range: (f32, f32),
        rng: &mut R,
    ) {
        self.spheres.reserve(seeds.len() + random_count);
        self.spheres.extend(seeds.iter().copied().map(Sphere::from));

        let (speed_min, speed_max) = angular_speed_range;
        for _ in 0..random_count {
            let mut coord = || (rng.gen::<f32>() - 0.5) * bounds_cube;
            let position = Vec3::new(coord(), coord(), coord());
            let angular_speed = speed_min + rng.gen::<f32>() * (speed_max - speed_min);
            self.spheres.push(Sphere::new(position, angular_speed));
        }
        log::info!(
            "[scene] initialized {} spheres ({} seeded, {} random)",
            self.spheres.len(),
            seeds.len(),
            random_count
        );
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut scene = Scene::default();
        scene.initialize(
            &config.seeds,
            config.random_count,
            config.random_bounds_cube,
            config.angular_speed_range,
            &mut rng,
        );
        scene
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
