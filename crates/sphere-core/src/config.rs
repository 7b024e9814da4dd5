//! Scene and motion configuration.
//!
//! Everything defaults to the values in [`crate::constants`]; hosts may
//! override fields before building a [`crate::Simulation`], which validates
//! the result first.

use crate::constants::*;
use glam::Vec3;
use thiserror::Error;

/// Initial placement and spin of one fixed sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereSeed {
    pub position: Vec3,
    pub angular_speed: f32,
}

impl SphereSeed {
    pub const fn new(position: Vec3, angular_speed: f32) -> Self {
        Self {
            position,
            angular_speed,
        }
    }
}

/// Fixed per-frame constants driving the motion engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub rotation_step: f32,
    pub friction: f32,
    pub drag_scale: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            rotation_step: ROTATION_STEP,
            friction: FRICTION,
            drag_scale: DRAG_SCALE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub seeds: Vec<SphereSeed>,
    pub random_count: usize,
    pub random_bounds_cube: f32,
    pub angular_speed_range: (f32, f32),
    /// Seed for the random spheres; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    pub motion: MotionParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seeds: default_seeds(),
            random_count: RANDOM_SPHERE_COUNT,
            random_bounds_cube: RANDOM_BOUNDS_CUBE,
            angular_speed_range: (ANGULAR_SPEED_MIN, ANGULAR_SPEED_MAX),
            rng_seed: None,
            motion: MotionParams::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("friction factor must lie in (0, 1), got {0}")]
    Friction(f32),
    #[error("drag scale must be positive and finite, got {0}")]
    DragScale(f32),
    #[error("rotation step must be positive and finite, got {0}")]
    RotationStep(f32),
    #[error("random bounds cube must be non-negative and finite, got {0}")]
    Bounds(f32),
    #[error("angular speed range is inverted or non-finite: [{0}, {1}]")]
    AngularSpeedRange(f32, f32),
}

impl SceneConfig {
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.motion;
        if !(m.friction > 0.0 && m.friction < 1.0) {
            return Err(ConfigError::Friction(m.friction));
        }
        if !(m.drag_scale.is_finite() && m.drag_scale > 0.0) {
            return Err(ConfigError::DragScale(m.drag_scale));
        }
        if !(m.rotation_step.is_finite() && m.rotation_step > 0.0) {
            return Err(ConfigError::RotationStep(m.rotation_step));
        }
        if !(self.random_bounds_cube.is_finite() && self.random_bounds_cube >= 0.0) {
            return Err(ConfigError::Bounds(self.random_bounds_cube));
        }
        let (lo, hi) = self.angular_speed_range;
        if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
            return Err(ConfigError::AngularSpeedRange(lo, hi));
        }
        Ok(())
    }
}

pub fn default_seeds() -> Vec<SphereSeed> {
    SEED_SPHERES
        .iter()
        .map(|[x, y, z, speed]| SphereSeed::new(Vec3::new(*x, *y, *z), *speed))
        .collect()
}
