// Host-side tests for configuration validation.

use sphere_core::*;

#[test]
fn default_config_is_valid() {
    assert_eq!(SceneConfig::default().validate(), Ok(()));
}

#[test]
fn friction_must_be_strictly_between_zero_and_one() {
    for friction in [0.0, 1.0, 1.5, -0.2, f32::NAN] {
        let mut config = SceneConfig::default();
        config.motion.friction = friction;
        assert!(
            matches!(config.validate(), Err(ConfigError::Friction(_))),
            "friction {} accepted",
            friction
        );
    }
}

#[test]
fn drag_scale_must_be_positive() {
    let mut config = SceneConfig::default();
    config.motion.drag_scale = 0.0;
    assert_eq!(config.validate(), Err(ConfigError::DragScale(0.0)));
}

#[test]
fn rotation_step_must_be_finite_and_positive() {
    for step in [f32::INFINITY, 0.0, -0.01] {
        let mut config = SceneConfig::default();
        config.motion.rotation_step = step;
        assert_eq!(config.validate(), Err(ConfigError::RotationStep(step)));
    }
}

#[test]
fn bounds_and_speed_range_are_checked() {
    let mut config = SceneConfig::default();
    config.random_bounds_cube = -1.0;
    assert_eq!(config.validate(), Err(ConfigError::Bounds(-1.0)));

    let mut config = SceneConfig::default();
    config.angular_speed_range = (0.05, 0.01);
    assert_eq!(
        config.validate(),
        Err(ConfigError::AngularSpeedRange(0.05, 0.01))
    );
}

#[test]
fn simulation_rejects_invalid_config() {
    let mut config = SceneConfig::default();
    config.motion.friction = 1.0;
    assert!(Simulation::new(&config).is_err());
}

#[test]
fn simulation_builds_from_default_config() {
    let sim = Simulation::new(&SceneConfig::default().with_rng_seed(3)).unwrap();
    assert_eq!(sim.scene.len(), 30);
    assert_eq!(sim.drag, DragSession::Idle);
    assert_eq!(sim.engine.params, MotionParams::default());
}

#[test]
fn config_error_messages_name_the_value() {
    let msg = ConfigError::Friction(1.2).to_string();
    assert!(msg.contains("1.2"), "{}", msg);
}
