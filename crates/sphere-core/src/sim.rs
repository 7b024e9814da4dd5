//! The aggregate a host owns: scene, drag session and motion engine.

use crate::config::{ConfigError, SceneConfig};
use crate::drag::{DragSession, PointerEvent};
use crate::motion::MotionEngine;
use crate::scene::Scene;

#[derive(Clone, Debug, Default)]
pub struct Simulation {
    pub scene: Scene,
    pub drag: DragSession,
    pub engine: MotionEngine,
}

impl Simulation {
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(
            Scene::from_config(config),
            MotionEngine::new(config.motion),
        ))
    }

    pub fn from_parts(scene: Scene, engine: MotionEngine) -> Self {
        Self {
            scene,
            drag: DragSession::Idle,
            engine,
        }
    }

    pub fn frame(&mut self) {
        self.engine.advance_frame(&mut self.scene);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { position, viewport } => {
                self.engine
                    .begin_drag(&self.scene, &mut self.drag, position, viewport)
            }
            PointerEvent::Move { position } => {
                self.engine
                    .continue_drag(&mut self.scene, &mut self.drag, position)
            }
            PointerEvent::Release => self.engine.end_drag(&mut self.drag),
        }
    }
}
