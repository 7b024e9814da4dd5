pub mod camera;
pub mod config;
pub mod constants;
pub mod drag;
pub mod mesh;
pub mod motion;
pub mod scene;
pub mod schedule;
pub mod sim;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use drag::*;
pub use mesh::*;
pub use motion::*;
pub use scene::*;
pub use schedule::*;
pub use sim::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
