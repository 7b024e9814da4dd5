use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use sphere_core::{
    FrameHandle, FrameScheduler, ManualScheduler, PointerEvent, SceneConfig, Simulation,
};
use sphere_render::GpuState;
use winit::{event::*, event_loop::EventLoop, window::Window, window::WindowBuilder};

/// Environment variable holding a fixed RNG seed for the random spheres.
const SEED_ENV: &str = "SPHERE_SEED";

struct App<'w> {
    window: &'w Window,
    gpu: GpuState<'w>,
    sim: Rc<RefCell<Simulation>>,
    scheduler: ManualScheduler,
    _frame: FrameHandle,
    cursor: Vec2,
}

impl<'w> App<'w> {
    fn new(window: &'w Window, sim: Simulation) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let gpu = pollster::block_on(GpuState::new(window, size.width, size.height))?;
        let sim = Rc::new(RefCell::new(sim));
        let mut scheduler = ManualScheduler::new();
        let sim_frame = sim.clone();
        let frame = scheduler.schedule(Box::new(move || sim_frame.borrow_mut().frame()));
        Ok(Self {
            window,
            gpu,
            sim,
            scheduler,
            _frame: frame,
            cursor: Vec2::ZERO,
        })
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.sim.borrow_mut().handle_pointer(event);
    }

    fn viewport(&self) -> Vec2 {
        let size = self.window.inner_size();
        Vec2::new(size.width as f32, size.height as f32)
    }

    fn redraw(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.scheduler.tick();
        let sim = self.sim.borrow();
        self.gpu.render(&sim.scene)
    }
}

/// Any mouse button grabs, matching the web host's pointerdown.
fn mouse_button_event(state: ElementState, cursor: Vec2, viewport: Vec2) -> PointerEvent {
    match state {
        ElementState::Pressed => PointerEvent::Press {
            position: cursor,
            viewport,
        },
        ElementState::Released => PointerEvent::Release,
    }
}

fn load_config() -> SceneConfig {
    let config = SceneConfig::default();
    match std::env::var(SEED_ENV).ok().map(|v| v.parse::<u64>()) {
        Some(Ok(seed)) => {
            log::info!("[config] using {}={}", SEED_ENV, seed);
            config.with_rng_seed(seed)
        }
        Some(Err(e)) => {
            log::warn!("[config] ignoring {}: {}", SEED_ENV, e);
            config
        }
        None => config,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let sim = Simulation::new(&load_config())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Sphere field (native)")
        .build(&event_loop)?;

    let mut app = App::new(&window, sim)?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => app.gpu.resize(size.width, size.height),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = Vec2::new(position.x as f32, position.y as f32);
                let position = app.cursor;
                app.pointer(PointerEvent::Move { position });
            }
            WindowEvent::MouseInput { state, .. } => {
                let event = mouse_button_event(state, app.cursor, app.viewport());
                app.pointer(event);
            }
            WindowEvent::CursorLeft { .. } => app.pointer(PointerEvent::Release),
            _ => {}
        },
        Event::AboutToWait => match app.redraw() {
            Ok(_) => app.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => app.gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
                elwt.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_carries_cursor_and_viewport() {
        let cursor = Vec2::new(12.0, 34.0);
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(
            mouse_button_event(ElementState::Pressed, cursor, viewport),
            PointerEvent::Press {
                position: cursor,
                viewport
            }
        );
        assert_eq!(
            mouse_button_event(ElementState::Released, cursor, viewport),
            PointerEvent::Release
        );
    }
}
