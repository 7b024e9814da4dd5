use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::stats::FrameStats;
use instant::Instant;
use sphere_core::{FrameHandle, FrameScheduler, Simulation};
use sphere_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-driven scheduler. A cancelled handle stops the
/// callback from re-requesting itself.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self, mut frame: Box<dyn FnMut()>) -> FrameHandle {
        let handle = FrameHandle::default();
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if handle_tick.is_cancelled() {
                log::info!("[frame] loop cancelled");
                // Break the slot -> closure -> slot cycle; wasm-bindgen defers
                // the free until this call returns.
                tick_clone.borrow_mut().take();
                return;
            }
            frame();
            request_frame(&tick_clone);
        }) as Box<dyn FnMut()>));
        request_frame(&tick);
        handle
    }
}

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState<'static>>,
    stats: FrameStats,
}

impl FrameContext {
    pub fn new(
        sim: Rc<RefCell<Simulation>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<GpuState<'static>>,
    ) -> Self {
        Self {
            sim,
            canvas,
            gpu,
            stats: FrameStats::new(Instant::now(), FPS_LOG_INTERVAL_SEC),
        }
    }

    pub fn frame(&mut self) {
        self.sim.borrow_mut().frame();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let sim = self.sim.borrow();
            match g.render(&sim.scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        if let Some(fps) = self.stats.record(Instant::now()) {
            log::debug!("[frame] {:.1} fps", fps);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match GpuState::new(target, canvas.width(), canvas.height()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}
