#![cfg(target_arch = "wasm32")]
use sphere_core::{FrameScheduler, SceneConfig, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod stats;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let sim = Rc::new(RefCell::new(Simulation::new(&SceneConfig::default())?));

    // Rendering is optional: without WebGPU the simulation still runs
    let gpu = frame::init_gpu(&canvas).await;

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        sim: sim.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(sim, canvas, gpu)));
    let mut scheduler = frame::RafScheduler;
    let frame_tick = frame_ctx.clone();
    let _handle = scheduler.schedule(Box::new(move || frame_tick.borrow_mut().frame()));
    Ok(())
}
