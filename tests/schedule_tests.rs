// Host-side tests for the manual frame scheduler.

use sphere_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn tick_runs_each_scheduled_frame_once() {
    let mut scheduler = ManualScheduler::new();
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let _handle = scheduler.schedule(Box::new(move || c.set(c.get() + 1)));

    assert_eq!(scheduler.tick(), 1);
    assert_eq!(scheduler.tick(), 1);
    assert_eq!(count.get(), 2);
}

#[test]
fn cancelled_frames_stop_running() {
    let mut scheduler = ManualScheduler::new();
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let handle = scheduler.schedule(Box::new(move || c.set(c.get() + 1)));

    scheduler.tick();
    handle.cancel();
    assert!(handle.is_cancelled());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.tick(), 0);
    assert_eq!(count.get(), 1);
}

#[test]
fn cloned_handles_share_cancellation() {
    let mut scheduler = ManualScheduler::new();
    let handle = scheduler.schedule(Box::new(|| {}));
    let other = handle.clone();
    other.cancel();
    assert!(handle.is_cancelled());
}

#[test]
fn scheduler_drives_the_simulation() {
    let sim = Rc::new(RefCell::new(
        Simulation::new(&SceneConfig::default().with_rng_seed(11)).unwrap(),
    ));
    let mut scheduler = ManualScheduler::new();
    let s = sim.clone();
    let handle = scheduler.schedule(Box::new(move || s.borrow_mut().frame()));

    for _ in 0..10 {
        scheduler.tick();
    }
    handle.cancel();
    scheduler.tick();

    let phase = sim.borrow().scene.rotation_phase;
    assert!((phase - 10.0 * ROTATION_STEP).abs() < 1e-5);
}

#[test]
fn independent_frames_are_cancelled_separately() {
    let mut scheduler = ManualScheduler::new();
    let a = scheduler.schedule(Box::new(|| {}));
    let _b = scheduler.schedule(Box::new(|| {}));
    assert_eq!(scheduler.pending(), 2);
    a.cancel();
    assert_eq!(scheduler.tick(), 1);
}
