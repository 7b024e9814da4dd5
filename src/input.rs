// Pure pointer helpers shared by the web event wiring. No web_sys types here so
// the mapping can be exercised off wasm.

use glam::Vec2;
use sphere_core::PointerEvent;

/// DOM event names the canvas listens to.
pub const POINTER_EVENT_TYPES: [&str; 4] =
    ["pointerdown", "pointermove", "pointerup", "pointerleave"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Leave,
}

impl PointerKind {
    #[inline]
    pub fn from_event_type(ty: &str) -> Option<Self> {
        match ty {
            "pointerdown" | "mousedown" => Some(PointerKind::Down),
            "pointermove" | "mousemove" => Some(PointerKind::Move),
            "pointerup" | "mouseup" | "pointercancel" => Some(PointerKind::Up),
            "pointerleave" | "mouseleave" => Some(PointerKind::Leave),
            _ => None,
        }
    }
}

/// Convert client (CSS) coordinates into canvas backing-store pixels.
///
/// - `rect_origin`, `rect_size`: the canvas' bounding client rect
/// - `backing`: canvas `width`/`height` attributes
///
/// A collapsed rect leaves the offset unscaled.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * backing
    } else {
        local
    }
}

#[inline]
pub fn to_pointer_event(kind: PointerKind, position: Vec2, viewport: Vec2) -> PointerEvent {
    match kind {
        PointerKind::Down => PointerEvent::Press { position, viewport },
        PointerKind::Move => PointerEvent::Move { position },
        PointerKind::Up | PointerKind::Leave => PointerEvent::Release,
    }
}
