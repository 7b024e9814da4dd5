use glam::Vec2;

/// Pointer drag state. The selected sphere is held as an index into
/// `Scene::spheres` so the session never aliases scene storage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        sphere: usize,
        /// Last pointer position in host pixel space.
        last_pointer: Vec2,
    },
}

impl DragSession {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        match self {
            DragSession::Dragging { sphere, .. } => Some(*sphere),
            DragSession::Idle => None,
        }
    }

    #[inline]
    pub fn last_pointer(&self) -> Option<Vec2> {
        match self {
            DragSession::Dragging { last_pointer, .. } => Some(*last_pointer),
            DragSession::Idle => None,
        }
    }
}

/// Host pointer input, already translated into host pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press { position: Vec2, viewport: Vec2 },
    Move { position: Vec2 },
    /// Pointer released or left the surface.
    Release,
}
