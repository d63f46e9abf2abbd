use tracing::{debug, trace};

/// Whether a drag session is currently driving the divider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Owns the divider offset and turns pointer samples into it.
///
/// The offset is measured from the horizontal center of the container, so `0.0`
/// is a centered divider, `-W/2` sits on the left edge and `W/2` on the right one.
#[derive(Debug, Clone, Default)]
pub struct DividerController {
    offset: f32,
    phase: DragPhase,
}

impl DividerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Begins a drag session. Returns `false` when one is already running, in which
    /// case the new pointer is ignored.
    pub fn drag_start(&mut self) -> bool {
        if self.is_dragging() {
            debug!("drag start ignored, divider already dragging");
            return false;
        }
        debug!(offset = self.offset, "divider drag started");
        self.phase = DragPhase::Dragging;
        true
    }

    /// Feeds a pointer sample, `pointer_x` being relative to the container's left edge.
    pub fn on_drag_changed(&mut self, pointer_x: f32, container_width: f32) -> f32 {
        if !self.is_dragging() || pointer_x.is_nan() {
            return self.offset;
        }

        let raw = pointer_x - half_width(container_width);
        self.offset = clamp_offset(raw, container_width);
        trace!(pointer_x, container_width, offset = self.offset, "divider moved");
        self.offset
    }

    /// Ends the drag session. The divider stays where it was last dragged.
    pub fn drag_end(&mut self) {
        if self.is_dragging() {
            debug!(offset = self.offset, "divider drag stopped");
        }
        self.phase = DragPhase::Idle;
    }

    pub fn drag_cancel(&mut self) {
        if self.is_dragging() {
            debug!(offset = self.offset, "divider drag cancelled");
        }
        self.phase = DragPhase::Idle;
    }
}

/// Half of the container width, collapsing to `0.0` for empty, negative or
/// non-finite widths.
pub fn half_width(container_width: f32) -> f32 {
    if container_width > 0.0 && container_width.is_finite() {
        container_width * 0.5
    } else {
        0.0
    }
}

/// Clamps `offset` into `[-W/2, W/2]`.
pub fn clamp_offset(offset: f32, container_width: f32) -> f32 {
    let half = half_width(container_width);
    if half == 0.0 || offset.is_nan() {
        return 0.0;
    }
    offset.clamp(-half, half)
}

/// Horizontal span of the second pane left visible by the divider, in
/// container-local coordinates.
///
/// The second pane shows from the container's left edge up to the divider, the
/// first pane covers the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskBounds {
    pub left: f32,
    pub right: f32,
}

impl MaskBounds {
    pub fn visible_width(&self) -> f32 {
        self.right - self.left
    }

    pub fn is_hidden(&self) -> bool {
        self.visible_width() <= 0.0
    }
}

pub fn mask_bounds(offset: f32, container_width: f32) -> MaskBounds {
    let half = half_width(container_width);
    MaskBounds {
        left: 0.0,
        right: clamp_offset(offset, container_width) + half,
    }
}
