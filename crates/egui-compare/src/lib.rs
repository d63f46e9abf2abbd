mod divider;
mod render;
mod style;
mod view;

pub use divider::{
    clamp_offset, half_width, mask_bounds, DividerController, DragPhase, MaskBounds,
};
pub use render::{divider_x, handle_rect, render, DrawCommand, Pane, DIVIDER_GRAB_WIDTH};
pub use style::{CompareStyle, HandleIcon, DEFAULT_HANDLE_GLYPH};
pub use view::{CompareView, CompareViewState};
