use crate::divider::{clamp_offset, half_width, mask_bounds};
use crate::style::{CompareStyle, HandleIcon};
use egui::{pos2, Color32, Pos2, Rect, Stroke, Vec2};

/// Minimum width of the grab strip along the divider line.
pub const DIVIDER_GRAB_WIDTH: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    A,
    B,
}

/// One paint step of the comparison view, in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Lay the pane out over the whole container, but only keep what falls in `clip`.
    Pane { pane: Pane, clip: Rect },
    Line { from: Pos2, to: Pos2, stroke: Stroke },
    Handle { center: Pos2, radius: f32, fill: Color32 },
    Icon { rect: Rect, icon: HandleIcon, tint: Color32 },
}

/// Screen x of the divider for `offset` inside `bounds`.
pub fn divider_x(offset: f32, bounds: Rect) -> f32 {
    let width = bounds.width();
    bounds.left() + clamp_offset(offset, width) + half_width(width)
}

/// Interactive area of the handle: the circle's bounding square plus a full-height
/// strip along the divider line.
pub fn handle_rect(offset: f32, bounds: Rect, style: &CompareStyle) -> Rect {
    let x = divider_x(offset, bounds);
    let center = pos2(x, bounds.center().y);
    let strip = style.divider_width.max(DIVIDER_GRAB_WIDTH);

    Rect::from_center_size(center, Vec2::splat(style.handle_diameter.max(0.0))).union(
        Rect::from_min_max(
            pos2(x - strip * 0.5, bounds.top()),
            pos2(x + strip * 0.5, bounds.bottom()),
        ),
    )
}

/// Paint list for a divider at `offset` inside `bounds`, back to front.
///
/// `offset` is clamped against `bounds` again, as it may come from a wider layout.
pub fn render(offset: f32, bounds: Rect, style: &CompareStyle) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(5);
    commands.push(DrawCommand::Pane {
        pane: Pane::A,
        clip: bounds,
    });

    let mask = mask_bounds(offset, bounds.width());
    if !mask.is_hidden() {
        commands.push(DrawCommand::Pane {
            pane: Pane::B,
            clip: Rect::from_min_max(
                pos2(bounds.left() + mask.left, bounds.top()),
                pos2(bounds.left() + mask.right, bounds.bottom()),
            ),
        });
    }

    let x = divider_x(offset, bounds);
    if style.draws_divider_line() {
        commands.push(DrawCommand::Line {
            from: pos2(x, bounds.top()),
            to: pos2(x, bounds.bottom()),
            stroke: Stroke::new(style.divider_width, style.divider_color),
        });
    }

    let center = pos2(x, bounds.center().y);
    commands.push(DrawCommand::Handle {
        center,
        radius: style.handle_radius(),
        fill: style.handle_fill,
    });
    commands.push(DrawCommand::Icon {
        rect: Rect::from_center_size(center, Vec2::splat(style.handle_icon_width.max(0.0))),
        icon: style.handle_icon.clone(),
        tint: style.handle_icon_tint,
    });

    commands
}
