use crate::divider::{clamp_offset, DividerController};
use crate::render::{handle_rect, render, DrawCommand, Pane};
use crate::style::{CompareStyle, HandleIcon};
use egui::{
    Align2, Color32, Context, CursorIcon, FontId, Id, Image, Rect, Response, Sense, Ui, UiBuilder,
    Vec2, Widget,
};

type PaneContent<'a> = Box<dyn FnOnce(&mut Ui) + 'a>;

#[derive(Clone, Default)]
pub struct CompareViewState {
    pub divider: DividerController,
    /// Container width of the last frame the view was laid out in.
    pub width: f32,
}

impl CompareViewState {
    pub fn load(ctx: &Context, id: Id) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(id).unwrap_or_default())
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    pub fn remove(ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.remove_temp::<Self>(id));
    }
}

/// Two stacked panes split by a draggable divider.
///
/// `pane_a` fills the whole container. `pane_b` is drawn on top of it and only shows
/// left of the divider. Both panes are laid out over the full container, so their
/// content stays put while the divider moves. Pane content that senses clicks or
/// drags under the handle will compete with it for the pointer.
pub struct CompareView<'a> {
    widget_id: Id,
    size: Vec2,
    style: CompareStyle,
    pane_a: PaneContent<'a>,
    pane_b: PaneContent<'a>,
}

impl Widget for CompareView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            widget_id,
            size,
            style,
            pane_a,
            pane_b,
        } = self;
        let mut state = CompareViewState::load(ui.ctx(), widget_id);

        let (rect, mut response) = ui.allocate_exact_size(size, Sense::hover());
        state.width = rect.width();
        let handle = ui.interact(
            handle_rect(state.divider.current_offset(), rect, &style),
            widget_id.with("handle"),
            Sense::drag(),
        );

        if handle.drag_started() {
            state.divider.drag_start();
        }
        if handle.dragged() {
            if let Some(pos) = handle.interact_pointer_pos() {
                let before = state.divider.current_offset();
                if state.divider.on_drag_changed(pos.x - rect.left(), rect.width()) != before {
                    response.mark_changed();
                }
            }
        }
        if handle.drag_stopped() {
            state.divider.drag_end();
        } else if state.divider.is_dragging() && !handle.dragged() {
            state.divider.drag_cancel();
        }

        if handle.hovered() || handle.dragged() {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
        }

        if ui.is_rect_visible(rect) {
            paint(ui, rect, state.divider.current_offset(), &style, pane_a, pane_b);
        }

        state.store(ui.ctx(), widget_id);
        response.union(handle)
    }
}

impl<'a> CompareView<'a> {
    pub fn new(
        ui: &mut Ui,
        id_salt: impl std::hash::Hash,
        pane_a: impl FnOnce(&mut Ui) + 'a,
        pane_b: impl FnOnce(&mut Ui) + 'a,
    ) -> Self {
        Self {
            widget_id: ui.make_persistent_id(id_salt),
            size: ui.available_size(),
            style: CompareStyle::default(),
            pane_a: Box::new(pane_a),
            pane_b: Box::new(pane_b),
        }
    }

    pub fn id(&self) -> Id {
        self.widget_id
    }

    #[inline]
    pub fn style(mut self, style: CompareStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Divider offset of the view with `id`, clamped to the width it was last laid
    /// out with. `0.0` if it was never shown.
    pub fn load_offset(ctx: &Context, id: Id) -> f32 {
        let state = CompareViewState::load(ctx, id);
        clamp_offset(state.divider.current_offset(), state.width)
    }

    /// Forgets the divider position, the next frame starts centered again.
    pub fn reset(ctx: &Context, id: Id) {
        CompareViewState::remove(ctx, id);
    }
}

fn paint(
    ui: &mut Ui,
    rect: Rect,
    offset: f32,
    style: &CompareStyle,
    pane_a: PaneContent<'_>,
    pane_b: PaneContent<'_>,
) {
    let mut pane_a = Some(pane_a);
    let mut pane_b = Some(pane_b);

    for command in render(offset, rect, style) {
        match command {
            DrawCommand::Pane { pane, clip } => {
                let content = match pane {
                    Pane::A => pane_a.take(),
                    Pane::B => pane_b.take(),
                };
                if let Some(content) = content {
                    let mut child = ui.new_child(UiBuilder::new().max_rect(rect));
                    child.set_clip_rect(clip.intersect(ui.clip_rect()));
                    content(&mut child);
                }
            }
            DrawCommand::Line { from, to, stroke } => {
                ui.painter().line_segment([from, to], stroke);
            }
            DrawCommand::Handle {
                center,
                radius,
                fill,
            } => {
                ui.painter().circle_filled(center, radius, fill);
            }
            DrawCommand::Icon { rect, icon, tint } => paint_icon(ui, rect, &icon, tint),
        }
    }
}

fn paint_icon(ui: &Ui, rect: Rect, icon: &HandleIcon, tint: Color32) {
    if rect.height() <= 0.0 {
        return;
    }
    match icon {
        HandleIcon::Glyph(glyph) => {
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(rect.height()),
                tint,
            );
        }
        HandleIcon::Uri(uri) => {
            Image::from_uri(uri.clone()).tint(tint).paint_at(ui, rect);
        }
    }
}
