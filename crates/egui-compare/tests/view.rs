use egui::{
    pos2, vec2, CentralPanel, Context, Event, Id, Modifiers, PointerButton, Pos2, RawInput, Rect,
    Vec2,
};
use egui_compare::{CompareStyle, CompareView, CompareViewState};

struct Harness {
    ctx: Context,
    size: Vec2,
    view_id: Option<Id>,
    view_rect: Option<Rect>,
    changed: bool,
}

impl Harness {
    fn new() -> Self {
        Self {
            ctx: Context::default(),
            size: vec2(200.0, 100.0),
            view_id: None,
            view_rect: None,
            changed: false,
        }
    }

    fn frame(&mut self, events: Vec<Event>) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 300.0))),
            events,
            ..Default::default()
        };
        let size = self.size;
        let mut view_id = None;
        let mut view_rect = None;
        let mut changed = false;
        let _ = self.ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let view = CompareView::new(
                    ui,
                    "compare",
                    |ui| {
                        ui.label("before");
                    },
                    |ui| {
                        ui.label("after");
                    },
                )
                .style(CompareStyle::default().with_divider_width(1.0))
                .size(size);
                view_id = Some(view.id());
                let response = ui.add(view);
                view_rect = Some(response.rect);
                changed = response.changed();
            });
        });
        self.view_id = view_id;
        self.view_rect = view_rect;
        self.changed = changed;
    }

    fn id(&self) -> Id {
        self.view_id.expect("view was shown")
    }

    fn rect(&self) -> Rect {
        self.view_rect.expect("view was shown")
    }

    fn offset(&self) -> f32 {
        CompareView::load_offset(&self.ctx, self.id())
    }

    fn state(&self) -> CompareViewState {
        CompareViewState::load(&self.ctx, self.id())
    }
}

fn moved(pos: Pos2) -> Event {
    Event::PointerMoved(pos)
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn first_frame_centers_divider() {
    let mut harness = Harness::new();
    harness.frame(vec![]);
    assert_eq!(harness.offset(), 0.0);

    harness.frame(vec![]);
    assert_eq!(harness.offset(), 0.0);
}

#[test]
fn dragging_the_handle_moves_and_keeps_the_divider() {
    let mut harness = Harness::new();
    harness.frame(vec![]);
    let rect = harness.rect();
    let start = rect.center();

    harness.frame(vec![moved(start)]);
    harness.frame(vec![button(start, true)]);
    harness.frame(vec![moved(start + vec2(20.0, 0.0))]);
    harness.frame(vec![moved(start + vec2(50.0, 0.0))]);
    assert_eq!(harness.offset(), 50.0);

    harness.frame(vec![moved(pos2(rect.right() + 500.0, start.y))]);
    assert_eq!(harness.offset(), 100.0);

    let end = pos2(rect.right() + 500.0, start.y);
    harness.frame(vec![button(end, false)]);
    harness.frame(vec![moved(start)]);
    assert_eq!(harness.offset(), 100.0);
}

#[test]
fn response_changes_only_when_the_divider_moves() {
    let mut harness = Harness::new();
    let mut changes = vec![];

    harness.frame(vec![]);
    changes.push(harness.changed);
    let start = harness.rect().center();

    for events in [
        vec![moved(start)],
        vec![button(start, true)],
        vec![moved(start + vec2(42.0, 0.0))],
        vec![],
    ] {
        harness.frame(events);
        changes.push(harness.changed);
    }

    assert_eq!(changes, vec![false, false, false, true, false]);
    assert_eq!(harness.offset(), 42.0);
}

#[test]
fn lost_drag_is_cancelled_and_keeps_the_offset() {
    let mut harness = Harness::new();
    harness.frame(vec![]);

    let mut state = harness.state();
    assert!(state.divider.drag_start());
    state.divider.on_drag_changed(150.0, 200.0);
    state.store(&harness.ctx, harness.id());

    harness.frame(vec![]);
    let state = harness.state();
    assert!(!state.divider.is_dragging());
    assert_eq!(state.divider.current_offset(), 50.0);
    assert_eq!(harness.offset(), 50.0);
}

#[test]
fn offset_is_clamped_after_the_view_shrinks() {
    let mut harness = Harness::new();
    harness.frame(vec![]);
    let start = harness.rect().center();

    harness.frame(vec![moved(start)]);
    harness.frame(vec![button(start, true)]);
    harness.frame(vec![moved(start + vec2(500.0, 0.0))]);
    let end = start + vec2(500.0, 0.0);
    harness.frame(vec![button(end, false)]);
    assert_eq!(harness.offset(), 100.0);

    harness.size = vec2(40.0, 100.0);
    harness.frame(vec![]);
    assert_eq!(harness.offset(), 20.0);
}

#[test]
fn reset_recenters_divider() {
    let mut harness = Harness::new();
    harness.frame(vec![]);
    let start = harness.rect().center();

    harness.frame(vec![moved(start)]);
    harness.frame(vec![button(start, true)]);
    harness.frame(vec![moved(start - vec2(30.0, 0.0))]);
    harness.frame(vec![button(start - vec2(30.0, 0.0), false)]);
    assert_eq!(harness.offset(), -30.0);

    CompareView::reset(&harness.ctx, harness.id());
    assert_eq!(harness.offset(), 0.0);
}
