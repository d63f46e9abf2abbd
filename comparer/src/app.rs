use crate::consts::APP_TITLE;
use eframe::{egui, NativeOptions};
use egui::{Align2, Color32, FontId, Id, Image, Slider, Ui};
use egui_compare::{CompareStyle, CompareView, HandleIcon, DEFAULT_HANDLE_GLYPH};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ComparerOptions {
    /// `file://` URI of the image shown left of the divider.
    pub left: Option<String>,
    /// `file://` URI of the image shown right of the divider.
    pub right: Option<String>,
    pub style: CompareStyle,
}

/// What one side of the comparison shows: an image, or a painted placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSource<'a> {
    pub uri: Option<&'a str>,
    pub title: &'static str,
    pub fill: Color32,
}

pub struct Comparer {
    left: Option<String>,
    right: Option<String>,
    style: CompareStyle,
    view_id: Option<Id>,
    offset: f32,
}

impl Comparer {
    fn new(opts: ComparerOptions) -> Self {
        Self {
            left: opts.left,
            right: opts.right,
            style: opts.style,
            view_id: None,
            offset: 0.0,
        }
    }

    /// Panes in widget order. The first one fills the view and stays visible right
    /// of the divider, the second one is revealed left of it.
    pub fn panes(&self) -> (PaneSource<'_>, PaneSource<'_>) {
        let after = PaneSource {
            uri: self.right.as_deref(),
            title: "After",
            fill: Color32::from_rgb(140, 170, 238),
        };
        let before = PaneSource {
            uri: self.left.as_deref(),
            title: "Before",
            fill: Color32::from_rgb(48, 52, 70),
        };
        (after, before)
    }

    pub fn start(options: NativeOptions, opts: ComparerOptions) -> eframe::Result<()> {
        info!(left = ?opts.left, right = ?opts.right, "starting comparer");
        eframe::run_native(
            APP_TITLE,
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(Comparer::new(opts)))
            }),
        )
    }

    fn controls(&mut self, ui: &mut Ui) {
        let style = &mut self.style;

        ui.label("Handle");
        ui.separator();
        ui.add(Slider::new(&mut style.handle_diameter, 0.0..=120.0).text("diameter"));
        ui.horizontal(|ui| {
            ui.color_edit_button_srgba(&mut style.handle_fill);
            ui.label("fill");
        });
        ui.add(Slider::new(&mut style.handle_icon_width, 0.0..=80.0).text("icon width"));
        ui.horizontal(|ui| {
            ui.color_edit_button_srgba(&mut style.handle_icon_tint);
            ui.label("icon tint");
        });
        match &mut style.handle_icon {
            HandleIcon::Glyph(glyph) => {
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(glyph).desired_width(40.0));
                    ui.label("glyph");
                });
            }
            HandleIcon::Uri(uri) => {
                ui.label(uri.as_str());
                if ui.button("Use glyph").clicked() {
                    style.handle_icon = HandleIcon::Glyph(DEFAULT_HANDLE_GLYPH.to_owned());
                }
            }
        }

        ui.add_space(12.0);
        ui.label("Divider");
        ui.separator();
        ui.add(Slider::new(&mut style.divider_width, 0.0..=10.0).text("width"));
        ui.horizontal(|ui| {
            ui.color_edit_button_srgba(&mut style.divider_color);
            ui.label("color");
        });

        ui.add_space(12.0);
        ui.separator();
        ui.label(format!("offset: {:.1}", self.offset));
        if ui.button("Reset divider").clicked() {
            if let Some(id) = self.view_id {
                CompareView::reset(ui.ctx(), id);
                self.offset = 0.0;
                info!("divider reset");
            }
        }
        if ui.button("Reset style").clicked() {
            *style = CompareStyle::default();
        }
    }
}

impl eframe::App for Comparer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls_panel")
            .resizable(true)
            .width_range(200.0..=300.0)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (after, before) = self.panes();
            let view = CompareView::new(
                ui,
                "comparer_view",
                move |ui| pane(ui, after),
                move |ui| pane(ui, before),
            )
            .style(self.style.clone());

            let id = view.id();
            let changed = ui.add(view).changed();
            self.view_id = Some(id);
            if changed {
                self.offset = CompareView::load_offset(ctx, id);
            }
        });
    }
}

fn pane(ui: &mut Ui, source: PaneSource<'_>) {
    let rect = ui.max_rect();
    match source.uri {
        Some(uri) => {
            Image::from_uri(uri.to_owned()).paint_at(ui, rect);
        }
        None => {
            ui.painter().rect_filled(rect, 0.0, source.fill);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                source.title,
                FontId::proportional(32.0),
                Color32::BLACK,
            );
        }
    }
}
