use egui::{Align2, Color32, FontId};
use egui_compare::{CompareStyle, CompareView};

#[derive(Default)]
pub struct App;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let style = CompareStyle::default()
                .with_divider_color(Color32::WHITE)
                .with_divider_width(2.0);
            let view = CompareView::new(
                ui,
                "simple_compare",
                |ui| pane(ui, "Before", Color32::from_rgb(48, 52, 70)),
                |ui| pane(ui, "After", Color32::from_rgb(140, 170, 238)),
            )
            .style(style);

            ui.add(view);
        });
    }
}

fn pane(ui: &mut egui::Ui, title: &str, fill: Color32) {
    let rect = ui.max_rect();
    ui.painter().rect_filled(rect, 0.0, fill);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        title,
        FontId::proportional(32.0),
        Color32::BLACK,
    );
}

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 300.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "simple_example",
        native_options,
        Box::new(|_cc| Ok(Box::<App>::default())),
    )
}
