pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_TITLE: &str = "Comparer";

pub const DEFAULT_LOG_FILTER: &str = "comparer=info,egui_compare=info";
