use egui::Color32;

pub const DEFAULT_HANDLE_GLYPH: &str = "↔";

/// What is drawn inside the drag handle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum HandleIcon {
    /// A text glyph rendered with the proportional font.
    Glyph(String),
    /// An image resolved through the installed egui image loaders, e.g. `file://handle.png`.
    Uri(String),
}

impl Default for HandleIcon {
    fn default() -> Self {
        Self::Glyph(DEFAULT_HANDLE_GLYPH.to_owned())
    }
}

/// Appearance of the handle and divider line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompareStyle {
    pub handle_icon: HandleIcon,
    pub handle_icon_width: f32,
    pub handle_icon_tint: Color32,
    pub handle_fill: Color32,
    pub handle_diameter: f32,
    pub divider_color: Color32,
    pub divider_width: f32,
}

impl Default for CompareStyle {
    fn default() -> Self {
        Self {
            handle_icon: HandleIcon::default(),
            handle_icon_width: 22.0,
            handle_icon_tint: Color32::GRAY,
            handle_fill: Color32::WHITE,
            handle_diameter: 44.0,
            divider_color: Color32::TRANSPARENT,
            divider_width: 0.0,
        }
    }
}

impl CompareStyle {
    #[inline]
    pub fn with_handle_icon(mut self, icon: HandleIcon) -> Self {
        self.handle_icon = icon;
        self
    }

    #[inline]
    pub fn with_handle_icon_width(mut self, width: f32) -> Self {
        self.handle_icon_width = width;
        self
    }

    #[inline]
    pub fn with_handle_icon_tint(mut self, tint: Color32) -> Self {
        self.handle_icon_tint = tint;
        self
    }

    #[inline]
    pub fn with_handle_fill(mut self, fill: Color32) -> Self {
        self.handle_fill = fill;
        self
    }

    #[inline]
    pub fn with_handle_diameter(mut self, diameter: f32) -> Self {
        self.handle_diameter = diameter;
        self
    }

    #[inline]
    pub fn with_divider_color(mut self, color: Color32) -> Self {
        self.divider_color = color;
        self
    }

    #[inline]
    pub fn with_divider_width(mut self, width: f32) -> Self {
        self.divider_width = width;
        self
    }

    pub fn handle_radius(&self) -> f32 {
        self.handle_diameter.max(0.0) * 0.5
    }

    pub fn draws_divider_line(&self) -> bool {
        self.divider_width > 0.0 && self.divider_color != Color32::TRANSPARENT
    }
}
