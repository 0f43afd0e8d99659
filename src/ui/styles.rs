use {
    crate::{models::Rgb, ui::UI_CONFIG},
    eframe::egui::{Color32, RichText, Ui},
};

impl From<Rgb> for Color32 {
    fn from(rgb: Rgb) -> Self {
        Color32::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text.into())
                .small()
                .color(UI_CONFIG.colors.text_subdued),
        );
    }

    /// Label/value pair on one grid row. Caller ends the row.
    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.label(RichText::new(label).color(UI_CONFIG.colors.label));
        self.label(RichText::new(value).color(color).strong());
    }
}
