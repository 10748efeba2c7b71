use eframe::egui;

pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);
pub const MUTED_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);

/// Monospace text everywhere so result columns line up
pub fn setup_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let sizes = [
        (egui::TextStyle::Body, 12.0),
        (egui::TextStyle::Button, 12.0),
        (egui::TextStyle::Monospace, 12.0),
        (egui::TextStyle::Heading, 15.0),
        (egui::TextStyle::Small, 10.0),
    ];
    for (text_style, size) in sizes {
        style
            .text_styles
            .insert(text_style, egui::FontId::new(size, egui::FontFamily::Monospace));
    }

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    ctx.set_style(style);
}
