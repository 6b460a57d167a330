use eframe::egui;

/// Light dashboard palette and spacing
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(250, 250, 252);
    pub const BG_SIDEBAR: egui::Color32 = egui::Color32::from_rgb(240, 242, 246); // washed-out sidebar
    pub const BG_CARD: egui::Color32 = egui::Color32::WHITE;
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 75, 75);
    pub const ACCENT_PROFILE: egui::Color32 = egui::Color32::from_rgb(255, 105, 180); // #FF69B4

    // Status boxes
    pub const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(223, 243, 228);
    pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(23, 114, 69);
    pub const INFO_FILL: egui::Color32 = egui::Color32::from_rgb(220, 236, 252);
    pub const INFO_TEXT: egui::Color32 = egui::Color32::from_rgb(0, 66, 128);
    pub const DANGER_FILL: egui::Color32 = egui::Color32::from_rgb(255, 230, 230);
    pub const DANGER_TEXT: egui::Color32 = egui::Color32::from_rgb(125, 53, 59);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(49, 51, 63);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(108);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::GRAY;

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(222, 224, 230);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    pub const SIDEBAR_WIDTH: f32 = 300.0;
    pub const PROFILE_PHOTO_SIZE: f32 = 330.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);
        visuals.hyperlink_color = Self::ACCENT_PRIMARY;

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Colored callout box (success / info / error messages)
    pub fn callout_frame(fill: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(fill)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .inner_margin(egui::Margin::symmetric(16, 12))
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }

    pub fn sidebar_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_SIDEBAR)
            .inner_margin(egui::Margin::same(Self::SPACING_MEDIUM as i8))
    }
}
