use crate::domain::pricing::CpiTable;
use crate::interfaces::components::{Card, callout};
use crate::interfaces::components::charts::render_cpi_chart;
use crate::interfaces::content;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::PredictionView;
use eframe::egui;

/// Selected features followed by the real and nominal price callouts
pub fn render_prediction(ui: &mut egui::Ui, view: &PredictionView) {
    ui.heading(content::RESULTS_HEADING);
    ui.add_space(DesignSystem::SPACING_SMALL);

    for (label, value) in &view.inputs {
        ui.horizontal(|ui| {
            ui.label("•");
            ui.label(egui::RichText::new(format!("{}:", label)).strong());
            ui.label(value);
        });
    }

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    callout(
        ui,
        DesignSystem::SUCCESS_FILL,
        DesignSystem::SUCCESS_TEXT,
        &view.real_price_line(),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    callout(
        ui,
        DesignSystem::INFO_FILL,
        DesignSystem::INFO_TEXT,
        &view.nominal_price_line(),
    );
}

pub fn render_cpi_card(ui: &mut egui::Ui, table: &CpiTable, selected_year: i32, cpi_used: f64) {
    Card::new().title("CPI Forecast").show(ui, |ui| {
        render_cpi_chart(ui, table, selected_year, cpi_used);
        ui.label(
            egui::RichText::new(format!(
                "Years without a forecast use the median CPI ({:.2}).",
                table.median()
            ))
            .size(11.0)
            .color(DesignSystem::TEXT_SECONDARY),
        );
    });
}

/// Shown instead of the prices when the model call fails
pub fn render_prediction_error(ui: &mut egui::Ui, message: &str) {
    ui.heading(content::RESULTS_HEADING);
    ui.add_space(DesignSystem::SPACING_SMALL);
    callout(
        ui,
        DesignSystem::DANGER_FILL,
        DesignSystem::DANGER_TEXT,
        &format!("Prediction failed: {}", message),
    );
}
