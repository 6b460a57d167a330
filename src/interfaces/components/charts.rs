use crate::domain::pricing::CpiTable;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Plots the CPI forecast, highlighting the CPI applied to the current quote.
pub fn render_cpi_chart(ui: &mut egui::Ui, table: &CpiTable, selected_year: i32, cpi_used: f64) {
    let points: Vec<[f64; 2]> = table
        .iter()
        .map(|(year, cpi)| [year as f64, cpi])
        .collect();

    let line = egui_plot::Line::new("Forecasted CPI", egui_plot::PlotPoints::from(points))
        .color(DesignSystem::ACCENT_PRIMARY)
        .width(2.0);

    // Years outside the forecast are drawn at the median they fall back to
    let marker_label = if table.get(selected_year).is_some() {
        format!("{} (forecast)", selected_year)
    } else {
        format!("{} (median fallback)", selected_year)
    };
    let marker = egui_plot::Points::new(marker_label, vec![[selected_year as f64, cpi_used]])
        .radius(5.0)
        .color(DesignSystem::ACCENT_PROFILE);

    egui_plot::Plot::new("cpi_forecast_plot")
        .height(220.0)
        .show_axes([true, true])
        .show_grid([true, true])
        .allow_scroll(false)
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(marker);
        });
}
