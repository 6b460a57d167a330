//! Sidebar form collecting the five flat features

use crate::domain::errors::FeatureError;
use crate::domain::housing::{
    FeatureRecord, FlatType, LEASE_YEARS_RANGE, StoreyRange, Town, YEAR_RANGE,
};
use crate::interfaces::content;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Current widget values. Sliders and combo boxes only offer valid values,
/// so `to_record` only fails if the ranges themselves change.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub year: u16,
    pub lease_years_left: u8,
    pub flat_type: FlatType,
    pub town: Town,
    pub storey_range: StoreyRange,
}

impl Default for FormState {
    fn default() -> Self {
        let record = FeatureRecord::default();
        Self {
            year: record.year(),
            lease_years_left: record.lease_years_left(),
            flat_type: record.flat_type(),
            town: record.town(),
            storey_range: record.storey_range(),
        }
    }
}

impl FormState {
    pub fn to_record(&self) -> Result<FeatureRecord, FeatureError> {
        FeatureRecord::new(
            self.year,
            self.lease_years_left,
            self.flat_type,
            self.town,
            self.storey_range,
        )
    }
}

/// Renders the form, writing widget changes straight into `form`.
pub fn render_input_sidebar(ui: &mut egui::Ui, form: &mut FormState) {
    ui.heading(content::SIDEBAR_HEADING);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.spacing_mut().slider_width = DesignSystem::SIDEBAR_WIDTH - 90.0;

    ui.label("Year of Purchase");
    ui.add(egui::Slider::new(&mut form.year, YEAR_RANGE).step_by(1.0));
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.label("Lease Years Left");
    ui.add(egui::Slider::new(&mut form.lease_years_left, LEASE_YEARS_RANGE).step_by(1.0));
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.label("Flat Type");
    egui::ComboBox::from_id_salt("flat_type_select")
        .width(ui.available_width())
        .selected_text(form.flat_type.label())
        .show_ui(ui, |ui| {
            for flat_type in FlatType::ALL {
                ui.selectable_value(&mut form.flat_type, flat_type, flat_type.label());
            }
        });
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.label("Town");
    egui::ComboBox::from_id_salt("town_select")
        .width(ui.available_width())
        .selected_text(form.town.label())
        .height(320.0)
        .show_ui(ui, |ui| {
            for town in Town::ALL {
                ui.selectable_value(&mut form.town, town, town.label());
            }
        });
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.label("Storey Range");
    egui::ComboBox::from_id_salt("storey_range_select")
        .width(ui.available_width())
        .selected_text(form.storey_range.label())
        .height(320.0)
        .show_ui(ui, |ui| {
            for band in StoreyRange::ALL {
                ui.selectable_value(&mut form.storey_range, band, band.label());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_builds_default_record() {
        let record = FormState::default().to_record().unwrap();
        assert_eq!(record, FeatureRecord::default());
    }

    #[test]
    fn test_rendering_leaves_untouched_form_as_is() {
        let mut form = FormState {
            year: 2031,
            lease_years_left: 88,
            flat_type: FlatType::Executive,
            town: Town::Punggol,
            storey_range: StoreyRange::ALL[4],
        };
        let expected = form.clone();

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::SidePanel::left("sidebar").show(ctx, |ui| {
                render_input_sidebar(ui, &mut form);
            });
        });

        assert_eq!(form, expected);
        assert!(form.to_record().is_ok());
    }
}
