//! Static description, banner and model summary

use crate::infrastructure::assets::EmbeddedImage;
use crate::interfaces::content;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_intro(ui: &mut egui::Ui, banner: Option<&EmbeddedImage>) {
    ui.label(egui::RichText::new(content::INTRO).size(15.0));
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.label(egui::RichText::new("How it works:").strong());
    for item in content::HOW_IT_WORKS {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(*item);
        });
    }
    ui.hyperlink_to("Past HDB resale data (Data.gov.sg)", content::DATA_SOURCE_URL);

    ui.separator();
    ui.label(
        egui::RichText::new(content::BASELINE_NOTE)
            .size(10.0)
            .italics(),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    if let Some(banner) = banner {
        ui.add(
            egui::Image::from_bytes(image_uri("banner", banner), banner.bytes.clone())
                .max_width(ui.available_width())
                .corner_radius(DesignSystem::ROUNDING_MEDIUM),
        );
    }
    ui.label(
        egui::RichText::new(content::BANNER_CAPTION)
            .size(11.0)
            .italics()
            .color(DesignSystem::TEXT_SECONDARY),
    );
}

pub fn render_about_model(ui: &mut egui::Ui) {
    ui.separator();
    ui.label(egui::RichText::new("About this Model").size(20.0).strong());
    ui.add_space(DesignSystem::SPACING_SMALL);

    for (label, text) in content::ABOUT_MODEL {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(egui::RichText::new(format!("{}:", label)).strong());
            ui.label(*text);
        });
    }

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(content::DISCLAIMER)
                .size(12.0)
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);
}

/// egui caches decoded images by URI; the extension picks the decoder.
pub fn image_uri(name: &str, image: &EmbeddedImage) -> String {
    let extension = match image.mime_type.as_str() {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "jpg",
    };
    format!("bytes://{}.{}", name, extension)
}
