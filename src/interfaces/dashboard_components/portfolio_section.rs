use super::about_section::image_uri;
use crate::infrastructure::assets::EmbeddedImage;
use crate::interfaces::content;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Circular profile photo with the author's greeting
pub fn render_profile(ui: &mut egui::Ui, profile: Option<&EmbeddedImage>) {
    ui.vertical_centered(|ui| {
        if let Some(profile) = profile {
            let size = DesignSystem::PROFILE_PHOTO_SIZE;
            ui.add_space(DesignSystem::SPACING_LARGE);
            egui::Frame::NONE
                .corner_radius(size / 2.0)
                .shadow(egui::epaint::Shadow {
                    offset: [0, 0],
                    blur: 50,
                    spread: 6,
                    color: DesignSystem::ACCENT_PROFILE.linear_multiply(0.6),
                })
                .show(ui, |ui| {
                    ui.add(
                        egui::Image::from_bytes(image_uri("profile", profile), profile.bytes.clone())
                            .fit_to_exact_size(egui::vec2(size, size))
                            .corner_radius(size / 2.0),
                    );
                });
        }

        ui.add_space(DesignSystem::SPACING_LARGE);
        ui.label(
            egui::RichText::new(content::GREETING)
                .size(12.0)
                .italics()
                .color(DesignSystem::TEXT_SECONDARY),
        );
    });
}

pub fn render_portfolio_links(ui: &mut egui::Ui) {
    ui.separator();
    ui.label(
        egui::RichText::new(content::PORTFOLIO_HEADING)
            .size(26.0)
            .strong(),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.label(content::PORTFOLIO_INTRO);

    for (name, url) in content::PORTFOLIO_LINKS {
        ui.horizontal(|ui| {
            ui.label("•");
            ui.hyperlink_to(*name, *url);
        });
    }

    ui.separator();
    ui.label(egui::RichText::new(content::OUTRO).italics());
    ui.hyperlink_to(egui::RichText::new("Email Me!").size(11.0), content::CONTACT_EMAIL);
    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(content::MODEL_CAVEAT)
                .size(12.0)
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        ui.hyperlink_to(
            egui::RichText::new("See why here").size(12.0),
            content::MODEL_CAVEAT_URL,
        );
    });
}
