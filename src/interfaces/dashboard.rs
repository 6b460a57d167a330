use crate::application::bootstrap::AppContext;
use crate::domain::housing::{FeatureRecord, PredictionResult};
use crate::interfaces::content;
use crate::interfaces::dashboard_components::about_section::{render_about_model, render_intro};
use crate::interfaces::dashboard_components::portfolio_section::{
    render_portfolio_links, render_profile,
};
use crate::interfaces::dashboard_components::result_panel::{
    render_cpi_card, render_prediction, render_prediction_error,
};
use crate::interfaces::dashboard_components::{
    FormState, LogBuffer, render_input_sidebar, render_logs_panel,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{PredictionView, PredictionViewModel};
use crossbeam_channel::Receiver;
use eframe::egui;
use tracing::{error, info};

/// Outcome of the background bootstrap, sent once
pub type BootstrapResult = Result<AppContext, String>;

enum AppState {
    Loading,
    Ready(Box<AppContext>),
    Failed(String),
}

/// Last computed quote, reused until the form changes
struct CachedQuote {
    record: FeatureRecord,
    outcome: Result<(PredictionResult, PredictionView), String>,
}

pub struct DashboardApp {
    state: AppState,
    bootstrap_rx: Receiver<BootstrapResult>,
    log_rx: Receiver<String>,
    logs: LogBuffer,
    form: FormState,
    quote: Option<CachedQuote>,
}

impl DashboardApp {
    pub fn new(bootstrap_rx: Receiver<BootstrapResult>, log_rx: Receiver<String>) -> Self {
        Self {
            state: AppState::Loading,
            bootstrap_rx,
            log_rx,
            logs: LogBuffer::new(),
            form: FormState::default(),
            quote: None,
        }
    }

    fn poll_channels(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            self.logs.push(line);
        }

        if matches!(self.state, AppState::Loading) {
            match self.bootstrap_rx.try_recv() {
                Ok(Ok(context)) => {
                    info!("Resources loaded from {}", context.model_origin);
                    self.state = AppState::Ready(Box::new(context));
                }
                Ok(Err(message)) => {
                    self.state = AppState::Failed(message);
                }
                Err(crossbeam_channel::TryRecvError::Empty) => {}
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    self.state =
                        AppState::Failed("Background loader stopped unexpectedly".to_string());
                }
            }
        }
    }

    /// Recomputes the quote only when the submitted record differs.
    fn refresh_quote(&mut self) {
        let AppState::Ready(context) = &self.state else {
            return;
        };

        let record = match self.form.to_record() {
            Ok(record) => record,
            Err(e) => {
                error!("Rejected form values: {}", e);
                return;
            }
        };
        if self.quote.as_ref().is_some_and(|q| q.record == record) {
            return;
        }

        let outcome = match context.pricing.quote(&record) {
            Ok(result) => {
                let view = PredictionViewModel::build(&record, &result);
                Ok((result, view))
            }
            Err(e) => {
                error!("Prediction failed: {}", e);
                Err(e.to_string())
            }
        };
        self.quote = Some(CachedQuote { record, outcome });
    }

    fn render_ready(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("input_sidebar")
            .exact_width(DesignSystem::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(DesignSystem::sidebar_frame())
            .show(ctx, |ui| {
                render_input_sidebar(ui, &mut self.form);
            });

        self.refresh_quote();

        let AppState::Ready(context) = &self.state else {
            return;
        };
        let quote = self.quote.as_ref();

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.heading(egui::RichText::new(content::APP_HEADING).size(26.0).strong());
                        ui.add_space(DesignSystem::SPACING_SMALL);
                        render_intro(ui, context.banner_image.as_ref());
                        ui.add_space(DesignSystem::SPACING_LARGE);

                        if let Some(quote) = quote {
                            match &quote.outcome {
                                Ok((result, view)) => {
                                    render_prediction(ui, view);
                                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                                    render_cpi_card(
                                        ui,
                                        context.pricing.cpi_table(),
                                        quote.record.year() as i32,
                                        result.cpi_used,
                                    );
                                }
                                Err(message) => render_prediction_error(ui, message),
                            }
                        }

                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        render_about_model(ui);
                        render_profile(ui, context.profile_image.as_ref());
                        render_portfolio_links(ui);

                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        ui.label(
                            egui::RichText::new(format!(
                                "Model: {} ({}) from {}",
                                context.pricing.model().name(),
                                context.pricing.model().version(),
                                context.model_origin
                            ))
                            .size(10.0)
                            .color(DesignSystem::TEXT_MUTED),
                        );
                    });
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());
        self.poll_channels();

        render_logs_panel(ctx, &mut self.logs);

        match &self.state {
            AppState::Loading => {
                egui::CentralPanel::default()
                    .frame(DesignSystem::main_frame())
                    .show(ctx, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(120.0);
                            ui.spinner();
                            ui.label("Loading model and CPI forecast...");
                        });
                    });
                ctx.request_repaint_after(std::time::Duration::from_millis(100));
            }
            AppState::Failed(message) => {
                let message = message.clone();
                egui::CentralPanel::default()
                    .frame(DesignSystem::main_frame())
                    .show(ctx, |ui| {
                        ui.heading(content::PAGE_TITLE);
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        crate::interfaces::components::callout(
                            ui,
                            DesignSystem::DANGER_FILL,
                            DesignSystem::DANGER_TEXT,
                            &format!("The app could not start: {}", message),
                        );
                    });
            }
            AppState::Ready(_) => self.render_ready(ctx),
        }

        if !self.logs.collapsed {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }
    }
}
