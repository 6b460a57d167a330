use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use std::collections::VecDeque;

const MAX_LOG_LINES: usize = 500;

/// Log lines forwarded by the tracing UI layer
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    pub collapsed: bool,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::new(),
            collapsed: true,
        }
    }

    pub fn push(&mut self, line: String) {
        let line = line.trim_end().to_string();
        if line.is_empty() {
            return;
        }
        if self.lines.len() == MAX_LOG_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Collapsible log strip docked at the bottom of the window
pub fn render_logs_panel(ctx: &egui::Context, logs: &mut LogBuffer) {
    egui::TopBottomPanel::bottom("logs_panel")
        .resizable(true)
        .default_height(180.0)
        .min_height(30.0)
        .show_animated(ctx, !logs.collapsed, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("logs_scroll")
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in logs.iter() {
                        let color = if line.contains("ERROR") {
                            DesignSystem::DANGER_TEXT
                        } else if line.contains("WARN") {
                            egui::Color32::from_rgb(160, 110, 0)
                        } else {
                            DesignSystem::TEXT_SECONDARY
                        };
                        ui.label(egui::RichText::new(line).monospace().size(10.0).color(color));
                    }
                });
        });

    egui::TopBottomPanel::bottom("logs_toggle")
        .exact_height(25.0)
        .frame(
            egui::Frame::NONE
                .fill(DesignSystem::BG_SIDEBAR)
                .inner_margin(egui::Margin::symmetric(8, 4)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let text = if logs.collapsed { "Show logs" } else { "Hide logs" };
                if ui
                    .button(egui::RichText::new(text).size(11.0))
                    .clicked()
                {
                    logs.collapsed = !logs.collapsed;
                }
                ui.label(
                    egui::RichText::new(format!("{} lines", logs.len()))
                        .size(10.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_buffer_drops_oldest_lines() {
        let mut logs = LogBuffer::new();
        for i in 0..MAX_LOG_LINES + 3 {
            logs.push(format!("line {}\n", i));
        }

        assert_eq!(logs.len(), MAX_LOG_LINES);
        assert_eq!(logs.iter().next(), Some("line 3"));
    }

    #[test]
    fn test_log_buffer_skips_blank_lines() {
        let mut logs = LogBuffer::new();
        logs.push("\n".to_string());
        assert!(logs.is_empty());
    }
}
