//! Viewer application state and main loop

use devscope_core::{DevOverlay, OverlayConfig, SandboxHost};
use eframe::egui;
use thiserror::Error;

use crate::demo;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(String),
}

/// Actions raised by the viewer's own controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiAction {
    ToggleHierarchy,
    ToggleMemory,
    SaveConfig,
    ResetWorld,
}

/// Viewer state: a sample host and the overlay drawn over it
pub struct ViewerApp {
    host: SandboxHost,
    overlay: DevOverlay,
    status: Option<String>,
}

impl ViewerApp {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            host: demo::build_world(),
            overlay: DevOverlay::new(config),
            status: None,
        }
    }

    fn handle_ui_action(&mut self, action: UiAction) {
        match action {
            UiAction::ToggleHierarchy => self.overlay.toggle_hierarchy(),
            UiAction::ToggleMemory => self.overlay.toggle_memory(),
            UiAction::SaveConfig => {
                self.status = Some(match devscope_core::config::save(self.overlay.config()) {
                    Ok(()) => "Settings saved".to_string(),
                    Err(e) => {
                        tracing::error!("Failed to save settings: {}", e);
                        format!("Failed to save settings: {}", e)
                    }
                });
            }
            UiAction::ResetWorld => {
                tracing::info!("Rebuilding sample world");
                self.host = demo::build_world();
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut ui_action = None;
        let hotkeys = &self.overlay.config().hotkeys;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Devscope");
            ui.label(format!(
                "Press '{}' for the hierarchy browser and '{}' for the memory lister.",
                hotkeys.hierarchy_toggle, hotkeys.memory_toggle
            ));
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.overlay.is_hierarchy_visible(), "Hierarchy")
                    .clicked()
                {
                    ui_action = Some(UiAction::ToggleHierarchy);
                }
                if ui
                    .selectable_label(self.overlay.is_memory_visible(), "Memory")
                    .clicked()
                {
                    ui_action = Some(UiAction::ToggleMemory);
                }
                if ui.button("Reset world").clicked() {
                    ui_action = Some(UiAction::ResetWorld);
                }
                if ui.button("Save settings").clicked() {
                    ui_action = Some(UiAction::SaveConfig);
                }
            });

            if let Some(status) = &self.status {
                ui.label(status);
            }
        });

        if let Some(action) = ui_action {
            self.handle_ui_action(action);
        }

        self.overlay.show(ctx, &mut self.host);
    }
}

/// Run the viewer
pub fn run(config: OverlayConfig) -> Result<(), AppError> {
    tracing::info!("Starting Devscope viewer");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Devscope")
            .with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Devscope",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(config)))),
    )
    .map_err(|e| AppError::EventLoop(format!("eframe error: {}", e)))?;

    Ok(())
}
