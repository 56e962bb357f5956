//! Hotkey-driven host for both overlay windows
//!
//! Components are created on first use, so a host that never opens the
//! memory lister never allocates one.

use crate::config::{self, OverlayConfig};
use crate::hierarchy::HierarchyBrowser;
use crate::host::{MemoryInstrumentation, ObjectReflection, SceneGraph};
use crate::memory::MemoryObjectLister;

/// Owns the hierarchy browser and memory lister and routes hotkeys to them
#[derive(Debug)]
pub struct DevOverlay {
    config: OverlayConfig,
    hierarchy_key: Option<egui::Key>,
    memory_key: Option<egui::Key>,
    hierarchy: Option<HierarchyBrowser>,
    memory: Option<MemoryObjectLister>,
}

impl Default for DevOverlay {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl DevOverlay {
    /// Build the overlay, opening the windows the config asks for
    pub fn new(config: OverlayConfig) -> Self {
        for warning in config::validate_hotkeys(&config.hotkeys) {
            tracing::warn!("{}", warning);
        }

        let mut overlay = Self {
            hierarchy_key: config::parse_key(&config.hotkeys.hierarchy_toggle),
            memory_key: config::parse_key(&config.hotkeys.memory_toggle),
            config,
            hierarchy: None,
            memory: None,
        };

        if overlay.config.overlay.show_hierarchy_on_start {
            overlay.hierarchy().show = true;
        }
        if overlay.config.overlay.show_memory_on_start {
            overlay.memory().show = true;
        }
        overlay
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Hierarchy browser, created hidden on first access
    pub fn hierarchy(&mut self) -> &mut HierarchyBrowser {
        self.hierarchy.get_or_insert_with(HierarchyBrowser::new)
    }

    /// Memory lister, created hidden on first access with the configured query
    pub fn memory(&mut self) -> &mut MemoryObjectLister {
        let query = &self.config.memory;
        self.memory
            .get_or_insert_with(|| MemoryObjectLister::new(query.query()))
    }

    pub fn is_hierarchy_visible(&self) -> bool {
        self.hierarchy.as_ref().is_some_and(|h| h.show)
    }

    pub fn is_memory_visible(&self) -> bool {
        self.memory.as_ref().is_some_and(|m| m.show)
    }

    pub fn toggle_hierarchy(&mut self) {
        self.hierarchy().toggle();
        tracing::debug!(visible = self.is_hierarchy_visible(), "overlay: hierarchy toggled");
    }

    pub fn toggle_memory(&mut self) {
        self.memory().toggle();
        tracing::debug!(visible = self.is_memory_visible(), "overlay: memory toggled");
    }

    /// Toggle windows for hotkeys pressed this frame.
    ///
    /// Ignored while a text field has focus, so typing a query does not
    /// toggle windows.
    pub fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let pressed = |key: Option<egui::Key>| key.is_some_and(|k| ctx.input(|i| i.key_pressed(k)));

        if pressed(self.hierarchy_key) {
            self.toggle_hierarchy();
        }
        if pressed(self.memory_key) {
            self.toggle_memory();
        }
    }

    /// Handle hotkeys and draw whichever windows exist and are visible
    pub fn show<H>(&mut self, ctx: &egui::Context, host: &mut H)
    where
        H: SceneGraph + ObjectReflection + MemoryInstrumentation,
    {
        self.handle_hotkeys(ctx);

        if let Some(hierarchy) = &mut self.hierarchy {
            hierarchy.render(ctx, host);
        }
        if let Some(memory) = &mut self.memory {
            memory.render(ctx, &*host, &*host);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StartupConfig;
    use crate::sandbox::SandboxHost;

    fn key_press(key: egui::Key) -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_components_are_created_lazily() {
        let mut overlay = DevOverlay::default();
        assert!(overlay.hierarchy.is_none());
        assert!(overlay.memory.is_none());

        overlay.toggle_memory();
        assert!(overlay.hierarchy.is_none());
        assert!(overlay.is_memory_visible());
    }

    #[test]
    fn test_startup_visibility_from_config() {
        let config = OverlayConfig {
            overlay: StartupConfig {
                show_hierarchy_on_start: true,
                show_memory_on_start: false,
            },
            ..Default::default()
        };
        let overlay = DevOverlay::new(config);
        assert!(overlay.is_hierarchy_visible());
        assert!(!overlay.is_memory_visible());
        assert!(overlay.memory.is_none());
    }

    #[test]
    fn test_memory_query_comes_from_config() {
        let mut config = OverlayConfig::default();
        config.memory.default_type_name = "Material".to_string();
        let mut overlay = DevOverlay::new(config);
        assert_eq!(overlay.memory().query().type_name, "Material");
        assert_eq!(overlay.memory().query().module_name, "Core");
    }

    #[test]
    fn test_toggle_twice_hides_again() {
        let mut overlay = DevOverlay::default();
        overlay.toggle_hierarchy();
        overlay.toggle_hierarchy();
        assert!(!overlay.is_hierarchy_visible());
    }

    #[test]
    fn test_hotkeys_toggle_windows() {
        let mut overlay = DevOverlay::default();
        let mut host = SandboxHost::new();
        let ctx = egui::Context::default();

        let _ = ctx.run(key_press(egui::Key::Num1), |ctx| overlay.show(ctx, &mut host));
        assert!(overlay.is_hierarchy_visible());
        assert!(!overlay.is_memory_visible());

        let _ = ctx.run(key_press(egui::Key::Backtick), |ctx| overlay.show(ctx, &mut host));
        assert!(overlay.is_memory_visible());

        let _ = ctx.run(key_press(egui::Key::Num1), |ctx| overlay.show(ctx, &mut host));
        assert!(!overlay.is_hierarchy_visible());
    }

    #[test]
    fn test_unknown_hotkey_is_ignored() {
        let mut config = OverlayConfig::default();
        config.hotkeys.hierarchy_toggle = "NotAKey".to_string();
        let mut overlay = DevOverlay::new(config);
        let mut host = SandboxHost::new();
        let ctx = egui::Context::default();

        let _ = ctx.run(key_press(egui::Key::Num1), |ctx| overlay.show(ctx, &mut host));
        assert!(!overlay.is_hierarchy_visible());
    }
}
