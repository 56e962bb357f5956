//! Layout helpers shared by the overlay panels
//!
//! Every region is a closure scope, so frames, layouts and style overrides
//! close on every exit path.

use egui::{Color32, InnerResponse, Ui};

/// Text color for inactive nodes and disabled components
pub(crate) const DIMMED: Color32 = Color32::GRAY;

/// Framed horizontal row
pub(crate) fn boxed_row<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let InnerResponse { inner, .. } = ui.group(|ui| ui.horizontal(add_contents).inner);
    inner
}

/// Framed vertical block
pub(crate) fn boxed_column<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let InnerResponse { inner, .. } = ui.group(|ui| ui.vertical(add_contents).inner);
    inner
}

/// Run `add_contents` with text dimmed when `dim` is set
pub(crate) fn dimmed<R>(ui: &mut Ui, dim: bool, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.scope(|ui| {
        if dim {
            ui.visuals_mut().override_text_color = Some(DIMMED);
        }
        add_contents(ui)
    })
    .inner
}
