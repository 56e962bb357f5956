//! Memory lister window

use egui::{Color32, Ui};

use super::view::{PageSize, SizeUnit, SortDirection, SortKey, group_thousands};
use super::MemoryObjectLister;
use crate::host::{MemoryInstrumentation, ObjectReflection};
use crate::widgets::boxed_row;

const PREVIOUS_PAGE: &str = "\u{25C0}";
const NEXT_PAGE: &str = "\u{25B6}";

/// Page button fill when there is no page to move to
pub(super) const BOUNDARY_FILL: Color32 = Color32::from_rgb(255, 128, 128);
pub(super) const NO_NAME_COLOR: Color32 = Color32::from_rgb(255, 128, 0);
pub(super) const FLAGGED_COLOR: Color32 = Color32::from_rgb(255, 255, 0);

impl MemoryObjectLister {
    /// Draw one frame; the Check button refreshes from `reflection` and `memory`
    pub fn render<R, M>(&mut self, ctx: &egui::Context, reflection: &R, memory: &M)
    where
        R: ObjectReflection + ?Sized,
        M: MemoryInstrumentation + ?Sized,
    {
        if !self.show {
            return;
        }

        egui::Window::new("Memory")
            .id(egui::Id::new("devscope_memory_window"))
            .default_pos([360.0, 10.0])
            .default_size([520.0, 480.0])
            .resizable(true)
            .collapsible(true)
            .show(ctx, |ui| {
                self.query_row(ui, reflection, memory);

                if self.records.is_empty() {
                    self.reset_view_if_empty();
                    return;
                }

                self.summary_row(ui);
                self.controls_row(ui);
                self.record_rows(ui);
            });
    }

    fn query_row<R, M>(&mut self, ui: &mut Ui, reflection: &R, memory: &M)
    where
        R: ObjectReflection + ?Sized,
        M: MemoryInstrumentation + ?Sized,
    {
        boxed_row(ui, |ui| {
            ui.text_edit_singleline(&mut self.query.type_name);
            ui.text_edit_singleline(&mut self.query.module_name);
            if ui.button("Check").clicked()
                && let Err(e) = self.refresh(reflection, memory)
            {
                tracing::debug!("memory: {}", e);
            }
        });
    }

    fn summary_row(&mut self, ui: &mut Ui) {
        boxed_row(ui, |ui| {
            ui.label(format!(
                "Count: {}",
                group_thousands(&self.records.len().to_string())
            ));
            ui.label(format!("Total: {}", self.view.unit.format(self.total_bytes)));

            for unit in SizeUnit::ALL {
                if ui
                    .selectable_label(self.view.unit == unit, unit.label())
                    .clicked()
                {
                    self.set_unit(unit);
                }
            }
        });
    }

    fn controls_row(&mut self, ui: &mut Ui) {
        let count = self.records.len();

        boxed_row(ui, |ui| {
            for page_size in PageSize::ALL {
                if ui
                    .selectable_label(self.view.page_size == page_size, page_size.label())
                    .clicked()
                {
                    self.set_page_size(page_size);
                }
            }

            self.view.clamp_page(count);
            boxed_row(ui, |ui| {
                if ui
                    .add(page_button(PREVIOUS_PAGE, self.view.is_first_page()))
                    .clicked()
                {
                    self.previous_page();
                }

                ui.label((self.view.page_index + 1).to_string());
                ui.label("/");
                ui.label(self.total_pages().to_string());

                if ui
                    .add(page_button(NEXT_PAGE, self.view.is_last_page(count)))
                    .clicked()
                {
                    self.next_page();
                }
            });

            for key in SortKey::ALL {
                if ui
                    .selectable_label(self.view.sort_key == key, key.label())
                    .clicked()
                    && self.view.sort_key != key
                {
                    self.set_sort_key(key);
                }
            }

            for direction in SortDirection::ALL {
                if ui
                    .selectable_label(self.view.sort_direction == direction, direction.glyph())
                    .clicked()
                    && self.view.sort_direction != direction
                {
                    self.set_sort_direction(direction);
                }
            }
        });
    }

    fn record_rows(&mut self, ui: &mut Ui) {
        let unit = self.view.unit;

        let output = egui::ScrollArea::both()
            .id_salt("devscope_memory_rows")
            .auto_shrink([false, false])
            .scroll_offset(self.view.scroll_offset)
            .show(ui, |ui| {
                for (index, record) in self.visible_records() {
                    boxed_row(ui, |ui| {
                        ui.label(format!("{}.", index + 1)).on_hover_text(format!(
                            "Discovered #{}",
                            record.discovery_index + 1
                        ));
                        ui.label(&record.type_name);
                        if record.is_unnamed() {
                            ui.colored_label(NO_NAME_COLOR, "<No Name>");
                        } else {
                            ui.label(&record.display_name);
                        }
                        ui.label(unit.format(record.retained_bytes));
                        if let Some(annotation) = &record.annotation {
                            if record.annotation_flagged {
                                ui.colored_label(FLAGGED_COLOR, annotation);
                            } else {
                                ui.label(annotation);
                            }
                        }
                    });
                }
            });

        self.view.scroll_offset = output.state.offset;
    }
}

/// Page button, tinted when it sits at a boundary
fn page_button(glyph: &str, at_boundary: bool) -> egui::Button<'_> {
    let button = egui::Button::new(glyph);
    if at_boundary {
        button.fill(BOUNDARY_FILL)
    } else {
        button
    }
}
