use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};
use eframe::Frame;
use log::error;

use lib_pxa::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use lib_pxa::{Color, Editor, Tool};

use crate::filemanager::{self, ExportHandlingError};

pub const CELL_SIZE: f32 = 20.0; // in pixels

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn from_color32(color: Color32) -> Color {
    Color::new(color.r(), color.g(), color.b())
}

pub struct PixelArtEditor {
    editor: Editor,
    status: Option<String>,
}

impl PixelArtEditor {
    pub fn new() -> Self {
        Self {
            editor: Editor::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT),
            status: None,
        }
    }

    fn screen_to_grid(origin: Pos2, pos: Pos2, dims: (u32, u32)) -> Option<(u32, u32)> {
        let rel = pos - origin;
        let x = (rel.x / CELL_SIZE).floor();
        let y = (rel.y / CELL_SIZE).floor();

        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (x, y) = (x as u32, y as u32);
        if x >= dims.0 || y >= dims.1 {
            return None;
        }
        Some((x, y))
    }

    fn draw_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let dims = self.editor.grid().dimensions();
            let canvas_size = Vec2::new(dims.0 as f32 * CELL_SIZE, dims.1 as f32 * CELL_SIZE);

            let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
            let origin = response.rect.min;

            // Cell-by-cell fill with a fixed gray outline.
            for (y, row) in self.editor.grid().rows().enumerate() {
                for (x, &color) in row.iter().enumerate() {
                    let min = origin + Vec2::new(x as f32 * CELL_SIZE, y as f32 * CELL_SIZE);
                    let cell = Rect::from_min_size(min, Vec2::splat(CELL_SIZE));

                    painter.rect_filled(cell, 0.0, to_color32(color));
                    painter.rect_stroke(cell, 0.0, Stroke::new(0.5, Color32::GRAY));
                }
            }

            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((x, y)) = Self::screen_to_grid(origin, pos, dims) {
                    if response.drag_started() {
                        let _ = self.editor.on_pointer_down(x, y);
                    } else if response.dragged() {
                        let _ = self.editor.on_pointer_drag(x, y);
                    }
                }
            }
        });
    }

    fn draw_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("tool_panel")
            .resizable(false)
            .min_width(200.0)
            .max_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Tools");
                ui.add_space(8.0);

                let tool = self.editor.tool();
                if ui.selectable_label(tool == Tool::Pen, "✏ Pen").clicked() {
                    self.editor.use_pen();
                }
                if ui
                    .selectable_label(tool == Tool::Bucket, "🪣 Bucket")
                    .clicked()
                {
                    self.editor.use_bucket();
                }
                if ui
                    .selectable_label(tool == Tool::Dither, "🎲 Dither")
                    .clicked()
                {
                    self.editor.use_dither();
                }

                ui.add_space(8.0);
                ui.separator();
                ui.heading("Colors");
                ui.add_space(8.0);

                let mut primary = to_color32(self.editor.palette().get_primary());
                ui.horizontal(|ui| {
                    if ui.color_edit_button_srgba(&mut primary).changed() {
                        self.editor.choose_primary(from_color32(primary));
                    }
                    ui.label("Primary");
                });

                let mut secondary = to_color32(self.editor.palette().get_secondary());
                ui.horizontal(|ui| {
                    if ui.color_edit_button_srgba(&mut secondary).changed() {
                        self.editor.choose_secondary(from_color32(secondary));
                    }
                    ui.label("Secondary");
                });

                ui.add_space(4.0);
                ui.label("Drawing with:");
                let current = self.editor.palette().get_current_color();
                let (swatch, _) = ui.allocate_exact_size(
                    Vec2::new(ui.available_width(), 24.0),
                    egui::Sense::hover(),
                );
                ui.painter().rect_filled(swatch, 2.0, to_color32(current));
                ui.painter()
                    .rect_stroke(swatch, 2.0, Stroke::new(1.0, Color32::GRAY));
                ui.label(current.to_string());

                if ui.button("Swap Colors (Space)").clicked() {
                    self.editor.swap_colors();
                }

                ui.add_space(8.0);
                ui.separator();

                if ui.button("Save").clicked() {
                    self.handle_export();
                }

                if ui.button("Clear Canvas").clicked() {
                    self.editor.clear();
                }

                if let Some(status) = &self.status {
                    ui.add_space(8.0);
                    ui.label(status);
                }

                // Instructions
                ui.add_space(16.0);
                ui.label("Controls:");
                ui.label("• Left click / drag to draw");
                ui.label("• Space to swap colors");
            });
    }

    fn handle_export(&mut self) {
        match filemanager::export_grid(self.editor.grid()) {
            Ok(dir) => {
                self.status = Some(format!("Saved to {}", dir.display()));
            }
            Err(ExportHandlingError::DialogCanceled) => {
                // Dismissed dialog leaves everything unchanged.
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.status = Some(format!("Export failed: {}", e));
            }
        }
    }
}

impl eframe::App for PixelArtEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.editor.swap_colors();
        }

        self.draw_side_panel(ctx);
        self.draw_central_panel(ctx);
    }
}
