//! The interactive painting application.
//!
//! Single-threaded and event-driven: every mutation of the working buffer
//! happens inside `update`, triggered by pointer input on the canvas, the
//! toolbar, or a keyboard shortcut.

use std::path::PathBuf;

use eframe::egui;
use egui::{Key, KeyboardShortcut, Modifiers, Pos2, Rect};
use image::Rgb;

use crate::canvas::PaintCanvas;
use crate::components::dialogs::MessageDialog;
use crate::components::history::SnapshotHistory;
use crate::components::tools::{self, BRUSH_SIZE_RANGE, Tool, ToolState};
use crate::io::{self, LoadedImage};
use crate::{log_err, log_info};

// Keyboard shortcuts. `consume_shortcut` matches modifiers exactly, so the
// Ctrl+Shift+S binding never falls through to Ctrl+S; the save-copy check
// still runs first to keep the intent obvious.
const SHORTCUT_SAVE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
const SHORTCUT_SAVE_COPY: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::S);
const SHORTCUT_UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const SHORTCUT_REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct PainterApp {
    /// Path of the file being edited; save-in-place overwrites it.
    image_path: PathBuf,
    canvas: PaintCanvas,
    tools: ToolState,
    history: SnapshotHistory,
    message: MessageDialog,

    /// Dimensions of the file on disk; saves restore these.
    original_size: (u32, u32),
    /// Downscale applied for display (`1.0` = native size).
    scale_ratio: f64,

    /// One-line feedback for the status bar.
    last_action: String,
}

impl PainterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, loaded: LoadedImage, path: PathBuf) -> Self {
        Self {
            image_path: path,
            canvas: PaintCanvas::new(loaded.working),
            tools: ToolState::default(),
            history: SnapshotHistory::new(),
            message: MessageDialog::default(),
            original_size: loaded.original_size,
            scale_ratio: loaded.scale_ratio,
            last_action: String::new(),
        }
    }

    // ------------------------------------------------------------------
    // Keyboard shortcuts
    // ------------------------------------------------------------------

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&SHORTCUT_SAVE_COPY)) {
            self.save_as_copy();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SHORTCUT_SAVE)) {
            self.save_in_place();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SHORTCUT_UNDO)) {
            self.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SHORTCUT_REDO)) {
            self.redo();
        }
    }

    // ------------------------------------------------------------------
    // Canvas input
    // ------------------------------------------------------------------

    fn handle_canvas_input(&mut self, response: &egui::Response, image_rect: Rect) {
        match self.tools.active_tool {
            Tool::Brush => {
                if response.drag_started()
                    && let Some(pos) = response.interact_pointer_pos()
                    && image_rect.contains(pos)
                {
                    // Snapshot before the first stamp so one undo removes
                    // the whole stroke
                    self.history.push(self.canvas.snapshot());
                    self.tools.last_pos = Some(pos);
                }
                if response.dragged()
                    && let Some(last) = self.tools.last_pos
                    && let Some(pos) = response.interact_pointer_pos()
                {
                    // The drag may leave the image area; stamps clip there
                    let from = PaintCanvas::buffer_pos(image_rect, last);
                    let to = PaintCanvas::buffer_pos(image_rect, pos);
                    self.canvas
                        .stroke_segment(from, to, self.tools.color_rgb(), self.tools.brush_size);
                    self.tools.last_pos = Some(pos);
                }
                if response.drag_released() && self.tools.last_pos.take().is_some() {
                    self.last_action = format!("Brush stroke ({} px)", self.tools.brush_size);
                }
            }
            Tool::FloodFill => {
                if response.drag_started()
                    && let Some(pos) = response.interact_pointer_pos()
                    && image_rect.contains(pos)
                {
                    self.flood_fill_at(image_rect, pos);
                }
            }
        }
    }

    fn flood_fill_at(&mut self, image_rect: Rect, pos: Pos2) {
        let (x, y) = self.canvas.pixel_at(image_rect, pos);
        let replacement = self.tools.color_rgb();
        let seed = self.canvas.pixel(x, y);
        log_info!("flood fill seed ({}, {}), clicked color {:?}", x, y, seed.0);

        if seed == Rgb([0, 0, 0]) {
            self.message
                .info("Flood Fill", "Cannot flood fill on black pixels.");
            return;
        }
        if seed == replacement {
            self.message.info(
                "Flood Fill",
                "Selected color is the same as the target color. No fill performed.",
            );
            return;
        }

        self.history.push(self.canvas.snapshot());
        let filled = tools::flood_fill(self.canvas.image_mut(), x, y, replacement);
        self.last_action = format!("Filled {} px at ({}, {})", filled, x, y);
        log_info!(
            "flood filled {} px at ({}, {}) with {:?}",
            filled,
            x,
            y,
            replacement.0
        );
    }

    // ------------------------------------------------------------------
    // Save / undo / redo
    // ------------------------------------------------------------------

    fn save_in_place(&mut self) {
        match io::save_full_size(
            self.canvas.image(),
            self.original_size,
            self.scale_ratio,
            &self.image_path,
        ) {
            Ok(()) => {
                log_info!("saved over {}", self.image_path.display());
                self.last_action = "Saved".to_string();
                self.message.info("Save", "Image saved successfully!");
            }
            Err(e) => {
                log_err!("save failed: {}", e);
                self.message
                    .error("Save Error", format!("Failed to save image: {}", e));
            }
        }
    }

    fn save_as_copy(&mut self) {
        let dest = io::edited_copy_path(&self.image_path);
        match io::save_full_size(
            self.canvas.image(),
            self.original_size,
            self.scale_ratio,
            &dest,
        ) {
            Ok(()) => {
                let name = dest
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("copy")
                    .to_string();
                log_info!("saved copy to {}", dest.display());
                self.last_action = format!("Saved copy: {}", name);
                self.message
                    .info("Save As", format!("Image saved as {}!", name));
            }
            Err(e) => {
                log_err!("save copy failed: {}", e);
                self.message
                    .error("Save Error", format!("Failed to save image: {}", e));
            }
        }
    }

    fn undo(&mut self) {
        match self.history.undo(self.canvas.image()) {
            Some(snapshot) => {
                self.canvas.restore(snapshot);
                self.last_action = format!("Undo ({} left)", self.history.undo_count());
                log_info!("undo performed, {} snapshots left", self.history.undo_count());
            }
            None => {
                self.message.info("Undo", "No more adjustments to undo.");
            }
        }
    }

    fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo(self.canvas.image()) {
            self.canvas.restore(snapshot);
            self.last_action = "Redo".to_string();
            log_info!("redo performed, {} redoable left", self.history.redo_count());
        }
    }

    // ------------------------------------------------------------------
    // Panels
    // ------------------------------------------------------------------

    fn show_toolbar(&mut self, ctx: &egui::Context, enabled: bool) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Color:");
                    ui.color_edit_button_srgba(&mut self.tools.color);

                    ui.separator();

                    for &tool in Tool::all() {
                        let response =
                            ui.selectable_value(&mut self.tools.active_tool, tool, tool.label());
                        if response.clicked() {
                            self.tools.last_pos = None;
                            log_info!("{} tool selected", tool.label());
                        }
                    }

                    ui.separator();

                    ui.label("Brush size:");
                    ui.add(
                        egui::Slider::new(&mut self.tools.brush_size, BRUSH_SIZE_RANGE)
                            .suffix(" px"),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button("Save")
                            .on_hover_text("Overwrite the original file (Ctrl+S)")
                            .clicked()
                        {
                            self.save_in_place();
                        }
                        if ui
                            .button("Save a Copy")
                            .on_hover_text("Write a sibling \"-edited\" file (Ctrl+Shift+S)")
                            .clicked()
                        {
                            self.save_as_copy();
                        }
                    });
                });
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let name = self
                    .image_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("?");
                ui.label(format!(
                    "{} | {}×{}",
                    name,
                    self.canvas.width(),
                    self.canvas.height()
                ));

                if self.scale_ratio < 1.0 {
                    ui.separator();
                    ui.weak(format!(
                        "view {:.0}% of {}×{}",
                        self.scale_ratio * 100.0,
                        self.original_size.0,
                        self.original_size.1
                    ));
                }

                ui.separator();
                ui.label(format!(
                    "Undo: {} | Redo: {}",
                    self.history.undo_count(),
                    self.history.redo_count()
                ));
                ui.weak(format!(
                    "({:.2} MB)",
                    self.history.memory_usage() as f64 / (1024.0 * 1024.0)
                ));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.last_action.as_str());
                });
            });
        });
    }
}

impl eframe::App for PainterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.message.is_open();

        if !modal_open {
            self.handle_shortcuts(ctx);
        }

        self.show_toolbar(ctx, !modal_open);
        self.show_status_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame {
                fill: egui::Color32::from_gray(30),
                ..Default::default()
            })
            .show(ctx, |ui| {
                let (response, image_rect) = self.canvas.show(ui);
                if !modal_open {
                    self.handle_canvas_input(&response, image_rect);
                }
            });

        self.message.show(ctx);
    }
}
