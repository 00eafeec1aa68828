//! Beating heart viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a precomputed
//! [`HeartField`] and implements [`eframe::App`] to play its frames back
//! at a steady rate. The viewer is the drawing and timing side of the
//! animation: every tick it asks the field for the next frame and paints
//! each point as a filled square.

use eframe::App;
use glam::Vec2;
use heart_core::{Config, FrameIndex, HeartField, Rgb};
use log::{error, info};
use rand::Rng;

/// Playback settings that are not part of point generation.
#[derive(Clone, Copy, Debug)]
pub struct ViewerSettings {
    /// Frames in one precomputed cycle.
    pub frame_count: usize,
    /// Target playback rate.
    pub fps: f64,
    /// Draw distance lighting instead of the flat base color.
    pub lit: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            frame_count: 20,
            fps: 20.0,
            lit: true,
        }
    }
}

/// Main application state for the viewer.
///
/// [`Viewer`] glues together:
/// - The animation core: [`HeartField`] and the [`Config`] it was built from.
/// - Playback state (current frame, pacing, run/pause).
/// - Camera state (zoom, pan) and eframe/egui callbacks.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions.
/// 2. If `running` is `true` and a frame interval has passed, call
///    [`Viewer::step_once`].
/// 3. Draw the current frame.
///
/// ### Fields
/// - `field` - Precomputed animation being played.
/// - `cfg` - Generation settings; edited in the side panel and applied
///   on rebuild.
/// - `seed` - Seed `field` was generated from.
/// - `settings` - Frame count, fps and lighting.
///
/// - `rng` - Source of fresh seeds on reset.
///
/// - `frame` - Playback index; wrapped by the field on lookup.
/// - `running` - Whether playback is auto-advancing.
/// - `zoom` - Canvas-to-screen scale.
/// - `pan` - Screen-space pan offset in pixels.
/// - `hover` - Canvas position under the pointer, shown in the status bar.
///
/// - `last_step_time` - Time stamp of the last step (egui time).
/// - `last_step_dt` - Actual time delta between the last two steps.
pub struct Viewer {
    field: HeartField,
    cfg: Config,
    seed: u64,
    settings: ViewerSettings,

    rng: rand::rngs::ThreadRng,

    frame: FrameIndex,
    running: bool,
    zoom: f32,
    pan: egui::Vec2,
    hover: Option<Vec2>,

    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Builds the field and a viewer that starts playing at frame 1.
    ///
    /// ### Errors
    /// Any [`heart_core::Error`] from building the field.
    pub fn new(settings: ViewerSettings, cfg: Config, seed: u64) -> heart_core::Result<Self> {
        let field = HeartField::seeded(settings.frame_count, &cfg, seed)?;
        info!("seed {seed}: {:?}", field.stats());

        Ok(Self {
            field,
            cfg,
            seed,
            settings,
            rng: rand::rng(),
            frame: 1,
            running: true,
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
            hover: None,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        })
    }

    /// Regenerates the field from the current settings with a new seed.
    ///
    /// Playback restarts at frame 1 and is paused. If the settings are
    /// rejected the old field is kept.
    fn reset(&mut self) {
        let seed = self.rng.random();
        self.rebuild(seed);
    }

    fn rebuild(&mut self, seed: u64) {
        match HeartField::seeded(self.settings.frame_count, &self.cfg, seed) {
            Ok(field) => {
                info!("seed {seed}: {:?}", field.stats());
                self.field = field;
                self.seed = seed;
                self.frame = 1;
                self.running = false;
            }
            Err(e) => error!("rebuild failed: {e}"),
        }
    }

    /// Advances playback by one frame.
    fn step_once(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Seconds between automatic steps.
    fn step_interval(&self) -> f64 {
        1.0 / self.settings.fps
    }

    /// Converts a canvas position to screen-space.
    ///
    /// The canvas center is placed at the center of `rect`, scaled by
    /// `zoom` and offset by `pan`. Both spaces are y-down.
    fn canvas_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let c = self.cfg.center();
        let center = rect.center();
        egui::pos2(
            center.x + (p.x - c.x) * self.zoom + self.pan.x,
            center.y + (p.y - c.y) * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to canvas space.
    ///
    /// Inverse of [`Viewer::canvas_to_screen`] up to rounding.
    fn screen_to_canvas(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let c = self.cfg.center();
        let center = rect.center();
        Vec2::new(
            (p.x - center.x - self.pan.x) / self.zoom + c.x,
            (p.y - center.y - self.pan.y) / self.zoom + c.y,
        )
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.settings.fps)
                        .prefix("fps = ")
                        .range(1.0..=60.0)
                        .speed(0.5),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.checkbox(&mut self.settings.lit, "Lighting");

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.25..=4.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (frame, point count, seed, timing).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval()));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("seed = {}", self.seed));
                ui.label(format!("points = {}", self.field.render(self.frame).len()));
                ui.label(format!(
                    "frame = {} ({}/{})",
                    self.frame,
                    self.frame % self.field.frame_count(),
                    self.field.frame_count()
                ));
                if let Some(p) = self.hover {
                    ui.separator();
                    ui.label(format!("cursor = ({:.0}, {:.0})", p.x, p.y));
                }
            });
        });
    }

    /// Builds the right-hand panel for generation settings.
    ///
    /// Changes take effect on "Rebuild", which keeps the current seed.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Cycle");
                Self::labeled_drag_usize(
                    ui,
                    "frames:",
                    &mut self.settings.frame_count,
                    1..=120,
                    1.0,
                );

                ui.separator();
                ui.label("Sampling");
                Self::labeled_drag_usize(
                    ui,
                    "edge_samples:",
                    &mut self.cfg.edge_samples,
                    1..=10_000,
                    10.0,
                );
                Self::labeled_drag_usize(
                    ui,
                    "diffusion_samples:",
                    &mut self.cfg.diffusion_samples,
                    0..=20_000,
                    10.0,
                );
                Self::labeled_drag_usize(
                    ui,
                    "inner_dense_trials:",
                    &mut self.cfg.inner_dense_trials,
                    0..=100_000,
                    100.0,
                );
                Self::labeled_drag_usize(
                    ui,
                    "inner_sparse_trials:",
                    &mut self.cfg.inner_sparse_trials,
                    0..=20_000,
                    10.0,
                );

                ui.separator();
                ui.label("Shape");
                Self::labeled_drag_f32(
                    ui,
                    "enlargement:",
                    &mut self.cfg.enlargement,
                    1.0..=20.0,
                    0.1,
                );
                Self::labeled_drag_f32(
                    ui,
                    "halo_enlargement:",
                    &mut self.cfg.halo_enlargement,
                    1.0..=20.0,
                    0.1,
                );
                ui.checkbox(&mut self.cfg.snap_curve_to_pixels, "snap to pixels");

                ui.separator();
                if ui.button("Rebuild").clicked() {
                    self.rebuild(self.seed);
                }
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config {
                        canvas_width: self.cfg.canvas_width,
                        canvas_height: self.cfg.canvas_height,
                        ..Config::default()
                    };
                }
            });
    }

    /// Builds the central panel where the current frame is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // Pan with drag.
                if response.dragged() {
                    self.pan += response.drag_delta();
                }

                for p in self.field.render(self.frame) {
                    let min = self.canvas_to_screen(p.pos, rect);
                    let side = f32::from(p.size) * self.zoom;
                    let color = to_color32(p.fill(self.cfg.base_color, self.settings.lit));
                    painter.rect_filled(
                        egui::Rect::from_min_size(min, egui::vec2(side, side)),
                        0.0,
                        color,
                    );
                }

                // Auto-advance at the target rate.
                if self.running {
                    let now = ctx.input(|i| i.time);
                    let elapsed = now - self.last_step_time;
                    if elapsed >= self.step_interval() {
                        if self.last_step_time > 0.0 {
                            self.last_step_dt = elapsed;
                        }
                        self.step_once();
                        self.last_step_time = now;
                    }

                    ctx.request_repaint();
                }

                self.hover = response.hover_pos().map(|p| self.screen_to_canvas(p, rect));
            });
    }
}

fn to_color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
