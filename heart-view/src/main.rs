//! Application entry point for the beating heart viewer.
//!
//! This binary parses command-line settings, sets up logging and
//! eframe/egui, and delegates drawing and frame pacing to [`Viewer`]
//! from the `viewer` module.

mod viewer;

use clap::Parser;
use heart_core::Config;
use rand::Rng;
use viewer::{Viewer, ViewerSettings};

/// Animated particle heart.
#[derive(Parser, Debug)]
#[command(name = "beating-heart", version)]
struct Args {
    /// Frames in one precomputed beat cycle
    #[arg(long, default_value_t = 20)]
    frames: usize,

    /// Playback rate in frames per second
    #[arg(long, default_value_t = 20.0)]
    fps: f64,

    /// Seed for point generation; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 640.0)]
    width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Draw every point in the base color instead of distance lighting
    #[arg(long)]
    flat: bool,

    /// Snap heart curve samples to whole pixels
    #[arg(long)]
    snap: bool,
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` once the window is closed.
/// - `Err` if the settings are invalid or eframe fails to create the
///   native window or event loop.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "fps must be positive, got {}",
        args.fps
    );

    let cfg = Config {
        canvas_width: args.width,
        canvas_height: args.height,
        snap_curve_to_pixels: args.snap,
        ..Config::default()
    };
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let settings = ViewerSettings {
        frame_count: args.frames,
        fps: args.fps,
        lit: !args.flat,
    };

    let viewer = Viewer::new(settings, cfg, seed)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([args.width + 240.0, args.height + 60.0])
            .with_title("Beating Heart"),
        ..Default::default()
    };

    eframe::run_native(
        "Beating Heart",
        options,
        Box::new(|_cc| Ok(Box::new(viewer))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}
