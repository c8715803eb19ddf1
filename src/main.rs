use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;
use slidenav::{SlideController, Stage};

mod constants;
mod texture_loader;
mod viewer;

use crate::constants::*;
use crate::texture_loader::{load_sorted_image_paths, load_textures};
use crate::viewer::{draw_stage, poll_navigation};

/// Browse the images of a directory one at a time.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the slides (png, jpg, jpeg, bmp, gif)
    image_directory: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// 1-based slide to open on; out of range values are clamped
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    start: i64,
}

fn main() -> Result<()> {
    // Set RUST_LOG=debug to trace every render
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    info!("Input path: {}", args.image_directory.display());

    let image_paths = load_sorted_image_paths(&args.image_directory)
        .with_context(|| format!("Error loading images from '{}'", args.image_directory.display()))?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut stage = Stage::new().with_affordances();
    for texture in load_textures(&mut rl, &thread, &image_paths) {
        stage.push_slide(texture);
    }
    info!("Loaded {} of {} images", stage.len(), image_paths.len());

    let mut controller = SlideController::new(stage);
    controller.render_at(args.start)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        if let Some(navigation) = poll_navigation(&rl, controller.surface()) {
            controller.navigate(navigation)
                .with_context(|| format!("Navigation {:?} failed", navigation))?;
        }

        let mut d = rl.begin_drawing(&thread);
        draw_stage(&mut d, controller.surface());
    }

    Ok(())
}
