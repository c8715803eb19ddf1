use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result, anyhow};
use log::warn;
use raylib::prelude::*;
use crate::constants::IMAGE_EXTENSIONS;

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

pub fn load_texture(rl: &mut RaylibHandle, thread: &RaylibThread, image_path: &Path) -> Result<Texture2D> {
    let path_str = image_path.to_str()
        .ok_or_else(|| anyhow!("Non UTF-8 image path {}", image_path.display()))?;
    let image = Image::load_image(path_str)
        .map_err(|e| anyhow!("Failed to load image data for {}: {}", image_path.display(), e))?;
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))
}

/// Loads every path that decodes, skipping (and logging) the rest.
pub fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread, paths: &[PathBuf]) -> Vec<Texture2D> {
    let mut textures = Vec::with_capacity(paths.len());
    for path in paths {
        match load_texture(rl, thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }
    textures
}
