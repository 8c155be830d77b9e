//! Directory scanning and dimension probing.
//!
//! Failures here never reach the game. A missing directory yields an empty
//! pool and an unreadable header yields a 0x0 descriptor.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PoolError;
use super::image::{ImageDescriptor, ImagePool};
use super::settings::LoaderSettings;

/// File extensions accepted as photos (compared case-insensitively).
pub const IMAGE_EXTENSIONS: [&str; 6] = ["avif", "jpg", "jpeg", "png", "webp", "gif"];

/// Public URL prefix for a directory under the web root.
///
/// A leading `public/` is dropped and backslashes become slashes:
/// `public/game-photos` maps to `/game-photos`.
#[must_use]
pub fn public_url_base(dir: &Path) -> String {
    let raw = dir.to_string_lossy();
    let stripped = raw
        .strip_prefix("public/")
        .or_else(|| raw.strip_prefix("public\\"))
        .unwrap_or(&raw);
    format!("/{}", stripped.replace('\\', "/"))
}

/// Whether a file name carries one of the accepted image extensions.
#[must_use]
pub fn is_image_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Read pixel dimensions from an image header.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), PoolError> {
    let size = imagesize::size(path).map_err(|err| PoolError::probe(path, err))?;
    let width = u32::try_from(size.width).unwrap_or(0);
    let height = u32::try_from(size.height).unwrap_or(0);
    Ok((width, height))
}

/// List the photos in `dir`, sorted by file name.
///
/// Each descriptor's URL is `{url_base}/{file_name}`. Dimension probe
/// failures are logged and recorded as 0x0.
pub fn scan_directory(dir: &Path, url_base: &str) -> Result<Vec<ImageDescriptor>, PoolError> {
    let entries = fs::read_dir(dir).map_err(|err| PoolError::read_dir(dir, err))?;

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| PoolError::read_dir(dir, err))?;
        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("skipping non UTF-8 file name in {}", dir.display());
            continue;
        };
        if !is_image_file(&name) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        files.push((name, path));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let base = url_base.trim_end_matches('/');
    let descriptors = files
        .into_iter()
        .map(|(name, path)| {
            let (width, height) = probe_dimensions(&path).unwrap_or_else(|err| {
                log::warn!("{err}");
                (0, 0)
            });
            ImageDescriptor::new(format!("{base}/{name}"), width, height)
        })
        .collect::<Vec<_>>();

    log::debug!("found {} photos in {}", descriptors.len(), dir.display());
    Ok(descriptors)
}

/// Build the session's image pool from the configured directory.
///
/// Never fails: a directory that cannot be read produces an empty pool.
#[must_use]
pub fn load_pool(settings: &LoaderSettings) -> ImagePool {
    let base = public_url_base(&settings.photos_dir);
    match scan_directory(&settings.photos_dir, &base) {
        Ok(descriptors) => ImagePool::new(descriptors),
        Err(err) => {
            log::error!("error reading game photos directory: {err}");
            ImagePool::empty()
        }
    }
}
