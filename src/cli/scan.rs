//! Batch mode: scan a directory of label photographs, extract each label,
//! and write one calendar file per schedulable medication.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::core::AppConfig;
use crate::gemini::extract_label;
use crate::schedule::derive_schedule;

/// Map a file extension to the declared image content type. Files with any
/// other extension are skipped by the scan.
fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// Collect image files in the directory, sorted for stable output order.
fn collect_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && mime_for_path(path).is_some())
        .collect();
    paths.sort();
    Ok(paths)
}

pub async fn run(dir: &str, out: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::default();
    scan_directory(&config, Path::new(dir), out.map(Path::new)).await?;
    Ok(())
}

/// Scan `dir` for label images, extract each one, and write a `.ics` file
/// per schedulable medication into `out` (the scan directory when unset).
/// A file that fails extraction or has no recognizable frequency is logged
/// and skipped. Returns the number of calendars written.
pub async fn scan_directory(config: &AppConfig, dir: &Path, out: Option<&Path>) -> Result<usize> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        bail!("GEMINI_API_KEY is missing. Set the environment variable.");
    };

    let images = collect_images(dir)?;
    if images.is_empty() {
        tracing::warn!("No image files found in {}", dir.display());
        return Ok(0);
    }
    tracing::info!("Found {} image file(s) in {}", images.len(), dir.display());

    let out_dir = out.unwrap_or(dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = 0;
    for path in images {
        let mime_type = mime_for_path(&path).expect("collected files have a known extension");
        let image_bytes =
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;

        let extraction = match extract_label(
            &config.gemini_api_url,
            &api_key,
            &config.gemini_model,
            &image_bytes,
            mime_type,
        )
        .await
        {
            Ok(extraction) => extraction,
            Err(err) => {
                tracing::error!("Failed to analyze {}: {}", path.display(), err);
                continue;
            }
        };

        let now_local = chrono::Local::now().fixed_offset();
        let derived = derive_schedule(&extraction, now_local, chrono::Utc::now());

        match derived.calendar {
            Some(calendar) => {
                let stem = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("schedule");
                let out_path = out_dir.join(format!("{}.ics", stem));
                fs::write(&out_path, calendar)
                    .with_context(|| format!("Failed to write {}", out_path.display()))?;
                tracing::info!(
                    "{}: {} -> {}",
                    extraction.medication_name,
                    derived.status,
                    out_path.display()
                );
                written += 1;
            }
            None => {
                tracing::warn!(
                    "{} ({}): {}",
                    extraction.medication_name,
                    path.display(),
                    derived.status
                );
            }
        }
    }

    Ok(written)
}
