use std::path::Path;

use anyhow::{Context, Result};
use aurora_engine::background::raster;

/// Rasterizes the background at `time` and writes it as PNG.
pub fn write_png(path: &Path, width: u32, height: u32, time: f32) -> Result<()> {
    let width = width.max(1);
    let height = height.max(1);

    log::info!("rendering {width}x{height} snapshot at t={time}s");
    let pixels = raster::rasterize(width, height, time);

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)
        .with_context(|| format!("failed to write snapshot to {}", path.display()))?;

    log::info!("snapshot written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_readable_png() {
        let path = std::env::temp_dir().join(format!("aurora-snapshot-{}.png", std::process::id()));
        write_png(&path, 24, 12, 1.25).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (24, 12));
        assert_eq!(img.as_raw(), &raster::rasterize(24, 12, 1.25));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_reports_context() {
        let path = Path::new("/nonexistent-dir/aurora.png");
        let err = write_png(path, 2, 2, 0.0).unwrap_err();
        assert!(format!("{err:#}").contains("failed to write snapshot"));
    }
}
