use crate::render;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Icons shipped with the extension: pixel size and file name.
pub const ICONS: [(u32, &str); 3] = [(16, "icon16.png"), (48, "icon48.png"), (128, "icon128.png")];

/// The `icons/` directory next to this crate's manifest.
pub fn icons_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("icons")
}

/// Render every icon in [`ICONS`] into `out_dir`, creating it if needed.
pub fn generate_icons(out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).context("Can't create output directory")?;

    let mut written = Vec::with_capacity(ICONS.len());
    for (size, filename) in ICONS {
        let path = out_dir.join(filename);
        render::render(size, &path)
            .with_context(|| format!("Failed to generate {filename}"))?;
        println!("Created {}", path.display());
        written.push(path);
    }

    println!("All PNG icons created successfully!");
    Ok(written)
}
