//! Vector versions of the icons, kept as a fallback for hosts that accept SVG.

use crate::render::IconStyle;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// SVG markup for a `size` icon drawn with `style`.
///
/// The gradient runs diagonally and the underline is a quadratic curve, so
/// the result only approximates the raster icon.
pub fn backup_svg(size: u32, style: &IconStyle) -> String {
    let s = size as f32;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
  <defs>
    <linearGradient id="grad{size}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{start};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{end};stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="{size}" height="{size}" fill="url(#grad{size})" rx="{rx}"/>
  <text x="{text_x}" y="{text_y}" font-family="Arial, sans-serif" font-size="{font_size}" font-weight="bold" text-anchor="middle" fill="white">{text}</text>
  <path d="M {x0} {y0} Q {qx} {qy} {x1} {y0}" stroke="white" stroke-width="{stroke}" fill="none" stroke-linecap="round"/>
</svg>
"#,
        start = style.gradient.start_hex(),
        end = style.gradient.end_hex(),
        rx = s * style.corner_radius,
        text_x = s / 2.0,
        text_y = s * 0.68,
        font_size = s * style.font_size,
        text = style.text,
        x0 = s * style.arc_left,
        y0 = s * style.arc_center_y,
        qx = s * 0.5,
        qy = s * 0.74,
        x1 = s * style.arc_right,
        stroke = s * style.arc_width,
    )
}

/// Write `icon{size}-backup.svg` for each size into `out_dir`.
pub fn write_backups(out_dir: &Path, sizes: &[u32]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).context("Can't create output directory")?;

    let style = IconStyle::default();
    sizes
        .iter()
        .map(|&size| {
            let path = out_dir.join(format!("icon{size}-backup.svg"));
            std::fs::write(&path, backup_svg(size, &style))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(path)
        })
        .collect()
}
