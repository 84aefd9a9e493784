use crate::{
    arc::Arc,
    glyph::{self, GlyphFont},
    gradient::ColorGradient,
    mask,
};
use anyhow::{Context, Result};
use image::{ImageOutputFormat, Rgba, RgbaImage};
use std::{fs::File, io::BufWriter, io::Write, path::Path};

/// Fixed look of the icon. Geometry is expressed as fractions of the icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub gradient: ColorGradient,
    pub corner_radius: f32,
    pub text: String,
    pub font_size: f32,
    pub text_center_y: f32,
    pub arc_left: f32,
    pub arc_right: f32,
    pub arc_center_y: f32,
    /// Half height of the arc's bounding box, in pixels regardless of size.
    pub arc_half_height: i32,
    pub arc_start_deg: f32,
    pub arc_end_deg: f32,
    pub arc_width: f32,
    pub ink: Rgba<u8>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            gradient: ColorGradient::new([102, 126, 234], [118, 75, 162]),
            corner_radius: 0.1875,
            text: "E".to_string(),
            font_size: 0.625,
            text_center_y: 0.65,
            arc_left: 0.25,
            arc_right: 0.75,
            arc_center_y: 0.82,
            arc_half_height: 10,
            arc_start_deg: 200.0,
            arc_end_deg: 340.0,
            arc_width: 0.03125,
            ink: Rgba([255, 255, 255, 255]),
        }
    }
}

impl IconStyle {
    /// Pixel size the glyph font is loaded at for a `size` icon.
    pub fn font_px(&self, size: u32) -> f32 {
        scaled(size, self.font_size) as f32
    }

    pub fn corner_radius_px(&self, size: u32) -> u32 {
        scaled(size, self.corner_radius).max(0) as u32
    }

    /// Underline arc for a `size` icon. The stroke is never thinner than a pixel.
    pub fn arc(&self, size: u32) -> Arc {
        let center_y = scaled(size, self.arc_center_y);
        Arc {
            left: scaled(size, self.arc_left),
            top: center_y - self.arc_half_height,
            right: scaled(size, self.arc_right),
            bottom: center_y + self.arc_half_height,
            start_deg: self.arc_start_deg,
            end_deg: self.arc_end_deg,
            width: scaled(size, self.arc_width).max(1) as u32,
        }
    }
}

fn scaled(size: u32, fraction: f32) -> i32 {
    (size as f32 * fraction) as i32
}

/// Render a `size × size` icon in memory.
pub fn render_icon(size: u32, style: &IconStyle, font: &GlyphFont) -> Result<RgbaImage> {
    if size == 0 {
        anyhow::bail!("Invalid icon size: {size}");
    }

    let mut canvas = RgbaImage::new(size, size);
    style.gradient.fill(&mut canvas);

    let mask = mask::rounded_mask(size, style.corner_radius_px(size));
    mask::apply_alpha(&mut canvas, &mask);

    if let Some(bounds) = font.measure(&style.text) {
        let x = (size as i32 - bounds.width()).div_euclid(2);
        let y = (size as f32 * style.text_center_y - bounds.height().div_euclid(2) as f32) as i32;
        font.draw(&mut canvas, &style.text, x, y, style.ink);
    }

    style.arc(size).draw(&mut canvas, style.ink);

    Ok(canvas)
}

/// Render a `size` icon with the default style and the preferred system
/// font, and write it as a PNG to `path`.
pub fn render(size: u32, path: &Path) -> Result<()> {
    let style = IconStyle::default();
    let font = glyph::load_preferred_font(style.font_px(size));
    let icon = render_icon(size, &style, &font)?;
    save_png(&icon, path)
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    image
        .write_to(&mut out, ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    out.flush().context("Failed to write PNG")?;
    Ok(())
}
