use anyhow::{Context, Result};
use image::io::Reader as ImageReader;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icons/icon128.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .decode()
        .context("Failed to decode image")?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);
    let corners = [(0, 0), (last_x, 0), (0, last_y), (last_x, last_y)];

    println!("\nCorner alpha:");
    let mut transparent_corners = 0;
    for (x, y) in corners {
        let alpha = rgba_img.get_pixel(x, y)[3];
        println!("  ({}, {}): {}", x, y, alpha);
        if alpha == 0 {
            transparent_corners += 1;
        }
    }

    let center = rgba_img.get_pixel(width / 2, height / 2);
    println!(
        "\nCenter pixel (x={}, y={}):\n  RGBA: [{}, {}, {}, {}]",
        width / 2,
        height / 2,
        center[0],
        center[1],
        center[2],
        center[3]
    );

    let top = rgba_img.get_pixel(width / 2, 0);
    println!("Top row color: [{}, {}, {}]", top[0], top[1], top[2]);

    if width == height && transparent_corners == corners.len() && center[3] == 255 {
        println!("✓ Icon looks well-formed");
    } else {
        println!("⚠ Icon is not a rounded square with an opaque center");
    }

    Ok(())
}
