use image::{GrayImage, Luma, RgbaImage};

/// Build a binary rounded-rectangle mask covering the whole `size × size`
/// canvas. A pixel is opaque when its center falls inside the shape.
///
/// The shape spans exactly `size` pixels on both axes, so all four corners
/// are clipped alike. A box drawn from (0, 0) to (size, size) inclusive would
/// be one pixel wider and cut its right and bottom corners less.
pub fn rounded_mask(size: u32, radius: u32) -> GrayImage {
    let extent = size as f32;
    let radius = (radius as f32).min(extent / 2.0);

    GrayImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // Nearest point on the inner rectangle whose inflation by `radius`
        // gives the rounded shape.
        let nx = px.clamp(radius, extent - radius);
        let ny = py.clamp(radius, extent - radius);
        let (dx, dy) = (px - nx, py - ny);

        if dx * dx + dy * dy <= radius * radius {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Replace the alpha channel of `canvas` with `mask`.
pub fn apply_alpha(canvas: &mut RgbaImage, mask: &GrayImage) {
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        pixel[3] = mask.get_pixel(x, y)[0];
    }
}
