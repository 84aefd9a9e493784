use image::{Rgba, RgbaImage};

/// Vertical two-stop gradient, sampled once per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGradient {
    pub start: [u8; 3],
    pub end: [u8; 3],
}

impl ColorGradient {
    pub const fn new(start: [u8; 3], end: [u8; 3]) -> Self {
        Self { start, end }
    }

    /// Color of `row` in a canvas `size` rows tall, always fully opaque.
    ///
    /// Channels are truncated towards the start color, so the last row lands
    /// one step short of `end` on small canvases.
    pub fn color_at(&self, row: u32, size: u32) -> Rgba<u8> {
        let ratio = row as f32 / size as f32;
        let lerp = |from: u8, to: u8| {
            let value = from as f32 + (to as f32 - from as f32) * ratio;
            value.clamp(0.0, 255.0) as u8
        };

        Rgba([
            lerp(self.start[0], self.end[0]),
            lerp(self.start[1], self.end[1]),
            lerp(self.start[2], self.end[2]),
            255,
        ])
    }

    /// Fill every row of `canvas` with its gradient color.
    pub fn fill(&self, canvas: &mut RgbaImage) {
        let height = canvas.height();
        for (_, y, pixel) in canvas.enumerate_pixels_mut() {
            *pixel = self.color_at(y, height);
        }
    }

    pub fn start_hex(&self) -> String {
        hex(self.start)
    }

    pub fn end_hex(&self) -> String {
        hex(self.end)
    }
}

fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
