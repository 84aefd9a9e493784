use image::{Rgba, RgbaImage};

/// Elliptical arc stroked inside an inclusive pixel bounding box.
///
/// Angles are polar degrees around the ellipse center, clockwise from
/// 3 o'clock (the image y axis points down), so a sweep of 200..340 traces
/// the upper part of the ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub start_deg: f32,
    pub end_deg: f32,
    pub width: u32,
}

impl Arc {
    /// Whether the pixel at (`x`, `y`) is covered by the stroke.
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let a = (self.right - self.left + 1) as f32 / 2.0;
        let b = (self.bottom - self.top + 1) as f32 / 2.0;
        if a <= 0.0 || b <= 0.0 {
            return false;
        }

        let cx = self.left as f32 + a;
        let cy = self.top as f32 + b;
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;

        if (dx / a).powi(2) + (dy / b).powi(2) > 1.0 {
            return false;
        }

        let inner_a = a - self.width as f32;
        let inner_b = b - self.width as f32;
        if inner_a > 0.0 && inner_b > 0.0 && (dx / inner_a).powi(2) + (dy / inner_b).powi(2) < 1.0
        {
            return false;
        }

        let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
        self.contains_angle(angle)
    }

    fn contains_angle(&self, angle: f32) -> bool {
        let start = self.start_deg.rem_euclid(360.0);
        let end = self.end_deg.rem_euclid(360.0);
        if start <= end {
            angle >= start && angle <= end
        } else {
            angle >= start || angle <= end
        }
    }

    /// Paint the stroke onto `canvas`, overwriting whatever is underneath.
    pub fn draw(&self, canvas: &mut RgbaImage, color: Rgba<u8>) {
        let x_min = self.left.max(0);
        let y_min = self.top.max(0);
        let x_max = self.right.min(canvas.width() as i32 - 1);
        let y_max = self.bottom.min(canvas.height() as i32 - 1);

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                if self.covers(x, y) {
                    canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}
