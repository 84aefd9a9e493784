//! Font selection and text drawing for the icon glyph.
//!
//! The preferred font is found through the `fontdb` system database and
//! rasterized with `rusttype`.
//! When it can't be found or parsed, a small built-in bitmap font is used so
//! that rendering always succeeds.

use anyhow::{Context, Result};
use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Family of the preferred font, looked up in the system font database.
pub const PREFERRED_FAMILY: &str = "Arial";

/// File name of the preferred font when it sits in the working directory.
pub const PREFERRED_FONT: &str = "arial.ttf";

/// Pixel extents of rendered text, relative to the drawing origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Font used to draw the icon letter.
pub enum GlyphFont {
    TrueType { font: Font<'static>, scale: Scale },
    /// Built-in 5x7 bitmap font, each dot drawn as a `dot × dot` block.
    Builtin { dot: u32 },
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphFont::TrueType { scale, .. } => {
                f.debug_struct("TrueType").field("scale", scale).finish()
            }
            GlyphFont::Builtin { dot } => f.debug_struct("Builtin").field("dot", dot).finish(),
        }
    }
}

impl GlyphFont {
    /// Built-in font sized so one glyph cell is roughly `px` tall.
    pub fn builtin(px: f32) -> Self {
        let dot = (px / BITMAP_CELL_HEIGHT as f32).round().max(1.0) as u32;
        GlyphFont::Builtin { dot }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, GlyphFont::Builtin { .. })
    }

    /// Ink bounds of `text` drawn with its line box top-left at the origin.
    /// Returns `None` when nothing would be drawn.
    pub fn measure(&self, text: &str) -> Option<TextBounds> {
        match self {
            GlyphFont::TrueType { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                font.layout(text, *scale, point(0.0, ascent))
                    .filter_map(|glyph| glyph.pixel_bounding_box())
                    .map(|rect| TextBounds {
                        min_x: rect.min.x,
                        min_y: rect.min.y,
                        max_x: rect.max.x,
                        max_y: rect.max.y,
                    })
                    .reduce(TextBounds::union)
            }
            GlyphFont::Builtin { dot } => bitmap_dots(text)
                .map(|(col, row)| {
                    let (x, y) = ((col * *dot) as i32, (row * *dot) as i32);
                    TextBounds {
                        min_x: x,
                        min_y: y,
                        max_x: x + *dot as i32,
                        max_y: y + *dot as i32,
                    }
                })
                .reduce(TextBounds::union),
        }
    }

    /// Draw `text` with its line box top-left at (`x`, `y`). Anti-aliased
    /// coverage is blended over the existing pixels, alpha included.
    pub fn draw(&self, canvas: &mut RgbaImage, text: &str, x: i32, y: i32, color: Rgba<u8>) {
        match self {
            GlyphFont::TrueType { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                for glyph in font.layout(text, *scale, point(x as f32, y as f32 + ascent)) {
                    let Some(bounds) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let px = bounds.min.x + gx as i32;
                        let py = bounds.min.y + gy as i32;
                        blend_pixel(canvas, px, py, color, coverage);
                    });
                }
            }
            GlyphFont::Builtin { dot } => {
                for (col, row) in bitmap_dots(text) {
                    let left = x + (col * *dot) as i32;
                    let top = y + (row * *dot) as i32;
                    for dy in 0..*dot as i32 {
                        for dx in 0..*dot as i32 {
                            blend_pixel(canvas, left + dx, top + dy, color, 1.0);
                        }
                    }
                }
            }
        }
    }
}

/// Load the first usable TrueType font among `candidates` at `px` pixels,
/// falling back to the built-in bitmap font.
pub fn load_font(candidates: &[PathBuf], px: f32) -> GlyphFont {
    candidates
        .iter()
        .find_map(|path| read_truetype(path).ok())
        .map(|font| GlyphFont::TrueType {
            font,
            scale: Scale::uniform(px),
        })
        .unwrap_or_else(|| GlyphFont::builtin(px))
}

/// Load the preferred font from the working directory or the system font
/// database, or the built-in font.
pub fn load_preferred_font(px: f32) -> GlyphFont {
    load_font(&preferred_font_candidates(), px)
}

fn read_truetype(path: &Path) -> Result<Font<'static>> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Font::try_from_vec(data).with_context(|| format!("Not a TrueType font: {}", path.display()))
}

/// [`PREFERRED_FONT`] in the working directory, then the installed
/// [`PREFERRED_FAMILY`] face, in that order.
pub fn preferred_font_candidates() -> Vec<PathBuf> {
    let mut found = Vec::new();

    let local = PathBuf::from(PREFERRED_FONT);
    if local.is_file() {
        found.push(local);
    }
    found.extend(system_font_path(PREFERRED_FAMILY));

    found
}

/// File backing the regular face of `family` among the installed fonts.
pub fn system_font_path(family: &str) -> Option<PathBuf> {
    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::Name(family)],
        weight: Weight::NORMAL,
        style: Style::Normal,
        stretch: Stretch::Normal,
    };

    let id = db.query(&query)?;
    match db.face_source(id)? {
        (Source::File(path), _) | (Source::SharedFile(path, _), _) => Some(path),
        (Source::Binary(_), _) => None,
    }
}

fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }

    let coverage = coverage.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for channel in 0..4 {
        let dst = pixel[channel] as f32;
        let src = color[channel] as f32;
        pixel[channel] = (dst + (src - dst) * coverage).round() as u8;
    }
}

const BITMAP_CELL_WIDTH: u32 = 6;
const BITMAP_CELL_HEIGHT: u32 = 8;

/// Rows of a 5x7 glyph, bit 4 is the leftmost column.
fn bitmap_glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        _ => return None,
    };
    Some(rows)
}

/// Set dots of `text` as (column, row) in dot units. Characters without a
/// bitmap still advance by one cell.
fn bitmap_dots(text: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
    text.chars().enumerate().flat_map(|(index, c)| {
        let origin = index as u32 * BITMAP_CELL_WIDTH;
        let rows = bitmap_glyph(c).unwrap_or([0; 7]);
        (0..7u32).flat_map(move |row| {
            (0..5u32)
                .filter(move |col| rows[row as usize] & (0x10 >> *col) != 0)
                .map(move |col| (origin + col, row))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_dot_size_follows_pixel_size() {
        assert!(matches!(GlyphFont::builtin(10.0), GlyphFont::Builtin { dot: 1 }));
        assert!(matches!(GlyphFont::builtin(30.0), GlyphFont::Builtin { dot: 4 }));
        assert!(matches!(GlyphFont::builtin(80.0), GlyphFont::Builtin { dot: 10 }));
        assert!(matches!(GlyphFont::builtin(1.0), GlyphFont::Builtin { dot: 1 }));
    }

    #[test]
    fn builtin_measure_letter_e() {
        let bounds = GlyphFont::builtin(10.0).measure("E").unwrap();
        assert_eq!(bounds, TextBounds { min_x: 0, min_y: 0, max_x: 5, max_y: 7 });

        let bounds = GlyphFont::builtin(80.0).measure("E").unwrap();
        assert_eq!((bounds.width(), bounds.height()), (50, 70));
    }

    #[test]
    fn builtin_measure_skips_unknown_characters() {
        let font = GlyphFont::builtin(10.0);
        assert_eq!(font.measure(""), None);
        assert_eq!(font.measure(" "), None);

        // "I" only covers columns 1..4, and sits in the second cell.
        let bounds = font.measure(" I").unwrap();
        assert_eq!((bounds.min_x, bounds.max_x), (7, 10));
    }

    #[test]
    fn builtin_draws_letter_e() {
        let mut canvas = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let white = Rgba([255, 255, 255, 255]);
        GlyphFont::builtin(10.0).draw(&mut canvas, "E", 1, 0, white);

        // Top bar spans the full width
        for x in 1..6 {
            assert_eq!(*canvas.get_pixel(x, 0), white);
        }
        // Stem only on the second row
        assert_eq!(*canvas.get_pixel(1, 1), white);
        assert_eq!(*canvas.get_pixel(2, 1), Rgba([0, 0, 0, 255]));
        // Middle bar is one dot shorter
        assert_eq!(*canvas.get_pixel(4, 3), white);
        assert_eq!(*canvas.get_pixel(5, 3), Rgba([0, 0, 0, 255]));
        // Nothing left of the origin
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn draw_outside_canvas_is_clipped() {
        let mut canvas = RgbaImage::new(4, 4);
        GlyphFont::builtin(10.0).draw(&mut canvas, "E", -10, -10, Rgba([255, 255, 255, 255]));
        assert!(canvas.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn blend_mixes_by_coverage() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([0, 100, 200, 0]));
        blend_pixel(&mut canvas, 0, 0, Rgba([255, 255, 255, 255]), 0.5);
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([128, 178, 228, 128]));
    }

    #[test]
    fn missing_font_falls_back_to_builtin() {
        let candidates = vec![PathBuf::from("/definitely/not/here/arial.ttf")];
        assert!(load_font(&candidates, 30.0).is_builtin());
        assert!(load_font(&[], 30.0).is_builtin());
    }

    #[test]
    fn corrupt_font_falls_back_to_builtin() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let font = load_font(&[file.path().to_path_buf()], 30.0);
        assert!(font.is_builtin());
    }

    #[test]
    fn unknown_family_has_no_system_path() {
        assert_eq!(system_font_path("No Such Family For Icon Tests"), None);
    }
}
