//! Draw notes onto a PNG using an 8x8 bitmap font.

use crate::config::ImageSettings;
use crate::error::Result;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const GLYPH_SIZE: u32 = 8;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Renders notes as black text on a white canvas.
#[derive(Debug, Clone)]
pub struct ImageRenderer {
    settings: ImageSettings,
}

impl ImageRenderer {
    pub fn new(settings: ImageSettings) -> Self {
        Self { settings }
    }

    /// Characters that fit on one line between the margins.
    pub fn chars_per_line(&self) -> usize {
        let usable = self.settings.width.saturating_sub(2 * self.settings.margin);
        (usable / GLYPH_SIZE).max(1) as usize
    }

    /// Draw the notes. Text below the bottom edge is clipped.
    pub fn render(&self, text: &str) -> RgbImage {
        let ImageSettings {
            width,
            height,
            line_height,
            margin,
        } = self.settings;
        let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

        for (row, line) in wrap_lines(text, self.chars_per_line()).iter().enumerate() {
            let y = margin + row as u32 * line_height;
            if y + GLYPH_SIZE > height {
                debug!("Clipped notes after {} lines", row);
                break;
            }
            for (col, ch) in line.chars().enumerate() {
                let x = margin + col as u32 * GLYPH_SIZE;
                if x + GLYPH_SIZE > width {
                    break;
                }
                draw_glyph(&mut img, ch, x, y);
            }
        }

        img
    }

    /// Render the notes and save them as a PNG at `path`.
    #[instrument(skip(self, text), fields(path = %path.display()))]
    pub fn to_image(&self, text: &str, path: &Path) -> Result<PathBuf> {
        self.render(text).save(path)?;
        Ok(path.to_path_buf())
    }
}

fn draw_glyph(img: &mut RgbImage, ch: char, x: u32, y: u32) {
    let Some(glyph) = BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
    else {
        return;
    };

    for (dy, bits) in glyph.iter().enumerate() {
        for dx in 0..GLYPH_SIZE {
            if bits & (1 << dx) != 0 {
                img.put_pixel(x + dx, y + dy as u32, INK);
            }
        }
    }
}

/// Break text into display lines of at most `max_chars` characters.
///
/// Existing line breaks are kept, long lines wrap at spaces, and words
/// longer than a line are cut.
pub fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for source in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in source.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();
            let sep = usize::from(current_len > 0);

            if current_len + sep + chars.len() <= max_chars {
                if sep == 1 {
                    current.push(' ');
                }
                current_len += sep + chars.len();
                current.extend(chars);
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
            }
            while chars.len() > max_chars {
                let rest = chars.split_off(max_chars);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
            current_len = chars.len();
            current.extend(chars);
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_line_breaks() {
        let lines = wrap_lines("Cells\n\n- nucleus", 40);
        assert_eq!(lines, vec!["Cells", "", "- nucleus"]);
    }

    #[test]
    fn test_wrap_long_line_on_spaces() {
        let lines = wrap_lines("the mitochondria is the powerhouse", 15);
        assert_eq!(lines, vec!["the", "mitochondria is", "the powerhouse"]);
    }

    #[test]
    fn test_wrap_word_after_full_line_starts_fresh() {
        let lines = wrap_lines("abc defghij kl", 4);
        assert_eq!(lines, vec!["abc", "defg", "hij", "kl"]);
    }

    #[test]
    fn test_wrap_cuts_long_words() {
        let lines = wrap_lines("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_render_default_canvas() {
        let renderer = ImageRenderer::new(ImageSettings::default());
        let img = renderer.render("A");

        assert_eq!(img.dimensions(), (800, 600));
        assert_eq!(renderer.chars_per_line(), 97);
        assert_eq!(*img.get_pixel(799, 599), BACKGROUND);

        let inked = (10..18)
            .flat_map(|x| (10..18).map(move |y| (x, y)))
            .filter(|(x, y)| *img.get_pixel(*x, *y) == INK)
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn test_render_clips_at_bottom() {
        let renderer = ImageRenderer::new(ImageSettings {
            width: 100,
            height: 40,
            line_height: 20,
            margin: 10,
        });
        // Lines start at y=10 and y=30; the third would start at y=50.
        let img = renderer.render("X\nX\nX");
        let ink_rows: Vec<u32> = (0..40)
            .filter(|y| (0..100).any(|x| *img.get_pixel(x, *y) == INK))
            .collect();
        assert!(ink_rows.iter().all(|y| *y < 40));
        assert!(ink_rows.iter().any(|y| *y >= 30));
    }

    #[test]
    fn test_to_image_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_notes.png");
        let renderer = ImageRenderer::new(ImageSettings::default());

        let written = renderer.to_image("Forces and motion", &path).unwrap();

        assert_eq!(written, path);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
