//! PDF output for timetable blocks.
//!
//! Each block is drawn as a centered grid table on US-Letter pages: a gray
//! header row with bold white-smoke text over a beige body. Blocks follow
//! one another down the page and continue on a new page (with the header
//! repeated) when they run out of room.

use super::table::TableBlock;
use crate::error::{PlannerError, Result};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Pt, Rect, Rgb,
};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, instrument, warn};

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 25.4;

const FONT_SIZE: f32 = 10.0;
const BODY_ROW_HEIGHT: f32 = 6.35;
const HEADER_ROW_HEIGHT: f32 = 9.5;
const CELL_PADDING: f32 = 2.2;
const BLOCK_GAP: f32 = 4.0;
/// Rough Helvetica advance per character, as a fraction of the font size.
const AVG_CHAR_EM: f32 = 0.55;

const LAYER_NAME: &str = "Timetable";

/// Finished PDF bytes and how many pages they hold.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

fn gray() -> Color {
    Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None))
}

fn white_smoke() -> Color {
    Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None))
}

fn beige() -> Color {
    Color::Rgb(Rgb::new(0.96, 0.96, 0.86, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Characters outside Latin-1 that the built-in fonts still carry (WinAnsiEncoding).
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || WIN_ANSI_EXTRAS.contains(c)
}

/// Text as the built-in fonts can show it.
///
/// Characters the fonts cannot encode are replaced with `?` so the cell keeps
/// a visible mark instead of silently losing them.
fn pdf_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_win_ansi) {
        return Cow::Borrowed(text);
    }
    warn!("'{}' has characters the PDF font cannot show; replacing them with '?'", text);
    Cow::Owned(
        text.chars()
            .map(|c| if is_win_ansi(c) { c } else { '?' })
            .collect(),
    )
}

fn text_width(text: &str, bold: bool) -> f32 {
    let em = if bold { AVG_CHAR_EM + 0.05 } else { AVG_CHAR_EM };
    let points = text.chars().count() as f32 * FONT_SIZE * em;
    Mm::from(Pt(points)).0
}

/// Column widths in millimetres that fit the widest cell of each column.
fn column_widths(rows: &[[String; 3]]) -> [f32; 3] {
    let mut widths = [0.0f32; 3];
    for (idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            let width = text_width(cell, idx == 0) + 2.0 * CELL_PADDING;
            widths[col] = widths[col].max(width);
        }
    }
    let available = PAGE_WIDTH - 2.0 * MARGIN;
    let total: f32 = widths.iter().sum();
    if total > available {
        widths.iter_mut().for_each(|w| *w *= available / total);
    }
    widths
}

/// Page cursor over the document being built.
struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Distance from the bottom edge to the next free line.
    cursor: f32,
    pages: usize,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PlannerError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PlannerError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    fn at_page_top(&self) -> bool {
        self.cursor >= PAGE_HEIGHT - MARGIN
    }

    fn room_left(&self) -> f32 {
        self.cursor - MARGIN
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = PAGE_HEIGHT - MARGIN;
        self.pages += 1;
    }

    fn draw_row(&mut self, row: &[String; 3], widths: &[f32; 3], header: bool) {
        let height = if header { HEADER_ROW_HEIGHT } else { BODY_ROW_HEIGHT };
        let top = self.cursor;
        let bottom = top - height;
        let table_width: f32 = widths.iter().sum();
        let mut left = (PAGE_WIDTH - table_width) / 2.0;

        for (cell, width) in row.iter().zip(widths) {
            let right = left + width;
            let text = pdf_text(cell);

            let (fill, ink, font) = if header {
                (gray(), white_smoke(), &self.bold)
            } else {
                (beige(), black(), &self.regular)
            };

            self.layer.set_fill_color(fill);
            self.layer.add_rect(
                Rect::new(Mm(left), Mm(bottom), Mm(right), Mm(top)).with_mode(PaintMode::Fill),
            );

            self.layer.set_outline_color(black());
            self.layer.set_outline_thickness(1.0);
            self.layer.add_rect(
                Rect::new(Mm(left), Mm(bottom), Mm(right), Mm(top)).with_mode(PaintMode::Stroke),
            );

            // Header text sits high in its taller cell.
            let baseline = if header {
                bottom + (HEADER_ROW_HEIGHT - BODY_ROW_HEIGHT) + CELL_PADDING
            } else {
                bottom + CELL_PADDING
            };
            let text_left = left + ((width - text_width(&text, header)) / 2.0).max(CELL_PADDING);

            self.layer.set_fill_color(ink);
            self.layer
                .use_text(text.as_ref(), FONT_SIZE, Mm(text_left), Mm(baseline), font);

            left = right;
        }

        self.cursor = bottom;
    }

    fn draw_block(&mut self, block: &TableBlock) {
        let rows = block.all_rows();
        let widths = column_widths(&rows);
        let Some((header, body)) = rows.split_first() else {
            return;
        };

        // Keep a block on one page when it fits on a fresh one; never leave a
        // header stranded without its first row.
        let needed = HEADER_ROW_HEIGHT + BODY_ROW_HEIGHT * body.len() as f32;
        let first_row = if body.is_empty() { 0.0 } else { BODY_ROW_HEIGHT };
        if (needed > self.room_left() && !self.at_page_top())
            || HEADER_ROW_HEIGHT + first_row > self.room_left()
        {
            self.new_page();
        }

        self.draw_row(header, &widths, true);
        for row in body {
            if BODY_ROW_HEIGHT > self.room_left() {
                self.new_page();
                self.draw_row(header, &widths, true);
            }
            self.draw_row(row, &widths, false);
        }

        self.cursor -= BLOCK_GAP;
    }

    fn finish(self) -> Result<RenderedPdf> {
        let bytes = self
            .doc
            .save_to_bytes()
            .map_err(|e| PlannerError::Pdf(e.to_string()))?;
        Ok(RenderedPdf {
            bytes,
            pages: self.pages,
        })
    }
}

/// Render timetable blocks into a PDF document.
pub fn render_pdf(blocks: &[TableBlock]) -> Result<RenderedPdf> {
    let mut writer = PdfWriter::new("Study Timetable")?;
    for block in blocks {
        writer.draw_block(block);
    }
    writer.finish()
}

/// Render timetable blocks and write the PDF to `path`.
#[instrument(skip(blocks), fields(count = blocks.len(), path = %path.display()))]
pub fn write_pdf(blocks: &[TableBlock], path: &Path) -> Result<RenderedPdf> {
    let rendered = render_pdf(blocks)?;
    std::fs::write(path, &rendered.bytes)?;
    debug!("Wrote {} bytes over {} page(s)", rendered.bytes.len(), rendered.pages);
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn block(day: Weekday, sessions: usize) -> TableBlock {
        TableBlock {
            day,
            rows: (0..sessions)
                .map(|i| ["Monday".to_string(), format!("{:02}:00", i % 24), format!("Subject {}", i)])
                .collect(),
        }
    }

    #[test]
    fn test_render_single_block() {
        let rendered = render_pdf(&[block(Weekday::Mon, 3)]).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
        assert_eq!(rendered.pages, 1);
    }

    #[test]
    fn test_long_block_continues_on_next_page() {
        // A letter page holds 34 body rows inside the margins.
        let rendered = render_pdf(&[block(Weekday::Mon, 60)]).unwrap();
        assert_eq!(rendered.pages, 2);
    }

    #[test]
    fn test_blocks_share_a_page_when_they_fit() {
        let blocks: Vec<_> = [Weekday::Mon, Weekday::Tue, Weekday::Wed]
            .into_iter()
            .map(|d| block(d, 2))
            .collect();
        assert_eq!(render_pdf(&blocks).unwrap().pages, 1);
    }

    #[test]
    fn test_pdf_text_keeps_win_ansi() {
        assert!(matches!(pdf_text("Café – 9€ “notes”"), Cow::Borrowed(_)));
        assert_eq!(pdf_text("Physics 101"), "Physics 101");
    }

    #[test]
    fn test_pdf_text_marks_unsupported_characters() {
        assert_eq!(pdf_text("数学"), "??");
        assert_eq!(pdf_text("Ελληνικά"), "????????");
        assert_eq!(pdf_text("Maths 数学"), "Maths ??");
    }

    #[test]
    fn test_non_latin_subject_renders() {
        let block = TableBlock {
            day: Weekday::Mon,
            rows: vec![["Monday".to_string(), "09:00".to_string(), "数学".to_string()]],
        };
        let rendered = render_pdf(&[block]).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
        assert!(!pdf_text("数学").is_empty());
    }

    #[test]
    fn test_columns_fit_page() {
        let rows = vec![["Wednesday".to_string(), "09:00".to_string(), "x".repeat(400)]];
        let widths = column_widths(&rows);
        let total: f32 = widths.iter().sum();
        assert!(total <= PAGE_WIDTH - 2.0 * MARGIN + 0.01);
    }

    #[test]
    fn test_write_pdf_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timetable.pdf");

        write_pdf(&[block(Weekday::Fri, 1)], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
