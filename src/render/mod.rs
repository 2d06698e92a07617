//! Timetable rendering.
//!
//! Rendering happens in two steps: [`table_blocks`] flattens a
//! [`Timetable`](crate::schedule::Timetable) into per-day rows, and
//! [`write_pdf`] lays those rows out as tables in a PDF document.

mod pdf;
mod table;

pub use pdf::{render_pdf, write_pdf, RenderedPdf};
pub use table::{table_blocks, TableBlock, HEADER};
