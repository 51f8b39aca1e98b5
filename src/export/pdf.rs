//! PDF Export functionality
//!
//! A small table renderer on top of `lopdf`. It takes a header row and body
//! rows of text cells and lays them out as a striped table with a filled
//! header band, starting a new page whenever the rows overflow and repeating
//! the header on every page.

use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AttendanceError, AttendanceResult};
use crate::reports::AttendanceReport;

const REGULAR_FONT: &[u8] = b"F1";
const BOLD_FONT: &[u8] = b"F2";

const HEADER_FILL: [f32; 3] = [41.0 / 255.0, 128.0 / 255.0, 185.0 / 255.0];
const STRIPE_FILL: [f32; 3] = [245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0];
const BORDER_GRAY: [f32; 3] = [0.8, 0.8, 0.8];
const BODY_TEXT: [f32; 3] = [0.31, 0.31, 0.31];
const HEADER_TEXT: [f32; 3] = [1.0, 1.0, 1.0];

/// Paper size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// ISO A4 (210 x 297 mm)
    #[default]
    A4,
    /// US Letter (8.5 x 11 in)
    Letter,
}

impl PageSize {
    /// Portrait width and height in points
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            Self::A4 => (595.28, 841.89),
            Self::Letter => (612.0, 792.0),
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page layout used by the table renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfLayout {
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default)]
    pub orientation: Orientation,
    /// Font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Page margin in points, applied on every side
    #[serde(default = "default_margin")]
    pub margin: f32,
}

fn default_font_size() -> f32 {
    10.0
}

fn default_margin() -> f32 {
    40.0
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            orientation: Orientation::default(),
            font_size: default_font_size(),
            margin: default_margin(),
        }
    }
}

impl PdfLayout {
    /// Page width and height in points for the configured orientation
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.page_size.dimensions();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Space between cell border and text
    pub fn cell_padding(&self) -> f32 {
        self.font_size / 2.0
    }

    /// Height of one table row
    pub fn row_height(&self) -> f32 {
        self.font_size + 2.0 * self.cell_padding()
    }

    /// How many body rows fit under the header on one page (at least 1)
    pub fn rows_per_page(&self) -> usize {
        let (_, height) = self.page_dimensions();
        let usable = height - 2.0 * self.margin;
        let rows = (usable / self.row_height()).floor() as i64 - 1;
        rows.max(1) as usize
    }

    fn validate(&self) -> AttendanceResult<()> {
        let (width, height) = self.page_dimensions();
        if !(self.font_size > 0.0) {
            return Err(AttendanceError::Pdf(format!(
                "Font size must be positive, got {}",
                self.font_size
            )));
        }
        if !(self.margin >= 0.0) || 2.0 * self.margin >= width.min(height) {
            return Err(AttendanceError::Pdf(format!(
                "Margin {} leaves no room on a {}x{} page",
                self.margin, width, height
            )));
        }
        // Header plus at least one body row
        let usable = height - 2.0 * self.margin;
        if usable < 2.0 * self.row_height() {
            return Err(AttendanceError::Pdf(format!(
                "Font size {} is too large: a {}pt row does not fit twice in {}pt",
                self.font_size,
                self.row_height(),
                usable
            )));
        }
        Ok(())
    }
}

/// Renders text tables into PDF documents
pub struct TableRenderer<'a> {
    layout: &'a PdfLayout,
}

impl<'a> TableRenderer<'a> {
    /// Create a renderer for a layout
    pub fn new(layout: &'a PdfLayout) -> Self {
        Self { layout }
    }

    /// Build a document holding the table
    pub fn render(
        &self,
        title: &str,
        head: &[String],
        body: &[Vec<String>],
    ) -> AttendanceResult<Document> {
        self.layout.validate()?;
        if head.is_empty() {
            return Err(AttendanceError::Pdf("Table has no columns".into()));
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_dictionary("Helvetica"));
        let bold_id = doc.add_object(font_dictionary("Helvetica-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let rows_per_page = self.layout.rows_per_page();
        let chunks: Vec<&[Vec<String>]> = if body.is_empty() {
            vec![&[]]
        } else {
            body.chunks(rows_per_page).collect()
        };

        let mut kids = Vec::with_capacity(chunks.len());
        for (page_index, rows) in chunks.iter().enumerate() {
            let first_row = page_index * rows_per_page;
            let content = self.page_content(head, rows, first_row);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let (width, height) = self.layout.page_dimensions();
        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => Object::Integer(page_count),
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    real(width),
                    real(height),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => text_object(title),
            "Producer" => text_object(concat!("attendance-cli ", env!("CARGO_PKG_VERSION"))),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        debug!(pages = page_count, rows = body.len(), "rendered pdf table");
        Ok(doc)
    }

    /// Drawing operations for one page: header band plus a slice of rows
    fn page_content(&self, head: &[String], rows: &[Vec<String>], first_row: usize) -> Content {
        let layout = self.layout;
        let (width, height) = layout.page_dimensions();
        let table_width = width - 2.0 * layout.margin;
        let column_width = table_width / head.len() as f32;
        let row_height = layout.row_height();
        let top = height - layout.margin;

        let mut ops = Vec::new();
        ops.push(Operation::new("w", vec![real(0.5)]));
        ops.push(Operation::new("RG", rgb(BORDER_GRAY)));

        // Header band
        let header_bottom = top - row_height;
        fill_rect(&mut ops, HEADER_FILL, layout.margin, header_bottom, table_width, row_height);
        self.draw_row_text(&mut ops, head, BOLD_FONT, HEADER_TEXT, header_bottom, column_width);

        for (offset, cells) in rows.iter().enumerate() {
            let row_bottom = header_bottom - (offset as f32 + 1.0) * row_height;
            if (first_row + offset) % 2 == 1 {
                fill_rect(&mut ops, STRIPE_FILL, layout.margin, row_bottom, table_width, row_height);
            }
            for column in 0..head.len() {
                let x = layout.margin + column as f32 * column_width;
                ops.push(Operation::new(
                    "re",
                    vec![real(x), real(row_bottom), real(column_width), real(row_height)],
                ));
                ops.push(Operation::new("S", vec![]));
            }
            self.draw_row_text(&mut ops, cells, REGULAR_FONT, BODY_TEXT, row_bottom, column_width);
        }

        Content { operations: ops }
    }

    fn draw_row_text(
        &self,
        ops: &mut Vec<Operation>,
        cells: &[String],
        font: &[u8],
        color: [f32; 3],
        row_bottom: f32,
        column_width: f32,
    ) {
        let layout = self.layout;
        let baseline = row_bottom + layout.cell_padding() + layout.font_size * 0.2;

        ops.push(Operation::new("rg", rgb(color)));
        for (column, text) in cells.iter().enumerate() {
            let x = layout.margin + column as f32 * column_width + layout.cell_padding();
            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new(
                "Tf",
                vec![Object::Name(font.to_vec()), real(layout.font_size)],
            ));
            ops.push(Operation::new("Td", vec![real(x), real(baseline)]));
            ops.push(Operation::new("Tj", vec![text_object(text)]));
            ops.push(Operation::new("ET", vec![]));
        }
    }
}

/// Render a table and write the PDF bytes
pub fn write_table_pdf<W: Write>(
    title: &str,
    head: &[String],
    body: &[Vec<String>],
    layout: &PdfLayout,
    writer: &mut W,
) -> AttendanceResult<()> {
    let mut doc = TableRenderer::new(layout).render(title, head, body)?;
    doc.compress();
    doc.save_to(writer)
        .map_err(|e| AttendanceError::Export(format!("Failed to write PDF: {}", e)))
}

/// Export an attendance report as a PDF table
pub fn export_report_pdf<W: Write>(
    report: &AttendanceReport,
    layout: &PdfLayout,
    writer: &mut W,
) -> AttendanceResult<()> {
    let title = format!("Attendance Report {} {}", report.month_name, report.period.year);
    write_table_pdf(&title, &report.header, &report.body(), layout, writer)
}

fn font_dictionary(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn fill_rect(ops: &mut Vec<Operation>, color: [f32; 3], x: f32, y: f32, w: f32, h: f32) {
    ops.push(Operation::new("rg", rgb(color)));
    ops.push(Operation::new("re", vec![real(x), real(y), real(w), real(h)]));
    ops.push(Operation::new("f", vec![]));
}

fn rgb(color: [f32; 3]) -> Vec<Object> {
    color.iter().map(|c| real(*c)).collect()
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

/// Encode text for the standard fonts: Latin-1 passes through, anything
/// else becomes '?'
fn text_object(text: &str) -> Object {
    let bytes = text
        .chars()
        .map(|c| if (c as u32) < 0x100 { c as u8 } else { b'?' })
        .collect::<Vec<u8>>();
    Object::String(bytes, StringFormat::Literal)
}
