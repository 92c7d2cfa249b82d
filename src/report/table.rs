use crate::constants::ROWS_PER_PAGE;
use crate::error::GigPayError;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

// A4 portrait, top-anchored layout; printpdf measures in f32
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const COLUMN_WIDTH_MM: f32 = 45.0;
const TITLE_TOP_MM: f32 = 280.0;
const TABLE_TOP_MM: f32 = 265.0;
const ROW_STEP_MM: f32 = 9.0;
const TITLE_SIZE: f32 = 14.0;
const CELL_SIZE: f32 = 10.0;

/// A paginated table: one header row repeated on every page, data rows
/// split into fixed-size pages. Layout is computed here so pagination
/// can be tested without rendering a single byte of PDF.
#[derive(Clone, Debug)]
pub struct TableDocument {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableDocument {
    pub fn new(title: String, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        TableDocument { title, headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Data rows grouped by page, in document order.
    pub fn pages(&self) -> Vec<&[Vec<String>]> {
        self.rows.chunks(ROWS_PER_PAGE).collect()
    }

    /// Renders the table to PDF bytes with builtin Helvetica fonts, so
    /// no font asset ships with the binary.
    pub fn render(&self) -> Result<Vec<u8>, GigPayError> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(&self.title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| GigPayError::RenderFailure(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| GigPayError::RenderFailure(e.to_string()))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        layer.use_text(&self.title, TITLE_SIZE, Mm(MARGIN_MM), Mm(TITLE_TOP_MM), &bold);

        for (index, page_rows) in self.pages().iter().enumerate() {
            if index > 0 {
                let (page, page_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
                layer = doc.get_page(page).get_layer(page_layer);
            }

            let mut y = TABLE_TOP_MM;
            draw_row(&layer, &self.headers, &bold, y);
            y -= ROW_STEP_MM;
            for row in page_rows.iter() {
                draw_row(&layer, row, &regular, y);
                y -= ROW_STEP_MM;
            }
        }

        doc.save_to_bytes()
            .map_err(|e| GigPayError::RenderFailure(e.to_string()))
    }
}

fn draw_row(layer: &PdfLayerReference, cells: &[String], font: &IndirectFontRef, y: f32) {
    for (column, cell) in cells.iter().enumerate() {
        let x = MARGIN_MM + column as f32 * COLUMN_WIDTH_MM;
        layer.use_text(cell, CELL_SIZE, Mm(x), Mm(y), font);
    }
}
