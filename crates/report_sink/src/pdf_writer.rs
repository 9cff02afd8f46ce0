//! PDF report output.
//!
//! A4 pages, built-in Helvetica, one line of text per row with long lines
//! wrapped at word boundaries. Pages are added as the cursor reaches the
//! bottom margin.

use super::{persist_atomically, ReportFormat, ReportSink, SinkError};
use climate_risk::report::ReportDocument;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 12.0;
const LAYER_NAME: &str = "Report";

/// Characters per line at the body font size within the margins.
pub const WRAP_COLUMNS: usize = 80;

/// PDF writer for reports
pub struct PdfWriter {
    /// Output directory
    output_dir: PathBuf,
}

#[derive(Clone, Copy)]
enum Style {
    Title,
    Heading,
    Body,
}

impl PdfWriter {
    /// Create a new PDF writer
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Get output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render a document to PDF bytes.
    pub fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, SinkError> {
        let (doc, page, layer) = PdfDocument::new(
            document.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;
        let mut current_layer = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
        let mut pages = 1;

        for (text, style) in styled_lines(document) {
            for wrapped in wrap_line(&text, WRAP_COLUMNS) {
                if y < MARGIN_MM {
                    let (page, layer) =
                        doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
                    current_layer = doc.get_page(page).get_layer(layer);
                    y = PAGE_HEIGHT_MM - MARGIN_MM;
                    pages += 1;
                }
                if !wrapped.is_empty() {
                    let (font_ref, size): (&IndirectFontRef, f32) = match style {
                        Style::Title => (&bold_font, TITLE_FONT_SIZE),
                        Style::Heading => (&bold_font, BODY_FONT_SIZE),
                        Style::Body => (&body_font, BODY_FONT_SIZE),
                    };
                    current_layer.use_text(wrapped, size, Mm(MARGIN_MM), Mm(y), font_ref);
                }
                y -= LINE_HEIGHT_MM;
            }
        }

        debug!(pages, "Rendered PDF report");
        doc.save_to_bytes().map_err(pdf_error)
    }
}

impl ReportSink for PdfWriter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }

    fn write(&self, document: &ReportDocument) -> Result<PathBuf, SinkError> {
        let bytes = self.render(document)?;
        let path = persist_atomically(&self.output_dir, &ReportFormat::Pdf.file_name(), &bytes)?;

        info!(
            path = %path.display(),
            size = bytes.len(),
            "Report written to PDF"
        );

        Ok(path)
    }
}

fn styled_lines(document: &ReportDocument) -> Vec<(String, Style)> {
    let mut lines = vec![(document.title.clone(), Style::Title)];
    lines.extend(document.preamble.iter().map(|l| (l.clone(), Style::Body)));
    for section in &document.sections {
        lines.push((String::new(), Style::Body));
        lines.push((section.heading.clone(), Style::Heading));
        lines.extend(section.lines.iter().map(|l| (l.clone(), Style::Body)));
    }
    lines
}

/// Split a line at word boundaries so no piece exceeds `width` characters.
///
/// Continuation pieces keep the original indentation. A single word longer
/// than `width` is left whole.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
    let mut out = Vec::new();
    let mut current = indent.clone();

    for word in line.split_whitespace() {
        let current_len = current.chars().count();
        let fits = current_len == indent.chars().count()
            || current_len + 1 + word.chars().count() <= width;
        if !fits {
            out.push(std::mem::replace(&mut current, indent.clone()));
        }
        if current.chars().count() > indent.chars().count() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if out.is_empty() || current.chars().count() > indent.chars().count() {
        out.push(current);
    }
    out
}

fn pdf_error<E: std::fmt::Debug>(err: E) -> SinkError {
    SinkError::Pdf(format!("{:?}", err))
}
