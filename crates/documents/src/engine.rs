//! Sequential document model and the PDF engine that lays it out.
//!
//! Producers push text and spacing instructions in reading order; the
//! renderer owns coordinates, wrapping, font selection and page breaks.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};

use crate::error::{DocumentError, Result};
use crate::qr::QrMatrix;

const PT_TO_MM: f32 = 0.352_778;
/// Average Helvetica advance width as a fraction of the font size. Wrapping
/// and centering use this average, so runs of wide glyphs may still overrun
/// the right margin slightly.
const REGULAR_GLYPH_WIDTH: f32 = 0.5;
/// Bold counterpart of `REGULAR_GLYPH_WIDTH`, equally approximate
const BOLD_GLYPH_WIDTH: f32 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
    pub align: Align,
}

impl TextStyle {
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            italic: false,
            align: Align::Left,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..self
        }
    }

    pub const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    pub const fn centered(self) -> Self {
        Self {
            align: Align::Center,
            ..self
        }
    }

    fn line_height(&self, line_spacing: f32) -> f32 {
        self.size * PT_TO_MM * line_spacing
    }

    fn glyph_width(&self) -> f32 {
        let factor = match self.weight {
            FontWeight::Regular => REGULAR_GLYPH_WIDTH,
            FontWeight::Bold => BOLD_GLYPH_WIDTH,
        };
        self.size * PT_TO_MM * factor
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_width()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text { content: String, style: TextStyle },
    /// Vertical gap in millimetres
    Spacing(f32),
    /// Centered square QR code, edge length in millimetres
    QrCode { matrix: QrMatrix, size: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn text(&mut self, content: impl Into<String>, style: TextStyle) -> &mut Self {
        self.blocks.push(Block::Text {
            content: content.into(),
            style,
        });
        self
    }

    pub fn spacing(&mut self, millimetres: f32) -> &mut Self {
        self.blocks.push(Block::Spacing(millimetres));
        self
    }

    pub fn qr_code(&mut self, matrix: QrMatrix, size: f32) -> &mut Self {
        self.blocks.push(Block::QrCode { matrix, size });
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Text content in emission order, spacing and graphics skipped
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub line_spacing: f32,
}

impl PageLayout {
    pub const A4: Self = Self {
        width: 210.0,
        height: 297.0,
        margin: 20.0,
        line_spacing: 1.4,
    };

    pub const A6: Self = Self {
        width: 105.0,
        height: 148.0,
        margin: 8.0,
        line_spacing: 1.3,
    };

    fn content_width(&self) -> f32 {
        self.width - self.margin * 2.0
    }
}

/// A positioned element; `y` is the baseline for text and the bottom edge for graphics
#[derive(Debug, Clone, PartialEq)]
pub enum Placed {
    Line {
        text: String,
        style: TextStyle,
        x: f32,
        y: f32,
    },
    QrCode {
        matrix: QrMatrix,
        x: f32,
        y: f32,
        size: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Placed>,
}

pub struct PdfRenderer {
    layout: PageLayout,
}

impl PdfRenderer {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    /// Assigns every block a page and a position
    pub fn paginate(&self, document: &Document) -> Vec<Page> {
        let layout = &self.layout;
        let top = layout.height - layout.margin;
        let bottom = layout.margin;

        let mut pages = Vec::new();
        let mut current = Page::default();
        let mut cursor = top;

        for block in document.blocks() {
            match block {
                Block::Spacing(gap) => cursor -= gap,
                Block::Text { content, style } => {
                    // approximate: assumes an average glyph width
                    let max_chars = (layout.content_width() / style.glyph_width()) as usize;
                    let line_height = style.line_height(layout.line_spacing);

                    for line in wrap(content, max_chars) {
                        if cursor - line_height < bottom && !current.items.is_empty() {
                            pages.push(std::mem::take(&mut current));
                            cursor = top;
                        }
                        cursor -= line_height;

                        let x = match style.align {
                            Align::Left => layout.margin,
                            Align::Center => {
                                ((layout.width - style.text_width(&line)) / 2.0).max(layout.margin)
                            }
                        };
                        current.items.push(Placed::Line {
                            text: line,
                            style: *style,
                            x,
                            y: cursor,
                        });
                    }
                }
                Block::QrCode { matrix, size } => {
                    if cursor - size < bottom && !current.items.is_empty() {
                        pages.push(std::mem::take(&mut current));
                        cursor = top;
                    }
                    cursor -= size;
                    current.items.push(Placed::QrCode {
                        matrix: matrix.clone(),
                        x: (layout.width - size) / 2.0,
                        y: cursor,
                        size: *size,
                    });
                }
            }
        }

        pages.push(current);
        pages
    }

    pub fn render(&self, document: &Document) -> Result<Vec<u8>> {
        let pages = self.paginate(document);
        let (width, height) = (Mm(self.layout.width), Mm(self.layout.height));

        let (doc, first_page, first_layer) =
            PdfDocument::new(document.title(), width, height, "Layer 1");
        let fonts = FontSet::load(&doc)?;

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(width, height, "Layer 1")
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for item in &page.items {
                match item {
                    Placed::Line { text, style, x, y } => {
                        layer.use_text(text.as_str(), style.size, Mm(*x), Mm(*y), fonts.select(style));
                    }
                    Placed::QrCode { matrix, x, y, size } => {
                        draw_qr(&layer, matrix, *x, *y, *size);
                    }
                }
            }
        }

        tracing::debug!(title = document.title(), pages = pages.len(), "Rendered PDF document");

        doc.save_to_bytes().map_err(DocumentError::pdf)
    }
}

struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    bold_italic: IndirectFontRef,
}

impl FontSet {
    fn load(doc: &PdfDocumentReference) -> Result<Self> {
        Ok(Self {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)
                .map_err(DocumentError::pdf)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(DocumentError::pdf)?,
            italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique)
                .map_err(DocumentError::pdf)?,
            bold_italic: doc.add_builtin_font(BuiltinFont::HelveticaBoldOblique)
                .map_err(DocumentError::pdf)?,
        })
    }

    fn select(&self, style: &TextStyle) -> &IndirectFontRef {
        match (style.weight, style.italic) {
            (FontWeight::Regular, false) => &self.regular,
            (FontWeight::Bold, false) => &self.bold,
            (FontWeight::Regular, true) => &self.italic,
            (FontWeight::Bold, true) => &self.bold_italic,
        }
    }
}

fn draw_qr(layer: &PdfLayerReference, matrix: &QrMatrix, x: f32, y: f32, size: f32) {
    let width = matrix.width();
    if width == 0 {
        return;
    }
    let module = size / width as f32;

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

    for row in 0..width {
        for col in 0..width {
            if !matrix.is_dark(col, row) {
                continue;
            }
            // QR rows run top-down, PDF y runs bottom-up
            let left = x + col as f32 * module;
            let top = y + size - row as f32 * module;
            let ring = vec![
                (Point::new(Mm(left), Mm(top - module)), false),
                (Point::new(Mm(left + module), Mm(top - module)), false),
                (Point::new(Mm(left + module), Mm(top)), false),
                (Point::new(Mm(left), Mm(top)), false),
            ];
            layer.add_polygon(Polygon {
                rings: vec![ring],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
        }
    }
}

/// Greedy word wrap that keeps the line's leading indentation on continuation lines
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let indent = &text[..text.len() - text.trim_start().len()];
    let indent_chars = indent.chars().count();

    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_chars = indent_chars;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        let has_words = current_chars > indent_chars;

        if has_words && current_chars + 1 + word_chars > max_chars {
            lines.push(std::mem::replace(&mut current, indent.to_string()));
            current_chars = indent_chars;
        }
        if current_chars > indent_chars {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if current_chars > indent_chars {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap("   - Alice", 40), vec!["   - Alice"]);
    }

    #[test]
    fn test_wrap_keeps_indent() {
        let lines = wrap("   - one two three four", 12);
        assert_eq!(lines, vec!["   - one two", "   three", "   four"]);
    }

    #[test]
    fn test_wrap_overlong_word_stays_whole() {
        assert_eq!(wrap("abcdefghij xy", 5), vec!["abcdefghij", "xy"]);
    }

    #[test]
    fn test_centered_text_is_offset() {
        let mut document = Document::new("t");
        document.text("Judul", TextStyle::regular(18.0).bold().centered());
        document.text("Isi", TextStyle::regular(12.0));

        let pages = PdfRenderer::new(PageLayout::A4).paginate(&document);
        let xs: Vec<f32> = pages[0]
            .items
            .iter()
            .map(|item| match item {
                Placed::Line { x, .. } => *x,
                Placed::QrCode { x, .. } => *x,
            })
            .collect();

        assert!(xs[0] > PageLayout::A4.margin);
        assert_eq!(xs[1], PageLayout::A4.margin);
    }

    #[test]
    fn test_centered_bold_title_wraps_within_estimated_width() {
        let layout = PageLayout::A6;
        let style = TextStyle::regular(18.0).bold().centered();
        let mut document = Document::new("t");
        document.text(
            "Daftar Pemenang Undian Doorprize Seminar Nasional Kewirausahaan",
            style,
        );

        let pages = PdfRenderer::new(layout).paginate(&document);
        let lines: Vec<_> = pages[0]
            .items
            .iter()
            .filter_map(|item| match item {
                Placed::Line { text, x, .. } => Some((text.as_str(), *x)),
                Placed::QrCode { .. } => None,
            })
            .collect();

        assert!(lines.len() > 1);
        for (text, x) in lines {
            assert!(x >= layout.margin);
            assert!(x + style.text_width(text) <= layout.width - layout.margin + f32::EPSILON);
        }
    }

    #[test]
    fn test_long_document_breaks_pages() {
        let mut document = Document::new("t");
        for i in 0..200 {
            document.text(format!("line {i}"), TextStyle::regular(12.0));
        }

        let pages = PdfRenderer::new(PageLayout::A4).paginate(&document);
        assert!(pages.len() > 1);

        let placed: usize = pages.iter().map(|p| p.items.len()).sum();
        assert_eq!(placed, 200);

        for page in &pages {
            for item in &page.items {
                if let Placed::Line { y, .. } = item {
                    assert!(*y >= PageLayout::A4.margin);
                }
            }
        }
    }

    #[test]
    fn test_empty_document_renders_one_page() {
        let document = Document::new("empty");
        let renderer = PdfRenderer::new(PageLayout::A4);

        assert_eq!(renderer.paginate(&document).len(), 1);
        let bytes = renderer.render(&document).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
