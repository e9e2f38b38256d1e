use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::{Color, Style};
use genpdf::{fonts, Alignment, Document, Element, PaperSize, SimplePageDecorator};
use std::path::PathBuf;

/// An sRGB color carried on blocks. Mapped to the engine's color type at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One renderer-agnostic unit of document content.
///
/// Block sequences are plain comparable data: building the same record twice
/// must yield equal sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        text: String,
        size: u8,
        color: Option<Rgb>,
    },
    Paragraph {
        text: String,
        size: u8,
        color: Option<Rgb>,
    },
    Table(TableBlock),
    Spacer {
        lines: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub style: TableStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub header_background: Rgb,
    pub header_text: Rgb,
    pub header_bold: bool,
    pub body_background: Rgb,
    pub grid: bool,
    pub centered: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("no usable font family found (searched {searched:?})")]
    Fonts { searched: Vec<PathBuf> },
    #[error("pdf engine error: {0}")]
    Engine(#[from] genpdf::error::Error),
    #[error("cannot write {}: {source}", dest.display())]
    Write {
        dest: PathBuf,
        source: std::io::Error,
    },
}

/// The paginated-document engine boundary. Implementations take a block
/// sequence and return one complete artifact as bytes; they hold no state
/// across calls.
pub trait DocumentRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, RenderError>;
}

/// Font directories searched for an embeddable family. Portuguese section
/// headings need embedded fonts, so the PDF builtins are not an option.
const FONT_DIRS: &[&str] = &[
    "./fonts",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/truetype/liberation",
    "/System/Library/Fonts",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
];

const FONT_FAMILY: &str = "LiberationSans";

const HEADER_CELL_SIZE: u8 = 11;
const BODY_CELL_SIZE: u8 = 10;

/// genpdf-backed renderer. Each `render` call builds a fresh `Document`, so
/// concurrent renders share nothing.
pub struct PdfRenderer {
    font_dirs: Vec<PathBuf>,
}

impl PdfRenderer {
    pub fn new() -> Self {
        let mut font_dirs: Vec<PathBuf> = FONT_DIRS.iter().map(PathBuf::from).collect();
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            font_dirs.insert(0, PathBuf::from(manifest_dir).join("fonts"));
        }
        Self { font_dirs }
    }

    fn font_family(&self) -> Result<fonts::FontFamily<fonts::FontData>, RenderError> {
        self.font_dirs
            .iter()
            .filter(|dir| dir.exists())
            .find_map(|dir| fonts::from_files(dir, FONT_FAMILY, None).ok())
            .ok_or_else(|| RenderError::Fonts {
                searched: self.font_dirs.clone(),
            })
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::new(self.font_family()?);
        if let Some(Block::Heading { text, .. }) = blocks.first() {
            doc.set_title(text.as_str());
        }
        doc.set_paper_size(PaperSize::Letter);
        doc.set_minimal_conformance();
        doc.set_line_spacing(1.25);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(15);
        doc.set_page_decorator(decorator);

        for block in blocks {
            push_block(&mut doc, block)?;
        }

        let mut buffer = Vec::new();
        doc.render(&mut buffer)?;
        Ok(buffer)
    }
}

fn push_block(doc: &mut Document, block: &Block) -> Result<(), RenderError> {
    match block {
        Block::Heading { text, size, color } => {
            let mut style = Style::new().bold().with_font_size(*size);
            if let Some(Rgb(r, g, b)) = color {
                style.set_color(Color::Rgb(*r, *g, *b));
            }
            doc.push(Paragraph::new(text.as_str()).styled(style));
        }
        Block::Paragraph { text, size, color } => {
            let mut style = Style::new().with_font_size(*size);
            if let Some(Rgb(r, g, b)) = color {
                style.set_color(Color::Rgb(*r, *g, *b));
            }
            doc.push(Paragraph::new(text.as_str()).styled(style));
        }
        Block::Spacer { lines } => {
            doc.push(Break::new(*lines));
        }
        Block::Table(table) => {
            doc.push(build_table(table)?);
        }
    }
    Ok(())
}

fn build_table(table: &TableBlock) -> Result<TableLayout, RenderError> {
    let mut layout = TableLayout::new(vec![1; table.columns.len()]);
    if table.style.grid {
        layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    }

    // The engine has no cell-shading primitive, so the header tint is
    // carried on the glyphs instead of behind them.
    let mut header_style = Style::new().with_font_size(HEADER_CELL_SIZE);
    if table.style.header_bold {
        header_style.set_bold();
    }
    let Rgb(r, g, b) = table.style.header_background;
    header_style.set_color(Color::Rgb(r, g, b));

    let mut header = layout.row();
    for column in &table.columns {
        header.push_element(cell(column, &header_style, table.style.centered));
    }
    header.push()?;

    let body_style = Style::new().with_font_size(BODY_CELL_SIZE);
    for row in &table.rows {
        let mut out = layout.row();
        for value in row {
            out.push_element(cell(value, &body_style, table.style.centered));
        }
        out.push()?;
    }

    Ok(layout)
}

fn cell(text: &str, style: &Style, centered: bool) -> impl Element {
    let mut p = Paragraph::new(text);
    if centered {
        p = p.aligned(Alignment::Center);
    }
    p.styled(style.clone()).padded(1)
}
