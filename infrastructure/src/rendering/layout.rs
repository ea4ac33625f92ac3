//! Page layout shared by the renderers
//!
//! Positions are in PDF points with the origin at the bottom-left corner, so
//! the cursor starts at the top margin and moves down.

use paper_application::RenderError;
use paper_domain::QuestionPaper;
use serde::{Deserialize, Serialize};

/// Points per millimetre
const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// Width and height in points
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
        }
    }

    /// Width and height in millimetres
    pub fn dimensions_mm(&self) -> (f32, f32) {
        let (w, h) = self.dimensions();
        (w / PT_PER_MM, h / PT_PER_MM)
    }
}

/// Typography and spacing of a paper (`[paper.layout]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margin: f32,
    pub title_font_size: f32,
    pub label_font_size: f32,
    pub body_font_size: f32,
    /// Advance after the title
    pub title_spacing: f32,
    /// Advance after a category label
    pub label_spacing: f32,
    /// Advance after each body line
    pub line_spacing: f32,
    /// Body indent relative to the margin
    pub indent: f32,
    /// Maximum characters per body line
    pub wrap_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin: 50.0,
            title_font_size: 16.0,
            label_font_size: 12.0,
            body_font_size: 10.0,
            title_spacing: 30.0,
            label_spacing: 20.0,
            line_spacing: 15.0,
            indent: 20.0,
            wrap_width: 90,
        }
    }
}

impl LayoutConfig {
    /// Check that a page can hold at least one line
    pub fn validate(&self) -> Result<(), RenderError> {
        let (width, height) = self.page_size.dimensions();

        if !(self.margin >= 0.0 && self.margin * 2.0 < width.min(height)) {
            return Err(RenderError::Layout(format!(
                "margin {} leaves no printable area",
                self.margin
            )));
        }
        let positive = [
            ("title_font_size", self.title_font_size),
            ("label_font_size", self.label_font_size),
            ("body_font_size", self.body_font_size),
            ("title_spacing", self.title_spacing),
            ("label_spacing", self.label_spacing),
            ("line_spacing", self.line_spacing),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(RenderError::Layout(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.indent < 0.0 || self.margin + self.indent >= width {
            return Err(RenderError::Layout(format!(
                "indent {} does not fit the page",
                self.indent
            )));
        }
        if self.wrap_width == 0 {
            return Err(RenderError::Layout("wrap_width must be at least 1".to_string()));
        }
        Ok(())
    }

    fn font_size(&self, style: LineStyle) -> f32 {
        match style {
            LineStyle::Title => self.title_font_size,
            LineStyle::Label => self.label_font_size,
            LineStyle::Body => self.body_font_size,
        }
    }

    fn spacing(&self, style: LineStyle) -> f32 {
        match style {
            LineStyle::Title => self.title_spacing,
            LineStyle::Label => self.label_spacing,
            LineStyle::Body => self.line_spacing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Label,
    Body,
}

impl LineStyle {
    pub fn is_bold(&self) -> bool {
        !matches!(self, LineStyle::Body)
    }
}

/// One line of text at its final position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: LineStyle,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

struct Cursor<'a> {
    config: &'a LayoutConfig,
    top: f32,
    y: f32,
    pages: Vec<Page>,
}

impl<'a> Cursor<'a> {
    fn new(config: &'a LayoutConfig) -> Self {
        let top = config.page_size.dimensions().1 - config.margin;
        Self {
            config,
            top,
            y: top,
            pages: vec![Page::default()],
        }
    }

    /// Start a new page unless `advance` more points fit above the bottom margin
    fn reserve(&mut self, advance: f32) {
        let started = self.pages.last().is_some_and(|page| !page.lines.is_empty());
        if started && self.y - advance < self.config.margin {
            self.pages.push(Page::default());
            self.y = self.top;
        }
    }

    fn place(&mut self, text: String, style: LineStyle, x: f32) {
        self.reserve(0.0);
        let line = PlacedLine {
            text,
            style,
            font_size: self.config.font_size(style),
            x,
            y: self.y,
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
        self.y -= self.config.spacing(style);
    }
}

/// Lay out the title and every selected question, in selection order
pub fn layout(paper: &QuestionPaper, config: &LayoutConfig) -> Result<Vec<Page>, RenderError> {
    config.validate()?;

    let mut cursor = Cursor::new(config);
    let body_x = config.margin + config.indent;

    cursor.place(paper.title.clone(), LineStyle::Title, config.margin);
    for record in paper.selection.records() {
        // A label stays on the same page as the first line of its question
        cursor.reserve(config.label_spacing);
        cursor.place(
            format!("{}:", record.category()),
            LineStyle::Label,
            config.margin,
        );
        for line in record.text().split('\n') {
            for wrapped in wrap(line.trim(), config.wrap_width) {
                cursor.place(wrapped, LineStyle::Body, body_x);
            }
        }
    }

    Ok(cursor.pages)
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Words longer than `width` are split. An empty input yields one empty line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
