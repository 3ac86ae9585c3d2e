//! Label widget: wrapped, aligned text.
//!
//! The label lays its text out as a full block of the content rectangle's
//! size, so painting it always overwrites whatever was there before.

use std::any::Any;
use std::mem;

use crate::area::{Area, AreaError};
use crate::style::{Style, TextAlign, TextInfo, VerticalAlign};
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// A widget that displays text inside its content rectangle.
///
/// Lines are split on `'\n'`. With wrapping on, each line is broken greedily
/// at spaces and words wider than the content are split hard. Without
/// wrapping, any line wider than the content fails with
/// [`AreaError::TooLarge`], as does text needing more rows than there are.
///
/// # Examples
///
/// ```ignore
/// let label = Label::new("Hello, world!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    text_info: TextInfo,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_info: TextInfo::default(),
        }
    }

    /// Builder: set alignment and wrapping.
    pub fn with_text_info(mut self, text_info: TextInfo) -> Self {
        self.text_info = text_info;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_info(&self) -> &TextInfo {
        &self.text_info
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_text_info(&mut self, text_info: TextInfo) {
        self.text_info = text_info;
    }

    /// Blank the label. The next paint clears its content rectangle.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Lay the text out as exactly `rows` lines of `columns` characters.
    pub fn layout(&self, rows: usize, columns: usize) -> Result<String, AreaError> {
        let too_large = || AreaError::TooLarge {
            rows: rows as i32,
            columns: columns as i32,
        };

        let mut lines = Vec::new();
        for line in self.text.split('\n') {
            let pieces = if self.text_info.text_wrap {
                wrap_line(line, columns)
            } else if line.chars().count() > columns {
                return Err(too_large());
            } else {
                vec![line.to_owned()]
            };
            for piece in pieces {
                if lines.len() == rows {
                    return Err(too_large());
                }
                lines.push(align(&piece, columns, self.text_info.text_align));
            }
        }

        let spare = rows - lines.len();
        let above = match self.text_info.vertical_align {
            VerticalAlign::Top => 0,
            VerticalAlign::Center => spare / 2,
            VerticalAlign::Bottom => spare,
        };
        let blank = " ".repeat(columns);
        let mut block = vec![blank.clone(); above];
        block.append(&mut lines);
        block.resize(rows, blank);
        Ok(block.join("\n"))
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn render_to_area(&self, area: &mut Area) -> Result<(), AreaError> {
        let content = *area.model().with_padding();
        let text = self.layout(content.rows() as usize, content.columns() as usize)?;
        area.reset_cursor();
        area.write(&text)
    }

    fn apply_style(&mut self, style: &Style) {
        self.text_info = style.text_info;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// Break `line` into pieces no wider than `width`.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current: Vec<char> = Vec::new();
    let mut started = false;

    for word in line.split(' ') {
        let mut word: Vec<char> = word.chars().collect();
        let needed = if started {
            current.len() + 1 + word.len()
        } else {
            word.len()
        };
        if needed <= width {
            if started {
                current.push(' ');
            }
            current.extend(word);
            started = true;
            continue;
        }

        if started {
            pieces.push(mem::take(&mut current).into_iter().collect());
        }
        // A space that lands on a break is swallowed by it.
        if word.is_empty() {
            started = false;
            continue;
        }
        while word.len() > width {
            let rest = word.split_off(width);
            pieces.push(word.into_iter().collect());
            word = rest;
        }
        current = word;
        started = true;
    }

    if started || pieces.is_empty() {
        pieces.push(current.into_iter().collect());
    }
    pieces
}

/// Pad `piece` to `width` according to `text_align`.
fn align(piece: &str, width: usize, text_align: TextAlign) -> String {
    let spare = width.saturating_sub(piece.chars().count());
    let left = match text_align {
        TextAlign::Left => 0,
        TextAlign::Center => spare / 2,
        TextAlign::Right => spare,
    };
    format!("{}{piece}{}", " ".repeat(left), " ".repeat(spare - left))
}

// ===========================================================================
// Tests
// ===========================================================================
