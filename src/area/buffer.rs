//! Area: a character grid with a box model and a bounded write cursor.
//!
//! The grid is `rows` x `columns`, row-major, space-initialised, and never
//! resized. All text goes through [`Area::add_chars`], which validates the
//! whole string against the cursor's restriction before touching the grid,
//! so a failed write leaves the area exactly as it was.

use std::fmt;

use crate::area::box_model::BoxModel;
use crate::geometry::{CoordinateError, Coordinates, Rectangle, RestrictedCoordinates, Spacing};
use crate::style::{AreaInfo, Border};

/// Errors from writing into an area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AreaError {
    #[error(transparent)]
    Geometry(#[from] CoordinateError),
    #[error("text does not fit in the {rows}x{columns} writable region")]
    TooLarge { rows: i32, columns: i32 },
}

/// A component's drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    grid: Vec<Vec<char>>,
    model: BoxModel,
    /// Restricted to `model.with_padding()` except while a frame is stamped.
    cursor: RestrictedCoordinates,
}

impl Area {
    /// Create a blank area.
    pub fn new(info: AreaInfo) -> Result<Self, AreaError> {
        let model = BoxModel::new(info)?;
        let grid = vec![vec![' '; usize::from(info.columns)]; usize::from(info.rows)];
        let cursor = RestrictedCoordinates::new(*model.with_padding());
        Ok(Self { grid, model, cursor })
    }

    /// Create a blank area and stamp `border` on it.
    pub fn with_border(info: AreaInfo, border: Option<&Border>) -> Result<Self, AreaError> {
        let mut area = Self::new(info)?;
        area.add_border(border)?;
        Ok(area)
    }

    pub fn rows(&self) -> i32 {
        self.model.area_rect().rows()
    }

    pub fn columns(&self) -> i32 {
        self.model.area_rect().columns()
    }

    pub fn model(&self) -> &BoxModel {
        &self.model
    }

    pub fn cursor(&self) -> &RestrictedCoordinates {
        &self.cursor
    }

    /// Whether a border has been stamped.
    pub fn has_border(&self) -> bool {
        self.model.border() != Spacing::ZERO
    }

    /// The character at `(row, column)`, if inside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Grid rows, top to bottom.
    pub fn grid(&self) -> &[Vec<char>] {
        &self.grid
    }

    /// Each row as a string.
    pub fn lines(&self) -> Vec<String> {
        self.grid.iter().map(|row| row.iter().collect()).collect()
    }

    /// Move the cursor to an absolute grid position inside its restriction.
    pub fn move_cursor(&mut self, position: Coordinates) -> Result<(), AreaError> {
        Ok(self.cursor.move_to(position)?)
    }

    pub fn set_cursor_row(&mut self, row: i32) -> Result<(), AreaError> {
        Ok(self.cursor.set_row(row)?)
    }

    pub fn set_cursor_column(&mut self, column: i32) -> Result<(), AreaError> {
        Ok(self.cursor.set_column(column)?)
    }

    /// Return the cursor to the top-left of the content rectangle.
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Write `text` at the cursor with the default options: a newline returns
    /// to the left edge and the cursor is restored afterwards.
    pub fn write(&mut self, text: &str) -> Result<(), AreaError> {
        self.add_chars(text, false, true)
    }

    /// Write `text` starting at the cursor.
    ///
    /// A `'\n'` moves to the next row, back to the restriction's left edge, or
    /// to the column the write started at when `column_preserve` is set. A
    /// newline as the very last character is dropped. With `ptr_preserve` the
    /// cursor returns to where it started; otherwise it stays on the last
    /// written cell.
    ///
    /// Fails with [`AreaError::TooLarge`] before writing anything if the text
    /// would leave the restriction.
    pub fn add_chars(
        &mut self,
        text: &str,
        column_preserve: bool,
        ptr_preserve: bool,
    ) -> Result<(), AreaError> {
        if !self.fits(text, column_preserve) {
            let bounds = self.cursor.restriction();
            return Err(AreaError::TooLarge {
                rows: bounds.rows(),
                columns: bounds.columns(),
            });
        }

        let start = self.cursor.position();
        let chars: Vec<char> = text.chars().collect();
        let mut last_written = None;

        for (index, &ch) in chars.iter().enumerate() {
            if ch == '\n' {
                if index + 1 == chars.len() {
                    break;
                }
                let column = if column_preserve {
                    start.column
                } else {
                    self.cursor.restriction().left()
                };
                self.cursor.move_to(Coordinates::new(self.cursor.row() + 1, column))?;
                continue;
            }

            let position = self.cursor.position();
            self.grid[position.row as usize][position.column as usize] = ch;
            last_written = Some(position);

            if position.column < self.cursor.restriction().right() {
                self.cursor.set_column(position.column + 1)?;
            }
        }

        if ptr_preserve {
            self.cursor.move_to(start)?;
        } else if let Some(last) = last_written {
            self.cursor.move_to(last)?;
        }
        Ok(())
    }

    /// Whether [`add_chars`](Self::add_chars) would accept `text` at the
    /// current cursor position.
    pub fn fits(&self, text: &str, column_preserve: bool) -> bool {
        let bounds = self.cursor.restriction();
        let start = self.cursor.relative();
        let (mut row, mut column) = (start.row, start.column);
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '\n' {
                if chars.peek().is_none() {
                    break;
                }
                row += 1;
                column = if column_preserve { start.column } else { 0 };
                if row >= bounds.rows() {
                    return false;
                }
                continue;
            }
            if row >= bounds.rows() || column >= bounds.columns() {
                return false;
            }
            column += 1;
        }
        true
    }

    /// Stamp `border` between margin and padding and shrink the content
    /// rectangle accordingly. `None` is a no-op.
    ///
    /// Fails without touching the area when the margin rectangle is too small
    /// to keep at least one content cell inside the border.
    pub fn add_border(&mut self, border: Option<&Border>) -> Result<(), AreaError> {
        let Some(border) = border else {
            return Ok(());
        };

        let bordered = self.model.bordered(Spacing::all(1))?;
        self.cursor = self.cursor.rebound(*self.model.with_margin());
        self.stamp_frame(border)?;

        self.model = bordered;
        self.cursor = self.cursor.rebound(*self.model.with_padding());
        Ok(())
    }

    /// Rebind the cursor to `restriction`, which must lie inside the grid.
    pub(crate) fn restrict(&mut self, restriction: Rectangle) -> Result<(), AreaError> {
        if !self.model.area_rect().contains_rect(&restriction) {
            return Err(CoordinateError::OutOfBounds {
                row: restriction.bottom(),
                column: restriction.right(),
            }
            .into());
        }
        self.cursor = self.cursor.rebound(restriction);
        Ok(())
    }

    /// Rebind the cursor to the content rectangle.
    pub(crate) fn restore_restriction(&mut self) {
        self.cursor = self.cursor.rebound(*self.model.with_padding());
    }

    /// Draw `border` along the edges of the cursor's restriction, which must
    /// be at least 2x2.
    pub(crate) fn stamp_frame(&mut self, border: &Border) -> Result<(), AreaError> {
        let bounds = *self.cursor.restriction();
        let inner_columns = usize::try_from(bounds.columns() - 2).unwrap_or(0);
        let inner_rows = usize::try_from(bounds.rows() - 2).unwrap_or(0);

        let horizontal = border.horizontal.to_string().repeat(inner_columns);
        let side = format!("\n{}", border.vertical).repeat(inner_rows);
        let top = format!("{}{horizontal}{}", border.top_left, border.top_right);
        let bottom = format!("\n{}{horizontal}{}", border.bottom_left, border.bottom_right);

        self.cursor.reset();
        self.add_chars(&top, false, true)?;
        self.add_chars(&side, false, false)?;
        self.add_chars(&bottom, false, true)?;

        self.cursor.move_to(bounds.top_right())?;
        self.add_chars(&side, true, true)?;
        self.cursor.reset();
        Ok(())
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
