//! Core geometry types: Coordinates, Spacing, Rectangle, RestrictedCoordinates.
//!
//! Positions are `(row, column)` pairs in terminal cells. A [`Rectangle`] is
//! inclusive on all four edges, so a rectangle whose corners coincide covers
//! exactly one cell. Nesting of the box model is done with
//! [`Rectangle::inner_rect`].

use std::ops::{Add, Sub};

/// Errors from invalid coordinate moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("invalid row coordinate {row}: crosses the opposite edge")]
    InvalidRow { row: i32 },
    #[error("invalid column coordinate {column}: crosses the opposite edge")]
    InvalidColumn { column: i32 },
    #[error("coordinate ({row}, {column}) is out of bounds")]
    OutOfBounds { row: i32, column: i32 },
}

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// An unrestricted `(row, column)` position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub row: i32,
    pub column: i32,
}

impl Coordinates {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coordinates = Coordinates { row: 0, column: 0 };

    /// Create new coordinates.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl Add for Coordinates {
    type Output = Coordinates;
    #[inline]
    fn add(self, rhs: Coordinates) -> Coordinates {
        Coordinates { row: self.row + rhs.row, column: self.column + rhs.column }
    }
}

impl Sub for Coordinates {
    type Output = Coordinates;
    #[inline]
    fn sub(self, rhs: Coordinates) -> Coordinates {
        Coordinates { row: self.row - rhs.row, column: self.column - rhs.column }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Per-side offsets, used for margin, border and padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    /// Zero spacing on all sides.
    pub const ZERO: Spacing = Spacing { top: 0, right: 0, bottom: 0, left: 0 };

    /// Create spacing with explicit values for each side.
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub const fn width(self) -> i32 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub const fn height(self) -> i32 {
        self.top + self.bottom
    }
}

// ---------------------------------------------------------------------------
// Rectangle
// ---------------------------------------------------------------------------

/// A rectangle described by its corners, inclusive on every edge.
///
/// Only the top-left and bottom-right corners are stored; the other two are
/// derived, so moving any corner moves the row or column it shares with its
/// neighbours. The ordering `top <= bottom` and `left <= right` holds for
/// every value of this type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    top_left: Coordinates,
    bottom_right: Coordinates,
}

impl Rectangle {
    /// Create a rectangle from two opposite corners.
    pub fn new(top_left: Coordinates, bottom_right: Coordinates) -> Result<Self, CoordinateError> {
        if top_left.column > bottom_right.column {
            return Err(CoordinateError::InvalidColumn { column: bottom_right.column });
        }
        if top_left.row > bottom_right.row {
            return Err(CoordinateError::InvalidRow { row: bottom_right.row });
        }
        Ok(Self { top_left, bottom_right })
    }

    /// A `rows` x `columns` rectangle anchored at the origin.
    pub fn with_size(rows: i32, columns: i32) -> Result<Self, CoordinateError> {
        Self::new(Coordinates::ORIGIN, Coordinates::new(rows - 1, columns - 1))
    }

    #[inline]
    pub const fn top_left(&self) -> Coordinates {
        self.top_left
    }

    #[inline]
    pub const fn top_right(&self) -> Coordinates {
        Coordinates { row: self.top_left.row, column: self.bottom_right.column }
    }

    #[inline]
    pub const fn bottom_left(&self) -> Coordinates {
        Coordinates { row: self.bottom_right.row, column: self.top_left.column }
    }

    #[inline]
    pub const fn bottom_right(&self) -> Coordinates {
        self.bottom_right
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.top_left.row
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.bottom_right.row
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.top_left.column
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.bottom_right.column
    }

    /// Number of rows covered: `bottom - top + 1`.
    #[inline]
    pub const fn rows(&self) -> i32 {
        self.bottom_right.row - self.top_left.row + 1
    }

    /// Number of columns covered: `right - left + 1`.
    #[inline]
    pub const fn columns(&self) -> i32 {
        self.bottom_right.column - self.top_left.column + 1
    }

    /// Move the top-left corner. Fails if it would cross the right or bottom edge.
    pub fn set_top_left(&mut self, corner: Coordinates) -> Result<(), CoordinateError> {
        if corner.column > self.right() {
            return Err(CoordinateError::InvalidColumn { column: corner.column });
        }
        if corner.row > self.bottom() {
            return Err(CoordinateError::InvalidRow { row: corner.row });
        }
        self.top_left = corner;
        Ok(())
    }

    /// Move the top-right corner. Fails if it would cross the left or bottom edge.
    pub fn set_top_right(&mut self, corner: Coordinates) -> Result<(), CoordinateError> {
        if corner.column < self.left() {
            return Err(CoordinateError::InvalidColumn { column: corner.column });
        }
        if corner.row > self.bottom() {
            return Err(CoordinateError::InvalidRow { row: corner.row });
        }
        self.top_left.row = corner.row;
        self.bottom_right.column = corner.column;
        Ok(())
    }

    /// Move the bottom-left corner. Fails if it would cross the right or top edge.
    pub fn set_bottom_left(&mut self, corner: Coordinates) -> Result<(), CoordinateError> {
        if corner.column > self.right() {
            return Err(CoordinateError::InvalidColumn { column: corner.column });
        }
        if corner.row < self.top() {
            return Err(CoordinateError::InvalidRow { row: corner.row });
        }
        self.top_left.column = corner.column;
        self.bottom_right.row = corner.row;
        Ok(())
    }

    /// Move the bottom-right corner. Fails if it would cross the left or top edge.
    pub fn set_bottom_right(&mut self, corner: Coordinates) -> Result<(), CoordinateError> {
        if corner.column < self.left() {
            return Err(CoordinateError::InvalidColumn { column: corner.column });
        }
        if corner.row < self.top() {
            return Err(CoordinateError::InvalidRow { row: corner.row });
        }
        self.bottom_right = corner;
        Ok(())
    }

    /// A new rectangle shrunk by the four offsets.
    ///
    /// This is how margin, border and padding nest inside each other. Fails
    /// when the offsets leave no cell behind.
    pub fn inner_rect(
        &self,
        top_offset: i32,
        bottom_offset: i32,
        left_offset: i32,
        right_offset: i32,
    ) -> Result<Rectangle, CoordinateError> {
        Rectangle::new(
            Coordinates::new(self.top() + top_offset, self.left() + left_offset),
            Coordinates::new(self.bottom() - bottom_offset, self.right() - right_offset),
        )
    }

    /// [`inner_rect`](Self::inner_rect) driven by a [`Spacing`].
    #[inline]
    pub fn shrink(&self, spacing: Spacing) -> Result<Rectangle, CoordinateError> {
        self.inner_rect(spacing.top, spacing.bottom, spacing.left, spacing.right)
    }

    /// Shift the rectangle by `offset`.
    #[inline]
    pub fn translate(&self, offset: Coordinates) -> Rectangle {
        Rectangle {
            top_left: self.top_left + offset,
            bottom_right: self.bottom_right + offset,
        }
    }

    /// Whether `point` lies inside the rectangle, edges included.
    #[inline]
    pub const fn contains(&self, point: Coordinates) -> bool {
        point.row >= self.top()
            && point.row <= self.bottom()
            && point.column >= self.left()
            && point.column <= self.right()
    }

    /// Whether `other` lies entirely inside this rectangle.
    #[inline]
    pub const fn contains_rect(&self, other: &Rectangle) -> bool {
        self.contains(other.top_left) && self.contains(other.bottom_right)
    }
}

// ---------------------------------------------------------------------------
// RestrictedCoordinates
// ---------------------------------------------------------------------------

/// A write cursor that can never leave its restriction rectangle.
///
/// Changing the bounds builds a fresh cursor at the new top-left corner
/// ([`rebound`](Self::rebound)); the position is never carried across
/// unrelated bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RestrictedCoordinates {
    position: Coordinates,
    restriction: Rectangle,
}

impl RestrictedCoordinates {
    /// A cursor at the top-left corner of `restriction`.
    pub const fn new(restriction: Rectangle) -> Self {
        Self { position: restriction.top_left, restriction }
    }

    /// A cursor at `position`, which must lie inside `restriction`.
    pub fn at(position: Coordinates, restriction: Rectangle) -> Result<Self, CoordinateError> {
        let mut cursor = Self::new(restriction);
        cursor.move_to(position)?;
        Ok(cursor)
    }

    /// Replace the restriction; the cursor restarts at its top-left corner.
    #[must_use]
    pub const fn rebound(self, restriction: Rectangle) -> Self {
        Self::new(restriction)
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.position.row
    }

    #[inline]
    pub const fn column(&self) -> i32 {
        self.position.column
    }

    #[inline]
    pub const fn position(&self) -> Coordinates {
        self.position
    }

    #[inline]
    pub const fn restriction(&self) -> &Rectangle {
        &self.restriction
    }

    /// Position relative to the restriction's top-left corner.
    #[inline]
    pub fn relative(&self) -> Coordinates {
        self.position - self.restriction.top_left
    }

    pub fn set_row(&mut self, row: i32) -> Result<(), CoordinateError> {
        if row < self.restriction.top() || row > self.restriction.bottom() {
            return Err(CoordinateError::OutOfBounds { row, column: self.position.column });
        }
        self.position.row = row;
        Ok(())
    }

    pub fn set_column(&mut self, column: i32) -> Result<(), CoordinateError> {
        if column < self.restriction.left() || column > self.restriction.right() {
            return Err(CoordinateError::OutOfBounds { row: self.position.row, column });
        }
        self.position.column = column;
        Ok(())
    }

    /// Move to `position`. On failure the cursor does not move.
    pub fn move_to(&mut self, position: Coordinates) -> Result<(), CoordinateError> {
        if !self.restriction.contains(position) {
            return Err(CoordinateError::OutOfBounds {
                row: position.row,
                column: position.column,
            });
        }
        self.position = position;
        Ok(())
    }

    /// Return to the restriction's top-left corner.
    #[inline]
    pub fn reset(&mut self) {
        self.position = self.restriction.top_left;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
