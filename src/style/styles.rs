//! Style struct with typed sub-styles and a static attribute table.
//!
//! Each sub-style groups the attributes of one concern. Attribute names used
//! in style strings map onto fields through a single `match` in
//! [`Style::set_value`] and [`Style::get_value`]; there is no runtime
//! reflection.

use crate::geometry::Spacing;
use crate::style::border::BorderKind;

/// Errors from style attribute access and style-string parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("attribute '{0}' doesn't exist")]
    UnknownAttribute(String),
    #[error("invalid value '{value}' for attribute '{attribute}'")]
    InvalidValue { attribute: String, value: String },
    #[error("attribute '{0}' is a shorthand and can only be set")]
    WriteOnly(String),
    #[error("syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },
}

/// Whether a container's children stack vertically or horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Block,
    Inline,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

// ---------------------------------------------------------------------------
// Sub-styles
// ---------------------------------------------------------------------------

/// Size and spacing of a component's area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AreaInfo {
    pub rows: u16,
    pub columns: u16,
    pub margin_top: u16,
    pub margin_bottom: u16,
    pub margin_left: u16,
    pub margin_right: u16,
    pub padding_top: u16,
    pub padding_bottom: u16,
    pub padding_left: u16,
    pub padding_right: u16,
}

impl AreaInfo {
    /// An area of the given size with no margin or padding.
    pub const fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            margin_top: 0,
            margin_bottom: 0,
            margin_left: 0,
            margin_right: 0,
            padding_top: 0,
            padding_bottom: 0,
            padding_left: 0,
            padding_right: 0,
        }
    }

    /// Set all four margins (builder).
    pub const fn with_margin(mut self, margin: u16) -> Self {
        self.margin_top = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self.margin_right = margin;
        self
    }

    /// Set all four paddings (builder).
    pub const fn with_padding(mut self, padding: u16) -> Self {
        self.padding_top = padding;
        self.padding_bottom = padding;
        self.padding_left = padding;
        self.padding_right = padding;
        self
    }

    pub fn margin(&self) -> Spacing {
        Spacing::new(
            i32::from(self.margin_top),
            i32::from(self.margin_right),
            i32::from(self.margin_bottom),
            i32::from(self.margin_left),
        )
    }

    pub fn padding(&self) -> Spacing {
        Spacing::new(
            i32::from(self.padding_top),
            i32::from(self.padding_right),
            i32::from(self.padding_bottom),
            i32::from(self.padding_left),
        )
    }
}

/// How a container places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompositorInfo {
    pub orientation: Orientation,
}

/// How a text widget lays out its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextInfo {
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub text_wrap: bool,
}

impl Default for TextInfo {
    fn default() -> Self {
        Self {
            text_align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
            text_wrap: true,
        }
    }
}

/// Hit-testing behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusInfo {
    /// Claim every hit inside this component instead of passing it to children.
    pub steal_focus: bool,
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// A typed attribute value, as returned by [`Style::get_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleValue {
    Number(u16),
    Bool(bool),
    Orientation(Orientation),
    TextAlign(TextAlign),
    VerticalAlign(VerticalAlign),
    Border(Option<BorderKind>),
}

/// The full style of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub area_info: AreaInfo,
    pub compositor_info: CompositorInfo,
    pub text_info: TextInfo,
    pub focus_info: FocusInfo,
    /// Border stamped when the component is created.
    pub border: Option<BorderKind>,
}

impl Style {
    /// A style with the given size and defaults everywhere else.
    pub fn sized(rows: u16, columns: u16) -> Self {
        Self {
            area_info: AreaInfo::new(rows, columns),
            ..Self::default()
        }
    }

    /// Set the orientation (builder).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.compositor_info.orientation = orientation;
        self
    }

    /// Set the border kind (builder).
    pub fn with_border(mut self, border: BorderKind) -> Self {
        self.border = Some(border);
        self
    }

    /// Set `steal_focus` (builder).
    pub fn with_steal_focus(mut self, steal_focus: bool) -> Self {
        self.focus_info.steal_focus = steal_focus;
        self
    }

    /// Set an attribute from its textual value.
    ///
    /// On error the style is unchanged.
    pub fn set_value(&mut self, attribute: &str, value: &str) -> Result<(), StyleError> {
        let area = &mut self.area_info;
        match attribute {
            "rows" => area.rows = number(attribute, value)?,
            "columns" => area.columns = number(attribute, value)?,
            "margin_top" => area.margin_top = number(attribute, value)?,
            "margin_bottom" => area.margin_bottom = number(attribute, value)?,
            "margin_left" => area.margin_left = number(attribute, value)?,
            "margin_right" => area.margin_right = number(attribute, value)?,
            "margin" => *area = area.with_margin(number(attribute, value)?),
            "padding_top" => area.padding_top = number(attribute, value)?,
            "padding_bottom" => area.padding_bottom = number(attribute, value)?,
            "padding_left" => area.padding_left = number(attribute, value)?,
            "padding_right" => area.padding_right = number(attribute, value)?,
            "padding" => *area = area.with_padding(number(attribute, value)?),
            "display" => {
                self.compositor_info.orientation = match value {
                    "block" => Orientation::Block,
                    "inline" => Orientation::Inline,
                    _ => return Err(invalid(attribute, value)),
                }
            }
            "text_align" => {
                self.text_info.text_align = match value {
                    "left" => TextAlign::Left,
                    "center" => TextAlign::Center,
                    "right" => TextAlign::Right,
                    _ => return Err(invalid(attribute, value)),
                }
            }
            "vertical_align" => {
                self.text_info.vertical_align = match value {
                    "top" => VerticalAlign::Top,
                    "center" => VerticalAlign::Center,
                    "bottom" => VerticalAlign::Bottom,
                    _ => return Err(invalid(attribute, value)),
                }
            }
            "text_wrap" => self.text_info.text_wrap = boolean(attribute, value)?,
            "steal_focus" => self.focus_info.steal_focus = boolean(attribute, value)?,
            "border" => {
                self.border = match value {
                    "none" => None,
                    name => Some(BorderKind::from_name(name).ok_or_else(|| invalid(attribute, value))?),
                }
            }
            _ => return Err(StyleError::UnknownAttribute(attribute.to_owned())),
        }
        Ok(())
    }

    /// Read an attribute by name.
    pub fn get_value(&self, attribute: &str) -> Result<StyleValue, StyleError> {
        let area = &self.area_info;
        let value = match attribute {
            "rows" => StyleValue::Number(area.rows),
            "columns" => StyleValue::Number(area.columns),
            "margin_top" => StyleValue::Number(area.margin_top),
            "margin_bottom" => StyleValue::Number(area.margin_bottom),
            "margin_left" => StyleValue::Number(area.margin_left),
            "margin_right" => StyleValue::Number(area.margin_right),
            "padding_top" => StyleValue::Number(area.padding_top),
            "padding_bottom" => StyleValue::Number(area.padding_bottom),
            "padding_left" => StyleValue::Number(area.padding_left),
            "padding_right" => StyleValue::Number(area.padding_right),
            "margin" | "padding" => return Err(StyleError::WriteOnly(attribute.to_owned())),
            "display" => StyleValue::Orientation(self.compositor_info.orientation),
            "text_align" => StyleValue::TextAlign(self.text_info.text_align),
            "vertical_align" => StyleValue::VerticalAlign(self.text_info.vertical_align),
            "text_wrap" => StyleValue::Bool(self.text_info.text_wrap),
            "steal_focus" => StyleValue::Bool(self.focus_info.steal_focus),
            "border" => StyleValue::Border(self.border),
            _ => return Err(StyleError::UnknownAttribute(attribute.to_owned())),
        };
        Ok(value)
    }
}

fn invalid(attribute: &str, value: &str) -> StyleError {
    StyleError::InvalidValue {
        attribute: attribute.to_owned(),
        value: value.to_owned(),
    }
}

fn number(attribute: &str, value: &str) -> Result<u16, StyleError> {
    value.parse().map_err(|_| invalid(attribute, value))
}

fn boolean(attribute: &str, value: &str) -> Result<bool, StyleError> {
    match value {
        "true" | "True" => Ok(true),
        "false" | "False" => Ok(false),
        _ => Err(invalid(attribute, value)),
    }
}
