//! Border glyph sets.

/// Named border glyph sets, usable from style strings (`border=thin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderKind {
    #[default]
    Double,
    Thin,
    Heavy,
    Round,
    Ascii,
}

impl BorderKind {
    /// The glyphs drawn for this kind.
    pub const fn glyphs(self) -> Border {
        match self {
            BorderKind::Double => Border::DOUBLE,
            BorderKind::Thin => Border::THIN,
            BorderKind::Heavy => Border::HEAVY,
            BorderKind::Round => Border::ROUND,
            BorderKind::Ascii => Border::ASCII,
        }
    }

    /// Parse a kind name as written in a style string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "double" => Some(BorderKind::Double),
            "thin" => Some(BorderKind::Thin),
            "heavy" => Some(BorderKind::Heavy),
            "round" => Some(BorderKind::Round),
            "ascii" => Some(BorderKind::Ascii),
            _ => None,
        }
    }

    /// The name used in style strings.
    pub const fn name(self) -> &'static str {
        match self {
            BorderKind::Double => "double",
            BorderKind::Thin => "thin",
            BorderKind::Heavy => "heavy",
            BorderKind::Round => "round",
            BorderKind::Ascii => "ascii",
        }
    }
}

/// The six single-character glyphs a border is drawn with.
///
/// ```text
/// ╔═╗
/// ║x║
/// ╚═╝
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Border {
    pub const DOUBLE: Border = Border {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    pub const THIN: Border = Border {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const HEAVY: Border = Border {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    pub const ROUND: Border = Border {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    pub const ASCII: Border = Border {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// Every edge and corner drawn with the same glyph.
    pub const fn uniform(glyph: char) -> Self {
        Border {
            top_left: glyph,
            top_right: glyph,
            bottom_left: glyph,
            bottom_right: glyph,
            horizontal: glyph,
            vertical: glyph,
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Border::DOUBLE
    }
}
