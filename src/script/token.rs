use std::fmt;

/// Switches the ink color; never rendered.
pub const TOGGLE_CHAR: char = '#';
/// Renders as an empty cell.
pub const SPACE_CHAR: char = ' ';
/// Alternative way to write an empty cell.
pub const BLANK_ESCAPE_CHAR: char = '$';

/// Ink color of a glyph. The name doubles as the color directory inside a variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InkColor {
    Primary,
    Secondary,
}

impl InkColor {
    /// Indexed by the alternator of the color state machine.
    pub const CYCLE: [InkColor; 2] = [InkColor::Primary, InkColor::Secondary];

    pub fn name(self) -> &'static str {
        match self {
            InkColor::Primary => "blue",
            InkColor::Secondary => "black",
        }
    }

    pub fn css_class(self) -> String {
        format!("cl{}", self.name())
    }
}

impl fmt::Display for InkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rendered cell of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Blank,
    Glyph { char_code: u32, color: InkColor },
}

impl Token {
    pub fn is_glyph(&self) -> bool {
        matches!(self, Token::Glyph { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Toggle,
    Blank,
    Glyph,
}

pub fn classify(c: char) -> CharClass {
    match c {
        TOGGLE_CHAR => CharClass::Toggle,
        SPACE_CHAR | BLANK_ESCAPE_CHAR => CharClass::Blank,
        _ => CharClass::Glyph,
    }
}
