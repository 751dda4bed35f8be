use super::token::{classify, CharClass, InkColor, Token};

/// Per-line ink color state.
///
/// A toggle activates `InkColor::CYCLE[alternator]` and then flips the
/// alternator. Since the alternator starts at 0, the first toggle on a line
/// selects the primary color it already had; only the second toggle makes a
/// visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    active: InkColor,
    alternator: usize,
}

impl ColorState {
    pub fn new() -> Self {
        Self {
            active: InkColor::Primary,
            alternator: 0,
        }
    }

    pub fn active(&self) -> InkColor {
        self.active
    }

    pub fn alternator(&self) -> usize {
        self.alternator
    }

    pub fn toggle(&mut self) {
        self.active = InkColor::CYCLE[self.alternator];
        self.alternator = 1 - self.alternator;
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizes a single line; trailing whitespace is dropped first.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let mut state = ColorState::new();
    let mut tokens = Vec::new();

    for c in line.trim_end().chars() {
        match classify(c) {
            CharClass::Toggle => state.toggle(),
            CharClass::Blank => tokens.push(Token::Blank),
            CharClass::Glyph => tokens.push(Token::Glyph {
                char_code: c as u32,
                color: state.active(),
            }),
        }
    }

    tokens
}

/// One token list per input line, in input order.
pub fn tokenize_document(text: &str) -> Vec<Vec<Token>> {
    text.lines().map(tokenize_line).collect()
}
