pub mod state;
pub mod token;

pub use state::{tokenize_document, tokenize_line, ColorState};
pub use token::{classify, CharClass, InkColor, Token};
