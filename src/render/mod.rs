pub mod document;
pub mod picker;
pub mod resolver;

pub use document::{build_header, write_document, DocumentAssembler};
pub use picker::{RandomPicker, SequencePicker, VariantPicker};
pub use resolver::{Fragment, GlyphResolver};
