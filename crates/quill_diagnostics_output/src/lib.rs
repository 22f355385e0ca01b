//! This library contains the code required to emit Quill diagnostics: as quickfix lines for
//! editors, as JSON, or as annotated source snippets for humans.

mod display_color;
mod emit;
mod line_index;

pub use self::display_color::DisplayColor;
pub use self::emit::{emit_json, emit_quickfix, emit_snippet, quickfix_line};
pub use self::line_index::LineIndex;
