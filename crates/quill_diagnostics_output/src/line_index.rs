use text_size::TextSize;

/// Maps the 1-based line and column positions reported in diagnostics to byte offsets in a text.
/// Columns count Unicode scalar values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Offsets from the beginning of each line
    newlines: Vec<TextSize>,

    /// Length of the whole text
    len: TextSize,
}

impl LineIndex {
    /// Constructs a new [`LineIndex`] from the given text.
    pub fn new(text: &str) -> LineIndex {
        let mut newlines = vec![TextSize::from(0)];
        let mut offset = TextSize::from(0);
        for c in text.chars() {
            offset += TextSize::of(c);
            if c == '\n' {
                newlines.push(offset);
            }
        }

        LineIndex {
            newlines,
            len: offset,
        }
    }

    /// Returns the number of lines in the text. An empty text has a single empty line.
    pub fn line_count(&self) -> usize {
        self.newlines.len()
    }

    /// Retrieves the offset to the line corresponding to the zero-based `line_index`.
    #[inline]
    pub fn line_offset(&self, line_index: usize) -> usize {
        self.newlines[line_index].into()
    }

    /// Returns the zero-based index of the line that contains `offset`.
    pub fn line_of(&self, offset: TextSize) -> usize {
        self.newlines
            .partition_point(|&line_start| line_start <= offset)
            .saturating_sub(1)
    }

    /// Returns the byte offset of the 1-based `line` and `column` in `text`. Positions past the
    /// last line are clamped to the last line, columns past the end of a line to the end of that
    /// line.
    pub fn offset(&self, text: &str, line: i32, column: i32) -> TextSize {
        let line_index = usize::try_from(line.max(1) - 1)
            .unwrap_or_default()
            .min(self.line_count() - 1);
        let line_start = self.newlines[line_index];
        let line_end = self
            .newlines
            .get(line_index + 1)
            .copied()
            .unwrap_or(self.len);

        let line_text = &text[usize::from(line_start)..usize::from(line_end)];
        let line_text = line_text.trim_end_matches(['\n', '\r']);
        let skip = usize::try_from(column.max(1) - 1).unwrap_or_default();
        let column_offset: TextSize = line_text.chars().take(skip).map(TextSize::of).sum();

        line_start + column_offset
    }
}
