//! Append-only output buffer for one render pass.

#[derive(Debug, Default)]
pub struct SourceWriter {
    output: String,
    lines: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.lines += text.matches('\n').count();
        self.output.push_str(text);
    }

    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.lines += 1;
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Number of newline characters written so far.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn finish(self) -> String {
        self.output
    }
}
