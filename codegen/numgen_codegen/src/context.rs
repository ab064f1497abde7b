//! Emission context and output buffer.

/// Indentation-aware output buffer owned by one generation run.
///
/// The generators never write to process stdout; they build the artifact
/// here and the caller decides where it goes.
pub struct EmitContext {
    /// Current indentation level.
    indent: usize,
    /// Generated source output.
    output: String,
}

impl EmitContext {
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn indentation_tracks_nesting() {
        let mut ctx = EmitContext::new();
        ctx.writeln("line1");
        ctx.indent();
        ctx.writeln("line2");
        ctx.indent();
        ctx.writeln("line3");
        ctx.dedent();
        ctx.writeln("line4");
        ctx.dedent();
        ctx.writeln("line5");

        assert_eq!(
            ctx.take_output(),
            "line1\n    line2\n        line3\n    line4\nline5\n"
        );
    }

    #[test]
    fn take_output_resets_buffer() {
        let mut ctx = EmitContext::new();
        ctx.writeln("once");
        assert_eq!(ctx.take_output(), "once\n");
        assert_eq!(ctx.take_output(), "");
    }
}
