use std::io::Write;

use super::*;

/// A [`RenderSink`] writing to any [`Write`]r.
///
/// Styled fragments are written as `escape [bold] text reset` if coloring is enabled;
/// otherwise (the default) only the text is written.
#[derive(Debug, Clone)]
pub struct ConsoleWriter<W> {
    writer: W,
    colored: bool,
}

impl<W: Write> ConsoleWriter<W> {
    /// Creates an uncolored sink
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            colored: false,
        }
    }

    /// If *true*, fragments are wrapped in ANSI escape sequences
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleWriter<io::Stdout> {
    /// Shorthand for an uncolored sink on the standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RenderSink for ConsoleWriter<W> {
    fn emit(&mut self, text: &dyn Display, style: Style, bold: bool) -> io::Result<()> {
        if !self.colored || (style == Style::Default && !bold) {
            return write!(self.writer, "{text}");
        }

        let bold = if bold { BOLD } else { "" };
        write!(self.writer, "{}{bold}{text}{RESET}", style.escape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(colored: bool, f: impl FnOnce(&mut ConsoleWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut sink = ConsoleWriter::new(Vec::new()).colored(colored);
        f(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn uncolored_writes_text_only() {
        let out = rendered(false, |s| {
            s.styled("a", Style::Red)?;
            s.bold(&42, Style::BrightBlue)?;
            s.plain("b")?;
            s.newline()
        });
        assert_eq!(out, "a42b\n");
    }

    #[test]
    fn colored_wraps_fragments() {
        let out = rendered(true, |s| {
            s.styled("a", Style::Red)?;
            s.bold("b", Style::Orange)?;
            s.bold("c", Style::Default)?;
            s.plain("d")
        });
        assert_eq!(
            out,
            "\x1b[31ma\x1b[0m\x1b[38;5;208m\x1b[1mb\x1b[0m\x1b[1mc\x1b[0md"
        );
    }

    #[test]
    fn defaults_to_uncolored() {
        let sink = ConsoleWriter::new(Vec::<u8>::new());
        assert!(!sink.is_colored());
        assert!(sink.colored(true).is_colored());
    }

    #[test]
    fn usable_through_mutable_reference() {
        fn write_x<S: RenderSink>(mut sink: S) {
            sink.styled("x", Style::Green).unwrap();
        }

        let mut sink = ConsoleWriter::new(Vec::new()).colored(true);
        write_x(&mut sink);
        assert_eq!(sink.get_ref().as_slice(), b"\x1b[32mx\x1b[0m");
    }
}
