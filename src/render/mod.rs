/*!
# Render

Human readable, optionally ANSI-colored output of graphs and traversals.

Output is written to a [`RenderSink`], which receives text fragments together with a [`Style`]
and a bold flag. [`ConsoleWriter`] is the sink for any [`std::io::Write`]r; coloring is switched
on or off once when configuring it:
```
use vgraphs::{prelude::*, render::*};

let mut g: Graph<u32> = Graph::directed();
g.add_unweighted_edge(1, 2).unwrap();

let mut sink = ConsoleWriter::new(Vec::new()).colored(false);
g.display(&mut sink).unwrap();
assert_eq!(
    String::from_utf8(sink.into_inner()).unwrap(),
    "Directed Graph:\nGraph (Adjacency List for directed graph):\n-----------------------\n  1 --> 2\n  2 --> ∅\n"
);
```

What is written for a graph is provided by [`GraphDisplay`]:
- [`GraphDisplay::display`]: a banner depending on the [`GraphKind`](crate::repr::GraphKind) followed by the adjacency list,
- [`GraphDisplay::display_properties`]: degrees, radius/diameter, girth/circumference and connectivity,
- [`GraphDisplay::bfs_trace`] / [`GraphDisplay::dfs_trace`]: step-by-step traversals including the implied trees.
*/

use std::{fmt::Display, io};

mod console;
mod display;

pub use console::*;
pub use display::*;

/// SGR sequence resetting all attributes
pub const RESET: &str = "\x1b[0m";

/// SGR sequence switching to bold text
pub const BOLD: &str = "\x1b[1m";

/// Foreground colors of the 16-color palette plus two 256-color extensions
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Terminal default; unstyled unless combined with bold
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color index 208
    Orange,
    /// 256-color index 54
    Indigo,
}

impl Style {
    /// Returns the SGR escape sequence selecting this color (empty for [`Style::Default`])
    pub fn escape(&self) -> &'static str {
        match self {
            Style::Default => "",
            Style::Black => "\x1b[30m",
            Style::Red => "\x1b[31m",
            Style::Green => "\x1b[32m",
            Style::Yellow => "\x1b[33m",
            Style::Blue => "\x1b[34m",
            Style::Magenta => "\x1b[35m",
            Style::Cyan => "\x1b[36m",
            Style::White => "\x1b[37m",
            Style::BrightBlack => "\x1b[90m",
            Style::BrightRed => "\x1b[91m",
            Style::BrightGreen => "\x1b[92m",
            Style::BrightYellow => "\x1b[93m",
            Style::BrightBlue => "\x1b[94m",
            Style::BrightMagenta => "\x1b[95m",
            Style::BrightCyan => "\x1b[96m",
            Style::BrightWhite => "\x1b[97m",
            Style::Orange => "\x1b[38;5;208m",
            Style::Indigo => "\x1b[38;5;54m",
        }
    }
}

/// Receiver of styled text fragments
pub trait RenderSink {
    /// Writes `text` in the given style. Sinks without color support ignore `style` and `bold`.
    fn emit(&mut self, text: &dyn Display, style: Style, bold: bool) -> io::Result<()>;

    /// Writes `text` without any styling
    fn plain<T: Display + ?Sized>(&mut self, text: &T) -> io::Result<()>
    where
        Self: Sized,
    {
        self.emit(&text, Style::Default, false)
    }

    fn styled<T: Display + ?Sized>(&mut self, text: &T, style: Style) -> io::Result<()>
    where
        Self: Sized,
    {
        self.emit(&text, style, false)
    }

    fn bold<T: Display + ?Sized>(&mut self, text: &T, style: Style) -> io::Result<()>
    where
        Self: Sized,
    {
        self.emit(&text, style, true)
    }

    fn newline(&mut self) -> io::Result<()>
    where
        Self: Sized,
    {
        self.plain("\n")
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn emit(&mut self, text: &dyn Display, style: Style, bold: bool) -> io::Result<()> {
        (**self).emit(text, style, bold)
    }
}
