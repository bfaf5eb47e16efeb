//! Tree formatter
//!
//! Writes header, entry lines, inline errors and the summary to a
//! termcolor sink: stdout for the CLI, a plain buffer for tests.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::stats::RunningStats;
use crate::tree::Entry;

use super::{CORNER, TreeOutput, connector};

/// Formatter over any [`WriteColor`] sink.
pub struct TreeFormatter<W> {
    out: W,
}

impl TreeFormatter<StandardStream> {
    /// Write straight to stdout.
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl TreeFormatter<NoColor<Vec<u8>>> {
    /// Collect uncolored output in memory.
    pub fn plain() -> Self {
        Self::new(NoColor::new(Vec::new()))
    }

    pub fn into_string(self) -> String {
        String::from_utf8_lossy(&self.out.into_inner()).into_owned()
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_styled(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }
}

fn dir_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

fn error_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red));
    spec
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn header(&mut self, label: &str) -> io::Result<()> {
        self.write_styled(label, &dir_style())?;
        writeln!(self.out)
    }

    fn entry(&mut self, entry: &Entry, prefix: &str) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, connector(entry.is_last))?;
        if entry.is_dir {
            self.write_styled(&entry.name, &dir_style())?;
        } else {
            write!(self.out, "{}", entry.name)?;
        }
        writeln!(self.out)
    }

    fn error(&mut self, message: &str, prefix: &str) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, CORNER)?;
        self.write_styled(&format!("[error opening dir: {}]", message), &error_style())?;
        writeln!(self.out)
    }

    fn finish(&mut self, stats: &RunningStats) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", stats)?;
        self.out.flush()
    }
}
