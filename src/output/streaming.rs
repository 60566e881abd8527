//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines
//! directly to a color-capable writer as the walker produces them.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::{DirEntryInfo, StreamingOutput};

use super::config::OutputConfig;
use super::utils::{connector, size_suffix};

/// Streaming output formatter - writes each entry as one line, unbuffered.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout. `use_color` is final here; the
    /// environment is not consulted again.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), config)
    }
}

impl<W: Write> StreamingFormatter<NoColor<W>> {
    /// Formatter writing plain text to any writer.
    pub fn plain(out: W) -> Self {
        Self::new(NoColor::new(out), OutputConfig::default())
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        if self.config.use_color {
            self.out.set_color(spec)?;
            write!(self.out, "{}", text)?;
            self.out.reset()
        } else {
            write!(self.out, "{}", text)
        }
    }
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_node(
        &mut self,
        entry: &DirEntryInfo,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, connector(is_last))?;

        if entry.is_dir {
            self.write_colored(
                &entry.name,
                ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true),
            )?;
        } else {
            write!(self.out, "{}", entry.name)?;
            self.write_colored(
                &size_suffix(entry.size),
                ColorSpec::new().set_fg(Some(Color::Green)),
            )?;
        }

        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
