//! Terminal output for search results

use crate::search::Excerpt;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print excerpts with the match highlighted
///
/// Each excerpt is preceded by its byte offset and paragraph range and
/// separated from the next by `--`.
pub fn print_excerpts(excerpts: &[Excerpt<'_>], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_excerpts(&mut stdout, excerpts)
}

/// Write excerpts to any color-capable writer
pub fn write_excerpts<W: WriteColor>(out: &mut W, excerpts: &[Excerpt<'_>]) -> io::Result<()> {
    for (i, excerpt) in excerpts.iter().enumerate() {
        if i > 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            writeln!(out, "--")?;
            out.reset()?;
        }

        // Header: offset and paragraph range
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", excerpt.start)?;
        out.reset()?;
        writeln!(
            out,
            " [{}..{})",
            excerpt.paragraph.open, excerpt.paragraph.close
        )?;

        write_trimmed(out, excerpt.before(), Trim::Start)?;

        // The match itself (highlighted)
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", String::from_utf8_lossy(excerpt.matched()))?;
        out.reset()?;

        write_trimmed(out, excerpt.after(), Trim::End)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Print a match count
pub fn print_match_count(query: &str, count: usize) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(stdout, "{}", query)?;
    stdout.reset()?;
    write!(stdout, ":")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(stdout, "{}", count)?;
    stdout.reset()?;
    Ok(())
}

enum Trim {
    Start,
    End,
}

/// Write context text without the leading/trailing line breaks of the
/// paragraph, so excerpts stay compact in a terminal
fn write_trimmed<W: Write>(out: &mut W, bytes: &[u8], trim: Trim) -> io::Result<()> {
    let text = String::from_utf8_lossy(bytes);
    let is_break = |c: char| c == '\r' || c == '\n';
    let text = match trim {
        Trim::Start => text.trim_start_matches(is_break),
        Trim::End => text.trim_end_matches(is_break),
    };
    write!(out, "{}", text)
}
