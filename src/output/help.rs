#![forbid(unsafe_code)]

//! Usage message with optional ANSI styling
//!
//! The text is static. Styling goes through [`WriteColor`], so the same code
//! writes plain text to a pipe and colored text to a terminal.

use crate::flags;
use crate::terminal::{self, Stream};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Column where option descriptions start
const DESCRIPTION_COLUMN: usize = 34;

const BOX_TOP: &str = "╭────────────────────────────────────────────────────────────────╮";
const BOX_BOTTOM: &str = "╰────────────────────────────────────────────────────────────────╯";

/// Visual role of a piece of help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Bold,
    Heading,
    Banner,
    Command,
    Muted,
    General,
    Tab,
    Logging,
    Placeholder,
}

impl Style {
    fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Style::Plain => {}
            Style::Bold => {
                spec.set_bold(true);
            }
            Style::Heading => {
                spec.set_bold(true).set_underline(true);
            }
            Style::Banner => {
                spec.set_bold(true).set_fg(Some(Color::Cyan));
            }
            Style::Command => {
                spec.set_fg(Some(Color::White)).set_intense(true);
            }
            Style::Muted => {
                spec.set_fg(Some(Color::Black)).set_intense(true);
            }
            Style::General => {
                spec.set_fg(Some(Color::Green));
            }
            Style::Tab => {
                spec.set_fg(Some(Color::Blue));
            }
            Style::Logging => {
                spec.set_fg(Some(Color::Magenta));
            }
            Style::Placeholder => {
                spec.set_fg(Some(Color::Yellow));
            }
        }
        spec
    }
}

/// Writes one line made of styled parts, then a newline
///
/// Plain parts are written without escape codes.
pub fn write_line<W: WriteColor>(out: &mut W, parts: &[(Style, &str)]) -> io::Result<()> {
    for (style, text) in parts {
        let spec = style.spec();
        if spec.is_none() {
            write!(out, "{}", text)?;
        } else {
            out.set_color(&spec)?;
            write!(out, "{}", text)?;
            out.reset()?;
        }
    }
    writeln!(out)
}

fn blank<W: WriteColor>(out: &mut W) -> io::Result<()> {
    write_line(out, &[])
}

/// Writes an option row: flags, optional value placeholder, description
///
/// Extra description lines are indented to the description column.
fn write_option<W: WriteColor>(
    out: &mut W,
    style: Style,
    label: &str,
    value: Option<&str>,
    description: &[&str],
) -> io::Result<()> {
    let mut width = 2 + label.chars().count();
    let mut parts = vec![(Style::Plain, "  "), (style, label)];
    if let Some(value) = value {
        width += 1 + value.chars().count();
        parts.push((Style::Plain, " "));
        parts.push((Style::Placeholder, value));
    }

    let padding = " ".repeat(DESCRIPTION_COLUMN.saturating_sub(width).max(1));
    let (first, rest) = match description.split_first() {
        Some((first, rest)) => (*first, rest),
        None => ("", &[][..]),
    };
    let first = format!("{}{}", padding, first);
    parts.push((Style::Plain, first.as_str()));
    write_line(out, &parts)?;

    let indent = " ".repeat(DESCRIPTION_COLUMN);
    for line in rest {
        write_line(out, &[(Style::Plain, indent.as_str()), (Style::Plain, *line)])?;
    }
    Ok(())
}

fn write_banner<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    write_line(out, &[(Style::Banner, BOX_TOP)])?;
    write_line(out, &[(Style::Banner, title)])?;
    write_line(out, &[(Style::Banner, BOX_BOTTOM)])
}

/// Writes the full usage message
pub fn write_help<W: WriteColor>(out: &mut W) -> io::Result<()> {
    blank(out)?;
    write_banner(
        out,
        "│                         BETTER CONTROL                         │",
    )?;
    blank(out)?;

    write_line(out, &[(Style::Bold, "USAGE:")])?;
    write_line(
        out,
        &[
            (Style::Plain, "  "),
            (Style::Command, "better-control "),
            (Style::Muted, "[options]"),
        ],
    )?;
    write_line(
        out,
        &[
            (Style::Plain, "  "),
            (Style::Command, "control "),
            (Style::Muted, "[options]"),
        ],
    )?;
    blank(out)?;

    write_line(out, &[(Style::Bold, "OPTIONS:")])?;
    write_line(out, &[(Style::Heading, "General:")])?;
    let general = [
        (flags::HELP, None, "Prints this help message"),
        (
            flags::FORCE,
            None,
            "Makes the app force to have all dependencies installed",
        ),
        (flags::SIZE, Some("<intxint>"), "Sets a custom window size"),
        (
            flags::LANG,
            None,
            "Sets the language of the app (en,es,pt)",
        ),
        (
            flags::MINIMAL,
            None,
            "Hides the notebook tabs and only shows the selected tab content",
        ),
    ];
    for (spec, value, description) in &general {
        write_option(
            out,
            Style::General,
            &spec.to_string(),
            *value,
            &[*description],
        )?;
    }
    blank(out)?;

    write_line(out, &[(Style::Heading, "Tab Selection:")])?;
    let tabs = [
        (flags::AUTOSTART, "autostart"),
        (flags::BATTERY, "battery"),
        (flags::BLUETOOTH, "bluetooth"),
        (flags::DISPLAY, "display"),
        (flags::POWER, "power"),
        (flags::USBGUARD, "usbguard"),
        (flags::VOLUME, "volume"),
    ];
    for (spec, tab) in &tabs {
        let description = format!("Starts with the {} tab open", tab);
        write_option(out, Style::Tab, &spec.to_string(), None, &[description.as_str()])?;
    }
    write_option(
        out,
        Style::Tab,
        &format!("-{}", flags::VOLUME_ALT.short()),
        None,
        &["Also starts with the volume tab open"],
    )?;
    write_option(
        out,
        Style::Tab,
        &flags::WIFI.to_string(),
        None,
        &["Starts with the wifi tab open"],
    )?;
    blank(out)?;

    write_line(out, &[(Style::Heading, "Logging:")])?;
    write_option(
        out,
        Style::Logging,
        &flags::LOG.to_string(),
        Some("<lvl/file>"),
        &[
            "The program will either log to a file if given a file path,",
            "or output to stdout based on the log level if given",
            "a value between 0 and 3.",
        ],
    )?;
    write_option(
        out,
        Style::Logging,
        &flags::REDACT.to_string(),
        None,
        &["Redact sensitive information from logs"],
    )?;
    blank(out)?;

    write_banner(
        out,
        "│         https://github.com/quantumvoid0/better-control         │",
    )?;
    blank(out)
}

/// Prints the usage message to `stream` and returns the exit code to use
///
/// Color is enabled when the stream supports it. The caller is expected to
/// exit with the returned code.
pub fn print_help(stream: Stream) -> io::Result<i32> {
    let choice = terminal::color_choice(stream);
    let mut out = match stream {
        Stream::Stdout => StandardStream::stdout(choice),
        Stream::Stderr => StandardStream::stderr(choice),
    };

    write_help(&mut out)?;
    out.flush()?;
    Ok(stream.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn render(mut buffer: Buffer) -> String {
        write_help(&mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_help_has_no_escape_codes() {
        let text = render(Buffer::no_color());
        assert!(!text.contains('\x1b'));
        assert!(text.contains("BETTER CONTROL"));
        assert!(text.contains("USAGE:"));
        assert!(text.contains("OPTIONS:"));
    }

    #[test]
    fn test_help_lists_every_flag() {
        let text = render(Buffer::no_color());
        for spec in [
            flags::HELP,
            flags::FORCE,
            flags::SIZE,
            flags::LANG,
            flags::MINIMAL,
            flags::AUTOSTART,
            flags::BATTERY,
            flags::BLUETOOTH,
            flags::DISPLAY,
            flags::POWER,
            flags::USBGUARD,
            flags::VOLUME,
            flags::WIFI,
            flags::LOG,
            flags::REDACT,
        ] {
            assert!(text.contains(&spec.to_string()), "missing {}", spec);
        }
        assert!(text.contains("  -v "));
    }

    #[test]
    fn test_descriptions_are_aligned() {
        let text = render(Buffer::no_color());
        let help_line = text
            .lines()
            .find(|l| l.starts_with("  -h, --help"))
            .unwrap();
        let size_line = text
            .lines()
            .find(|l| l.starts_with("  -s, --size"))
            .unwrap();

        assert_eq!(help_line.find("Prints"), Some(DESCRIPTION_COLUMN));
        assert_eq!(size_line.find("Sets"), Some(DESCRIPTION_COLUMN));
        assert!(size_line.contains("--size <intxint>"));
    }

    #[test]
    fn test_continuation_lines_are_indented() {
        let text = render(Buffer::no_color());
        let expected = format!("{}a value between 0 and 3.", " ".repeat(DESCRIPTION_COLUMN));
        assert!(text.lines().any(|l| l == expected));
    }

    #[test]
    fn test_colored_help_uses_ansi() {
        let text = render(Buffer::ansi());
        assert!(text.contains("\x1b["));
        assert!(text.contains("BETTER CONTROL"));
    }

    #[test]
    fn test_write_line_plain_parts_skip_escapes() {
        let mut buffer = Buffer::ansi();
        write_line(&mut buffer, &[(Style::Plain, "hello"), (Style::Plain, " world")]).unwrap();
        assert_eq!(buffer.as_slice(), b"hello world\n");
    }

    #[test]
    fn test_write_line_styled_part_resets() {
        let mut buffer = Buffer::ansi();
        write_line(&mut buffer, &[(Style::General, "-h")]).unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.starts_with("\x1b["));
        assert!(text.contains("-h"));
        assert!(text.ends_with("\x1b[0m\n"));
    }
}
