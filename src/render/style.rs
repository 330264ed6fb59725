use std::io::{self, Write};
use std::ops::BitOr;

/// A set of semantic style tags. Tags combine with `|`, e.g.
/// `Style::BRIGHT | Style::GREEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style(u16);

impl Style {
    /// No styling at all; the formatter writes the text untouched, so the
    /// terminal keeps whatever attributes are already in effect.
    pub const NONE: Style = Style(0);
    pub const NORMAL: Style = Style(1 << 0);
    pub const BRIGHT: Style = Style(1 << 1);
    pub const DULL: Style = Style(1 << 2);
    pub const WHITE: Style = Style(1 << 3);
    pub const GREEN: Style = Style(1 << 4);
    pub const RED: Style = Style(1 << 5);
    pub const CYAN: Style = Style(1 << 6);
    pub const YELLOW: Style = Style(1 << 7);
    pub const MAGENTA: Style = Style(1 << 8);

    fn contains(self, other: Style) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Style {
    type Output = Style;

    fn bitor(self, rhs: Style) -> Style {
        Style(self.0 | rhs.0)
    }
}

const ESCAPE: char = '\x1b';

// Weight codes come before colour codes so a reset never clobbers a colour.
const CODES: [(Style, &str); 9] = [
    (Style::NORMAL, "[0m"),
    (Style::BRIGHT, "[1m"),
    (Style::DULL, "[22m"),
    (Style::WHITE, "[37m"),
    (Style::GREEN, "[32m"),
    (Style::CYAN, "[36m"),
    (Style::YELLOW, "[33m"),
    (Style::RED, "[31m"),
    (Style::MAGENTA, "[35m"),
];

/// Maps a tag set to its ANSI escape string. Pure function of the tags and
/// the colour flag; empty when colour is off.
pub fn ansi_codes(style: Style, colour: bool) -> String {
    let mut codes = String::new();
    if !colour {
        return codes;
    }
    for (tag, code) in CODES {
        if style.contains(tag) {
            codes.push(ESCAPE);
            codes.push_str(code);
        }
    }
    codes
}

/// Styled text sink. Escape sequences are attached here and nowhere else;
/// the traversal logic only ever names semantic tags.
pub struct Formatter<W: Write> {
    out: W,
    colour: bool,
}

impl<W: Write> Formatter<W> {
    pub fn new(out: W, colour: bool) -> Self {
        Self { out, colour }
    }

    /// Writes `text` preceded by the escape codes for `style` (if any).
    pub fn write(&mut self, style: Style, text: &str) -> io::Result<()> {
        let codes = ansi_codes(style, self.colour);
        if !codes.is_empty() {
            self.out.write_all(codes.as_bytes())?;
        }
        self.out.write_all(text.as_bytes())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colour_no_codes() {
        assert_eq!(ansi_codes(Style::BRIGHT | Style::GREEN, false), "");
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(ansi_codes(Style::RED, true), "\x1b[31m");
    }

    #[test]
    fn test_combined_tags_weight_first() {
        assert_eq!(ansi_codes(Style::BRIGHT | Style::GREEN, true), "\x1b[1m\x1b[32m");
    }

    #[test]
    fn test_none_writes_raw_text() {
        let mut f = Formatter::new(Vec::new(), true);
        f.write(Style::NONE, "plain").unwrap();
        assert_eq!(f.into_inner(), b"plain");
    }

    #[test]
    fn test_formatter_colour_off() {
        let mut f = Formatter::new(Vec::new(), false);
        f.write(Style::CYAN, "42\n").unwrap();
        assert_eq!(f.into_inner(), b"42\n");
    }
}
