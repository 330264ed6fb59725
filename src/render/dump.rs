use std::io::{self, Write};

use chrono::{TimeZone, Utc};

use super::style::{Formatter, Style};
use crate::bencode::Value;

/// Read-only display policy threaded through every render call. There is no
/// process-wide state; two concurrent renders can use different options.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Indentation unit, repeated once per depth level.
    pub indent: String,
    /// Restrict printability to the printable-ASCII set.
    pub ascii_only: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            ascii_only: false,
        }
    }
}

impl DisplayOptions {
    fn pad(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }
}

/// Depth-first renderer. The only render state is the depth counter.
///
/// Dictionaries are shown with keys in sorted byte order regardless of the
/// decoded insertion order; a single-element list is flattened into its
/// element at the same depth.
pub fn dump<W: Write>(
    f: &mut Formatter<W>,
    value: &Value,
    opts: &DisplayOptions,
    depth: usize,
    newline: bool,
) -> io::Result<()> {
    match value {
        Value::Dict(dict) => {
            for (key, val) in dict.sorted_entries() {
                f.write(Style::NORMAL | Style::GREEN, "")?;
                if depth < 2 {
                    f.write(Style::BRIGHT, "")?;
                }
                dump_bytes(f, key, opts, depth, true)?;
                f.write(Style::NORMAL, "")?;
                dump(f, val, opts, depth + 1, true)?;
            }
            Ok(())
        }
        Value::List(items) => {
            if items.len() == 1 {
                dump(f, &items[0], opts, depth, newline)
            } else {
                for (index, item) in items.iter().enumerate() {
                    f.write(
                        Style::BRIGHT | Style::YELLOW,
                        &format!("{}{}\n", opts.pad(depth), index),
                    )?;
                    f.write(Style::NORMAL, "")?;
                    dump(f, item, opts, depth + 1, true)?;
                }
                Ok(())
            }
        }
        Value::ByteString(bytes) => dump_bytes(f, bytes, opts, depth, newline),
        Value::Integer(n) => f.write(Style::CYAN, &format!("{}{}\n", opts.pad(depth), n)),
    }
}

/// Byte strings are shown as text when printable; otherwise as a byte-count
/// placeholder so binary blobs (piece hashes and the like) never hit the
/// terminal raw.
fn dump_bytes<W: Write>(
    f: &mut Formatter<W>,
    bytes: &[u8],
    opts: &DisplayOptions,
    depth: usize,
    newline: bool,
) -> io::Result<()> {
    let pad = opts.pad(depth);
    let tail = if newline { "\n" } else { "" };
    if is_printable(bytes, opts.ascii_only) {
        let text = String::from_utf8_lossy(bytes);
        f.write(Style::NONE, &format!("{pad}{text}{tail}"))
    } else {
        f.write(
            Style::BRIGHT | Style::RED,
            &format!("{pad}[{} UTF-8 Bytes]{tail}", bytes.len()),
        )
    }
}

/// Renders an integer as a Unix epoch timestamp in UTC.
pub fn dump_as_date<W: Write>(f: &mut Formatter<W>, number: i64) -> io::Result<()> {
    match Utc.timestamp_opt(number, 0).single() {
        Some(when) => f.write(
            Style::MAGENTA,
            &format!("{}\n", when.format("%Y/%m/%d %H:%M:%S UTC")),
        ),
        None => f.write(Style::BRIGHT | Style::RED, "[Invalid Timestamp]\n"),
    }
}

/// Renders an integer as a byte count: repeated division by 1024 while the
/// value is still >= 1024 and a larger unit remains. GB is the ceiling; a
/// TB-scale value simply shows a large GB figure.
pub fn dump_as_size<W: Write>(
    f: &mut Formatter<W>,
    number: i64,
    opts: &DisplayOptions,
    depth: usize,
) -> io::Result<()> {
    let mut size = number as f64;
    let mut units: &[&str] = &["B", "KB", "MB", "GB"];
    while size >= 1024.0 && units.len() > 1 {
        size /= 1024.0;
        units = &units[1..];
    }
    f.write(
        Style::CYAN,
        &format!("{}{:.1}{}\n", opts.pad(depth), size, units[0]),
    )
}

/// Printability policy.
///
/// In ascii-only mode a string is printable when every byte falls in the
/// printable-ASCII set. Otherwise a string is printable when it passes the
/// ASCII test or its (lossily decoded) text contains no control characters
/// in U+0000..=U+001F or U+007F..=U+009F.
pub fn is_printable(bytes: &[u8], ascii_only: bool) -> bool {
    let is_ascii = bytes.iter().all(|&b| {
        b.is_ascii_graphic() || matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
    });
    if ascii_only {
        return is_ascii;
    }
    let has_control = String::from_utf8_lossy(bytes)
        .chars()
        .any(|c| matches!(c as u32, 0x00..=0x1f | 0x7f..=0x9f));
    is_ascii || !has_control
}
