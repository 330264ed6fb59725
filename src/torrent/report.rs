//! Report modes over a parsed torrent: a basic summary, the top-level name,
//! a brief file list, and a full detailed dump.

use std::io::{self, Write};

use crate::bencode::{Dict, Value};
use crate::render::{dump, dump_as_date, dump_as_size, DisplayOptions, Formatter, Style};
use crate::torrent::{Torrent, TorrentError};

/// Options with the indentation removed, for values that sit on the same
/// line as their label.
fn flat(opts: &DisplayOptions) -> DisplayOptions {
    DisplayOptions {
        indent: String::new(),
        ..opts.clone()
    }
}

/// Writes a bright-green label at `depth`, followed by one indent unit and
/// an optional postfix in `style`.
fn start_line<W: Write>(
    f: &mut Formatter<W>,
    opts: &DisplayOptions,
    prefix: &str,
    depth: usize,
    postfix: &str,
    style: Style,
) -> io::Result<()> {
    f.write(
        Style::BRIGHT | Style::GREEN,
        &format!("{}{}", opts.indent.repeat(depth), prefix),
    )?;
    f.write(style, &format!("{}{}", opts.indent, postfix))
}

/// Writes a labelled line for `key` looked up in `dict`. A missing key
/// produces an empty value, not an error; a date key holding a non-integer
/// is flagged inline.
fn get_line<W: Write>(
    f: &mut Formatter<W>,
    opts: &DisplayOptions,
    prefix: &str,
    key: &str,
    dict: &Dict,
    is_date: bool,
) -> io::Result<()> {
    start_line(f, opts, prefix, 1, "", Style::NORMAL)?;
    match dict.get(key.as_bytes()) {
        Some(value) if is_date => match value {
            Value::Integer(n) => dump_as_date(f, *n),
            _ => f.write(Style::BRIGHT | Style::RED, "[Not An Integer]\n"),
        },
        Some(value) => dump(f, value, &flat(opts), 0, true),
        None => f.write(Style::NORMAL, "\n"),
    }
}

/// Writes a value as a file size at `depth`, or an inline flag when it is
/// missing or not an integer.
fn size_line<W: Write>(
    f: &mut Formatter<W>,
    opts: &DisplayOptions,
    value: Option<&Value>,
    depth: usize,
) -> io::Result<()> {
    match value.and_then(Value::as_integer) {
        Some(n) => dump_as_size(f, n, opts, depth),
        None => f.write(
            Style::BRIGHT | Style::RED,
            &format!("{}[Not An Integer]\n", opts.indent.repeat(depth)),
        ),
    }
}

/// Basic summary: name, tracker url, creation metadata.
pub fn basic<W: Write>(
    f: &mut Formatter<W>,
    torrent: &Torrent,
    opts: &DisplayOptions,
) -> Result<(), TorrentError> {
    let info = torrent.info()?;
    get_line(f, opts, "name       ", "name", info, false)?;
    get_line(f, opts, "tracker url", "announce", torrent.root(), false)?;
    get_line(f, opts, "created by ", "created by", torrent.root(), false)?;
    get_line(f, opts, "created on ", "creation date", torrent.root(), true)?;
    Ok(())
}

/// Just the top-level file/directory name, with no trailing newline.
pub fn top<W: Write>(
    f: &mut Formatter<W>,
    torrent: &Torrent,
    opts: &DisplayOptions,
) -> Result<(), TorrentError> {
    let info = torrent.info()?;
    if let Some(name) = info.get(b"name") {
        dump(f, name, &flat(opts), 1, false)?;
    }
    Ok(())
}

/// File summary for the basic report: name and size for a single-file
/// torrent, file count and total size for a multi-file one.
pub fn basic_files<W: Write>(
    f: &mut Formatter<W>,
    torrent: &Torrent,
    opts: &DisplayOptions,
) -> Result<(), TorrentError> {
    let info = torrent.info()?;
    match info.get(b"files").and_then(Value::as_list) {
        None => {
            get_line(f, opts, "file name  ", "name", info, false)?;
            start_line(f, opts, "file size  ", 1, "", Style::NORMAL)?;
            size_line(f, &flat(opts), info.get(b"length"), 0)?;
        }
        Some(files) if files.len() > 1 => {
            start_line(
                f,
                opts,
                "num files  ",
                1,
                &format!("{}\n", files.len()),
                Style::NORMAL,
            )?;
            let total: i64 = files
                .iter()
                .filter_map(|file| file.as_dict()?.get(b"length")?.as_integer())
                .sum();
            start_line(f, opts, "total size ", 1, "", Style::NORMAL)?;
            dump_as_size(f, total, &flat(opts), 0)?;
        }
        Some(files) => {
            if let Some(first) = files.first().and_then(Value::as_dict) {
                get_line(f, opts, "file name  ", "path", first, false)?;
                start_line(f, opts, "file size  ", 1, "", Style::NORMAL)?;
                size_line(f, &flat(opts), first.get(b"length"), 0)?;
            }
        }
    }
    Ok(())
}

/// Indexed file list. Brief mode shows the joined path and size per file;
/// detailed mode dumps every key of each file entry plus the piece data.
pub fn list_files<W: Write>(
    f: &mut Formatter<W>,
    torrent: &Torrent,
    opts: &DisplayOptions,
    detailed: bool,
) -> Result<(), TorrentError> {
    let info = torrent.info()?;
    start_line(f, opts, "files", 1, "\n", Style::NORMAL)?;
    match info.get(b"files").and_then(Value::as_list) {
        None => {
            index_line(f, opts, 0)?;
            if let Some(name) = info.get(b"name") {
                dump(f, name, opts, 3, true)?;
            }
            size_line(f, opts, info.get(b"length"), 3)?;
        }
        Some(files) => {
            for (index, file) in files.iter().enumerate() {
                index_line(f, opts, index)?;
                let Some(entry) = file.as_dict() else { continue };
                if detailed {
                    for (key, value) in entry.sorted_entries() {
                        let label = String::from_utf8_lossy(key);
                        start_line(f, opts, &label, 3, "\n", Style::NORMAL)?;
                        dump(f, value, opts, 4, true)?;
                    }
                } else {
                    match entry.get(b"path") {
                        Some(path @ Value::ByteString(_)) => {
                            dump(f, path, opts, 3, true)?;
                        }
                        Some(Value::List(segments)) => {
                            let joined = join_path(segments);
                            dump(f, &Value::ByteString(joined), opts, 3, true)?;
                            size_line(f, opts, entry.get(b"length"), 3)?;
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    if detailed {
        if let Some(piece_length) = info.get(b"piece length") {
            start_line(f, opts, "piece length", 1, "\n", Style::NORMAL)?;
            dump(f, piece_length, opts, 3, true)?;
        }
        if let Some(pieces) = info.get(b"pieces") {
            start_line(f, opts, "pieces", 1, "\n", Style::NORMAL)?;
            dump(f, pieces, opts, 3, true)?;
        }
    }
    Ok(())
}

fn index_line<W: Write>(
    f: &mut Formatter<W>,
    opts: &DisplayOptions,
    index: usize,
) -> io::Result<()> {
    f.write(
        Style::YELLOW | Style::BRIGHT,
        &format!("{}{}", opts.indent.repeat(2), index),
    )?;
    f.write(Style::NORMAL, "\n")
}

/// Joins path segments with '/', the separator torrent files assume.
fn join_path(segments: &[Value]) -> Vec<u8> {
    let mut joined = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            joined.push(b'/');
        }
        if let Some(bytes) = segment.as_bytes() {
            joined.extend_from_slice(bytes);
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &[u8] = b"d8:announce24:faketracker.com/announce\
10:created by13:uTorrent/187013:creation datei1234567890e\
4:infod6:lengthi1048576e4:name8:file.txt12:piece lengthi32768e\
6:pieces20:aaaaaaaaaaaaaaaaaaaaee";

    const MULTI: &[u8] = b"d8:announce24:faketracker.com/announce4:infod\
5:filesld6:lengthi1024e4:pathl3:dir5:a.txteed6:lengthi2048e4:pathl3:dir5:b.txteee\
4:name3:diree";

    fn torrent(bytes: &[u8]) -> Torrent {
        Torrent::from_bytes("test.torrent".to_string(), bytes).unwrap()
    }

    fn render<F>(torrent: &Torrent, view: F) -> String
    where
        F: Fn(&mut Formatter<Vec<u8>>, &Torrent, &DisplayOptions) -> Result<(), TorrentError>,
    {
        let mut f = Formatter::new(Vec::new(), false);
        view(&mut f, torrent, &DisplayOptions::default()).unwrap();
        String::from_utf8(f.into_inner()).unwrap()
    }

    #[test]
    fn test_basic_single_file() {
        let out = render(&torrent(SINGLE), basic);
        assert_eq!(
            out,
            concat!(
                "    name           file.txt\n",
                "    tracker url    faketracker.com/announce\n",
                "    created by     uTorrent/1870\n",
                "    created on     2009/02/13 23:31:30 UTC\n",
            )
        );
    }

    #[test]
    fn test_basic_missing_optional_keys_leave_blank_lines() {
        let t = torrent(b"d8:announce3:url4:infod4:name8:file.txtee");
        let out = render(&t, basic);
        assert_eq!(
            out,
            concat!(
                "    name           file.txt\n",
                "    tracker url    url\n",
                "    created by     \n",
                "    created on     \n",
            )
        );
    }

    #[test]
    fn test_basic_non_integer_creation_date() {
        let t = torrent(b"d13:creation date3:abc4:infod4:name8:file.txtee");
        let out = render(&t, basic);
        assert!(out.contains("[Not An Integer]"));
    }

    #[test]
    fn test_basic_missing_info() {
        let t = torrent(b"d8:announce3:urle");
        let mut f = Formatter::new(Vec::new(), false);
        assert!(matches!(
            basic(&mut f, &t, &DisplayOptions::default()),
            Err(TorrentError::MissingInfo)
        ));
    }

    #[test]
    fn test_basic_files_single() {
        let out = render(&torrent(SINGLE), basic_files);
        assert_eq!(
            out,
            concat!(
                "    file name      file.txt\n",
                "    file size      1.0MB\n",
            )
        );
    }

    #[test]
    fn test_basic_files_multi() {
        let out = render(&torrent(MULTI), basic_files);
        assert_eq!(
            out,
            concat!(
                "    num files      2\n",
                "    total size     3.0KB\n",
            )
        );
    }

    #[test]
    fn test_basic_files_single_entry_list() {
        let t = torrent(
            b"d4:infod5:filesld6:lengthi1024e4:pathl5:a.txteee4:name3:diree",
        );
        let out = render(&t, basic_files);
        assert_eq!(
            out,
            concat!(
                "    file name      a.txt\n",
                "    file size      1.0KB\n",
            )
        );
    }

    #[test]
    fn test_top_no_trailing_newline() {
        let out = render(&torrent(SINGLE), top);
        assert_eq!(out, "file.txt");
    }

    #[test]
    fn test_list_files_brief_multi() {
        let out = render(&torrent(MULTI), |f, t, o| list_files(f, t, o, false));
        assert_eq!(
            out,
            concat!(
                "    files    \n",
                "        0\n",
                "            dir/a.txt\n",
                "            1.0KB\n",
                "        1\n",
                "            dir/b.txt\n",
                "            2.0KB\n",
            )
        );
    }

    #[test]
    fn test_list_files_brief_single() {
        let out = render(&torrent(SINGLE), |f, t, o| list_files(f, t, o, false));
        assert_eq!(
            out,
            concat!(
                "    files    \n",
                "        0\n",
                "            file.txt\n",
                "            1.0MB\n",
            )
        );
    }

    #[test]
    fn test_list_files_detailed() {
        let out = render(&torrent(MULTI), |f, t, o| list_files(f, t, o, true));
        // every key of each entry, keys sorted, path list indexed
        assert!(out.contains("            length    \n"));
        assert!(out.contains("                1024\n"));
        assert!(out.contains("            path    \n"));
        assert!(out.contains("                    a.txt\n"));
    }

    #[test]
    fn test_list_files_detailed_piece_data() {
        let out = render(&torrent(SINGLE), |f, t, o| list_files(f, t, o, true));
        assert!(out.contains("    piece length    \n"));
        assert!(out.contains("            32768\n"));
        assert!(out.contains("    pieces    \n"));
        // 20 ASCII bytes are printable, so the hash shows as text here
        assert!(out.contains("            aaaaaaaaaaaaaaaaaaaa\n"));
    }
}
