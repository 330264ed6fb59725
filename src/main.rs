use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use torrentinfo::config::Config;
use torrentinfo::render::{DisplayOptions, Formatter, Style};
use torrentinfo::torrent::{report, Torrent, TorrentError};

#[derive(Parser, Debug)]
#[command(version, about = "Print information about torrent files")]
struct Args {
    /// Show basic file information (default)
    #[arg(short, long)]
    basic: bool,

    /// Only show top level file/directory
    #[arg(short, long)]
    top: bool,

    /// Show files within the torrent
    #[arg(short, long)]
    files: bool,

    /// Dump the whole file hierarchy
    #[arg(short, long)]
    dump: bool,

    /// Only print out ascii
    #[arg(short, long)]
    ascii: bool,

    /// No ANSI colour
    #[arg(short, long)]
    nocolour: bool,

    /// Torrent files to process
    #[arg(required = true)]
    filename: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring torrentinfo.toml: {err}");
            Config::default()
        }
    };

    let opts = DisplayOptions {
        indent: config.indent,
        ascii_only: args.ascii,
    };
    let colour = config.colour && !args.nocolour;

    let stdout = io::stdout();
    let mut formatter = Formatter::new(stdout.lock(), colour);

    // one decode-then-render cycle per file; a failure aborts only that file
    let mut failed = false;
    for filename in &args.filename {
        if let Err(err) = report_file(&mut formatter, filename, &args, &opts) {
            match err {
                TorrentError::MissingInfo => {
                    eprintln!("Missing \"info\" section in {}", filename.display())
                }
                TorrentError::Io(err) => {
                    eprintln!("Could not read {}: {}", filename.display(), err)
                }
                _ => eprintln!(
                    "Could not parse {} as a valid torrent file.",
                    filename.display()
                ),
            }
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report_file<W: Write>(
    f: &mut Formatter<W>,
    filename: &Path,
    args: &Args,
    opts: &DisplayOptions,
) -> Result<(), TorrentError> {
    let torrent = Torrent::from_file(filename)?;
    debug!("decoded {}", filename.display());

    let heading = filename
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.display().to_string());
    f.write(Style::BRIGHT, &format!("{heading}\n"))?;

    if args.dump {
        report::list_files(f, &torrent, opts, true)?;
    } else if args.files {
        report::basic(f, &torrent, opts)?;
        report::list_files(f, &torrent, opts, false)?;
    } else if args.top {
        report::top(f, &torrent, opts)?;
    } else {
        report::basic(f, &torrent, opts)?;
        report::basic_files(f, &torrent, opts)?;
    }
    f.write(Style::NORMAL, "\n")?;
    Ok(())
}
