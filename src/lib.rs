// lib.rs - Library interface for the torrentinfo CLI

pub mod bencode;
pub mod config;
pub mod render;
pub mod torrent;

// Re-export commonly used types for easier testing
pub use bencode::{decode, ByteCursor, DecodeError, Dict, Value};
pub use render::{dump, DisplayOptions, Formatter, Style};
pub use torrent::{Torrent, TorrentError};
