pub mod report;

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::bencode::{decode, DecodeError, Dict, Value};

#[derive(Debug, Error)]
pub enum TorrentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The stream decoded fine but the root value is not a dictionary.
    /// This is a content-model error, caught after decoding.
    #[error("Torrent root is not a dictionary")]
    RootNotDictionary,

    #[error("Missing \"info\" section")]
    MissingInfo,
}

/// A parsed torrent file: the originating filename plus the decoded root
/// dictionary. Construction enforces the one content-model rule the decoder
/// itself does not: the root of a metainfo file must be a dictionary.
pub struct Torrent {
    pub filename: String,
    root: Dict,
}

impl Torrent {
    /// Reads a .torrent file from disk and parses its contents. An empty
    /// file fails decoding immediately.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TorrentError> {
        let buf = fs::read(&path)?;
        Self::from_bytes(path.as_ref().display().to_string(), &buf)
    }

    pub fn from_bytes(filename: String, buf: &[u8]) -> Result<Self, TorrentError> {
        match decode(buf)? {
            Value::Dict(root) => Ok(Torrent { filename, root }),
            _ => Err(TorrentError::RootNotDictionary),
        }
    }

    pub fn root(&self) -> &Dict {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key.as_bytes())
    }

    /// The `info` sub-dictionary, required by every report mode.
    pub fn info(&self) -> Result<&Dict, TorrentError> {
        self.get("info")
            .and_then(Value::as_dict)
            .ok_or(TorrentError::MissingInfo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let torrent = Torrent::from_bytes(
            "regular.torrent".to_string(),
            b"d8:announce24:faketracker.com/announce4:infod4:name8:file.txtee",
        )
        .unwrap();
        assert_eq!(torrent.filename, "regular.torrent");
        assert_eq!(
            torrent.get("announce").and_then(Value::as_str),
            Some("faketracker.com/announce")
        );
        assert!(torrent.info().is_ok());
    }

    #[test]
    fn test_root_must_be_dictionary() {
        // structurally valid bencode, wrong content model
        assert!(matches!(
            Torrent::from_bytes("foo".to_string(), b"4:fake"),
            Err(TorrentError::RootNotDictionary)
        ));
    }

    #[test]
    fn test_decode_error_propagates() {
        assert!(matches!(
            Torrent::from_bytes("foo".to_string(), b"d20:announce"),
            Err(TorrentError::Decode(DecodeError::BufferExhausted(_)))
        ));
    }

    #[test]
    fn test_empty_file_is_a_decode_error() {
        assert!(matches!(
            Torrent::from_bytes("empty.torrent".to_string(), b""),
            Err(TorrentError::Decode(DecodeError::BufferExhausted(1)))
        ));
    }

    #[test]
    fn test_missing_info() {
        let torrent =
            Torrent::from_bytes("foo".to_string(), b"d8:announce3:urle").unwrap();
        assert!(matches!(torrent.info(), Err(TorrentError::MissingInfo)));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Torrent::from_file("fakefoobar.fake"),
            Err(TorrentError::Io(_))
        ));
    }
}
