//! Metadata readers and the ordered fallback chain.
//!
//! Every reader owns its file handle for the duration of one `read` call;
//! handles are released on every exit path when the call returns.

use crate::constants::EXIF_PAYLOAD_MARKER;
use exif::Exif;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// Failure of a single reader on a single file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// File could not be opened or read.
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata is missing or could not be decoded.
    #[error("{0}")]
    Exif(#[from] exif::Error),

    /// No embedded EXIF payload was found in the file bytes.
    #[error("no embedded EXIF payload found")]
    NoPayload,

    /// The chain has no readers configured.
    #[error("no metadata readers configured")]
    NoReaders,
}

/// A source of embedded tag metadata for a file.
pub trait MetadataReader: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Read the tag set of `path`.
    fn read(&self, path: &Path) -> Result<Exif, ReadError>;
}

/// Parses the file through its container format (JPEG, TIFF, PNG, WebP, HEIF).
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerReader;

impl MetadataReader for ContainerReader {
    fn name(&self) -> &'static str {
        "container"
    }

    fn read(&self, path: &Path) -> Result<Exif, ReadError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Ok(exif::Reader::new().read_from_container(&mut reader)?)
    }
}

/// Scans raw file bytes for an embedded `Exif\0\0` payload.
///
/// Picks up metadata in files whose container is not recognised, such as raw
/// formats carrying a JPEG preview with an APP1 segment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedScanReader;

impl MetadataReader for EmbeddedScanReader {
    fn name(&self) -> &'static str {
        "embedded-scan"
    }

    fn read(&self, path: &Path) -> Result<Exif, ReadError> {
        let data = std::fs::read(path)?;
        parse_embedded(&data)
    }
}

/// Parse the first embedded EXIF payload in `data` that decodes.
fn parse_embedded(data: &[u8]) -> Result<Exif, ReadError> {
    let marker_len = EXIF_PAYLOAD_MARKER.len();
    let mut last_error = ReadError::NoPayload;
    let mut offset = 0;

    while let Some(pos) = find_marker(&data[offset..]) {
        let start = offset + pos + marker_len;
        match exif::Reader::new().read_raw(data[start..].to_vec()) {
            Ok(exif) => return Ok(exif),
            Err(e) => last_error = ReadError::Exif(e),
        }
        offset = offset + pos + 1;
    }

    Err(last_error)
}

fn find_marker(haystack: &[u8]) -> Option<usize> {
    haystack
        .windows(EXIF_PAYLOAD_MARKER.len())
        .position(|window| window == EXIF_PAYLOAD_MARKER)
}

/// Ordered list of readers tried until one succeeds.
pub struct ReaderChain {
    readers: Vec<Box<dyn MetadataReader>>,
}

impl ReaderChain {
    /// Create a chain from readers in priority order.
    pub fn new(readers: Vec<Box<dyn MetadataReader>>) -> Self {
        Self { readers }
    }

    /// Read metadata with the first reader that succeeds.
    ///
    /// When every reader fails, the primary reader's error is returned since
    /// it describes the file's own container.
    pub fn read(&self, path: &Path) -> Result<Exif, ReadError> {
        let mut first_error = None;

        for reader in &self.readers {
            match reader.read(path) {
                Ok(exif) => return Ok(exif),
                Err(e) => {
                    trace!(
                        "Reader '{}' failed on {}: {}",
                        reader.name(),
                        path.display(),
                        e
                    );
                    first_error.get_or_insert(e);
                }
            }
        }

        Err(first_error.unwrap_or(ReadError::NoReaders))
    }
}

impl Default for ReaderChain {
    fn default() -> Self {
        Self::new(vec![Box::new(ContainerReader), Box::new(EmbeddedScanReader)])
    }
}

impl std::fmt::Debug for ReaderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.readers.iter().map(|r| r.name()))
            .finish()
    }
}
