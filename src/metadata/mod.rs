//! Embedded metadata extraction.
//!
//! Reads a file's EXIF tag set, locates the GPS group and turns it into a
//! [`GeoRecord`](crate::record::GeoRecord).

mod extractor;
pub mod numeric;
mod reader;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod test_support;

pub use extractor::{Clock, Extraction, Extractor, SkipReason, extract};
pub use reader::{ContainerReader, EmbeddedScanReader, MetadataReader, ReadError, ReaderChain};
