//! EXIF fixture builder for unit tests.

#![allow(clippy::unwrap_used)]

use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;
use std::path::Path;

/// Degrees, minutes and tenths of arc-seconds.
pub type Dms = (u32, u32, u32);

/// Builds a TIFF byte stream holding the requested tags.
#[derive(Default)]
pub struct ExifFixture {
    fields: Vec<Field>,
}

impl ExifFixture {
    pub fn new() -> Self {
        Self::default().field(Tag::Make, ascii("TestCam"))
    }

    pub fn field(mut self, tag: Tag, value: Value) -> Self {
        self.fields.push(Field {
            tag,
            ifd_num: In::PRIMARY,
            value,
        });
        self
    }

    pub fn gps(self, lat: Dms, lat_ref: &str, lon: Dms, lon_ref: &str) -> Self {
        self.field(Tag::GPSLatitude, dms(lat))
            .field(Tag::GPSLatitudeRef, ascii(lat_ref))
            .field(Tag::GPSLongitude, dms(lon))
            .field(Tag::GPSLongitudeRef, ascii(lon_ref))
    }

    pub fn datetime(self, value: &str) -> Self {
        self.field(Tag::DateTime, ascii(value))
    }

    pub fn tiff_bytes(&self) -> Vec<u8> {
        let mut writer = exif::experimental::Writer::new();
        for field in &self.fields {
            writer.push_field(field);
        }
        let mut buf = Cursor::new(Vec::new());
        writer.write(&mut buf, false).unwrap();
        buf.into_inner()
    }

    pub fn write_tiff(&self, path: &Path) {
        std::fs::write(path, self.tiff_bytes()).unwrap();
    }
}

pub fn ascii(value: &str) -> Value {
    Value::Ascii(vec![value.as_bytes().to_vec()])
}

pub fn dms((degrees, minutes, tenths): Dms) -> Value {
    Value::Rational(vec![
        Rational {
            num: degrees,
            denom: 1,
        },
        Rational {
            num: minutes,
            denom: 1,
        },
        Rational {
            num: tenths,
            denom: 10,
        },
    ])
}
