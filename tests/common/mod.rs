//! Shared helpers for integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use chrono::{DateTime, Utc};
use exif::{Field, In, Rational, Tag, Value};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Degrees, minutes and tenths of arc-seconds.
pub type Dms = (u32, u32, u32);

/// Write a TIFF file carrying the given EXIF fields.
pub fn write_photo(path: &Path, fields: &[(Tag, Value)]) {
    let fields: Vec<Field> = std::iter::once((Tag::Make, ascii("TestCam")))
        .chain(fields.iter().cloned())
        .map(|(tag, value)| Field {
            tag,
            ifd_num: In::PRIMARY,
            value,
        })
        .collect();

    let mut writer = exif::experimental::Writer::new();
    for field in &fields {
        writer.push_field(field);
    }
    let mut buf = Cursor::new(Vec::new());
    writer.write(&mut buf, false).unwrap();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, buf.into_inner()).unwrap();
}

/// Write a geotagged photo with an optional `DateTimeOriginal`.
pub fn write_geotagged(
    path: &Path,
    lat: Dms,
    lat_ref: &str,
    lon: Dms,
    lon_ref: &str,
    taken: Option<&str>,
) {
    let mut fields = vec![
        (Tag::GPSLatitude, dms(lat)),
        (Tag::GPSLatitudeRef, ascii(lat_ref)),
        (Tag::GPSLongitude, dms(lon)),
        (Tag::GPSLongitudeRef, ascii(lon_ref)),
    ];
    if let Some(taken) = taken {
        fields.push((Tag::DateTimeOriginal, ascii(taken)));
    }
    write_photo(path, &fields);
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

/// Parse a written GPX file.
pub fn read_gpx(path: &Path) -> gpx::Gpx {
    gpx::read(BufReader::new(File::open(path).unwrap())).unwrap()
}

/// Timestamp of a GPX time element.
pub fn utc(time: &gpx::Time) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&time.format().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}
