//! Track document construction.

use crate::constants::TRACK_NAME;
use crate::record::GeoRecord;
use chrono::NaiveDateTime;
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use time::OffsetDateTime;
use tracing::warn;

/// A built document and the number of records left out of it.
#[derive(Debug)]
pub struct TrackDocument {
    /// The GPX document.
    pub gpx: Gpx,
    /// Records skipped for invalid coordinates.
    pub skipped: usize,
}

/// Build a GPX document from records already in output order.
///
/// Every valid record contributes one named waypoint and one unnamed track
/// point. The document holds exactly one track with one segment.
pub fn build_document(records: &[&GeoRecord], creator: &str) -> TrackDocument {
    let mut waypoints = Vec::with_capacity(records.len());
    let mut segment = TrackSegment::new();
    let mut skipped = 0;

    for record in records {
        if !record.has_valid_coordinates() {
            warn!(
                "Skipping {} with invalid coordinates ({}, {})",
                record.name, record.latitude, record.longitude
            );
            skipped += 1;
            continue;
        }

        let mut waypoint = track_point(record);
        waypoint.name = Some(record.name.clone());
        waypoints.push(waypoint);
        segment.points.push(track_point(record));
    }

    let mut track = Track::new();
    track.name = Some(TRACK_NAME.to_string());
    track.segments.push(segment);

    let mut gpx = Gpx::default();
    gpx.version = GpxVersion::Gpx11;
    gpx.creator = Some(creator.to_string());
    gpx.waypoints = waypoints;
    gpx.tracks.push(track);

    TrackDocument { gpx, skipped }
}

fn track_point(record: &GeoRecord) -> Waypoint {
    let mut point = Waypoint::new(Point::new(record.longitude, record.latitude));
    point.elevation = record.altitude;
    point.time = gpx_time(record.timestamp);
    point
}

/// Naive timestamps are taken as UTC, to whole seconds.
fn gpx_time(timestamp: NaiveDateTime) -> Option<gpx::Time> {
    OffsetDateTime::from_unix_timestamp(timestamp.and_utc().timestamp())
        .ok()
        .map(gpx::Time::from)
}
