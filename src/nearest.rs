//! Nearest-neighbor search: an expanding bounding-box candidate scan
//! against an R*Tree index table, re-ranked by exact Haversine distance.

use rusqlite::{Connection, Row};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::geo::{distance, valid_wgs84_coord};

/// The index and entity tables a spatial search runs against.
pub(crate) struct SpatialTarget {
    pub(crate) rtree_table: &'static str,
    pub(crate) main_table: &'static str,
    pub(crate) id_column: &'static str,
}

pub(crate) const ADDRESSES: SpatialTarget = SpatialTarget {
    rtree_table: "stadfong_rtree",
    main_table: "stadfong",
    id_column: "hnitnum",
};

pub(crate) const PLACENAMES: SpatialTarget = SpatialTarget {
    rtree_table: "ornefni_rtree",
    main_table: "ornefni",
    id_column: "id",
};

/// Roughly a 1.1 km square half-width at Icelandic latitudes.
const INITIAL_HALF_WIDTH_DEG: f64 = 0.01;
const MAX_ATTEMPTS: usize = 6;
const MIN_CANDIDATES: usize = 20;

/// A record with optional WGS84 coordinates.
pub(crate) trait Located {
    fn location(&self) -> Option<(f64, f64)>;
}

/// Return the `limit` entities closest to `(lat, lon)`, each paired with
/// its great-circle distance in km, ascending. A positive `max_dist`
/// drops entities farther than that many km before `limit` is applied,
/// so `limit` counts qualifying results only.
///
/// Candidate gathering:
/// - Query the index for boxes overlapping a square around the point,
///   doubling the half-width until at least `max(limit, 20)` candidates
///   turn up, at most six attempts.
/// - With no candidates at all, scan the whole entity table. Should be
///   rare; an empty result is still a valid outcome.
///
/// `post_process` runs on each returned record (reference-data joins for
/// addresses; placenames pass through).
pub(crate) fn find_nearest<T: Located>(
    db: &Database,
    lat: f64,
    lon: f64,
    target: &SpatialTarget,
    limit: usize,
    max_dist: f64,
    from_row: impl Fn(&Row<'_>) -> rusqlite::Result<T>,
    post_process: impl Fn(&mut T),
) -> Result<Vec<(T, f64)>> {
    if !valid_wgs84_coord(lat, lon) {
        return Err(Error::InvalidCoordinate { lat, lon });
    }
    if max_dist.is_nan() || max_dist < 0.0 {
        return Err(Error::InvalidArgument("max_dist must be non-negative"));
    }

    let conn = db.conn();
    let min_candidates = limit.max(MIN_CANDIDATES);
    let mut half_width = INITIAL_HALF_WIDTH_DEG;
    let mut ids: Vec<i64> = Vec::new();

    for _ in 0..MAX_ATTEMPTS {
        ids = candidate_ids(conn, target, lat, lon, half_width)?;
        if ids.len() >= min_candidates {
            break;
        }
        half_width *= 2.0;
    }

    let records: Vec<T> = if ids.is_empty() {
        log::warn!(
            "no spatial candidates near ({lat}, {lon}); scanning all of {}",
            target.main_table
        );
        let mut stmt = conn.prepare(&format!("SELECT * FROM {}", target.main_table))?;
        let rows = stmt.query_map([], |row| from_row(row))?;
        rows.collect::<rusqlite::Result<_>>()?
    } else {
        let placeholders = vec!["?"; ids.len()].join(",");
        let sql = format!(
            "SELECT * FROM {} WHERE {} IN ({placeholders})",
            target.main_table, target.id_column
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(ids.iter()), |row| from_row(row))?;
        rows.collect::<rusqlite::Result<_>>()?
    };

    // Exact distance, computed once per candidate. Missing coordinates
    // rank as infinitely far rather than failing the whole query.
    let mut ranked: Vec<(T, f64)> = records
        .into_iter()
        .map(|record| {
            let dist = record
                .location()
                .map_or(f64::INFINITY, |loc| distance((lat, lon), loc));
            (record, dist)
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    if max_dist > 0.0 {
        ranked.retain(|(_, dist)| *dist <= max_dist);
    }
    ranked.truncate(limit);

    for (record, _) in &mut ranked {
        post_process(record);
    }

    Ok(ranked)
}

fn candidate_ids(
    conn: &Connection,
    target: &SpatialTarget,
    lat: f64,
    lon: f64,
    half_width: f64,
) -> Result<Vec<i64>> {
    // Overlap test, not containment: point entries are stored with
    // min == max, and a box merely touching the search window must still
    // qualify.
    let sql = format!(
        "SELECT id FROM {} \
         WHERE max_long >= ? AND min_long <= ? AND max_lat >= ? AND min_lat <= ?",
        target.rtree_table
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        rusqlite::params![
            lon - half_width,
            lon + half_width,
            lat - half_width,
            lat + half_width
        ],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(rows.collect::<rusqlite::Result<_>>()?)
}
