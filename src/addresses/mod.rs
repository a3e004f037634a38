mod lookup;
mod suggest;

pub use lookup::AddressQuery;

use rusqlite::Row;
use serde::Serialize;

use crate::database::{Database, Select};
use crate::error::Result;
use crate::municipalities::municipality_for_municipality_code;
use crate::nearest::{self, Located, find_nearest};
use crate::postcodes::postcode_lookup;

/// Default result cap for address lookups.
pub const DEFAULT_LIMIT: usize = 50;

/// One address point from the national registry (stadfangaskrá), with
/// postcode and municipality reference data joined on.
///
/// `husnr` is the house number; when a record covers a dashed range of
/// numbers the range lives in `vidsk` (e.g. `"6-8"`) and `husnr` is
/// `None`. `serheiti` names landmarks without numeric addressing, such as
/// churches or Harpa.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub hnitnum: i64,
    pub svfnr: Option<u32>,
    pub byggd: Option<i64>,
    pub landnr: Option<i64>,
    pub postnr: Option<u32>,
    pub heiti_nf: Option<String>,
    pub heiti_tgf: Option<String>,
    pub husnr: Option<i64>,
    pub bokst: Option<String>,
    pub serheiti: Option<String>,
    pub vidsk: Option<String>,
    pub lat_wgs84: Option<f64>,
    pub long_wgs84: Option<f64>,

    // Joined from the static reference tables.
    pub stadur_nf: Option<&'static str>,
    pub stadur_tgf: Option<&'static str>,
    pub svaedi_nf: Option<&'static str>,
    pub svaedi_tgf: Option<&'static str>,
    pub tegund: Option<&'static str>,
    pub svfheiti: Option<&'static str>,
}

impl Address {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            hnitnum: row.get("hnitnum")?,
            svfnr: row.get("svfnr")?,
            byggd: row.get("byggd")?,
            landnr: row.get("landnr")?,
            postnr: row.get("postnr")?,
            heiti_nf: row.get("heiti_nf")?,
            heiti_tgf: row.get("heiti_tgf")?,
            husnr: row.get("husnr")?,
            bokst: row.get("bokst")?,
            serheiti: row.get("serheiti")?,
            vidsk: row.get("vidsk")?,
            lat_wgs84: row.get("lat_wgs84")?,
            long_wgs84: row.get("long_wgs84")?,
            stadur_nf: None,
            stadur_tgf: None,
            svaedi_nf: None,
            svaedi_tgf: None,
            tegund: None,
            svfheiti: None,
        })
    }
}

impl Located for Address {
    fn location(&self) -> Option<(f64, f64)> {
        Some((self.lat_wgs84?, self.long_wgs84?))
    }
}

/// Join postcode and municipality reference data onto an address.
pub(crate) fn decorate(addr: &mut Address) {
    if let Some(pc) = addr.postnr.and_then(postcode_lookup) {
        addr.stadur_nf = Some(pc.stadur_nf);
        addr.stadur_tgf = Some(pc.stadur_tgf);
        addr.svaedi_nf = Some(pc.region.nominative());
        addr.svaedi_tgf = Some(pc.region.dative());
        addr.tegund = Some(pc.kind.as_str());
    }
    if let Some(code) = addr.svfnr {
        addr.svfheiti = municipality_for_municipality_code(code);
    }
}

/// Run an address select and join reference data onto each row.
pub(crate) fn run_addr_query(db: &Database, select: &Select) -> Result<Vec<Address>> {
    let mut rows = select.query(db.conn(), Address::from_row)?;
    for addr in &mut rows {
        decorate(addr);
    }
    Ok(rows)
}

/// Uppercase only the first character. Street names in the registry are
/// capitalized, and a blanket case fold mangles Icelandic names.
pub(crate) fn cap_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Database {
    /// The addresses closest to `(lat, lon)`, nearest first.
    ///
    /// `max_dist` (km) bounds the search when positive; zero means
    /// unbounded. An empty result means no address qualifies.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoordinate`](crate::Error::InvalidCoordinate) for
    /// out-of-range input,
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a
    /// negative `max_dist`.
    pub fn nearest_addr(
        &self,
        lat: f64,
        lon: f64,
        limit: usize,
        max_dist: f64,
    ) -> Result<Vec<Address>> {
        let results = self.nearest_addr_with_dist(lat, lon, limit, max_dist)?;
        Ok(results.into_iter().map(|(addr, _)| addr).collect())
    }

    /// Like [`nearest_addr`](Database::nearest_addr), with the distance
    /// in kilometers paired onto each address.
    pub fn nearest_addr_with_dist(
        &self,
        lat: f64,
        lon: f64,
        limit: usize,
        max_dist: f64,
    ) -> Result<Vec<(Address, f64)>> {
        find_nearest(
            self,
            lat,
            lon,
            &nearest::ADDRESSES,
            limit,
            max_dist,
            Address::from_row,
            decorate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::test_database;

    const FISKISLOD_31: (f64, f64) = (64.1560233, -21.951407);
    const OLDUGATA_4: (f64, f64) = (64.148446, -21.944933);

    #[test]
    fn cap_first_handles_icelandic_letters() {
        assert_eq!(cap_first("öldugata"), "Öldugata");
        assert_eq!(cap_first("Þúfubarð"), "Þúfubarð");
        assert_eq!(cap_first(""), "");
    }

    #[test]
    fn nearest_addr_finds_the_street_outside_the_door() {
        let db = test_database();
        let addrs = db.nearest_addr(FISKISLOD_31.0, FISKISLOD_31.1, 1, 0.0).unwrap();
        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].heiti_nf.as_deref(), Some("Fiskislóð"));
        assert_eq!(addrs[0].postnr, Some(101));
        assert_eq!(addrs[0].svaedi_nf, Some("Höfuðborgarsvæðið"));
    }

    #[test]
    fn nearest_addr_results_are_decorated_and_sorted() {
        let db = test_database();
        let results = db
            .nearest_addr_with_dist(OLDUGATA_4.0, OLDUGATA_4.1, 3, 0.0)
            .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0.heiti_nf.as_deref(), Some("Öldugata"));
        assert_eq!(results[0].0.husnr, Some(4));
        assert_eq!(results[0].0.stadur_nf, Some("Reykjavík"));
        assert_eq!(results[0].0.svaedi_tgf, Some("Höfuðborgarsvæðinu"));
        assert_eq!(results[0].0.svfheiti, Some("Reykjavíkurborg"));
        for pair in results.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn nearest_addr_variants_agree() {
        let db = test_database();
        let plain = db.nearest_addr(OLDUGATA_4.0, OLDUGATA_4.1, 5, 0.0).unwrap();
        let with_dist = db
            .nearest_addr_with_dist(OLDUGATA_4.0, OLDUGATA_4.1, 5, 0.0)
            .unwrap();
        let stripped: Vec<Address> = with_dist.into_iter().map(|(a, _)| a).collect();
        assert_eq!(plain, stripped);
    }

    #[test]
    fn shrinking_max_dist_never_grows_the_result() {
        let db = test_database();
        let mut previous = usize::MAX;
        for max_dist in [50.0, 5.0, 0.5, 0.05] {
            let n = db
                .nearest_addr(OLDUGATA_4.0, OLDUGATA_4.1, 10, max_dist)
                .unwrap()
                .len();
            assert!(n <= previous);
            previous = n;
        }
    }

    #[test]
    fn invalid_input_is_rejected() {
        let db = test_database();
        assert!(db.nearest_addr(91.0, 0.0, 1, 0.0).is_err());
        assert!(db.nearest_addr(0.0, 200.0, 1, 0.0).is_err());
        assert!(db.nearest_addr_with_dist(64.0, -21.0, 1, -0.1).is_err());
    }
}
