use rusqlite::Row;
use serde::Serialize;

use crate::database::{Clause, Database, Select};
use crate::error::Result;
use crate::nearest::{self, Located, find_nearest};

/// A named place or landmark (örnefni).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placename {
    pub id: i64,
    pub nafn: String,
    pub flokkur: Option<String>,
    pub lat_wgs84: Option<f64>,
    pub long_wgs84: Option<f64>,
}

impl Placename {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            nafn: row.get("nafn")?,
            flokkur: row.get("flokkur")?,
            lat_wgs84: row.get("lat_wgs84")?,
            long_wgs84: row.get("long_wgs84")?,
        })
    }
}

impl Located for Placename {
    fn location(&self) -> Option<(f64, f64)> {
        Some((self.lat_wgs84?, self.long_wgs84?))
    }
}

// These placenames share a name with other, often larger, features but
// should still rank first. Matched on name and exact coordinates.
const PRIORITY: &[(&str, f64, f64)] = &[
    ("Hellisheiði", 64.0221268, -21.3413149),
    ("Snæfellsnes", 64.8731746, -23.0309911),
    ("Mýrdalur", 63.4462885, -19.0832988),
    ("Mosfellsheiði", 64.1675067, -21.3733656),
    ("Bláfjöll", 64.0121886, -21.5617119),
    ("Bakki", 66.0701681, -17.3481556),
    ("Bessastaðir", 64.1059036227962, -21.9957549156328),
    ("Gullfoss", 64.3273264, -20.1193949),
    ("Grótta", 64.1642163, -22.0218824),
    ("Arnarhóll", 64.147844, -21.9331656),
    ("Reykjanes", 63.8185821975681, -22.692991355433815),
];

// Sort order for homonyms: administrative units first, then natural
// features by type and size tier.
const CATEGORY_ORDER: &[&str] = &[
    "Sveitarfélag",
    "Þéttbýli",
    "Sveit",
    "Sýsla",
    "Hreppur",
    "Flugvöllur",
    "Jarðgöng",
    "Virkjun",
    "Kirkja",
    "Landörnefni Stórt",
    "Jökla- og snævarörnefni Stórt",
    "Sjávarörnefni Stórt",
    "Vatnaörnefni Stórt",
    "Landörnefni Mið",
    "Jökla- og snævarörnefni Mið",
    "Sjávarörnefni Mið",
    "Vatnaörnefni Mið",
    "Landörnefni Lítið",
    "Jökla- og snævarörnefni Lítið",
    "Sjávarörnefni Lítið",
    "Vatnaörnefni Lítið",
];

fn precedence(pn: &Placename) -> usize {
    if let Some(&(_, lat, lon)) = PRIORITY.iter().find(|(name, _, _)| *name == pn.nafn)
        && pn.lat_wgs84 == Some(lat)
        && pn.long_wgs84 == Some(lon)
    {
        return 0;
    }
    match pn
        .flokkur
        .as_deref()
        .and_then(|fl| CATEGORY_ORDER.iter().position(|c| *c == fl))
    {
        Some(index) => index + 1,
        // Unlisted categories sort last.
        None => usize::MAX,
    }
}

impl Database {
    /// Look up placenames by name, exact or substring when `partial`.
    /// Homonyms are ordered by precedence, priority overrides first.
    pub fn placename_lookup(&self, name: &str, partial: bool) -> Result<Vec<Placename>> {
        let clause = if partial {
            Clause::like("nafn", format!("%{name}%"))
        } else {
            Clause::eq("nafn", name.to_string())
        };
        let select = Select::new("ornefni").filter(clause);
        let mut matches = select.query(self.conn(), Placename::from_row)?;
        matches.sort_by_key(precedence);
        Ok(matches)
    }

    /// The placenames closest to `(lat, lon)`, nearest first. Semantics
    /// match [`nearest_addr`](Database::nearest_addr).
    pub fn nearest_placenames(
        &self,
        lat: f64,
        lon: f64,
        limit: usize,
        max_dist: f64,
    ) -> Result<Vec<Placename>> {
        let results = self.nearest_placenames_with_dist(lat, lon, limit, max_dist)?;
        Ok(results.into_iter().map(|(pn, _)| pn).collect())
    }

    /// Like [`nearest_placenames`](Database::nearest_placenames), with
    /// the distance in kilometers paired onto each placename.
    pub fn nearest_placenames_with_dist(
        &self,
        lat: f64,
        lon: f64,
        limit: usize,
        max_dist: f64,
    ) -> Result<Vec<(Placename, f64)>> {
        find_nearest(
            self,
            lat,
            lon,
            &nearest::PLACENAMES,
            limit,
            max_dist,
            Placename::from_row,
            |_| {},
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::test_database;

    #[test]
    fn hardcoded_priority_beats_category_order() {
        let db = test_database();
        let results = db.placename_lookup("Bakki", false).unwrap();
        assert_eq!(results.len(), 2);
        // The Húsavík Bakki is in the priority table; without it the
        // Sveitarfélag entry would rank first.
        assert_eq!(results[0].lat_wgs84, Some(66.0701681));
        assert_eq!(results[1].flokkur.as_deref(), Some("Sveitarfélag"));
    }

    #[test]
    fn unknown_categories_sort_last() {
        let db = test_database();
        let results = db.placename_lookup("Hólmsheiði", false).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].flokkur.as_deref(), Some("Landörnefni Mið"));
        assert_eq!(results[1].flokkur.as_deref(), Some("Golfvöllur"));
    }

    #[test]
    fn partial_lookup_matches_substrings() {
        let db = test_database();
        let results = db.placename_lookup("ólmshei", true).unwrap();
        assert_eq!(results.len(), 2);
        assert!(db.placename_lookup("ólmshei", false).unwrap().is_empty());
    }

    #[test]
    fn nearest_placenames_finds_the_mountain() {
        let db = test_database();
        // Kollafjörður, at the foot of Esja.
        let results = db.nearest_placenames(64.22, -21.72, 1, 0.0).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].nafn, "Esja");
    }

    #[test]
    fn nearest_placenames_variants_agree() {
        let db = test_database();
        let plain = db.nearest_placenames(64.22, -21.72, 3, 0.0).unwrap();
        let with_dist = db
            .nearest_placenames_with_dist(64.22, -21.72, 3, 0.0)
            .unwrap();
        let stripped: Vec<Placename> = with_dist.into_iter().map(|(pn, _)| pn).collect();
        assert_eq!(plain, stripped);
    }

    #[test]
    fn nearest_placenames_validates_input() {
        let db = test_database();
        assert!(db.nearest_placenames(-91.0, 0.0, 1, 0.0).is_err());
        assert!(db.nearest_placenames_with_dist(64.0, -21.0, 1, -2.0).is_err());
    }
}
