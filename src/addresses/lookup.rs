use rusqlite::types::Value;

use super::{Address, DEFAULT_LIMIT, cap_first, run_addr_query};
use crate::database::{Clause, Database, Select};
use crate::error::Result;
use crate::postcodes::postcodes_for_placename;

/// Optional criteria for a structured address lookup.
#[derive(Debug, Clone)]
pub struct AddressQuery {
    /// House number; also matches the start of a dashed `vidsk` range.
    pub number: Option<u32>,
    /// Unit letter suffix, matched case-insensitively.
    pub letter: Option<String>,
    /// Exact postcode filter; takes precedence over `placename`.
    pub postcode: Option<u32>,
    /// Placename resolved to its postcodes when no postcode is given.
    pub placename: Option<String>,
    pub limit: usize,
}

impl Default for AddressQuery {
    fn default() -> Self {
        Self {
            number: None,
            letter: None,
            postcode: None,
            placename: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Database {
    /// Look up all addresses matching a street name and the criteria in
    /// `query`.
    ///
    /// The name matches either grammatical case; with no house number
    /// requested it also matches `serheiti`, so named landmarks turn up.
    /// Non-range rows sort before `vidsk`-range rows, then postcode,
    /// house number and letter ascending; the lowest postcodes cover the
    /// densest areas, which makes that a reasonable proxy for match
    /// likelihood.
    pub fn iceaddr_lookup(&self, street_name: &str, query: &AddressQuery) -> Result<Vec<Address>> {
        let street_name = cap_first(street_name.trim());

        let postcodes: Vec<u32> = match query.postcode {
            Some(postcode) => vec![postcode],
            None => query
                .placename
                .as_deref()
                .map(|pn| postcodes_for_placename(pn.trim(), false))
                .unwrap_or_default(),
        };

        let mut name_fields = vec![
            Clause::eq("heiti_nf", street_name.clone()),
            Clause::eq("heiti_tgf", street_name.clone()),
        ];
        if query.number.is_none() {
            name_fields.push(Clause::eq("serheiti", street_name.clone()));
        }
        let mut select = Select::new("stadfong").filter(Clause::any(name_fields));

        if let Some(number) = query.number {
            // Bound as text on both sides: the husnr column coerces it,
            // and the substr() prefix of a vidsk range compares as text.
            let number = number.to_string();
            select = select.filter(Clause::any(vec![
                Clause::eq("husnr", number.clone()),
                Clause::expr(
                    "substr(vidsk, 0, instr(vidsk, '-')) = ?",
                    vec![Value::from(number)],
                ),
            ]));
            if let Some(letter) = &query.letter {
                select = select.filter(Clause::like_nocase("bokst", letter.clone()));
            }
        }

        if !postcodes.is_empty() {
            select = select.filter(Clause::any(
                postcodes
                    .iter()
                    .map(|pc| Clause::eq("postnr", i64::from(*pc)))
                    .collect(),
            ));
        }

        let select = select
            .order_by("COALESCE(vidsk, '') != '', postnr ASC, husnr ASC, bokst ASC")
            .limit(query.limit);

        run_addr_query(self, &select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::test_database;

    #[test]
    fn finds_address_by_placename() {
        let db = test_database();
        let query = AddressQuery {
            number: Some(4),
            placename: Some("Reykjavík".to_string()),
            ..AddressQuery::default()
        };
        let results = db.iceaddr_lookup("Öldugata", &query).unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].postnr, Some(101));
        assert_eq!(results[0].svfheiti, Some("Reykjavíkurborg"));
    }

    #[test]
    fn accepts_dative_and_lowercase_street_names() {
        let db = test_database();
        let query = AddressQuery {
            number: Some(12),
            placename: Some("hafnarfirði".to_string()),
            ..AddressQuery::default()
        };
        let results = db.iceaddr_lookup("öldugötu", &query).unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].postnr, Some(220));
    }

    #[test]
    fn postcode_filter_wins_over_placename() {
        let db = test_database();
        let query = AddressQuery {
            number: Some(4),
            postcode: Some(621),
            placename: Some("Reykjavík".to_string()),
            ..AddressQuery::default()
        };
        let results = db.iceaddr_lookup("Öldugata", &query).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].postnr, Some(621));
        assert_eq!(results[0].stadur_tgf, Some("Dalvík"));
    }

    #[test]
    fn number_matches_start_of_dashed_range() {
        let db = test_database();
        let query = AddressQuery {
            number: Some(6),
            placename: Some("Reykjavík".to_string()),
            ..AddressQuery::default()
        };
        let results = db.iceaddr_lookup("Vesturgata", &query).unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].vidsk.as_deref(), Some("6-8"));
        assert_eq!(results[0].husnr, None);
    }

    #[test]
    fn letter_match_is_case_insensitive() {
        let db = test_database();
        let query = AddressQuery {
            number: Some(4),
            letter: Some("b".to_string()),
            ..AddressQuery::default()
        };
        let results = db.iceaddr_lookup("Öldugata", &query).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].bokst.as_deref(), Some("B"));
        assert_eq!(results[0].postnr, Some(621));
    }

    #[test]
    fn letter_is_optional_but_must_match_when_given() {
        let db = test_database();
        let base = AddressQuery {
            number: Some(151),
            ..AddressQuery::default()
        };
        assert!(!db.iceaddr_lookup("Laugavegur", &base).unwrap().is_empty());

        let with_letter = AddressQuery {
            letter: Some("r".to_string()),
            ..base.clone()
        };
        assert!(!db.iceaddr_lookup("Laugavegur", &with_letter).unwrap().is_empty());

        let wrong_letter = AddressQuery {
            letter: Some("e".to_string()),
            ..base
        };
        assert!(db.iceaddr_lookup("Laugavegur", &wrong_letter).unwrap().is_empty());
    }

    #[test]
    fn landmarks_match_by_serheiti_only_without_number() {
        let db = test_database();
        let results = db.iceaddr_lookup("Harpa", &AddressQuery::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].heiti_nf.as_deref(), Some("Austurbakki"));

        let with_number = AddressQuery {
            number: Some(2),
            ..AddressQuery::default()
        };
        assert!(db.iceaddr_lookup("Harpa", &with_number).unwrap().is_empty());
    }

    #[test]
    fn non_range_rows_sort_before_range_rows() {
        let db = test_database();
        let results = db
            .iceaddr_lookup("Laugavegur", &AddressQuery::default())
            .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].husnr, Some(151));
        assert_eq!(results[0].bokst, None);
        assert_eq!(results[1].bokst.as_deref(), Some("R"));
        assert_eq!(results[2].vidsk.as_deref(), Some("151-155"));
    }

    #[test]
    fn limit_caps_the_result() {
        let db = test_database();
        let query = AddressQuery {
            limit: 2,
            ..AddressQuery::default()
        };
        let results = db.iceaddr_lookup("Öldugata", &query).unwrap();
        assert_eq!(results.len(), 2);
    }
}
