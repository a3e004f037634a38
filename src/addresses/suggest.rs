use super::{Address, cap_first, run_addr_query};
use crate::database::{Clause, Database, Select};
use crate::error::Result;
use crate::postcodes::postcodes_for_placename;

const MIN_SEARCH_STR_LEN: usize = 3;

/// A search string broken into query components.
#[derive(Debug, PartialEq)]
pub(crate) struct ParsedSearch {
    street: String,
    number: Option<NumberToken>,
    letter: Option<String>,
    place: Option<String>,
}

#[derive(Debug, PartialEq)]
pub(crate) enum NumberToken {
    /// A plain house number, kept as its original digits.
    House(String),
    /// A dashed range, matched against the vidsk qualifier field.
    Range(String),
}

/// Break a free-text search string apart:
/// - Components are comma-separated; the first is the address phrase,
///   the second names a place or postcode.
/// - A trailing address token starting with a digit is the house number;
///   everything before it is the street name ("Stærri Bær 1").
/// - A single trailing letter on the number token is the unit suffix
///   ("Bárugata 17a"); a dash makes it a range token ("Laugavegur 151-155").
///
/// Returns `None` for strings too short to mean anything and for number
/// tokens that fail to parse cleanly ("4Baaa"): no match beats a guess.
pub(crate) fn parse_search(search_str: &str) -> Option<ParsedSearch> {
    let search_str = cap_first(search_str.trim());
    if search_str.chars().count() < MIN_SEARCH_STR_LEN {
        return None;
    }

    let mut components = search_str.split(',');
    let address: Vec<&str> = components
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .collect();
    let place = components
        .next()
        .and_then(|s| s.split_whitespace().next())
        .map(str::to_string);

    let (&last, street_tokens) = address.split_last()?;

    if last.starts_with(|c: char| c.is_ascii_digit()) {
        let (number, letter) = split_number_token(last)?;
        Some(ParsedSearch {
            street: street_tokens.join(" "),
            number: Some(number),
            letter,
            place,
        })
    } else {
        Some(ParsedSearch {
            street: address.join(" "),
            number: None,
            letter: None,
            place,
        })
    }
}

/// Split a number token like "17", "17a" or "151-155" into the number
/// (or range) and an optional single-letter suffix.
fn split_number_token(token: &str) -> Option<(NumberToken, Option<String>)> {
    let mut body = token;
    let mut letter = None;
    if let Some(last) = token.chars().last()
        && last.is_ascii_alphabetic()
    {
        body = &token[..token.len() - last.len_utf8()];
        letter = Some(last.to_ascii_lowercase().to_string());
    }

    if body.contains('-') {
        return Some((NumberToken::Range(body.to_string()), letter));
    }
    if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) {
        return Some((NumberToken::House(body.to_string()), letter));
    }
    None
}

/// Whether the place token is a bare three-digit postcode.
fn postcode_token(place: &str) -> Option<u32> {
    if place.len() == 3 && place.bytes().all(|b| b.is_ascii_digit()) {
        place.parse().ok()
    } else {
        None
    }
}

impl Database {
    /// Parse a loosely structured search string and fetch matching
    /// addresses. Handles partial and full queries in these shapes:
    ///
    /// ```text
    /// Öldug
    /// Öldugata
    /// Öldugata 4
    /// Öldugata 4, 101
    /// Öldugata 4, Reykjavík
    /// Öldugata 4, 101 Reykjavík
    /// ```
    ///
    /// Without a house number the street name is a prefix match, so this
    /// suits incremental search boxes. Strings shorter than three
    /// characters and malformed number tokens yield an empty result.
    pub fn iceaddr_suggest(&self, search_str: &str, limit: usize) -> Result<Vec<Address>> {
        let Some(parsed) = parse_search(search_str) else {
            return Ok(Vec::new());
        };

        let mut select = Select::new("stadfong");

        match &parsed.number {
            None => {
                select = select.filter(Clause::any(vec![
                    Clause::like("heiti_nf", format!("{}%", parsed.street)),
                    Clause::like("heiti_tgf", format!("{}%", parsed.street)),
                ]));
            }
            Some(number) => {
                select = select.filter(Clause::any(vec![
                    Clause::eq("heiti_nf", parsed.street.clone()),
                    Clause::eq("heiti_tgf", parsed.street.clone()),
                ]));
                select = select.filter(match number {
                    NumberToken::Range(range) => Clause::eq("vidsk", range.clone()),
                    NumberToken::House(number) => Clause::eq("husnr", number.clone()),
                });
                if let Some(letter) = &parsed.letter {
                    select = select.filter(Clause::like_nocase("bokst", letter.clone()));
                }
            }
        }

        if let Some(place) = &parsed.place {
            let postcodes = match postcode_token(place) {
                Some(code) => vec![code],
                None => postcodes_for_placename(place, true),
            };
            if !postcodes.is_empty() {
                select = select.filter(Clause::any(
                    postcodes
                        .iter()
                        .map(|pc| Clause::eq("postnr", i64::from(*pc)))
                        .collect(),
                ));
            }
        }

        let select = select
            .order_by("postnr ASC, husnr ASC, bokst ASC")
            .limit(limit);

        run_addr_query(self, &select)
    }
}
