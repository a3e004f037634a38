//! Look up Icelandic streets, addresses, placenames, landmarks and
//! postcodes.
//!
//! Queries run against a local read-only SQLite store built from the
//! national address registry (stadfangaskrá) and the placename
//! geodatabase (örnefnaskrá), with R*Tree indexes for nearest-neighbor
//! search. Postcode and municipality registries are compiled in.
//!
//! ```no_run
//! use iceaddr::{AddressQuery, Database};
//!
//! # fn main() -> iceaddr::Result<()> {
//! let db = Database::open_default()?;
//!
//! let query = AddressQuery {
//!     number: Some(4),
//!     placename: Some("Reykjavík".to_string()),
//!     ..AddressQuery::default()
//! };
//! for addr in db.iceaddr_lookup("Öldugata", &query)? {
//!     println!("{:?} {:?}", addr.heiti_nf, addr.postnr);
//! }
//!
//! let nearest = db.nearest_addr(64.1484, -21.9449, 1, 0.0)?;
//! # let _ = nearest;
//! # Ok(())
//! # }
//! ```

mod addresses;
mod database;
mod error;
mod geo;
mod meta;
mod municipalities;
mod nearest;
mod placenames;
mod postcodes;

pub use addresses::{Address, AddressQuery, DEFAULT_LIMIT};
pub use database::Database;
pub use error::{Error, Result};
pub use geo::{EARTH_RADIUS_KM, ICELAND_COORDS, distance, in_iceland, valid_wgs84_coord};
pub use meta::MetadataValue;
pub use municipalities::{municipality_code_for_municipality, municipality_for_municipality_code};
pub use placenames::Placename;
pub use postcodes::{
    Postcode, PostcodeKind, Region, postcode_lookup, postcodes_for_placename,
    postcodes_for_region, region_for_postcode,
};
