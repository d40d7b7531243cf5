//! Extension traits on standard types

pub mod collections;
pub mod date;
pub mod fuzzy;
pub mod primitives;
pub mod text;
pub mod url_query;

pub use collections::{MapExt, SliceExt};
pub use date::{DateExt, DEFAULT_DATE_FORMAT};
pub use fuzzy::{
    closest_label, closest_match, closest_matches, closest_value, edit_distance, similarity,
    FuzzyMatch, FuzzyMatchExt, Labeled, DEFAULT_MAX_DISTANCE,
};
pub use primitives::{BoolExt, IntExt};
pub use text::StrExt;
pub use url_query::UrlExt;
