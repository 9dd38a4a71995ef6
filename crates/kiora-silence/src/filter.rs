//! Round-tripping of matcher filters through URL query parameters.
//!
//! Matcher strings persist in the address bar as repeated `filter` query
//! parameters so that a silence form can be shared by URL. The query is
//! modeled as an ordered list of key/value pairs; percent-encoding of the
//! URL itself is the caller's concern.

use kiora_model::Matcher;

use crate::matcher::parse_matcher;

/// The query-parameter key under which matcher filters are stored.
pub const FILTER_PARAM: &str = "filter";

/// Extracts the matcher filter strings from query pairs, in order.
#[must_use]
pub fn filters_from_pairs(pairs: &[(String, String)]) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, _)| key == FILTER_PARAM)
        .map(|(_, value)| value.clone())
        .collect()
}

/// Replaces all `filter` parameters with the given filter strings.
///
/// Every other parameter keeps its relative order; the new filters are
/// appended at the end, one parameter per filter.
#[must_use]
pub fn set_filters(pairs: &[(String, String)], filters: &[String]) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = pairs
        .iter()
        .filter(|(key, _)| key != FILTER_PARAM)
        .cloned()
        .collect();

    out.extend(
        filters
            .iter()
            .map(|filter| (FILTER_PARAM.to_string(), filter.clone())),
    );

    out
}

/// Re-parses stored filter strings for display, pairing each with its
/// parse result. A `None` entry renders as an invalid matcher.
#[must_use]
pub fn parse_filters(filters: &[String]) -> Vec<Option<Matcher>> {
    filters.iter().map(|filter| parse_matcher(filter)).collect()
}
