use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of entries the top-N summary reports when no explicit count is configured.
pub const DEFAULT_TOP_N: usize = 4;

/// Rating value as it arrives on the wire. Null and absent both land in the surrounding `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRating { Number(f64), Text(String), Other(serde_json::Value) }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unnamed items are tolerated on the wire but never scored.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub imdb_rating: Option<RawRating>,
}

/// One page of the paginated catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Echoed pagination fields, kept as-is; the server may send them as numbers or strings.
    #[serde(default)]
    pub page: Option<serde_json::Value>,
    #[serde(default)]
    pub per_page: Option<serde_json::Value>,
    #[serde(default)]
    pub total: Option<serde_json::Value>,
    #[serde(default = "single_page")]
    pub total_pages: u32,
    pub data: Vec<CatalogItem>,
}
fn single_page() -> u32 { 1 }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch { pub name: String, pub rating: f64 }

/// Lowercase, trimmed form used for both the search target and each genre token.
pub fn normalize_genre(raw: &str) -> String { raw.trim().to_lowercase() }

/// Splits a comma-separated genre field into normalized tokens, dropping empty ones.
pub fn normalize_genres(field: &str) -> Vec<String> {
    field.split(',').map(normalize_genre).filter(|g| !g.is_empty()).collect()
}

impl RawRating {
    pub fn score(&self) -> f64 {
        let v = match self {
            RawRating::Number(n) => *n,
            RawRating::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NEG_INFINITY),
            RawRating::Other(_) => f64::NEG_INFINITY,
        };
        if v.is_nan() { f64::NEG_INFINITY } else { v }
    }
}

/// Coerces a possibly-missing rating into a score. Unusable values become negative infinity.
pub fn coerce_rating(raw: Option<&RawRating>) -> f64 { raw.map(RawRating::score).unwrap_or(f64::NEG_INFINITY) }

impl CatalogItem {
    pub fn genres(&self) -> Vec<String> { normalize_genres(self.genre.as_deref().unwrap_or("")) }
    pub fn rating(&self) -> f64 { coerce_rating(self.imdb_rating.as_ref()) }
    /// `target` must already be normalized.
    pub fn in_genre(&self, target: &str) -> bool { self.genres().iter().any(|g| g == target) }
    /// `None` for items without a name.
    pub fn scored(&self) -> Option<ScoredMatch> { self.name.as_ref().map(|name| ScoredMatch { name: name.clone(), rating: self.rating() }) }
}

/// Rating descending, then name ascending.
pub fn ranking_order(a: &ScoredMatch, b: &ScoredMatch) -> Ordering {
    b.rating.total_cmp(&a.rating).then_with(|| a.name.cmp(&b.name))
}

/// Highest `n` matches under [`ranking_order`]; fewer if the input is shorter.
pub fn rank_top(matches: &[ScoredMatch], n: usize) -> Vec<ScoredMatch> {
    let mut sorted = matches.to_vec();
    sorted.sort_by(ranking_order);
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests { use super::*; use proptest::prelude::*;
    fn m(name: &str, rating: f64) -> ScoredMatch { ScoredMatch { name: name.into(), rating } }
    fn item(json: serde_json::Value) -> CatalogItem { serde_json::from_value(json).unwrap() }
    proptest! {
        #[test] fn prop_genre_tokens_are_trimmed_lowercase_nonempty(field in "[ a-zA-Z,]{0,40}") { for g in normalize_genres(&field) { prop_assert!(!g.is_empty()); prop_assert_eq!(g.trim(), g.as_str()); prop_assert_eq!(g.to_lowercase(), g.clone()); prop_assert!(!g.contains(',')); } }
        #[test] fn prop_rank_top_is_sorted_prefix(ratings in proptest::collection::vec((0u8..20, "[a-e]{1,3}"), 0..12), n in 0usize..8) { let all: Vec<ScoredMatch> = ratings.iter().map(|(r, name)| m(name, *r as f64 / 2.0)).collect(); let top = rank_top(&all, n); prop_assert_eq!(top.len(), n.min(all.len())); for w in top.windows(2) { prop_assert_ne!(ranking_order(&w[0], &w[1]), Ordering::Greater); } let mut full = all.clone(); full.sort_by(ranking_order); prop_assert_eq!(&full[..top.len()], &top[..]); }
    }
    #[test] fn genre_field_is_split_and_normalized() { assert_eq!(normalize_genres("Action, Drama ,  SCI-FI"), vec!["action", "drama", "sci-fi"]); assert_eq!(normalize_genres(" , ,Comedy,"), vec!["comedy"]); }
    #[test] fn empty_genre_field_yields_no_tokens() { assert!(normalize_genres("").is_empty()); assert!(item(serde_json::json!({"name":"X","genre":null})).genres().is_empty()); assert!(item(serde_json::json!({"name":"X"})).genres().is_empty()); }
    #[test] fn ratings_coerce_to_scores() {
        assert_eq!(item(serde_json::json!({"name":"A","imdb_rating":8.5})).rating(), 8.5);
        assert_eq!(item(serde_json::json!({"name":"A","imdb_rating":" 7.25 "})).rating(), 7.25);
        assert_eq!(item(serde_json::json!({"name":"A","imdb_rating":"n/a"})).rating(), f64::NEG_INFINITY);
        assert_eq!(item(serde_json::json!({"name":"A","imdb_rating":null})).rating(), f64::NEG_INFINITY);
        assert_eq!(item(serde_json::json!({"name":"A"})).rating(), f64::NEG_INFINITY);
        assert_eq!(item(serde_json::json!({"name":"A","imdb_rating":[1]})).rating(), f64::NEG_INFINITY);
        assert_eq!(item(serde_json::json!({"name":"A","imdb_rating":"NaN"})).rating(), f64::NEG_INFINITY);
    }
    #[test] fn membership_requires_exact_token() { let it = item(serde_json::json!({"name":"A","genre":"Action, Drama"})); assert!(it.in_genre("action")); assert!(it.in_genre("drama")); assert!(!it.in_genre("act")); assert!(!it.in_genre("Action")); }
    #[test] fn page_requires_data_and_defaults_total_pages() {
        let p: Page = serde_json::from_str(r#"{"page":1,"data":[]}"#).unwrap(); assert_eq!(p.total_pages, 1);
        assert!(serde_json::from_str::<Page>(r#"{"page":1,"total_pages":3}"#).is_err());
    }
    #[test] fn echoed_pagination_fields_accept_strings() {
        let p: Page = serde_json::from_str(r#"{"page":"2","per_page":10,"total":"20","total_pages":2,"data":[{"name":"A","genre":"Action","imdb_rating":9.0}]}"#).unwrap();
        assert_eq!(p.page, Some(serde_json::json!("2"))); assert_eq!(p.total_pages, 2); assert_eq!(p.data.len(), 1);
    }
    #[test] fn unnamed_items_parse_but_are_not_scored() {
        let p: Page = serde_json::from_str(r#"{"total_pages":1,"data":[{"name":null,"genre":"Comedy","imdb_rating":8.0},{"genre":"Action"},{"name":"Best","genre":"Action","imdb_rating":9.0}]}"#).unwrap();
        assert!(p.data[0].scored().is_none()); assert!(p.data[1].scored().is_none());
        assert_eq!(p.data[2].scored(), Some(m("Best", 9.0)));
    }
    #[test] fn booleans_and_nan_are_unusable_ratings() { assert_eq!(item(serde_json::json!({"name":"A","imdb_rating":true})).rating(), f64::NEG_INFINITY); assert_eq!(RawRating::Number(f64::NAN).score(), f64::NEG_INFINITY); }
    #[test] fn rank_top_breaks_ties_by_name_and_sinks_unrated() { let all = vec![m("Zed", 9.0), m("Nope", f64::NEG_INFINITY), m("Amy", 9.0), m("Bo", 9.5), m("Cy", 7.0), m("Di", 8.0)]; let top = rank_top(&all, DEFAULT_TOP_N); let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect(); assert_eq!(names, vec!["Bo", "Amy", "Zed", "Di"]); assert!(rank_top(&[], 4).is_empty()); assert_eq!(rank_top(&all[..2], 4).len(), 2); }
}
