//! Best-in-genre search over every page of the catalog.
//!
//! The loop is an explicit state machine: `Fetching` asks the [`PageFetcher`] for one page,
//! `Folding` runs its items through the running maximum, and the run ends in `Done` once the
//! last page is folded or in `Failed` on the first fetch failure. A failed run never yields a
//! partial answer.

use catalog_schema::{normalize_genre, rank_top, Page, ScoredMatch, DEFAULT_TOP_N};
use metrics::counter;

use crate::diagnostics::DiagnosticSink;
use crate::error::{CatalogError, FetchFailure, Result};
use crate::fetcher::PageFetcher;

/// A validated search target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreQuery { raw: String, target: String }

impl GenreQuery {
    /// Missing, empty, or whitespace-only genres are rejected.
    pub fn parse(genre: Option<&str>) -> Result<Self> {
        let raw = genre.ok_or_else(|| CatalogError::InvalidArgument("genre must be a non-empty string (got none)".into()))?;
        let target = normalize_genre(raw);
        if target.is_empty() { return Err(CatalogError::InvalidArgument(format!("genre must be a non-empty string (got {raw:?})"))); }
        Ok(Self { raw: raw.to_string(), target })
    }
    pub fn raw(&self) -> &str { &self.raw }
    pub fn target(&self) -> &str { &self.target }
}

/// True when a candidate displaces the current best: a strictly higher rating, or an equal
/// rating with either no best yet or a name sorting strictly before it.
pub fn replaces_best(rating: f64, name: &str, best_rating: f64, best_name: Option<&str>) -> bool {
    rating > best_rating || (rating == best_rating && best_name.map_or(true, |b| name < b))
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationState {
    pub best_name: Option<String>,
    pub best_rating: f64,
    pub all_matches: Vec<ScoredMatch>,
}

impl Default for AggregationState {
    fn default() -> Self { Self { best_name: None, best_rating: f64::NEG_INFINITY, all_matches: Vec::new() } }
}

impl AggregationState {
    /// Records a genre match and applies the maximum update rule. Returns whether it became the best.
    pub fn offer(&mut self, candidate: ScoredMatch) -> bool {
        let wins = replaces_best(candidate.rating, &candidate.name, self.best_rating, self.best_name.as_deref());
        if wins { self.best_rating = candidate.rating; self.best_name = Some(candidate.name.clone()); }
        self.all_matches.push(candidate);
        wins
    }

    /// Folds every named item of `page` whose genres contain the normalized `target`. Returns the match count.
    pub fn fold_page(&mut self, page: &Page, target: &str) -> usize {
        let mut matched = 0;
        for scored in page.data.iter().filter(|i| i.in_genre(target)).filter_map(|i| i.scored()) {
            self.offer(scored);
            matched += 1;
        }
        matched
    }

    pub fn best(&self) -> Option<ScoredMatch> {
        self.best_name.as_ref().map(|n| ScoredMatch { name: n.clone(), rating: self.best_rating })
    }
}

enum Step { Fetching(u32), Folding { number: u32, page: Page }, Done, Failed(FetchFailure) }

pub struct BestInGenre<F, S> { fetcher: F, sink: S, top_n: usize }

impl<F: PageFetcher, S: DiagnosticSink> BestInGenre<F, S> {
    pub fn new(fetcher: F, sink: S) -> Self { Self { fetcher, sink, top_n: DEFAULT_TOP_N } }
    pub fn with_top_n(mut self, n: usize) -> Self { self.top_n = n; self }

    /// Enumerates pages from 1 until `page >= total_pages`, stopping at the first failure.
    pub fn run(&self, query: &GenreQuery) -> std::result::Result<AggregationState, FetchFailure> {
        self.sink.info(&format!("search started for genre {}", query.target()));
        let mut state = AggregationState::default();
        let mut step = Step::Fetching(1);
        loop {
            step = match step {
                Step::Fetching(number) => {
                    self.sink.info(&format!("requesting page {number}"));
                    match self.fetcher.fetch(number) {
                        Ok(page) => Step::Folding { number, page },
                        Err(e) => Step::Failed(e),
                    }
                }
                Step::Folding { number, page } => {
                    let matched = state.fold_page(&page, query.target());
                    counter!("catalog_matches_total", matched as u64);
                    self.sink.debug(&format!("page {number}/{}: {} items, {matched} matches", page.total_pages, page.data.len()));
                    if number >= page.total_pages { Step::Done } else { Step::Fetching(number + 1) }
                }
                Step::Done => return Ok(state),
                Step::Failed(e) => {
                    self.sink.error(&format!("fetch failed for page {}: {e}", e.page()));
                    return Err(e);
                }
            };
        }
    }

    /// Runs the search and reports the top entries. `None` when nothing matched or any page failed.
    pub fn search(&self, query: &GenreQuery) -> Option<String> {
        let state = match self.run(query) {
            Ok(s) => s,
            Err(_) => { counter!("catalog_searches_total", 1, "outcome" => "failed"); return None; }
        };
        self.report_top(query, &state.all_matches);
        match state.best() {
            Some(best) => {
                counter!("catalog_searches_total", 1, "outcome" => "found");
                self.sink.info(&format!("overall best: {} ({:.1})", best.name, best.rating));
            }
            None => {
                counter!("catalog_searches_total", 1, "outcome" => "none");
                self.sink.info(&format!("no series found for genre {}", query.raw()));
            }
        }
        state.best_name
    }

    /// Validates `genre` and searches. Invalid input is rejected before any fetch.
    pub fn find(&self, genre: Option<&str>) -> Result<Option<String>> {
        let query = GenreQuery::parse(genre).map_err(|e| { self.sink.error(&e.to_string()); e })?;
        Ok(self.search(&query))
    }

    fn report_top(&self, query: &GenreQuery, matches: &[ScoredMatch]) {
        if matches.is_empty() { return; }
        let top = rank_top(matches, self.top_n);
        self.sink.info(&format!("The {} highest-rated shows in the {} genre are:", top.len(), query.raw()));
        for m in &top { self.sink.info(&format!("{}: {:.1}", m.name, m.rating)); }
    }
}
