//! Search, filter, and sort over a loaded catalog.

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::catalog::{Catalog, Entry, SourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Ascending by name.
    Name,
    /// Descending by name.
    NameDesc,
    /// Entries with a known last commit first.
    Recent,
    /// Entries with a star count first.
    Popular,
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub search: String,
    pub category: Option<String>,
    pub language: Option<String>,
    pub sort: Option<SortKey>,
}

/// Run a query against the catalog. Filtering applies first, then sorting;
/// without a sort key the document order is preserved. Markdown catalogs
/// carry no usable sort metadata, so for them the sort stage is skipped
/// entirely and the language fields stay out of the text search.
pub fn run<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a Entry> {
    let term = query.search.to_lowercase();
    let mut hits: Vec<&Entry> = catalog
        .entries
        .iter()
        .filter(|entry| matches(catalog.source, entry, &term, query))
        .collect();

    if catalog.source == SourceKind::Json {
        if let Some(key) = query.sort {
            sort_entries(&mut hits, key);
        }
    }
    hits
}

fn matches(source: SourceKind, entry: &Entry, term: &str, query: &Query) -> bool {
    let text_ok = term.is_empty()
        || entry.name.to_lowercase().contains(term)
        || entry.description.to_lowercase().contains(term)
        || (source == SourceKind::Json
            && entry.languages.iter().any(|lang| lang.to_lowercase().contains(term)));

    let category_ok = match &query.category {
        Some(category) => &entry.category == category,
        None => true,
    };

    let language_ok = match &query.language {
        Some(language) => entry.languages.iter().any(|lang| lang == language),
        None => true,
    };

    text_ok && category_ok && language_ok
}

fn sort_entries(entries: &mut [&Entry], key: SortKey) {
    match key {
        SortKey::Name => entries.sort_by(|a, b| name_cmp(&a.name, &b.name)),
        SortKey::NameDesc => entries.sort_by(|a, b| name_cmp(&b.name, &a.name)),
        SortKey::Recent => entries.sort_by(|a, b| {
            presence_cmp(&a.last_commit, &b.last_commit).then_with(|| name_cmp(&a.name, &b.name))
        }),
        SortKey::Popular => entries.sort_by(|a, b| {
            presence_cmp(&a.stars, &b.stars).then_with(|| name_cmp(&a.name, &b.name))
        }),
    }
}

/// Case-insensitive name order with a case-sensitive tiebreak, so equal
/// names still order deterministically.
fn name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Recent and popular rank by presence of the metric only. Entries that
/// carry the field sort ahead; the values themselves are never compared.
fn presence_cmp(a: &Option<String>, b: &Option<String>) -> Ordering {
    b.is_some().cmp(&a.is_some())
}

// ── Tests ──
