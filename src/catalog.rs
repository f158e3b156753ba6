use std::collections::{BTreeMap, BTreeSet};

use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

use crate::parser;

/// Which ingestion strategy produced a catalog. Exactly one is active per
/// deployment; some query behavior differs between the two (see query.rs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Json,
    Markdown,
}

/// A normalized application record. Optional fields are presence markers:
/// the source documents store them as possibly-empty strings, and nothing
/// downstream ever looks at more than whether they are set.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub languages: Vec<String>,
    pub website: Option<String>,
    pub stars: Option<String>,
    pub license: Option<String>,
    pub last_commit: Option<String>,
    pub screenshots: Vec<String>,
}

/// The full entry list plus the aggregates the views display. Built once
/// per invocation by the loader; read-only afterward.
#[derive(Debug)]
pub struct Catalog {
    pub source: SourceKind,
    pub entries: Vec<Entry>,
    /// Headline count for the stats view. From a JSON document this is the
    /// precomputed `stats.total_apps`, which is allowed to disagree with
    /// `entries.len()`; the results count always uses the latter.
    pub total: usize,
    pub categories: BTreeMap<String, usize>,
    pub languages: Vec<String>,
}

impl Catalog {
    /// Parse a markdown catalog document. Cannot fail: unrecognized lines
    /// are ignored and a document with no entries yields an empty catalog.
    pub fn from_markdown(text: &str) -> Catalog {
        let parsed = parser::parse(text);

        // Per-category counts come from the heading annotations, which are
        // informational only. Mismatches against the parsed entries are
        // tolerated; surface them for anyone debugging a catalog.
        for (category, annotated) in &parsed.categories {
            let actual = parsed
                .entries
                .iter()
                .filter(|e| &e.category == category)
                .count();
            if actual != *annotated {
                debug!(
                    "category {:?} annotated with {} entries, parsed {}",
                    category, annotated, actual
                );
            }
        }

        let languages: BTreeSet<String> = parsed
            .entries
            .iter()
            .flat_map(|e| e.languages.iter().cloned())
            .collect();

        Catalog {
            source: SourceKind::Markdown,
            total: parsed.entries.len(),
            categories: parsed.categories,
            languages: languages.into_iter().collect(),
            entries: parsed.entries,
        }
    }

    /// Detail lookup over the full, unfiltered list. First match wins.
    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Derive a stable identifier from a display name: lowercased, runs of
/// non-alphanumerics collapsed to a single dash.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

// ── Tests ──
