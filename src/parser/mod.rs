//! Markdown catalog parser.
//!
//! Two-pass pipeline: text → classified lines → entries. The first pass
//! (`lines`) does all the regex work statelessly; the fold here is the only
//! stateful part.

pub mod lines;

use std::collections::BTreeMap;

use crate::catalog::{slugify, Entry};
use lines::Line;

/// Raw parse output: entries in document order plus the category counts
/// announced by the headings (not the counts actually observed).
#[derive(Debug, Default)]
pub struct Parsed {
    pub entries: Vec<Entry>,
    pub categories: BTreeMap<String, usize>,
}

pub fn parse(text: &str) -> Parsed {
    fold(&lines::classify_lines(text))
}

/// Assemble entries from the token stream.
///
/// An entry opens at an `Item` and stays open while annotation lines attach
/// to it. It closes on a blank line, on the next `Item`, or at end of
/// input. A `Heading` switches the current category but does not close an
/// open entry, so annotations sitting after the next section heading still
/// attach to the previous entry. Items seen before any heading have no
/// category and are dropped.
fn fold(tokens: &[Line]) -> Parsed {
    let mut entries: Vec<Entry> = Vec::new();
    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    let mut current_category: Option<String> = None;
    let mut open: Option<Entry> = None;

    for token in tokens {
        match token {
            Line::Heading { label, count } => {
                categories.insert(label.clone(), *count);
                current_category = Some(label.clone());
            }
            Line::Item {
                name,
                url,
                description,
            } => {
                if let Some(category) = &current_category {
                    if let Some(done) = open.take() {
                        entries.push(done);
                    }
                    open = Some(Entry {
                        id: slugify(name),
                        name: name.clone(),
                        url: url.clone(),
                        description: description.clone(),
                        category: category.clone(),
                        languages: Vec::new(),
                        website: None,
                        stars: None,
                        license: None,
                        last_commit: None,
                        screenshots: Vec::new(),
                    });
                }
            }
            Line::Detail(detail) => {
                if let Some(entry) = open.as_mut() {
                    entry.languages.extend(detail.languages.iter().cloned());
                    if let Some(website) = &detail.website {
                        entry.website = Some(website.clone());
                    }
                    if let Some(stars) = &detail.stars {
                        entry.stars = Some(stars.clone());
                    }
                    if let Some(license) = &detail.license {
                        entry.license = Some(license.clone());
                    }
                    if let Some(shot) = &detail.screenshot {
                        entry.screenshots.push(shot.clone());
                    }
                }
            }
            Line::Empty => {
                if let Some(done) = open.take() {
                    entries.push(done);
                }
            }
        }
    }
    if let Some(done) = open.take() {
        entries.push(done);
    }

    Parsed { entries, categories }
}

// ── Tests ──
