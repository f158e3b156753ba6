//! Terminal presentation of catalogs, query results, and entry detail.

use std::io::{self, Write};

use crate::catalog::{Catalog, Entry};
use crate::icons;

/// Everything a view needs to show. Implementations decide the medium; the
/// command layer only picks which methods run.
pub trait Render {
    fn stats(&mut self, catalog: &Catalog);
    fn options(&mut self, catalog: &Catalog);
    /// Render a result list. `total` is the full catalog entry count the
    /// displayed slice was drawn from.
    fn entries(&mut self, shown: &[&Entry], total: usize);
    fn detail(&mut self, entry: &Entry);
    fn load_error(&mut self);
}

/// Look up an entry by id and render it. A miss renders nothing at all.
pub fn show_detail(catalog: &Catalog, id: &str, out: &mut dyn Render) {
    if let Some(entry) = catalog.find(id) {
        out.detail(entry);
    }
}

pub struct TermRender<W> {
    out: W,
}

impl TermRender<io::Stdout> {
    pub fn stdout() -> Self {
        TermRender { out: io::stdout() }
    }
}

impl<W: Write> TermRender<W> {
    pub fn new(out: W) -> Self {
        TermRender { out }
    }
}

impl<W: Write> Render for TermRender<W> {
    fn stats(&mut self, catalog: &Catalog) {
        writeln!(self.out, "Applications: {}", catalog.total).ok();
        writeln!(self.out, "Categories:   {}", catalog.categories.len()).ok();
        writeln!(self.out, "Languages:    {}", catalog.languages.len()).ok();
    }

    fn options(&mut self, catalog: &Catalog) {
        writeln!(self.out, "--- Categories ---").ok();
        for (category, count) in &catalog.categories {
            writeln!(self.out, "  {} ({})", category, count).ok();
        }
        writeln!(self.out, "\n--- Languages ---").ok();
        for language in &catalog.languages {
            writeln!(self.out, "  {}", language).ok();
        }
    }

    fn entries(&mut self, shown: &[&Entry], total: usize) {
        if shown.len() == total {
            writeln!(self.out, "Showing all {} applications", total).ok();
        } else {
            writeln!(self.out, "Showing {} of {} applications", shown.len(), total).ok();
        }
        if shown.is_empty() {
            writeln!(self.out, "No applications found matching your criteria.").ok();
            return;
        }

        writeln!(self.out).ok();
        writeln!(
            self.out,
            "{:>3} | {:<24} | {:<16} | {:<20} | {}",
            "#", "Name", "Category", "Languages", "Id"
        )
        .ok();
        writeln!(self.out, "{}", "-".repeat(90)).ok();

        for (i, entry) in shown.iter().enumerate() {
            writeln!(
                self.out,
                "{:>3} | {:<24} | {:<16} | {:<20} | {}",
                i + 1,
                truncate(&entry.name, 24),
                truncate(&entry.category, 16),
                truncate(&compact_languages(&entry.languages), 20),
                entry.id
            )
            .ok();
        }
    }

    fn detail(&mut self, entry: &Entry) {
        writeln!(self.out, "{}", entry.name).ok();
        writeln!(self.out, "Category: {}", entry.category).ok();

        let description = if entry.description.is_empty() {
            "No description available."
        } else {
            &entry.description
        };
        writeln!(self.out, "\n{}\n", description).ok();

        if !entry.languages.is_empty() {
            writeln!(self.out, "Languages:").ok();
            for language in &entry.languages {
                writeln!(self.out, "  {:<16} {}", language, icons::icon_path(language)).ok();
            }
            writeln!(self.out).ok();
        }

        writeln!(self.out, "Repository:  {}", entry.url).ok();
        if let Some(website) = &entry.website {
            writeln!(self.out, "Website:     {}", website).ok();
        }
        if let Some(stars) = &entry.stars {
            writeln!(self.out, "Stars:       {}", stars).ok();
        }
        if let Some(license) = &entry.license {
            writeln!(self.out, "License:     {}", license).ok();
        }
        if let Some(last_commit) = &entry.last_commit {
            writeln!(self.out, "Last commit: {}", last_commit).ok();
        }

        if !entry.screenshots.is_empty() {
            writeln!(self.out, "\nScreenshots ({}):", entry.screenshots.len()).ok();
            for screenshot in &entry.screenshots {
                writeln!(self.out, "  {}", screenshot).ok();
            }
        }
    }

    fn load_error(&mut self) {
        writeln!(self.out, "Error loading applications. Please try again later.").ok();
    }
}

/// Card-style language summary: first two tags, the rest collapsed into a
/// `+N` suffix.
fn compact_languages(languages: &[String]) -> String {
    let mut summary = languages
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if languages.len() > 2 {
        summary.push_str(&format!(" +{}", languages.len() - 2));
    }
    summary
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

// ── Tests ──
