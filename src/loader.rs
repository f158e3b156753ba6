//! Catalog ingestion: fetch the source text, decode it, and hand back a
//! normalized `Catalog`. Sources are either local paths or http(s) URLs.

use std::collections::BTreeMap;
use std::fs;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::catalog::{slugify, Catalog, Entry, SourceKind};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog document")]
    Parse(#[from] serde_json::Error),
}

// ── Wire format ──

/// The generated JSON document, as written by `export`. Field-for-field the
/// shape the site generator emits: absent optionals are empty strings, not
/// nulls, and the aggregates are precomputed.
#[derive(Debug, Serialize, Deserialize)]
pub struct Document {
    pub stats: DocStats,
    pub languages: Vec<String>,
    pub apps: Vec<DocApp>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocStats {
    pub total_apps: usize,
    pub total_categories: usize,
    pub categories: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocApp {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub stars: String,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub last_commit: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
}

// ── Loading ──

/// Load and decode a catalog. The JSON path trusts the document's own
/// aggregates; the markdown path computes them while parsing.
pub async fn load(source: &str, kind: SourceKind) -> Result<Catalog, LoadError> {
    let text = fetch(source).await?;
    let catalog = match kind {
        SourceKind::Json => from_document(serde_json::from_str(&text)?),
        SourceKind::Markdown => Catalog::from_markdown(&text),
    };
    info!("Loaded {} entries from {}", catalog.entries.len(), source);
    Ok(catalog)
}

async fn fetch(source: &str) -> Result<String, LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let fetch_err = |e: reqwest::Error| LoadError::Fetch {
            url: source.to_string(),
            source: e,
        };
        info!("Fetching {}", source);
        let client = reqwest::Client::new();
        let response = client
            .get(source)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;
        response.text().await.map_err(fetch_err)
    } else {
        fs::read_to_string(source).map_err(|e| LoadError::Read {
            path: source.to_string(),
            source: e,
        })
    }
}

pub fn from_document(doc: Document) -> Catalog {
    Catalog {
        source: SourceKind::Json,
        total: doc.stats.total_apps,
        categories: doc.stats.categories,
        languages: doc.languages,
        entries: doc.apps.into_iter().map(normalize).collect(),
    }
}

/// Convert a parsed catalog back into the document shape, for `export`.
pub fn to_document(catalog: &Catalog) -> Document {
    Document {
        stats: DocStats {
            total_apps: catalog.total,
            total_categories: catalog.categories.len(),
            categories: catalog.categories.clone(),
        },
        languages: catalog.languages.clone(),
        apps: catalog.entries.iter().map(denormalize).collect(),
    }
}

fn normalize(app: DocApp) -> Entry {
    let id = if app.id.is_empty() {
        slugify(&app.name)
    } else {
        app.id
    };
    Entry {
        id,
        name: app.name,
        url: app.url,
        description: app.description,
        category: app.category,
        languages: app.languages,
        website: opt(app.website),
        stars: opt(app.stars),
        license: opt(app.license),
        last_commit: opt(app.last_commit),
        screenshots: app.screenshots,
    }
}

fn denormalize(entry: &Entry) -> DocApp {
    DocApp {
        id: entry.id.clone(),
        name: entry.name.clone(),
        url: entry.url.clone(),
        description: entry.description.clone(),
        category: entry.category.clone(),
        languages: entry.languages.clone(),
        website: entry.website.clone().unwrap_or_default(),
        stars: entry.stars.clone().unwrap_or_default(),
        license: entry.license.clone().unwrap_or_default(),
        last_commit: entry.last_commit.clone().unwrap_or_default(),
        screenshots: entry.screenshots.clone(),
    }
}

fn opt(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// ── Tests ──
