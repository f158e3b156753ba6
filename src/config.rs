//! Runtime settings. Environment variables fill in whatever the command
//! line leaves unset; defaults cover the rest.

use serde::Deserialize;

use crate::catalog::SourceKind;

const DEFAULT_SOURCE: &str = "apps.json";

/// Settings readable from the environment: `APPCAT_SOURCE` and
/// `APPCAT_FORMAT` (`json` or `markdown`).
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    pub source: Option<String>,
    pub format: Option<SourceKind>,
}

impl Settings {
    /// A malformed environment falls back to defaults rather than failing;
    /// the CLI flags remain the reliable path.
    pub fn from_env() -> Settings {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("APPCAT"))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_default()
    }
}

/// Pick the effective source and format: CLI over environment over default,
/// with the format inferred from the source's extension as the last resort.
pub fn resolve(
    settings: &Settings,
    cli_source: Option<String>,
    cli_format: Option<SourceKind>,
) -> (String, SourceKind) {
    let source = cli_source
        .or_else(|| settings.source.clone())
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
    let format = cli_format
        .or(settings.format)
        .unwrap_or_else(|| infer_format(&source));
    (source, format)
}

fn infer_format(source: &str) -> SourceKind {
    let lower = source.to_lowercase();
    if lower.ends_with(".md") || lower.ends_with(".markdown") {
        SourceKind::Markdown
    } else {
        SourceKind::Json
    }
}
