//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SinkError, SinkResult};

use super::types::{LineEnding, SanitizerKind, SinkConfig};

pub const ENV_SANITIZER: &str = "PROGRESS_SINK_SANITIZER";
pub const ENV_LINE_ENDING: &str = "PROGRESS_SINK_LINE_ENDING";
pub const ENV_MAX_CAUSE_DEPTH: &str = "PROGRESS_SINK_MAX_CAUSE_DEPTH";

/// Non-fatal configuration warning surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SinkResult<(SinkConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> SinkResult<(SinkConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: SinkConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SinkError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            "unknown config key"
        );
    }

    Ok((config, warnings))
}

/// Load from the given file, falling back to defaults
pub fn load_or_default(path: Option<&Path>) -> SinkConfig {
    let config = match path {
        Some(path) if path.exists() => match SinkConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default sink config");
                SinkConfig::default()
            }
        },
        _ => SinkConfig::default(),
    };

    with_env_overrides(config)
}

/// Apply environment variable overrides (PROGRESS_SINK_* prefix)
pub fn with_env_overrides(config: SinkConfig) -> SinkConfig {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`; unrecognized values are ignored.
pub fn with_overrides_from(
    mut config: SinkConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> SinkConfig {
    // PROGRESS_SINK_SANITIZER
    if let Some(value) = lookup(ENV_SANITIZER) {
        match value.trim().to_lowercase().as_str() {
            "html" => config.output.sanitizer = SanitizerKind::Html,
            "none" | "plain" => config.output.sanitizer = SanitizerKind::None,
            other => tracing::warn!(value = other, "ignoring {ENV_SANITIZER}"),
        }
    }

    // PROGRESS_SINK_LINE_ENDING
    if let Some(value) = lookup(ENV_LINE_ENDING) {
        match value.trim().to_lowercase().as_str() {
            "lf" => config.output.line_ending = LineEnding::Lf,
            "crlf" => config.output.line_ending = LineEnding::CrLf,
            other => tracing::warn!(value = other, "ignoring {ENV_LINE_ENDING}"),
        }
    }

    // PROGRESS_SINK_MAX_CAUSE_DEPTH
    if let Some(value) = lookup(ENV_MAX_CAUSE_DEPTH) {
        match value.trim().parse::<usize>() {
            Ok(depth) => config.exceptions.max_cause_depth = depth,
            Err(_) => tracing::warn!(value = %value, "ignoring {ENV_MAX_CAUSE_DEPTH}"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "sanitizer",
        "line_ending",
        "exceptions",
        "max_cause_depth",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = strsim::levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
