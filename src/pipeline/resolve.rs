//! Base-name resolution: collapse candidates into one primary per page.
//!
//! The image directory holds originals (`page-01.png`) next to outputs of
//! earlier runs (`page-01-480.webp`). Stripping a known size suffix from each
//! stem gives the base name (`page-01`); the first candidate seen for a base
//! wins and the primary for that base is chosen by format preference.
//!
//! Everything here is a pure function of the candidate list. A path "exists"
//! if and only if it is in the list, which is always true of a primary since
//! it matches the same patterns the scanner used.

use crate::config::SourceFormat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A primary source selected for processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceImage {
    /// File to decode.
    pub path: PathBuf,
    /// Deduplication key and output name stem, e.g. `page-01`.
    pub base_name: String,
    /// No bare `<base>.png`/`<base>.webp` existed, so a size-suffixed
    /// variant is standing in as the primary.
    pub fallback: bool,
}

/// Strip trailing `-<size>` markers from `stem`.
///
/// Markers are tried once each, in `suffixes` order, against what is left so
/// far. With the default order `page-01-40-480` loses `-480` and then `-40`,
/// while `page-01-480-40` only loses `-40` because `-480` was already tried.
/// A marker is never stripped if that would leave the base name empty.
pub fn strip_size_suffix<'a>(stem: &'a str, suffixes: &[u32]) -> &'a str {
    let mut base = stem;
    for size in suffixes {
        let marker = format!("-{size}");
        if let Some(rest) = base.strip_suffix(marker.as_str()) {
            if !rest.is_empty() {
                base = rest;
            }
        }
    }
    base
}

/// Sort candidates PNG-first, then by path.
fn sort_candidates(candidates: &[PathBuf]) -> Vec<&PathBuf> {
    let mut sorted: Vec<&PathBuf> = candidates.iter().collect();
    sorted.sort_by(|a, b| {
        let rank = |p: &Path| SourceFormat::from_path(p).map_or(u8::MAX, |f| f as u8);
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
    });
    sorted
}

fn stem_of(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Pick one primary per distinct base name.
///
/// For each base the primary is `<base>.png` if present, else `<base>.webp`,
/// else the first candidate (in sort order) that produced the base. Output
/// order is the order in which bases first appear.
pub fn resolve_primaries(candidates: &[PathBuf], suffixes: &[u32]) -> Vec<SourceImage> {
    let present: HashSet<&Path> = candidates.iter().map(PathBuf::as_path).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut primaries = Vec::new();

    for candidate in sort_candidates(candidates) {
        let Some(stem) = stem_of(candidate) else {
            debug!("Skipping candidate without a UTF-8 stem: {}", candidate.display());
            continue;
        };
        let base = strip_size_suffix(stem, suffixes);
        if !seen.insert(base) {
            continue;
        }

        let dir = candidate.parent().unwrap_or_else(|| Path::new(""));
        let preferred = [SourceFormat::Png, SourceFormat::Webp]
            .iter()
            .map(|f| dir.join(format!("{base}.{}", f.extension())))
            .find(|p| present.contains(p.as_path()));

        let source = match preferred {
            Some(path) => SourceImage {
                path,
                base_name: base.to_string(),
                fallback: false,
            },
            None => {
                let fallback = stem != base;
                if fallback {
                    warn!(
                        "No primary image for '{}'; re-deriving from {}",
                        base,
                        candidate.display()
                    );
                }
                SourceImage {
                    path: candidate.clone(),
                    base_name: base.to_string(),
                    fallback,
                }
            }
        };
        primaries.push(source);
    }

    primaries
}

/// Treat every candidate as its own primary, named by its stem.
///
/// Used when base names are not resolved (full-size conversion).
pub fn each_as_primary(candidates: &[PathBuf]) -> Vec<SourceImage> {
    sort_candidates(candidates)
        .into_iter()
        .filter_map(|path| {
            let stem = stem_of(path)?;
            Some(SourceImage {
                path: path.clone(),
                base_name: stem.to_string(),
                fallback: false,
            })
        })
        .collect()
}
