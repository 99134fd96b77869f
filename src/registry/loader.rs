//! Loads `<CLASS>_registry.json` files into compiled [`PatternRegistry`]s,
//! regenerating the `.bincode` accelerator cache on a content-hash mismatch.

use std::collections::HashMap;
use std::hash::Hasher;
use std::path::Path;

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use super::{validate_pattern, Pattern, PatternKind, PatternRegistry, REGISTRY_CLASSES};
use crate::error::{RegistryError, RegistryResult};

/// All nine compiled per-class registries, keyed by class name.
#[derive(Debug, Clone)]
pub struct CompiledRegistries {
    by_class: HashMap<&'static str, PatternRegistry>,
}

impl CompiledRegistries {
    pub fn get(&self, class: &str) -> Option<&PatternRegistry> {
        self.by_class.get(class)
    }

    /// A registry set with nothing loaded, for detector/engine unit tests
    /// that only need to exercise the no-match path.
    #[cfg(test)]
    pub fn empty_for_tests() -> Self {
        Self {
            by_class: HashMap::new(),
        }
    }

    /// A registry set with a single class populated, for detector unit tests
    /// that need to exercise `detect()` against a hand-built registry.
    #[cfg(test)]
    pub fn single_for_tests(class: &'static str, registry: PatternRegistry) -> Self {
        let mut by_class = HashMap::new();
        by_class.insert(class, registry);
        Self { by_class }
    }
}

#[derive(Serialize, Deserialize)]
struct CacheFile {
    content_hash: u64,
    patterns: Vec<Pattern>,
}

/// Load all nine registries rooted at `dir` (one subdirectory per class, as
/// laid out under `registries/` in this crate).
pub fn load_registry_dir(dir: &Path) -> RegistryResult<CompiledRegistries> {
    let mut by_class = HashMap::with_capacity(REGISTRY_CLASSES.len());
    for class in REGISTRY_CLASSES {
        let registry = load_class(dir, class)?;
        by_class.insert(class, registry);
    }
    Ok(CompiledRegistries { by_class })
}

fn load_class(root: &Path, class: &'static str) -> RegistryResult<PatternRegistry> {
    let class_dir = root.join(class);
    let json_path = class_dir.join(format!("{class}_registry.json"));
    let cache_path = class_dir.join(format!("{class}_registry.bincode"));

    let json_bytes = std::fs::read(&json_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RegistryError::Missing(json_path.display().to_string())
        } else {
            RegistryError::Io(e)
        }
    })?;
    let content_hash = hash_bytes(&json_bytes);

    if let Some(cached) = try_read_cache(&cache_path, content_hash) {
        let kind = infer_kind(&cached);
        return Ok(PatternRegistry {
            class: class.to_string(),
            kind,
            patterns: cached,
        });
    }

    let parsed: Vec<Pattern> = serde_json::from_slice(&json_bytes).map_err(|e| RegistryError::Json {
        path: json_path.display().to_string(),
        source: e,
    })?;
    let patterns = assign_ids_and_validate(class, parsed)?;

    let cache = CacheFile {
        content_hash,
        patterns: patterns.clone(),
    };
    if let Ok(encoded) = bincode::serialize(&cache) {
        if std::fs::write(&cache_path, encoded).is_ok() {
            log::info!("rebuilt registry cache for {class} ({} patterns)", patterns.len());
        }
    }

    let kind = infer_kind(&patterns);
    Ok(PatternRegistry {
        class: class.to_string(),
        kind,
        patterns,
    })
}

/// Ids are reassigned (not trusted from the file) by sorting bodies
/// lexicographically, so that regenerating the registry from the same
/// source patterns always reproduces the same ids.
fn assign_ids_and_validate(class: &str, mut patterns: Vec<Pattern>) -> RegistryResult<Vec<Pattern>> {
    if patterns.is_empty() {
        return Err(RegistryError::Missing(format!("registry for {class} has no patterns")));
    }
    patterns.sort_by(|a, b| a.body.cmp(&b.body));
    for (index, pattern) in patterns.iter_mut().enumerate() {
        pattern.id = index as u32 + 1;
        validate_pattern(class, pattern)?;
    }
    Ok(patterns)
}

fn infer_kind(patterns: &[Pattern]) -> PatternKind {
    patterns.first().map(|p| p.kind).unwrap_or(PatternKind::Regex)
}

fn try_read_cache(cache_path: &Path, expected_hash: u64) -> Option<Vec<Pattern>> {
    let bytes = std::fs::read(cache_path).ok()?;
    let cache: CacheFile = bincode::deserialize(&bytes).ok()?;
    if cache.content_hash == expected_hash {
        Some(cache.patterns)
    } else {
        None
    }
}

fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_class(dir: &Path, class: &str, patterns_json: &str) {
        let class_dir = dir.join(class);
        std::fs::create_dir_all(&class_dir).unwrap();
        let mut f = std::fs::File::create(class_dir.join(format!("{class}_registry.json"))).unwrap();
        f.write_all(patterns_json.as_bytes()).unwrap();
    }

    #[test]
    fn loads_and_reassigns_ids_by_sorted_body() {
        let tmp = tempfile::tempdir().unwrap();
        write_class(
            tmp.path(),
            "Cruciform",
            r#"[
                {"id": 99, "kind": "Regex", "body": "[AT]{12,}", "subclass": "Inverted repeat seed", "scalar": 1.0, "method": "inverted_repeat"}
            ]"#,
        );
        let registry = load_class(tmp.path(), "Cruciform").unwrap();
        assert_eq!(registry.patterns.len(), 1);
        assert_eq!(registry.patterns[0].id, 1);
    }

    #[test]
    fn rejects_malformed_literal_10mer() {
        let tmp = tempfile::tempdir().unwrap();
        write_class(
            tmp.path(),
            "Z-DNA",
            r#"[{"id": 1, "kind": "Literal10mer", "body": "ACGT", "subclass": "Z-DNA", "scalar": 1.0, "method": "additive"}]"#,
        );
        let err = load_class(tmp.path(), "Z-DNA").unwrap_err();
        assert!(matches!(err, RegistryError::Inconsistent { .. }));
    }

    #[test]
    fn missing_registry_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_class(tmp.path(), "Triplex").unwrap_err();
        assert!(matches!(err, RegistryError::Missing(_)));
    }

    #[test]
    fn cache_round_trips_and_is_reused_on_matching_hash() {
        let tmp = tempfile::tempdir().unwrap();
        write_class(
            tmp.path(),
            "Triplex",
            r#"[{"id": 1, "kind": "Regex", "body": "[AG]{15,}", "subclass": "Homopurine tract", "scalar": 1.0, "method": "purity"}]"#,
        );
        let first = load_class(tmp.path(), "Triplex").unwrap();
        let cache_path = tmp
            .path()
            .join("Triplex")
            .join("Triplex_registry.bincode");
        assert!(cache_path.exists());

        let second = load_class(tmp.path(), "Triplex").unwrap();
        assert_eq!(first.patterns, second.patterns);
    }
}
