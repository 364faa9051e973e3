//! Injected asset service
//!
//! A keyed, load-once byte cache with an explicit lifecycle, passed into
//! the shell rather than reached for as ambient static state. Individual
//! load failures degrade: the key reads back as `None` and the draw layer
//! substitutes a placeholder. Only a total failure is reported, and only
//! once - it is never retried automatically.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset '{key}' failed to load: {reason}")]
    Load { key: String, reason: String },
    #[error("all {count} assets failed to load")]
    AllFailed { count: usize },
}

/// Where asset bytes come from: disk, an embedded bundle, a test fixture.
pub trait AssetSource {
    fn fetch(&mut self, key: &str) -> Result<Vec<u8>, AssetError>;
}

/// Keys the runner's draw layer expects: actor flap frames, obstacle art,
/// scroll layers, score digits, and overlay cards.
pub const GAME_ASSET_KEYS: &[&str] = &[
    "background",
    "base",
    "bird-up",
    "bird-mid",
    "bird-down",
    "pipe-body",
    "pipe-tip",
    "digit-0",
    "digit-1",
    "digit-2",
    "digit-3",
    "digit-4",
    "digit-5",
    "digit-6",
    "digit-7",
    "digit-8",
    "digit-9",
    "score",
    "gameover",
];

#[derive(Debug, Default)]
pub struct AssetCache {
    entries: HashMap<String, Vec<u8>>,
    failed: Vec<String>,
    loaded: bool,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every key once. Returns Ok when at least one asset loaded;
    /// the simulation refuses to start until this resolves.
    pub fn load_all(
        &mut self,
        source: &mut dyn AssetSource,
        keys: &[&str],
    ) -> Result<(), AssetError> {
        if self.loaded {
            return Ok(());
        }
        for &key in keys {
            match source.fetch(key) {
                Ok(bytes) => {
                    self.entries.insert(key.to_string(), bytes);
                }
                Err(err) => {
                    log::warn!("asset '{}' failed to load: {}", key, err);
                    self.failed.push(key.to_string());
                }
            }
        }
        self.loaded = true;
        if !keys.is_empty() && self.entries.is_empty() {
            return Err(AssetError::AllFailed { count: keys.len() });
        }
        log::info!("loaded {}/{} assets", self.entries.len(), keys.len());
        Ok(())
    }

    /// `None` for missing or failed keys; draw calls must tolerate that.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn failed_keys(&self) -> &[String] {
        &self.failed
    }

    /// Drop everything; a later `load_all` starts fresh.
    pub fn dispose(&mut self) {
        self.entries.clear();
        self.failed.clear();
        self.loaded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapSource(HashMap<&'static str, Vec<u8>>);

    impl AssetSource for MapSource {
        fn fetch(&mut self, key: &str) -> Result<Vec<u8>, AssetError> {
            self.0.get(key).cloned().ok_or_else(|| AssetError::Load {
                key: key.to_string(),
                reason: "not in fixture".to_string(),
            })
        }
    }

    #[test]
    fn test_partial_failure_degrades() {
        let mut cache = AssetCache::new();
        let mut source = MapSource(HashMap::from([("bird-mid", vec![1, 2, 3])]));
        let result = cache.load_all(&mut source, &["bird-mid", "pipe-body"]);
        assert!(result.is_ok());
        assert_eq!(cache.get("bird-mid"), Some([1, 2, 3].as_slice()));
        assert_eq!(cache.get("pipe-body"), None);
        assert_eq!(cache.failed_keys(), ["pipe-body".to_string()]);
    }

    #[test]
    fn test_total_failure_is_reported_once() {
        let mut cache = AssetCache::new();
        let mut source = MapSource(HashMap::new());
        let result = cache.load_all(&mut source, &["bird-mid", "pipe-body"]);
        assert!(matches!(result, Err(AssetError::AllFailed { count: 2 })));
        // A second call is a no-op success, not a retry
        assert!(cache.load_all(&mut source, &["bird-mid"]).is_ok());
    }

    #[test]
    fn test_dispose_allows_fresh_load() {
        let mut cache = AssetCache::new();
        let mut source = MapSource(HashMap::from([("base", vec![7])]));
        cache.load_all(&mut source, &["base"]).unwrap();
        assert!(cache.is_loaded());
        cache.dispose();
        assert!(!cache.is_loaded());
        assert_eq!(cache.get("base"), None);
        cache.load_all(&mut source, &["base"]).unwrap();
        assert_eq!(cache.get("base"), Some([7].as_slice()));
    }
}
