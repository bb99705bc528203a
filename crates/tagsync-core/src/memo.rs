//! Memoization of pipeline runs keyed by input content.
//!
//! The pipeline itself is pure; a caller that may see the same pair of files
//! more than once (an upload form re-submitted, a watch loop) owns a
//! [`ProcessCache`] and routes runs through it. Nothing here is global.

use std::collections::{HashMap, VecDeque};

use sha2::{Digest, Sha256};

use crate::config::TagsyncConfig;
use crate::error::{PipelineError, Result};
use crate::loader::InputFile;
use crate::pipeline::{self, ProcessOutput};

/// SHA-256 over both inputs (names and bytes) and the serialized config,
/// as lowercase hex.
pub fn fingerprint(ads: &InputFile, tags: &InputFile, cfg: &TagsyncConfig) -> Result<String> {
    let cfg_text = toml::to_string(cfg)
        .map_err(|e| PipelineError::Unexpected(format!("serialize config: {e}")))?;

    let mut hasher = Sha256::new();
    for part in [
        ads.name.as_bytes(),
        ads.bytes.as_slice(),
        tags.name.as_bytes(),
        tags.bytes.as_slice(),
        cfg_text.as_bytes(),
    ] {
        // Length prefix keeps ("ab", "c") distinct from ("a", "bc").
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Cache of successful runs. Unbounded by default; [`ProcessCache::with_capacity`]
/// evicts the oldest entry once full.
#[derive(Debug, Default)]
pub struct ProcessCache {
    entries: HashMap<String, ProcessOutput>,
    /// Insertion order, oldest first.
    order: VecDeque<String>,
    capacity: Option<usize>,
    hits: u64,
}

impl ProcessCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` results (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    /// Return the cached output for these inputs, or run the pipeline and
    /// cache a successful result. Failures are never cached.
    pub fn get_or_process(
        &mut self,
        ads: &InputFile,
        tags: &InputFile,
        cfg: &TagsyncConfig,
    ) -> Result<ProcessOutput> {
        let key = fingerprint(ads, tags, cfg)?;
        if let Some(out) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!("cache hit for {}", &key[..12]);
            return Ok(out.clone());
        }

        let out = pipeline::process_files(ads, tags, cfg)?;
        if let Some(cap) = self.capacity {
            while self.entries.len() >= cap {
                let Some(oldest) = self.order.pop_front() else {
                    break;
                };
                self.entries.remove(&oldest);
                tracing::debug!("evicted cache entry {}", &oldest[..12]);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, out.clone());
        Ok(out)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
