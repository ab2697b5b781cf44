//! Sharded string interner.
//!
//! Strings are leaked once and handed out as `&'static str`, so lookups never
//! hold a lock past the call. Each shard sits behind its own `RwLock`.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

#[derive(Default)]
struct InternShard {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Interner mapping identifier text to [`Name`]s.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
}

impl StringInterner {
    pub fn new() -> Self {
        let interner = StringInterner {
            shards: std::array::from_fn(|_| RwLock::new(InternShard::default())),
        };
        // Shard 0, local 0 is reserved for the empty string.
        let mut first = interner.shards[0].write();
        first.map.insert("", 0);
        first.strings.push("");
        drop(first);
        interner
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Intern `s`, returning the existing name if it was seen before.
    pub fn intern(&self, s: &str) -> Name {
        if s.is_empty() {
            return Name::EMPTY;
        }
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard index is bounded by NUM_SHARDS"
        )]
        let shard_tag = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        if let Some(&local) = shard.read().map.get(s) {
            return Name::new(shard_tag, local);
        }

        let mut guard = shard.write();
        if let Some(&local) = guard.map.get(s) {
            return Name::new(shard_tag, local);
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let local = u32::try_from(guard.strings.len())
            .unwrap_or(Name::MAX_LOCAL)
            .min(Name::MAX_LOCAL);
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        Name::new(shard_tag, local)
    }

    /// Text of an interned name. Unknown names resolve to `""`.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards
            .get(name.shard())
            .and_then(|shard| shard.read().strings.get(name.local()).copied())
            .unwrap_or("")
    }

    /// Number of distinct strings interned, including the empty string.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().strings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference-counted interner shared by a session and everything it parses.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
