//! Bigram language models and their binary asset format (spec.md §6).
//!
//! Grounded on the original rewrite's `models/__init__.py` loader, with one
//! addition: that module's `score_bigrams` is the only scoring primitive it
//! defines, but `pipeline/confusion.py`'s bigram-rescore path calls into a
//! `BigramProfile` / per-encoding index it never actually declares anywhere
//! in the retrieved source tree. [`BigramProfile`] and [`ModelSet::index_of`]
//! below are this crate's own synthesis of that missing piece, built to the
//! shape spec.md §4.4 describes ("multiple language models per encoding are
//! permitted; encoding score = max over its languages' scores").

use std::collections::HashMap;

use ahash::AHashMap;

/// One (encoding, language) bigram frequency table: `(byte_a, byte_b) ->
/// weight`, weight in `1..=255`. Scoring walks this table once per byte
/// pair in the input, so it uses `ahash` rather than the default SipHash
/// hasher to keep that lookup cheap.
#[derive(Debug, Clone)]
pub struct BigramProfile {
    pub encoding: String,
    pub table: AHashMap<(u8, u8), u8>,
}

/// The full set of loaded bigram profiles, keyed by encoding name with an
/// index for confusion-resolution's "rescore on these specific encodings"
/// use case.
#[derive(Debug, Clone, Default)]
pub struct ModelSet {
    profiles: Vec<BigramProfile>,
    by_encoding: HashMap<String, Vec<usize>>,
}

impl ModelSet {
    /// Parses the `models.bin` layout from spec.md §6: a big-endian
    /// `u32` model count, then per model a length-prefixed name, a `u32`
    /// entry count, and that many `(byte_a, byte_b, weight)` triples.
    pub fn from_bytes(data: &[u8]) -> Option<ModelSet> {
        let mut cursor = Cursor::new(data);
        let num_models = cursor.read_u32()?;
        let mut profiles = Vec::with_capacity(num_models as usize);
        let mut by_encoding: HashMap<String, Vec<usize>> = HashMap::new();

        for _ in 0..num_models {
            let name_len = cursor.read_u32()? as usize;
            let name = cursor.read_str(name_len)?;
            let num_entries = cursor.read_u32()?;
            let mut table = AHashMap::with_capacity(num_entries as usize);
            for _ in 0..num_entries {
                let b1 = cursor.read_u8()?;
                let b2 = cursor.read_u8()?;
                let weight = cursor.read_u8()?;
                table.insert((b1, b2), weight);
            }
            let idx = profiles.len();
            by_encoding.entry(name.clone()).or_default().push(idx);
            profiles.push(BigramProfile { encoding: name, table });
        }

        Some(ModelSet { profiles, by_encoding })
    }

    /// Every profile trained for `encoding`, if any were loaded.
    pub fn index_of(&self, encoding: &str) -> &[BigramProfile] {
        match self.by_encoding.get(encoding) {
            Some(idxs) => {
                // Safe: indices are only ever pushed for profiles that exist.
                let start = idxs[0];
                &self.profiles[start..start + idxs.len()]
            }
            None => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Scores `data` against a single profile's bigram table. Matches the
/// source's `score_bigrams`: a byte pair with either byte above `0x7F`
/// counts for weight 8 in the normaliser (non-ASCII bigrams are rarer and
/// more diagnostic), everything else weight 1.
pub fn score_bigrams(data: &[u8], profile: &BigramProfile) -> f32 {
    if data.len() < 2 {
        return 0.0;
    }
    let mut score: f64 = 0.0;
    let mut weight_sum: f64 = 0.0;
    for pair in data.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let w: f64 = if a > 0x7F || b > 0x7F { 8.0 } else { 1.0 };
        let table_weight = profile.table.get(&(a, b)).copied().unwrap_or(0) as f64;
        score += table_weight * w;
        weight_sum += 255.0 * w;
    }
    if weight_sum == 0.0 {
        return 0.0;
    }
    (score / weight_sum) as f32
}

/// Scores `data` against the best-matching profile for `encoding` (spec.md
/// §4.4: "encoding score = max(scores over its languages)"). Returns
/// `None` if no profile was loaded for this encoding.
pub fn score_encoding(data: &[u8], encoding: &str, models: &ModelSet) -> Option<f32> {
    let profiles = models.index_of(encoding);
    if profiles.is_empty() {
        return None;
    }
    profiles
        .iter()
        .map(|p| score_bigrams(data, p))
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// Minimal big-endian byte cursor, avoiding a dependency purely for
/// parsing a handful of fixed-width binary asset files.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    fn read_u8(&mut self) -> Option<u8> {
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        let bytes = self.data.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some(u32::from_be_bytes(bytes.try_into().ok()?))
    }

    fn read_str(&mut self, len: usize) -> Option<String> {
        let bytes = self.data.get(self.pos..self.pos + len)?;
        self.pos += len;
        String::from_utf8(bytes.to_vec()).ok()
    }
}
