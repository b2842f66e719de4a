use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Supplier of match ids. Implementations must never hand out the same id
/// twice for the lifetime of the process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// URL-safe alphabet used by nanoid-style ids
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

pub const DEFAULT_ID_LENGTH: usize = 21;

/// Random ids over a 64-symbol alphabet. At the default length the collision
/// probability is negligible for any realistic number of matches.
#[derive(Debug, Clone)]
pub struct RandomIds {
    len: usize,
}

impl RandomIds {
    pub fn new(len: usize) -> Self {
        RandomIds { len: len.max(1) }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        RandomIds::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Deterministic ids "1", "2", "3", ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after `last`, e.g. past the ids of seeded matches.
    pub fn starting_after(last: u64) -> Self {
        SequentialIds {
            next: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        (self.next.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}
