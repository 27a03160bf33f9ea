//! crates/activity_core/src/pool.rs
//!
//! The user-curated pool of suggestions the gacha draws from.

use tracing::debug;

use crate::domain::Suggestion;
use crate::error::CoreResult;
use crate::ports::RandomSource;

/// Append-only collection of suggestions. Duplicates are allowed.
#[derive(Debug, Default, Clone)]
pub struct SuggestionPool {
    entries: Vec<Suggestion>,
}

impl SuggestionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, description: &str, duration: &str) -> CoreResult<()> {
        let suggestion = Suggestion::new(name, description, duration)?;
        self.entries.push(suggestion);
        debug!(size = self.entries.len(), "Suggestion added to pool");
        Ok(())
    }

    /// Picks one entry uniformly at random. The pool is left untouched.
    pub fn draw_random(&self, rng: &mut dyn RandomSource) -> Option<&Suggestion> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(rng.pick_index(self.entries.len()))
    }

    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_pool_draws_nothing() {
        let pool = SuggestionPool::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.is_empty());
        assert!(pool.draw_random(&mut rng).is_none());
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut pool = SuggestionPool::new();
        let result = pool.add("Walk", "  ", "15 minutes");
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(pool.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut pool = SuggestionPool::new();
        pool.add("Walk", "Around the block", "15 minutes").unwrap();
        pool.add("Walk", "Around the block", "15 minutes").unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn draws_are_roughly_uniform_and_non_destructive() {
        let mut pool = SuggestionPool::new();
        for name in ["A", "B", "C"] {
            pool.add(name, "desc", "10 minutes").unwrap();
        }

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 3];
        let draws = 30_000;
        for _ in 0..draws {
            let drawn = pool.draw_random(&mut rng).unwrap();
            let slot = match drawn.name.as_str() {
                "A" => 0,
                "B" => 1,
                _ => 2,
            };
            counts[slot] += 1;
        }

        // Expect ~10_000 each; allow a wide band.
        for count in counts {
            assert!((9_000..=11_000).contains(&count), "counts: {counts:?}");
        }
        assert_eq!(pool.len(), 3);
        assert!(!pool.is_empty());
    }
}
