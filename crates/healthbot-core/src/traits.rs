use crate::error::Result;
use crate::types::ScoredMatch;

/// Scores a normalized query against a fixed corpus.
///
/// `Ok(None)` means nothing cleared the threshold. `Err` is a per-query
/// failure the caller recovers from by moving on to the next tier.
pub trait Retriever: Send + Sync {
    fn retrieve(&self, normalized_query: &str) -> Result<Option<ScoredMatch>>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Source of uniform random picks. Every `rand` generator is one; tests can
/// plug in [`FixedChoice`] to pin the outcome.
pub trait ChoiceSource {
    /// Returns an index in `0..len`. Only called with `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: rand::RngCore + ?Sized> ChoiceSource for R {
    fn choose_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.gen_range(0..len)
    }
}

/// Always picks the same index, clamped to the last element.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChoice(pub usize);

impl ChoiceSource for FixedChoice {
    fn choose_index(&mut self, len: usize) -> usize { self.0.min(len.saturating_sub(1)) }
}

/// Uniform pick from `items`; `None` only for an empty slice.
pub fn pick<'a, T, C>(items: &'a [T], chooser: &mut C) -> Option<&'a T>
where
    C: ChoiceSource + ?Sized,
{
    if items.is_empty() { return None; }
    let idx = chooser.choose_index(items.len());
    items.get(idx.min(items.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fixed_choice_clamps() {
        let items = ["a", "b", "c"];
        assert_eq!(pick(&items, &mut FixedChoice(0)), Some(&"a"));
        assert_eq!(pick(&items, &mut FixedChoice(9)), Some(&"c"));
        let empty: [&str; 0] = [];
        assert_eq!(pick(&empty, &mut FixedChoice(0)), None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let items: Vec<usize> = (0..50).collect();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick(&items, &mut a), pick(&items, &mut b));
        }
    }
}
