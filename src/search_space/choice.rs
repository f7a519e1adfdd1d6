//! One-of choice sets for tunable fields

use crate::error::{NasError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A discrete "choose one of N" placeholder.
///
/// Holds the finite candidate list for a single tunable field. The value
/// stays unresolved at this layer; the external search engine narrows each
/// choice to one concrete candidate during sampling and mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice<T> {
    candidates: Vec<T>,
}

impl<T: Clone> Choice<T> {
    /// Create a choice over the given candidates.
    ///
    /// The candidate list must be non-empty.
    pub fn one_of(candidates: Vec<T>) -> Result<Self> {
        if candidates.is_empty() {
            return Err(NasError::ValidationError(
                "choice set must have at least one candidate".to_string(),
            ));
        }
        Ok(Self { candidates })
    }

    /// Get all candidates, in construction order.
    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if empty (never true for a constructed choice)
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Resolve the choice to the candidate at `index`.
    pub fn resolve(&self, index: usize) -> Result<T> {
        self.candidates.get(index).cloned().ok_or_else(|| {
            NasError::ValidationError(format!(
                "choice index {} out of range for {} candidates",
                index,
                self.candidates.len()
            ))
        })
    }

    /// Sample one candidate uniformly at random.
    pub fn sample(&self, rng: &mut impl Rng) -> T {
        let idx = rng.gen_range(0..self.candidates.len());
        self.candidates[idx].clone()
    }
}

impl<T: Clone + PartialEq> Choice<T> {
    /// Whether `value` is among the candidates.
    pub fn contains(&self, value: &T) -> bool {
        self.candidates.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_one_of_rejects_empty() {
        let choice = Choice::<u32>::one_of(vec![]);
        assert!(matches!(choice, Err(NasError::ValidationError(_))));
    }

    #[test]
    fn test_candidates_preserve_order() {
        let choice = Choice::one_of(vec![3, 1, 2]).unwrap();
        assert_eq!(choice.candidates(), &[3, 1, 2]);
        assert_eq!(choice.len(), 3);
    }

    #[test]
    fn test_resolve() {
        let choice = Choice::one_of(vec![10, 20, 30]).unwrap();
        assert_eq!(choice.resolve(1).unwrap(), 20);
        assert!(matches!(
            choice.resolve(3),
            Err(NasError::ValidationError(_))
        ));
    }

    #[test]
    fn test_contains() {
        let choice = Choice::one_of(vec![3, 5]).unwrap();
        assert!(choice.contains(&3));
        assert!(!choice.contains(&7));
    }

    #[test]
    fn test_sample_stays_in_set() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let choice = Choice::one_of(vec![1, 3, 6]).unwrap();

        for _ in 0..100 {
            let value = choice.sample(&mut rng);
            assert!(choice.contains(&value));
        }
    }
}
