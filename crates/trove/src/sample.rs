//! Random draws.
//!
//! All randomness comes from a caller-supplied [`Rng`], so seeded
//! generators give reproducible results.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde_json::Value;
use trove_core::is_equal;

use crate::collection::Collection;

impl Collection {
    /// Draws up to `size` items uniformly at random.
    ///
    /// `size` is capped at the collection's length. Without `uniq`, the
    /// same position may be drawn more than once. With `uniq`, positions
    /// are drawn without replacement and items deep-equal to one already
    /// chosen are skipped, so the result is shorter than requested when
    /// there are not enough distinct values.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use serde_json::json;
    /// use trove::Collection;
    ///
    /// let c = Collection::from_value(json!([1, 1, 2])).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let drawn = c.sample(&mut rng, 3, true);
    /// assert_eq!(drawn.len(), 2);
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, size: usize, uniq: bool) -> Collection {
        let len = self.items.len();
        let wanted = size.min(len);
        if !uniq {
            return (0..wanted)
                .map(|_| self.items[rng.random_range(0..len)].clone())
                .collect();
        }

        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);

        let mut chosen: Vec<&Value> = Vec::with_capacity(wanted);
        for index in order {
            if chosen.len() == wanted {
                break;
            }
            let candidate = &self.items[index];
            if !chosen.iter().any(|picked| is_equal(*picked, candidate)) {
                chosen.push(candidate);
            }
        }
        if chosen.len() < wanted {
            tracing::debug!(wanted, drawn = chosen.len(), "not enough distinct items to sample");
        }
        chosen.into_iter().cloned().collect()
    }

    /// Draws one item, or `None` when empty.
    pub fn sample_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Value> {
        self.items.choose(rng)
    }

    /// Returns the items in a random order.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Collection {
        let mut items = self.items.clone();
        items.shuffle(rng);
        Collection::from(items)
    }
}
