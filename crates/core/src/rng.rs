use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws the seed from OS entropy; it stays readable for replay.
    pub fn from_entropy() -> Self {
        let seed = StdRng::from_entropy().next_u64();
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index over an empty range");
        self.rng.gen_range(0..len)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.pick_index(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RngState::from_seed(99);
        let mut b = RngState::from_seed(99);
        let picks_a: Vec<usize> = (0..32).map(|_| a.pick_index(10)).collect();
        let picks_b: Vec<usize> = (0..32).map(|_| b.pick_index(10)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn pick_index_stays_in_range() {
        let mut rng = RngState::from_seed(7);
        for _ in 0..500 {
            assert!(rng.pick_index(5) < 5);
        }
    }

    #[test]
    fn choose_returns_slice_element() {
        let mut rng = RngState::from_seed(3);
        let items = ["a", "b", "c"];
        for _ in 0..50 {
            assert!(items.contains(rng.choose(&items)));
        }
    }

    #[test]
    fn entropy_seed_is_replayable() {
        let rng = RngState::from_entropy();
        let mut first = RngState::from_seed(rng.seed());
        let mut second = RngState::from_seed(rng.seed());
        assert_eq!(first.pick_index(1000), second.pick_index(1000));
    }
}
