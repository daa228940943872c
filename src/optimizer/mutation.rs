use crate::consts::ALPHABET_SIZE;
use crate::key::Key;
use fastrand::Rng;

/// Uniformly random permutation (Fisher-Yates over the identity).
pub fn random_key(rng: &mut Rng) -> Key {
    let mut key = Key::identity();
    rng.shuffle(key.as_mut_array());
    key
}

/// Neighbor move: swap two positions drawn independently with replacement.
/// Drawing the same position twice yields an unchanged child; that trial
/// still counts toward the stagnation budget.
#[inline(always)]
pub fn swap_move(parent: &Key, rng: &mut Rng) -> Key {
    let mut child = *parent;
    let a = rng.usize(0..ALPHABET_SIZE);
    let b = rng.usize(0..ALPHABET_SIZE);
    child.swap(a, b);
    child
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_keys_are_bijections() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..200 {
            assert!(random_key(&mut rng).is_bijection());
        }
    }

    #[test]
    fn test_swap_changes_at_most_two_positions() {
        let mut rng = Rng::with_seed(11);
        let parent = random_key(&mut rng);
        for _ in 0..200 {
            let child = swap_move(&parent, &mut rng);
            assert!(child.is_bijection());
            let diff = parent
                .as_array()
                .iter()
                .zip(child.as_array())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diff == 0 || diff == 2, "diff = {}", diff);
        }
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let a = random_key(&mut Rng::with_seed(99));
        let b = random_key(&mut Rng::with_seed(99));
        assert_eq!(a, b);
    }
}
