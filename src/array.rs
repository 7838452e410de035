//! Array helpers: filled construction, random sampling and summation.

use rand::Rng;

/// Create a vector of `length` clones of `value`.
///
/// Pass `None` (or `Value::Null`) for a vector of empty slots.
pub fn create_array<T: Clone>(length: usize, value: T) -> Vec<T> {
    vec![value; length]
}

/// Pick up to `quantity` elements at random, without replacement.
///
/// Returns `min(quantity, items.len())` elements taken from distinct
/// positions. `items` is left untouched.
pub fn random_sample<T: Clone>(items: &[T], quantity: usize) -> Vec<T> {
    random_sample_with(&mut rand::thread_rng(), items, quantity)
}

/// [`random_sample`] with a caller-supplied generator.
pub fn random_sample_with<T, R>(rng: &mut R, items: &[T], quantity: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let take = quantity.min(items.len());
    let mut pool: Vec<T> = items.to_vec();
    let mut picked = Vec::with_capacity(take);

    for _ in 0..take {
        let idx = rng.gen_range(0..pool.len());
        // Removed from the pool so it cannot be drawn again
        picked.push(pool.swap_remove(idx));
    }

    picked
}

/// Sum of all values; 0 for an empty slice.
pub fn array_sum(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_create_array() {
        assert_eq!(create_array(5, "x"), vec!["x"; 5]);
        assert_eq!(create_array(1, 42), vec![42]);
        assert_eq!(create_array::<Option<i32>>(4, None), vec![None; 4]);
        assert!(create_array(0, "test").is_empty());
    }

    #[test]
    fn test_random_sample_picks_distinct_elements() {
        let items = [1, 2, 3, 4, 5];
        let mut result = random_sample(&items, 3);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|n| items.contains(n)));
        result.sort_unstable();
        result.dedup();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_random_sample_caps_quantity() {
        let mut result = random_sample(&[1, 2], 5);
        result.sort_unstable();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_random_sample_edge_cases() {
        assert!(random_sample(&[1, 2, 3], 0).is_empty());
        assert!(random_sample::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn test_random_sample_leaves_input_untouched() {
        let items = vec![1, 2, 3, 4, 5];
        let _ = random_sample(&items, 3);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_random_sample_with_seed_is_deterministic() {
        let items: Vec<u32> = (0..20).collect();
        let first = random_sample_with(&mut StdRng::seed_from_u64(7), &items, 5);
        let second = random_sample_with(&mut StdRng::seed_from_u64(7), &items, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_array_sum() {
        assert_eq!(array_sum(&[10.0, -2.0, 5.0, 0.0]), 13.0);
        assert_eq!(array_sum(&[]), 0.0);
        assert_eq!(array_sum(&[42.0]), 42.0);
        assert_eq!(array_sum(&[-1.0, -2.0, -3.0]), -6.0);
    }
}
