//! Order-preserving fan-out for independent per-file work.
//!
//! Small batches run inline; larger ones are spread over the rayon pool.
//! Results come back in input order either way.

use rayon::prelude::*;

/// Minimum number of items before work is handed to the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4;

/// Applies `f` to every item, keeping input order and stopping at the first error.
pub(crate) fn try_map_ordered<T, U, E, F>(items: &[T], f: F) -> Result<Vec<U>, E>
where
    T: Sync,
    U: Send,
    E: Send,
    F: Fn(&T) -> Result<U, E> + Sync + Send,
{
    if items.len() < PARALLEL_THRESHOLD {
        return items.iter().map(f).collect();
    }
    items.par_iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_preserved_above_threshold() {
        let items: Vec<u32> = (0..64).collect();
        let doubled: Result<Vec<u32>, ()> = try_map_ordered(&items, |n| Ok(n * 2));
        assert_eq!(doubled.unwrap(), items.iter().map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn errors_are_reported() {
        let items: Vec<u32> = (0..64).collect();
        let result: Result<Vec<u32>, String> = try_map_ordered(&items, |n| {
            if *n == 40 { Err(format!("bad {n}")) } else { Ok(*n) }
        });
        assert_eq!(result.unwrap_err(), "bad 40");
    }
}
