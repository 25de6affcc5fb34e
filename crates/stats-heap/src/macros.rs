/// Runs `$block`, reports how long it took through `tracing` and evaluates to
/// `(result, duration)`.
#[macro_export]
macro_rules! measure_time {
    ($label:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = { $block };
        let duration = start.elapsed();
        $crate::tracing::debug!(label = %$label, ?duration, "Execution time");
        (result, duration)
    }};
}

#[cfg(test)]
mod tests {
    use crate::heap::BoundedMaxHeap;

    #[test]
    fn test_measure_time_returns_block_result() {
        let (median, duration) = measure_time!("seven", {
            let mut heap = BoundedMaxHeap::from_values(&[4, 1, 6, 3, 7, 8, 7]).unwrap();
            heap.get_median()
        });
        assert_eq!(median.unwrap(), 6);
        assert!(duration.as_secs() < 60);
    }
}
