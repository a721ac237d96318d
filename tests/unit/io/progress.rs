//! Tests for batch progress display

#[cfg(test)]
mod tests {
    use std::path::Path;
    use wordseek::io::configuration::MAX_REPORTED_LISTS;
    use wordseek::io::progress::ProgressManager;

    // Tests a manager reports nothing before a batch starts
    #[test]
    fn test_new_manager_is_idle() {
        let manager = ProgressManager::new();

        assert_eq!(manager.batch_len(), 0);
        assert_eq!(manager.completed(), 0);
        assert!(!manager.is_batched());
    }

    // Tests small batches keep per-list summaries
    #[test]
    fn test_initialize_small_batch() {
        let mut manager = ProgressManager::new();
        manager.initialize(MAX_REPORTED_LISTS);

        assert_eq!(manager.batch_len(), MAX_REPORTED_LISTS as u64);
        assert!(!manager.is_batched());
        manager.finish();
    }

    // Tests large batches suppress per-list summaries
    #[test]
    fn test_initialize_large_batch() {
        let mut manager = ProgressManager::default();
        manager.initialize(MAX_REPORTED_LISTS + 1);

        assert!(manager.is_batched());
        manager.finish();
    }

    // Tests the bar advances once per finished list
    #[test]
    fn test_list_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);

        manager.start_list(Path::new("lists/animals.txt"), 12);
        manager.complete_list(Path::new("lists/animals.txt"), 11, 12);
        manager.start_list(Path::new("lists/birds.txt"), 4);
        manager.complete_list(Path::new("lists/birds.txt"), 4, 4);
        manager.finish();

        assert_eq!(manager.completed(), 2);
    }

    // Tests a new batch resets the finished count
    #[test]
    fn test_initialize_resets_completed() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);
        manager.complete_list(Path::new("a.txt"), 3, 3);
        manager.initialize(3);

        assert_eq!(manager.completed(), 0);
        assert_eq!(manager.batch_len(), 3);
        manager.finish();
    }
}
