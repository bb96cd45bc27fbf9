use super::*;

#[test]
fn default_is_sequential_with_rayon_worker_count() {
    let t = Threading::default();
    assert!(!t.parallel);
    assert_eq!(t.threads, None);
    t.validate().unwrap();
    assert!(Threading::parallel().parallel);
}

#[test]
fn zero_threads_rejected_by_validate_and_pool_alike() {
    let t = Threading {
        parallel: true,
        threads: Some(0),
    };
    let from_validate = t.validate().unwrap_err().to_string();
    let from_pool = build_thread_pool(t.threads).unwrap_err().to_string();
    assert_eq!(from_validate, from_pool);
    assert!(from_pool.contains("'threads' must be >= 1"));
}

#[test]
fn pool_honors_fixed_worker_count() {
    let pool = build_thread_pool(Some(2)).unwrap();
    assert_eq!(pool.current_num_threads(), 2);
}
