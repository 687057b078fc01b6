use integral_core::{build_naive, build_parallel, build_sequential, Grid};

fn three_by_three() -> Grid {
    Grid::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap()
}

#[test]
fn sequential_matches_hand_computed_table() {
    let t = build_sequential(&three_by_three());
    assert_eq!(t.as_slice(), &[1, 3, 6, 5, 12, 21, 12, 27, 45]);
    assert_eq!(t.total(), 45);
}

#[test]
fn parallel_two_workers_matches_hand_computed_table() {
    let g = three_by_three();
    let t = build_parallel(&g, 2);
    assert_eq!(t.as_slice(), &[1, 3, 6, 5, 12, 21, 12, 27, 45]);
    assert_eq!(t, build_sequential(&g));
}

#[test]
fn naive_matches_hand_computed_table() {
    let t = build_naive(&three_by_three());
    assert_eq!(t.into_vec(), vec![1, 3, 6, 5, 12, 21, 12, 27, 45]);
}

#[test]
fn grid_rejects_wrong_sample_count() {
    assert!(Grid::new(3, 3, vec![1, 2, 3]).is_err());
    assert!(Grid::new(0, 3, vec![1]).is_err());
}
