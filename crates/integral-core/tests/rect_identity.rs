use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use integral_core::query::brute_force_rect_sum;
use integral_core::synth::random_grid;
use integral_core::{build_sequential, rect_sum, Grid, Rect};

#[test]
fn random_rectangles_match_direct_sum() {
    let g = random_grid(10, 10, 123);
    let t = build_sequential(&g);
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..200 {
        let r = Rect::from_corners(
            rng.gen_range(0..10),
            rng.gen_range(0..10),
            rng.gen_range(0..10),
            rng.gen_range(0..10),
        );
        assert_eq!(
            rect_sum(&t, r).unwrap(),
            brute_force_rect_sum(&g, r).unwrap(),
            "{:?}",
            r
        );
    }
}

#[test]
fn corner_and_edge_rectangles() {
    let g = Grid::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let t = build_sequential(&g);
    assert_eq!(t.rect_sum(Rect::new(0, 0, 2, 2)).unwrap(), 45);
    assert_eq!(t.rect_sum(Rect::new(1, 1, 1, 1)).unwrap(), 5);
    assert_eq!(t.rect_sum(Rect::new(1, 1, 2, 2)).unwrap(), 5 + 6 + 8 + 9);
    assert_eq!(t.rect_sum(Rect::new(0, 2, 2, 2)).unwrap(), 7 + 8 + 9);
    assert_eq!(t.rect_sum(Rect::new(2, 0, 2, 2)).unwrap(), 3 + 6 + 9);
}

#[test]
fn out_of_bounds_rectangles_are_rejected() {
    let g = Grid::from_fn(4, 3, |_, _| 1);
    let t = build_sequential(&g);
    assert!(t.rect_sum(Rect::new(0, 0, 4, 0)).is_err());
    assert!(t.rect_sum(Rect::new(0, 0, 0, 3)).is_err());
    assert!(t.rect_sum(Rect::new(2, 0, 1, 0)).is_err());

    let empty = build_sequential(&Grid::from_fn(0, 3, |_, _| 1));
    assert!(empty.rect_sum(Rect::new(0, 0, 0, 0)).is_err());
}
