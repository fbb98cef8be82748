//! Segment tree tests: end-to-end scenarios and agreement with a naive fold.
//!
//! Range sums, range maxima and string concatenation are covered. Concatenation is the important
//! one: it is not commutative, so any operand-order mistake in `update`, `add` or `query` shows
//! up as a wrong string.

use monokit::{Concat, Interval, MaxSegTree, MinSegTree, Monoid, SegTree, Sentinel, SumSegTree};
use rand::Rng;

fn naive<M: Monoid>(values: &[M::Value], l: usize, r: usize) -> M::Value {
    M::fold(&values[l..r])
}

/// Range sums with point assignment and accumulation.
#[test]
fn range_sum_scenario() {
    let mut tree = SumSegTree::<i64>::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    assert_eq!(tree.query(0, 8), 31);
    assert_eq!(tree.query(2, 5), 10);
    tree.update(4, 0);
    assert_eq!(tree.query(0, 8), 26);
    tree.add(0, 10);
    assert_eq!(*tree.get(0), 13);
    assert_eq!(tree.query(0, 8), 36);
}

/// Range maxima with the type minimum standing in for negative infinity.
#[test]
fn range_max_scenario() {
    let mut tree = MaxSegTree::<i64>::from_vec(vec![2, 7, 1, 8, 2, 8, 1, 8]);
    assert_eq!(tree.query(0, 8), 8);
    assert_eq!(tree.query(0, 3), 7);
    tree.update(3, -5);
    assert_eq!(tree.query(2, 4), 1);
    assert_eq!(tree.query(3, 3), i64::MIN);
}

/// Range minima with a caller-chosen sentinel.
#[test]
fn range_min_with_sentinel() {
    struct Thousand;
    impl Sentinel<i32> for Thousand {
        fn value() -> i32 {
            1000
        }
    }
    let mut tree = MinSegTree::<i32, Thousand>::with_len(6);
    assert_eq!(tree.query(0, 6), 1000);
    tree.update(2, 40);
    tree.update(5, 7);
    assert_eq!(tree.query(0, 6), 7);
    assert_eq!(tree.query_interval(Interval::new(0, 4)), 40);
}

/// Concatenation keeps leaf order through queries and updates.
#[test]
fn non_commutative_scenario() {
    let mut tree: SegTree<Concat> = ["a", "b", "c", "d"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(tree.query(0, 4), "abcd");
    assert_eq!(tree.query(1, 3), "bc");
    tree.update(1, "X".to_string());
    assert_eq!(tree.query(0, 4), "aXcd");
    assert_eq!(tree.query_interval(1..=2usize), "Xc");
}

/// Every range of a randomly mutated concatenation tree matches the naive fold.
#[test]
fn random_concat_matches_naive() {
    let mut rng = rand::thread_rng();
    for n in [1usize, 2, 3, 7, 8, 13, 16, 31] {
        let mut shadow: Vec<String> = (0..n).map(|i| format!("{i},")).collect();
        let mut tree = SegTree::<Concat>::from_vec(shadow.clone());
        for step in 0..30 {
            let p = rng.gen_range(0..n);
            let piece = format!("<{step}>");
            if rng.gen_bool(0.5) {
                tree.update(p, piece.clone());
                shadow[p] = piece;
            } else {
                tree.add(p, piece.clone());
                shadow[p].push_str(&piece);
            }
            let l = rng.gen_range(0..=n);
            let r = rng.gen_range(l..=n);
            assert_eq!(tree.query(l, r), naive::<Concat>(&shadow, l, r));
        }
        assert_eq!(tree.leaves(), shadow.as_slice());
    }
}

/// Every range of a random sum tree matches the naive fold.
#[test]
fn random_sum_matches_naive() {
    let mut rng = rand::thread_rng();
    let n = 50;
    let values: Vec<i64> = (0..n).map(|_| rng.gen_range(-1000..1000)).collect();
    let tree = SumSegTree::<i64>::from_vec(values.clone());
    for l in 0..=n {
        for r in l..=n {
            assert_eq!(tree.query(l, r), values[l..r].iter().sum::<i64>());
        }
    }
}

/// `build(n)` discards the previous contents.
#[test]
fn rebuild_resets() {
    let mut tree = SegTree::<Concat>::from_vec(vec!["x".to_string(); 4]);
    tree.build(2);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.query(0, 2), "");
    tree.build_from(vec!["m".to_string(), "n".to_string()]);
    assert_eq!(tree.query(0, 2), "mn");
}
