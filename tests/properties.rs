//! Property-based tests for the matrices and the segment tree.

use monokit::{Arithmetic, Concat, DynMatrix, Monoid, SegTree, SquareMatrix};
use proptest::prelude::*;

type Z = Arithmetic<i64>;

// Strategy for small matrix entries, keeping products inside i64
fn small_entry() -> impl Strategy<Value = i64> {
    -3i64..=3i64
}

fn square3() -> impl Strategy<Value = SquareMatrix<Z, 3>> {
    prop::array::uniform3(prop::array::uniform3(small_entry()))
        .prop_map(SquareMatrix::<Z, 3>::from_rows)
}

// Short words so concatenations stay readable in failure output
fn word() -> impl Strategy<Value = String> {
    "[a-z]{0,3}"
}

proptest! {
    #[test]
    fn pow_splits_over_exponent_sum(a in square3(), x in 0i64..6, y in 0i64..6) {
        prop_assert_eq!(a.pow(x + y), &a.pow(x) * &a.pow(y));
    }

    #[test]
    fn pow_one_is_self(a in square3()) {
        prop_assert_eq!(a.pow(1), a.clone());
        prop_assert_eq!(a.pow(0), SquareMatrix::<Z, 3>::identity());
    }

    #[test]
    fn product_associative(a in square3(), b in square3(), c in square3()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn dynamic_product_matches_static(a in square3(), b in square3()) {
        let expected = DynMatrix::from(&a * &b);
        prop_assert_eq!(&DynMatrix::from(a) * &DynMatrix::from(b), expected);
    }

    #[test]
    fn concat_query_matches_fold(
        words in prop::collection::vec(word(), 0..40),
        bounds in (0usize..41, 0usize..41),
    ) {
        let n = words.len();
        let (l, r) = (bounds.0.min(n), bounds.1.min(n));
        let (l, r) = (l.min(r), l.max(r));
        let tree = SegTree::<Concat>::from_vec(words.clone());
        prop_assert_eq!(tree.query(l, r), Concat::fold(&words[l..r]));
    }

    #[test]
    fn updates_keep_queries_exact(
        words in prop::collection::vec(word(), 1..20),
        edits in prop::collection::vec((0usize..20, word(), any::<bool>()), 0..20),
    ) {
        let n = words.len();
        let mut shadow = words.clone();
        let mut tree = SegTree::<Concat>::from_vec(words);
        for (p, w, assign) in edits {
            let p = p % n;
            if assign {
                tree.update(p, w.clone());
                shadow[p] = w;
            } else {
                tree.add(p, w.clone());
                shadow[p].push_str(&w);
            }
        }
        for l in 0..=n {
            for r in l..=n {
                prop_assert_eq!(tree.query(l, r), shadow[l..r].concat());
            }
        }
    }
}
