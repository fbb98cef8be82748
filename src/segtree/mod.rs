//! Iterative bottom-up segment tree over a monoid.
//!
//! Storage is one array `t` of length `2n`: leaves live at `[n, 2n)`,
//! internal node `i` in `[1, n)` holds `plus(t[2i], t[2i+1])`, and `t[0]` is
//! unused. Any `n` works, not only powers of two.
//!
//! The monoid need not be commutative. Updates rebuild parents as
//! `plus(left, right)` and queries keep a left and a right accumulator so the
//! result is always the left-to-right fold of the range.
//!
//! | operation      | cost       |
//! |----------------|------------|
//! | build          | O(n)       |
//! | get            | O(1)       |
//! | update / add   | O(log n)   |
//! | query          | O(log n)   |

use std::fmt;

use crate::core::structures::{Additive, Max, MaxValue, Min, MinValue};
use crate::core::traits::Monoid;

pub mod interval;
pub use interval::Interval;

/// Segment tree whose combine is `M::plus` and identity is `M::zero()`.
pub struct SegTree<M: Monoid> {
    t: Vec<M::Value>,
    n: usize,
}

/// Range maximum, identity `S::value()` (defaults to the type's minimum).
pub type MaxSegTree<T, S = MinValue> = SegTree<Max<T, S>>;

/// Range minimum, identity `S::value()` (defaults to the type's maximum).
pub type MinSegTree<T, S = MaxValue> = SegTree<Min<T, S>>;

/// Range sum.
pub type SumSegTree<T> = SegTree<Additive<T>>;

macro_rules! assert_index_bounds {
    ($index:expr, $len:expr) => {
        assert!(
            $index < $len,
            "index out of bounds: the len is {} but the index is {}",
            $len,
            $index
        );
    };
}

impl<M: Monoid> SegTree<M> {
    /// Empty tree; call `build` or `build_from` before use.
    pub fn new() -> Self {
        Self { t: Vec::new(), n: 0 }
    }

    /// Tree of `n` leaves, all `M::zero()`.
    pub fn with_len(n: usize) -> Self {
        let mut tree = Self::new();
        tree.build(n);
        tree
    }

    /// Tree whose leaves are `values`.
    pub fn from_vec(values: Vec<M::Value>) -> Self {
        let mut tree = Self::new();
        tree.build_from(values);
        tree
    }

    /// Resizes to `n` leaves and resets every cell to `M::zero()`.
    pub fn build(&mut self, n: usize) {
        self.n = n;
        self.t.clear();
        self.t.resize_with(2 * n, M::zero);
    }

    /// Resizes to `values.len()` leaves, copies them in and rebuilds every
    /// internal node.
    pub fn build_from(&mut self, values: Vec<M::Value>) {
        let n = values.len();
        self.n = n;
        self.t.clear();
        self.t.reserve(2 * n);
        self.t.extend((0..n).map(|_| M::zero()));
        self.t.extend(values);
        for i in (1..n).rev() {
            self.t[i] = M::plus(&self.t[2 * i], &self.t[2 * i + 1]);
        }
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The leaves, in order.
    pub fn leaves(&self) -> &[M::Value] {
        &self.t[self.n..]
    }

    /// Value of leaf `p`.
    pub fn get(&self, p: usize) -> &M::Value {
        assert_index_bounds!(p, self.n);
        &self.t[self.n + p]
    }

    /// Sets leaf `p` to `value`.
    pub fn update(&mut self, p: usize, value: M::Value) {
        assert_index_bounds!(p, self.n);
        let p = p + self.n;
        self.t[p] = value;
        self.pull_up(p);
    }

    /// Sets leaf `p` to `plus(leaf, value)`; `value` goes on the right.
    pub fn add(&mut self, p: usize, value: M::Value) {
        assert_index_bounds!(p, self.n);
        let p = p + self.n;
        self.t[p] = M::plus(&self.t[p], &value);
        self.pull_up(p);
    }

    fn pull_up(&mut self, mut p: usize) {
        while p > 1 {
            p >>= 1;
            self.t[p] = M::plus(&self.t[2 * p], &self.t[2 * p + 1]);
        }
    }

    /// Left-to-right fold of leaves `[l, r)`; `M::zero()` when `l == r`.
    pub fn query(&self, l: usize, r: usize) -> M::Value {
        assert!(
            l <= r && r <= self.n,
            "invalid query range [{l}, {r}) for {} leaves",
            self.n
        );
        let mut acc_l = M::zero();
        let mut acc_r = M::zero();
        let mut l = l + self.n;
        let mut r = r + self.n;
        while l < r {
            if l & 1 == 1 {
                acc_l = M::plus(&acc_l, &self.t[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                acc_r = M::plus(&self.t[r], &acc_r);
            }
            l >>= 1;
            r >>= 1;
        }
        M::plus(&acc_l, &acc_r)
    }

    /// Fold over the inclusive range `[interval.l, interval.r]`.
    pub fn query_interval(&self, interval: impl Into<Interval>) -> M::Value {
        let (l, r) = interval.into().half_open();
        self.query(l, r)
    }
}

impl<M: Monoid> Default for SegTree<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Monoid> Clone for SegTree<M> {
    fn clone(&self) -> Self {
        Self {
            t: self.t.clone(),
            n: self.n,
        }
    }
}

impl<M: Monoid> fmt::Debug for SegTree<M>
where
    M::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegTree")
            .field("len", &self.n)
            .field("leaves", &self.leaves())
            .finish()
    }
}

impl<M: Monoid> FromIterator<M::Value> for SegTree<M> {
    fn from_iter<I: IntoIterator<Item = M::Value>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
