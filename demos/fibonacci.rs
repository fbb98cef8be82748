use monokit::{Arithmetic, Concat, MaxSegTree, SegTree, SquareMatrix};

fn main() {
    // Fibonacci numbers: [[1, 1], [1, 0]]^n holds F(n+1), F(n), F(n-1)
    let step = SquareMatrix::<Arithmetic<u64>, 2>::from_rows([[1, 1], [1, 0]]);
    for n in [1, 10, 50, 90] {
        println!("F({n}) = {}", step.pow(n)[(0, 1)]);
    }

    // range maximum over readings
    let readings = MaxSegTree::<i32>::from_vec(vec![12, 7, 31, 4, 18, 25, 9]);
    println!("max of readings[2..5] = {}", readings.query(2, 5));

    // string concatenation is not commutative; queries keep leaf order
    let mut words: SegTree<Concat> = ["seg", "ment", " ", "tree"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("{:?}", words.query(0, 4));
    words.add(3, "s".to_string());
    println!("{:?}", words.query(0, 4));
}
