use num_bigint::BigInt;
use num_traits::One;

/// Returns a vector containing powers of x: x^0, x^1, ..., x^k.
pub fn powers(x: &BigInt, k: usize) -> Vec<BigInt> {
    let mut pows = Vec::with_capacity(k + 1);
    let mut prev = BigInt::one();
    for _ in 0..k {
        let next = &prev * x;
        pows.push(prev);
        prev = next;
    }
    pows.push(prev);
    pows
}
