// Lagrange interpolation at zero over the integers.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::{errors::Error, poly::Point};

/// Strategy for the divisions in the Lagrange sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DivisionPolicy {
    /// Scale every term to the least common multiple of the denominators
    /// and divide once at the end.
    ///
    /// Succeeds whenever the interpolating polynomial takes an integer
    /// value at zero, which holds for any polynomial with integer
    /// coefficients.
    #[default]
    CommonDenominator,
    /// Divide every term by its own denominator.
    ///
    /// Fails as soon as a single term is fractional, even when the sum is
    /// an integer.
    PerTerm,
}

/// Returns Lagrange coefficients for the given set of x-coordinates.
///
/// The i-th Lagrange coefficient is defined as:
/// ```text
/// L_i(0) = \prod_{j=0,j≠i}^n x_j / (x_j - x_i)
/// ```
/// and is returned as an unreduced `(nominator, denominator)` pair.
pub fn coefficients_at_zero(xs: &[BigInt]) -> Result<Vec<(BigInt, BigInt)>, Error> {
    (0..xs.len()).map(|i| coefficient_at_zero(xs, i)).collect()
}

/// Returns i-th Lagrange coefficient for the given set of x-coordinates.
fn coefficient_at_zero(xs: &[BigInt], i: usize) -> Result<(BigInt, BigInt), Error> {
    let mut nom = BigInt::one();
    let mut denom = BigInt::one();
    for j in 0..xs.len() {
        if j == i {
            continue;
        }
        nom *= &xs[j]; // x_j
        denom *= &xs[j] - &xs[i]; // (x_j - x_i)
    }
    if denom.is_zero() {
        return Err(Error::DuplicateX { x: xs[i].clone() });
    }

    Ok((nom, denom))
}

/// Evaluates the interpolating polynomial of the given points at zero.
///
/// ```text
/// L(0) = \sum_{i=0}^n y_i * L_i(0)
/// ```
///
/// No modular reduction takes place; all intermediate values are exact.
pub fn evaluate_at_zero(points: &[Point], policy: DivisionPolicy) -> Result<BigInt, Error> {
    if points.is_empty() {
        return Err(Error::InvalidThreshold);
    }

    let xs: Vec<_> = points.iter().map(|p| p.x.clone()).collect();
    let cs = coefficients_at_zero(&xs)?;

    match policy {
        DivisionPolicy::CommonDenominator => sum_common_denominator(points, &cs),
        DivisionPolicy::PerTerm => sum_per_term(points, &cs),
    }
}

fn sum_common_denominator(points: &[Point], cs: &[(BigInt, BigInt)]) -> Result<BigInt, Error> {
    let lcm = cs
        .iter()
        .fold(BigInt::one(), |acc, (_, denom)| acc.lcm(denom));

    let mut sum = BigInt::zero();
    for (point, (nom, denom)) in points.iter().zip(cs) {
        sum += &point.y * nom * (&lcm / denom);
    }

    let (q, r) = sum.div_rem(&lcm);
    if !r.is_zero() {
        return Err(Error::NonIntegerResult);
    }

    Ok(q)
}

fn sum_per_term(points: &[Point], cs: &[(BigInt, BigInt)]) -> Result<BigInt, Error> {
    let mut sum = BigInt::zero();
    for (index, (point, (nom, denom))) in points.iter().zip(cs).enumerate() {
        let (q, r) = (&point.y * nom).div_rem(denom);
        if !r.is_zero() {
            return Err(Error::NonIntegerTerm { index });
        }
        sum += q;
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_traits::Zero;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{
        errors::Error,
        poly::{Point, Polynomial},
    };

    use super::{coefficients_at_zero, evaluate_at_zero, DivisionPolicy};

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    fn points(pairs: &[(i64, i64)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn random_polynomial(size: usize, rng: &mut StdRng) -> Polynomial {
        let a = (0..size)
            .map(|_| BigInt::from(rng.gen_range(-1_000_000_i64..=1_000_000)))
            .collect();
        Polynomial::with_coefficients(a)
    }

    #[test]
    fn test_coefficients_at_zero() {
        // L_i(0) sums to one for any set of distinct x-coordinates.
        let xs = ints(&[1, 2, 4, 7]);
        let cs = coefficients_at_zero(&xs).unwrap();
        assert_eq!(cs.len(), 4);

        let ones: Vec<_> = xs.iter().map(|x| Point::new(x.clone(), 1)).collect();
        let sum = evaluate_at_zero(&ones, DivisionPolicy::CommonDenominator).unwrap();
        assert_eq!(sum, BigInt::from(1));

        // L_0(0) = (2 * 4 * 7) / ((2 - 1) * (4 - 1) * (7 - 1)).
        assert_eq!(cs[0], (BigInt::from(56), BigInt::from(18)));
    }

    #[test]
    fn test_duplicate_x() {
        let xs = ints(&[1, 2, 2]);
        let result = coefficients_at_zero(&xs);
        assert!(matches!(result, Err(Error::DuplicateX { x }) if x == BigInt::from(2)));
    }

    #[test]
    fn test_evaluate_at_zero() {
        // x^2 + x + 2.
        let ps = points(&[(1, 4), (2, 8), (3, 14)]);
        for policy in [DivisionPolicy::CommonDenominator, DivisionPolicy::PerTerm] {
            assert_eq!(evaluate_at_zero(&ps, policy).unwrap(), BigInt::from(2));
        }

        // x^2 + 3.
        let ps = points(&[(1, 4), (2, 7), (3, 12)]);
        for policy in [DivisionPolicy::CommonDenominator, DivisionPolicy::PerTerm] {
            assert_eq!(evaluate_at_zero(&ps, policy).unwrap(), BigInt::from(3));
        }

        // Single point, constant polynomial.
        let ps = points(&[(5, -9)]);
        assert_eq!(
            evaluate_at_zero(&ps, DivisionPolicy::default()).unwrap(),
            BigInt::from(-9)
        );
    }

    #[test]
    fn test_evaluate_at_zero_random() {
        let mut rng: StdRng = SeedableRng::from_seed([1u8; 32]);

        for size in 1..=12 {
            let p = random_polynomial(size, &mut rng);
            let xs: Vec<_> = (1..=size as i64).map(|x| BigInt::from(3 * x - 7)).collect();
            let ps = p.points(&xs);

            let c = evaluate_at_zero(&ps, DivisionPolicy::CommonDenominator).unwrap();
            assert_eq!(&c, p.constant_term());
        }
    }

    #[test]
    fn test_per_term_fractional() {
        // f(x) = x at 1, 2, 4: the first term is 8/3, yet f(0) = 0.
        let ps = points(&[(1, 1), (2, 2), (4, 4)]);

        let result = evaluate_at_zero(&ps, DivisionPolicy::PerTerm);
        assert!(matches!(result, Err(Error::NonIntegerTerm { index: 0 })));

        let c = evaluate_at_zero(&ps, DivisionPolicy::CommonDenominator).unwrap();
        assert!(c.is_zero());
    }

    #[test]
    fn test_non_integer_result() {
        // f(x) = (x + 1) / 2.
        let ps = points(&[(1, 1), (3, 2)]);
        let result = evaluate_at_zero(&ps, DivisionPolicy::CommonDenominator);
        assert!(matches!(result, Err(Error::NonIntegerResult)));
    }

    #[test]
    fn test_empty() {
        let result = evaluate_at_zero(&[], DivisionPolicy::default());
        assert!(matches!(result, Err(Error::InvalidThreshold)));
    }
}
