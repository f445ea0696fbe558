use num_traits::Zero;

use super::rolling::RollingPair;

/// Maximum sum of non-adjacent values along a line of houses.
///
/// The houses are scanned right to left. After visiting house `i` the window
/// holds the best haul from houses `i..` (`curr`) and from `i + 1..` (`prev`).
/// An empty street yields zero.
///
/// # Examples
///
/// ```
/// use dp1d::dynamic::rob_linear;
///
/// // Rob houses 0 and 2: 1 + 3
/// assert_eq!(rob_linear(&[1, 2, 3, 1]), 4);
/// ```
pub fn rob_linear<T>(values: &[T]) -> T
where
    T: Copy + Ord + Zero,
{
    let Some((&last, rest)) = values.split_last() else {
        return T::zero();
    };

    let mut window = RollingPair::new(T::zero(), last);
    for &value in rest.iter().rev() {
        // Either take this house and skip its neighbour, or leave it.
        window.step(|from_after_next, from_next| (value + from_after_next).max(from_next));
    }

    window.curr()
}

/// Maximum sum of non-adjacent values when the houses form a cycle.
///
/// The first and last houses are neighbours, so at most one of them is robbed.
/// The answer is the better of the line without the first house and the line
/// without the last. A single house is always robbed.
///
/// # Examples
///
/// ```
/// use dp1d::dynamic::rob_circular;
///
/// assert_eq!(rob_circular(&[2, 3, 2]), 3);
/// assert_eq!(rob_circular(&[1, 2, 3, 1]), 4);
/// ```
pub fn rob_circular<T>(values: &[T]) -> T
where
    T: Copy + Ord + Zero,
{
    match values {
        [] => T::zero(),
        [only] => *only,
        _ => {
            let without_first = rob_linear(&values[1..]);
            let without_last = rob_linear(&values[..values.len() - 1]);
            without_first.max(without_last)
        }
    }
}
