use num_traits::{PrimInt, SaturatingMul, Signed};

/// Maximum product over all contiguous, non-empty subranges of `values`.
///
/// Alongside the best product ending at each position, the smallest one is
/// tracked too: a negative value turns the most negative running product into
/// the largest. If the input slice is empty, returns `None`.
///
/// Running products saturate at the bounds of `T`. A saturated product can
/// only win when the true maximum is itself outside the range of `T`.
///
/// # Examples
///
/// ```
/// use dp1d::dynamic::max_product_subarray;
///
/// // [2, 3] has product 6
/// assert_eq!(max_product_subarray(&[2, 3, -2, 4]), Some(6));
/// assert_eq!(max_product_subarray(&[-2, 0, -1]), Some(0));
/// ```
pub fn max_product_subarray<T>(values: &[T]) -> Option<T>
where
    T: PrimInt + Signed + SaturatingMul,
{
    let (&first, rest) = values.split_first()?;
    let mut current_max = first;
    let mut current_min = first;
    let mut result = first;

    for &val in rest {
        // Candidates: start fresh at `val`, or extend either running product
        let extend_max = current_max.saturating_mul(&val);
        let extend_min = current_min.saturating_mul(&val);
        current_max = val.max(extend_max).max(extend_min);
        current_min = val.min(extend_max).min(extend_min);
        result = result.max(current_max);
    }

    Some(result)
}
