use num_traits::{SaturatingAdd, Zero};

use super::rolling::RollingPair;

/// Minimum total cost to climb past the last step of a staircase.
///
/// `cost[i]` is paid when standing on step `i`. The climb starts on step 0 or
/// step 1 and each move advances one or two steps. The top lies just beyond
/// the final step, so staircases with fewer than two steps are free.
///
/// Running costs saturate at `T::max_value()`; a saturated cost never beats
/// an in-range one in the final comparison.
///
/// # Examples
///
/// ```
/// use dp1d::dynamic::min_cost_climbing_stairs;
///
/// // Start on step 1, pay 15, jump two steps to the top.
/// assert_eq!(min_cost_climbing_stairs(&[10, 15, 20]), 15);
/// ```
pub fn min_cost_climbing_stairs<T>(cost: &[T]) -> T
where
    T: Copy + Ord + Zero + SaturatingAdd,
{
    let [first, second, rest @ ..] = cost else {
        return T::zero();
    };

    // Cheapest way to stand on each of the last two reached steps.
    let mut window = RollingPair::new(*first, *second);
    for &step_cost in rest {
        window.step(|two_back, one_back| two_back.min(one_back).saturating_add(&step_cost));
    }

    window.prev().min(window.curr())
}
