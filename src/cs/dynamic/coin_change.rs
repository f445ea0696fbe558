use log::debug;

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// Each denomination can be used any number of times. Returns `None` if no
/// combination of `coins` sums exactly to `amount`. Zero-valued coins never
/// help form an amount and are ignored.
///
/// # Examples
///
/// ```
/// use dp1d::dynamic::min_coins_for_change;
///
/// // 5 + 5 + 1 = 11
/// assert_eq!(min_coins_for_change(&[1, 2, 5], 11), Some(3));
///
/// // Impossible to form 3 from [2], so returns None
/// assert_eq!(min_coins_for_change(&[2], 3), None);
/// ```
pub fn min_coins_for_change(coins: &[usize], amount: usize) -> Option<usize> {
    // dp[i] holds the minimum number of coins forming amount i, None if unreachable.
    let mut dp: Vec<Option<usize>> = Vec::with_capacity(amount + 1);
    dp.push(Some(0)); // base case

    for curr_amount in 1..=amount {
        let best = coins
            .iter()
            .filter(|&&coin| coin != 0 && coin <= curr_amount)
            .filter_map(|&coin| dp[curr_amount - coin])
            .min()
            .map(|count| count + 1);
        dp.push(best);
    }

    let result = dp[amount];
    if result.is_none() {
        debug!("amount {} cannot be formed from coins {:?}", amount, coins);
    }
    result
}
