pub mod coin_change;
pub mod decode_ways;
pub mod house_robber;
pub mod max_product_subarray;
pub mod min_cost_stairs;
pub mod rolling;
pub mod word_break;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::min_coins_for_change;
pub use decode_ways::num_decodings;
pub use house_robber::{rob_circular, rob_linear};
pub use max_product_subarray::max_product_subarray;
pub use min_cost_stairs::min_cost_climbing_stairs;
pub use rolling::RollingPair;
pub use word_break::{word_break, word_break_segmentation};
