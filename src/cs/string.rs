pub mod palindrome;

pub use palindrome::{count_palindromic_substrings, expand_around_center, longest_palindrome};
