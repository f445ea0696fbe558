use thiserror::Error;

/// Errors reported by solvers that validate their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input held something other than an ASCII digit.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// A counting recurrence grew past the range of its integer type.
    #[error("count overflowed while solving {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidDigit {
            position: 2,
            found: 'x',
        };
        assert_eq!(err.to_string(), "invalid digit 'x' at position 2");
        assert_eq!(
            Error::Overflow("decode ways").to_string(),
            "count overflowed while solving decode ways"
        );
    }
}
