use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::SynthError;

/// Number of data rows to synthesize. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowCount(NonZeroUsize);

impl RowCount {
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for RowCount {
    type Error = SynthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| SynthError::InvalidRowCount {
                input: value.to_string(),
            })
    }
}

impl TryFrom<usize> for RowCount {
    type Error = SynthError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or_else(|| SynthError::InvalidRowCount {
                input: value.to_string(),
            })
    }
}

impl FromStr for RowCount {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SynthError::InvalidRowCount {
            input: s.to_string(),
        };
        let value: i64 = s.trim().parse().map_err(|_| invalid())?;
        Self::try_from(value).map_err(|_| invalid())
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(RowCount::try_from(500_i64).unwrap().get(), 500);
        assert_eq!(" 12 ".parse::<RowCount>().unwrap().get(), 12);
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(matches!(
            RowCount::try_from(0_i64),
            Err(SynthError::InvalidRowCount { .. })
        ));
        assert!(matches!(
            RowCount::try_from(-3_i64),
            Err(SynthError::InvalidRowCount { .. })
        ));
        assert!(RowCount::try_from(0_usize).is_err());
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["", "abc", "2.5", "1e3", "-"] {
            let err = input.parse::<RowCount>().unwrap_err();
            assert!(err.is_invalid_argument(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn error_echoes_input() {
        let err = "ten".parse::<RowCount>().unwrap_err();
        insta::assert_snapshot!(err.to_string(), @r#"number of rows must be a positive integer, got "ten""#);
    }
}
