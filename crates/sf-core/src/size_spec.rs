// ABOUTME: Declared size of a pane along its split axis.
// ABOUTME: Either a fixed pixel count or a proportional weight of leftover space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SizeSpec {
    /// Exact extent in pixels
    Fixed(u32),
    /// Share of the space left after fixed panes and dividers.
    /// A weight of zero is treated as one.
    Proportional(u32),
}

impl SizeSpec {
    pub fn is_fixed(&self) -> bool {
        matches!(self, SizeSpec::Fixed(_))
    }

    /// Effective weight; zero for fixed specs
    pub fn weight(&self) -> u32 {
        match self {
            SizeSpec::Fixed(_) => 0,
            SizeSpec::Proportional(weight) => (*weight).max(1),
        }
    }
}

impl Default for SizeSpec {
    fn default() -> Self {
        SizeSpec::Proportional(1)
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::Fixed(pixels) => write!(f, "{pixels}px"),
            SizeSpec::Proportional(weight) => write!(f, "{weight}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid size spec {0:?}: expected \"<pixels>px\" or a positive weight")]
pub struct ParseSizeSpecError(pub String);

/// Parses `"120px"` as fixed and `"3"` as a proportional weight
impl FromStr for SizeSpec {
    type Err = ParseSizeSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || ParseSizeSpecError(s.to_string());

        if let Some(pixels) = token.strip_suffix("px") {
            let pixels = pixels.trim().parse().map_err(|_| invalid())?;
            return Ok(SizeSpec::Fixed(pixels));
        }

        match token.parse::<u32>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(weight) => Ok(SizeSpec::Proportional(weight)),
        }
    }
}

impl TryFrom<String> for SizeSpec {
    type Error = ParseSizeSpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SizeSpec> for String {
    fn from(spec: SizeSpec) -> Self {
        spec.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_and_weight_tokens() {
        assert_eq!("120px".parse::<SizeSpec>().unwrap(), SizeSpec::Fixed(120));
        assert_eq!(" 0px ".parse::<SizeSpec>().unwrap(), SizeSpec::Fixed(0));
        assert_eq!("100".parse::<SizeSpec>().unwrap(), SizeSpec::Proportional(100));
    }

    #[test]
    fn rejects_zero_weight_and_garbage() {
        assert!("0".parse::<SizeSpec>().is_err());
        assert!("-3".parse::<SizeSpec>().is_err());
        assert!("wide".parse::<SizeSpec>().is_err());
        assert!("px".parse::<SizeSpec>().is_err());
    }

    #[test]
    fn zero_weight_counts_as_one() {
        assert_eq!(SizeSpec::Proportional(0).weight(), 1);
        assert_eq!(SizeSpec::Fixed(40).weight(), 0);
        assert_eq!(SizeSpec::default(), SizeSpec::Proportional(1));
    }
}
