use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Configuration for drawing the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct Options {
    /// Whether pieces are drawn as unicode figurines rather than letters.
    pub figurines: bool,

    /// Whether rows and columns are labeled with ranks and files.
    pub coordinates: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            figurines: true,
            coordinates: true,
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse rendering options")]
pub struct ParseOptionsError(ron::de::SpannedError);

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
