use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for an ad break, taken from publisher data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakId(String);

impl BreakId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreakId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BreakId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for BreakId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Stable identifier for a single ad within a break.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdId(String);

impl AdId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AdId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AdId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
