use std::convert::Infallible;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
/// Opaque window identifier handed out by the host
pub enum WindowId {
    Number(i64),
    Text(String),
}

impl Display for WindowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for WindowId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Ids typed on a command line are numeric whenever they look numeric
impl FromStr for WindowId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>().map_or_else(|_| Self::from(s), Self::Number))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    #[serde(default, rename = "isFocused")]
    pub is_focused: bool,
    /// Host fields we don't look at, kept so they survive a round trip
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Window {
    pub fn new(id: impl Into<WindowId>) -> Self {
        Self {
            id: id.into(),
            is_focused: false,
            extra: serde_json::Map::new(),
        }
    }

    #[must_use]
    pub fn focused(mut self) -> Self {
        self.is_focused = true;
        self
    }
}
