use std::env;

pub const MAX_DEPTH_ENV: &str = "ADAPTIVE_CARDS_MAX_DEPTH";

pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Bounds applied to a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Deepest element nesting accepted; the card's top-level collections are depth 1.
    pub max_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseLimits {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse a depth override; zero and non-numeric values are rejected.
    pub fn parse_max_depth(value: &str) -> Option<usize> {
        value.trim().parse::<usize>().ok().filter(|depth| *depth > 0)
    }

    /// Reads the depth limit from `ADAPTIVE_CARDS_MAX_DEPTH`.
    pub fn from_env() -> Self {
        env::var(MAX_DEPTH_ENV)
            .ok()
            .and_then(|value| Self::parse_max_depth(&value))
            .map(Self::with_max_depth)
            .unwrap_or_default()
    }
}
