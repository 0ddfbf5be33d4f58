//! Document environment adapter
//!
//! The resolver never touches process-wide display state directly; it calls
//! through [`DocumentEnvironment`] whenever the active language changes.

use serde::Serialize;
use std::fmt;

/// Writing direction of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn from_rtl(is_right_to_left: bool) -> Self {
        if is_right_to_left {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub trait DocumentEnvironment {
    fn set_direction(&mut self, direction: Direction);

    fn set_language_tag(&mut self, code: &str);
}

/// In-memory document state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    pub direction: Direction,
    /// `None` until the resolver has applied a language
    pub language_tag: Option<String>,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentEnvironment for DocumentState {
    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn set_language_tag(&mut self, code: &str) {
        self.language_tag = Some(code.to_string());
    }
}

/// Reports document changes through the log, for terminal front ends
#[derive(Debug, Clone, Default)]
pub struct LogEnvironment {
    state: DocumentState,
}

impl LogEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }
}

impl DocumentEnvironment for LogEnvironment {
    fn set_direction(&mut self, direction: Direction) {
        if self.state.direction != direction {
            log::info!("Document direction: {}", direction);
        }
        self.state.set_direction(direction);
    }

    fn set_language_tag(&mut self, code: &str) {
        log::debug!("Document language tag: {}", code);
        self.state.set_language_tag(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_strings() {
        assert_eq!(Direction::from_rtl(true).as_str(), "rtl");
        assert_eq!(Direction::from_rtl(false).to_string(), "ltr");
        assert_eq!(Direction::default(), Direction::Ltr);
    }

    #[test]
    fn test_log_environment_tracks_state() {
        let mut env = LogEnvironment::new();
        env.set_direction(Direction::Rtl);
        env.set_language_tag("ar");

        assert!(env.state().direction.is_rtl());
        assert_eq!(env.state().language_tag.as_deref(), Some("ar"));
    }
}
