//! Output notations a list can be rendered in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ListError;

/// The closed set of list notations.
///
/// | Notation | start    | item              | end       |
/// |----------|----------|-------------------|-----------|
/// | Bullet   | (none)   | ` * {item}\n`     | (none)    |
/// | Tagged   | `<ul>\n` | `<li>{item}</li>\n` | `</ul>\n` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Plain-text bullets, no list markers.
    Bullet,
    /// Bracket tags wrapped in a `<ul>` block.
    Tagged,
}

impl Notation {
    /// Every notation, in display order.
    pub const ALL: [Notation; 2] = [Notation::Bullet, Notation::Tagged];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullet => "bullet",
            Self::Tagged => "tagged",
        }
    }

    /// Alternative names accepted by [`FromStr`].
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Bullet => &["markdown"],
            Self::Tagged => &["html"],
        }
    }

    /// One-line human description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Bullet => "plain-text ' * item' lines",
            Self::Tagged => "<ul>/<li> bracket tags",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Notation::ALL
            .into_iter()
            .find(|n| n.as_str() == wanted || n.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| ListError::UnsupportedNotation {
                notation: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!("bullet".parse::<Notation>(), Ok(Notation::Bullet));
        assert_eq!("tagged".parse::<Notation>(), Ok(Notation::Tagged));
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!(" Markdown ".parse::<Notation>(), Ok(Notation::Bullet));
        assert_eq!("HTML".parse::<Notation>(), Ok(Notation::Tagged));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "rst".parse::<Notation>().unwrap_err();
        assert_eq!(
            err,
            ListError::UnsupportedNotation {
                notation: "rst".into()
            }
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for n in Notation::ALL {
            assert_eq!(n.to_string().parse::<Notation>(), Ok(n));
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Notation::Tagged).unwrap(),
            "\"tagged\""
        );
    }
}
