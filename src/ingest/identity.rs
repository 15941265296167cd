use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The bots that took part in the simulation runs.
///
/// Directory names refer to them by a short roman-numeral style code, the output tables by
/// their full upper-case name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BotIdentity {
    Basic,
    Contest,
    Final1,
    Final2,
    Random,
    NotABug,
}

impl BotIdentity {
    pub const ALL: [BotIdentity; 6] = [
        BotIdentity::Basic,
        BotIdentity::Contest,
        BotIdentity::Final1,
        BotIdentity::Final2,
        BotIdentity::Random,
        BotIdentity::NotABug,
    ];

    /// Looks up the identity behind a directory code such as `III`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "I" => Some(BotIdentity::Basic),
            "II" => Some(BotIdentity::Contest),
            "III" => Some(BotIdentity::Final1),
            "IV" => Some(BotIdentity::Final2),
            "R" => Some(BotIdentity::Random),
            "BUG" => Some(BotIdentity::NotABug),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BotIdentity::Basic => "I",
            BotIdentity::Contest => "II",
            BotIdentity::Final1 => "III",
            BotIdentity::Final2 => "IV",
            BotIdentity::Random => "R",
            BotIdentity::NotABug => "BUG",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BotIdentity::Basic => "BASIC",
            BotIdentity::Contest => "CONTEST",
            BotIdentity::Final1 => "FINAL1",
            BotIdentity::Final2 => "FINAL2",
            BotIdentity::Random => "RANDOM",
            BotIdentity::NotABug => "NOTABUG",
        }
    }
}

impl Display for BotIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown bot identity `{0}`")]
pub struct UnknownIdentityName(pub String);

/// Parses the full name (`FINAL1`), as found in the output tables and on the command line.
impl FromStr for BotIdentity {
    type Err = UnknownIdentityName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BotIdentity::ALL
            .into_iter()
            .find(|identity| identity.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownIdentityName(s.to_string()))
    }
}
