//! CRUD verbs and their string aliases.

use core::fmt;
use core::str::FromStr;
use tessera_core::Error;

/// The operation a query performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Create,
    Read,
    Update,
    Remove,
}

impl Verb {
    /// Every accepted alias with the verb it resolves to. Matching is case-sensitive.
    pub const ALIASES: &'static [(&'static str, Verb)] = &[
        ("create", Verb::Create),
        ("insert", Verb::Create),
        ("post", Verb::Create),
        ("read", Verb::Read),
        ("select", Verb::Read),
        ("get", Verb::Read),
        ("update", Verb::Update),
        ("patch", Verb::Update),
        ("remove", Verb::Remove),
        ("delete", Verb::Remove),
    ];

    /// Resolves an alias string.
    pub fn resolve(alias: &str) -> Option<Verb> {
        Self::ALIASES
            .iter()
            .find(|(name, _)| *name == alias)
            .map(|(_, verb)| *verb)
    }

    /// Returns the canonical name of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Read => "read",
            Verb::Update => "update",
            Verb::Remove => "remove",
        }
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::resolve(s).ok_or_else(|| Error::unknown_verb(s))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
