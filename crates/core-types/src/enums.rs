use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The asset class a trade was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Crypto,
    Stocks,
    Forex,
    Other,
}

/// Direction of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Long,
    Short,
}

/// How the position was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    TpHit,
    SlHit,
    ClosedManually,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Instrument::Crypto,
        Instrument::Stocks,
        Instrument::Forex,
        Instrument::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Instrument::Crypto => "Crypto",
            Instrument::Stocks => "Stocks",
            Instrument::Forex => "Forex",
            Instrument::Other => "Other",
        }
    }
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Long, Side::Short];

    pub fn label(&self) -> &'static str {
        match self {
            Side::Long => "Long",
            Side::Short => "Short",
        }
    }
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::TpHit, Outcome::SlHit, Outcome::ClosedManually];

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::TpHit => "TP hit",
            Outcome::SlHit => "SL hit",
            Outcome::ClosedManually => "Closed manually",
        }
    }
}

/// Folds a user-supplied label into a comparison key: `"TP hit"`, `"TPHit"`
/// and `"tp-hit"` all become `"tphit"`.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Implements `Display` (the persisted label) and a forgiving `FromStr` for a
/// label enum. Serde goes through the same pair, so JSON bodies and ledger
/// rows accept every spelling the CLI does.
macro_rules! label_enum {
    ($ty:ident, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize(s);
                $ty::ALL
                    .into_iter()
                    .find(|variant| {
                        normalize(variant.label()) == key || normalize(&format!("{:?}", variant)) == key
                    })
                    .ok_or_else(|| CoreError::InvalidInput($field.to_string(), s.to_string()))
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse::<$ty>().map_err(serde::de::Error::custom)
            }
        }
    };
}

label_enum!(Instrument, "instrument");
label_enum!(Side, "side");
label_enum!(Outcome, "outcome");
