// ==========================================
// Support Stock - domain types
// ==========================================
// Closed sets: item, direction, location.
// Stored codes match the existing `movimenti` table contents.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A text value outside one of the closed sets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownCode {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ==========================================
// Item - support type
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Item {
    Roll,
    Grid,
    ReturnableCrate,
}

impl Item {
    /// All items in display order
    pub const ALL: [Item; 3] = [Item::Roll, Item::Grid, Item::ReturnableCrate];

    /// Code written to the `articolo` column
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Item::Roll => "Roll",
            Item::Grid => "Griglia",
            Item::ReturnableCrate => "Cassetta CPR",
        }
    }

    /// i18n key of the display label
    pub fn label_key(&self) -> &'static str {
        match self {
            Item::Roll => "item.roll",
            Item::Grid => "item.grid",
            Item::ReturnableCrate => "item.returnable_crate",
        }
    }
}

/// Stored code or English name, case-insensitive
impl FromStr for Item {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ROLL" => Ok(Item::Roll),
            "GRIGLIA" | "GRID" => Ok(Item::Grid),
            "CASSETTA CPR" | "RETURNABLE CRATE" | "RETURNABLE_CRATE" | "CRATE" | "CPR" => {
                Ok(Item::ReturnableCrate)
            }
            _ => Err(UnknownCode::new("item", s)),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Roll => write!(f, "Roll"),
            Item::Grid => write!(f, "Grid"),
            Item::ReturnableCrate => write!(f, "Returnable Crate"),
        }
    }
}

// ==========================================
// Direction - movement direction
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Inbound,  // stock increases
    Outbound, // stock decreases
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Inbound, Direction::Outbound];

    /// Code written to the `direzione` column
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Direction::Inbound => "ENTRATA",
            Direction::Outbound => "USCITA",
        }
    }

    /// Sign applied to a quantity when summing balances
    pub fn sign(&self) -> i64 {
        match self {
            Direction::Inbound => 1,
            Direction::Outbound => -1,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Direction::Inbound => "direction.inbound",
            Direction::Outbound => "direction.outbound",
        }
    }
}

impl FromStr for Direction {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ENTRATA" | "INBOUND" | "IN" => Ok(Direction::Inbound),
            "USCITA" | "OUTBOUND" | "OUT" => Ok(Direction::Outbound),
            _ => Err(UnknownCode::new("direction", s)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => write!(f, "INBOUND"),
            Direction::Outbound => write!(f, "OUTBOUND"),
        }
    }
}

// ==========================================
// Location - storage area
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Location {
    Meat,
    Produce,
    Fresh,
    Dry,
}

impl Location {
    /// All locations in display order
    pub const ALL: [Location; 4] = [
        Location::Meat,
        Location::Produce,
        Location::Fresh,
        Location::Dry,
    ];

    /// Code written to the `magazzino` column
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Location::Meat => "Carne",
            Location::Produce => "Ortofrutta",
            Location::Fresh => "Freschi",
            Location::Dry => "Secchi",
        }
    }

    /// Meat and Produce only ever receive supports
    pub fn forces_inbound(&self) -> bool {
        matches!(self, Location::Meat | Location::Produce)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Location::Meat => "location.meat",
            Location::Produce => "location.produce",
            Location::Fresh => "location.fresh",
            Location::Dry => "location.dry",
        }
    }
}

impl FromStr for Location {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CARNE" | "MEAT" => Ok(Location::Meat),
            "ORTOFRUTTA" | "PRODUCE" => Ok(Location::Produce),
            "FRESCHI" | "FRESH" => Ok(Location::Fresh),
            "SECCHI" | "DRY" => Ok(Location::Dry),
            _ => Err(UnknownCode::new("location", s)),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Meat => write!(f, "Meat"),
            Location::Produce => write!(f, "Produce"),
            Location::Fresh => write!(f, "Fresh"),
            Location::Dry => write!(f, "Dry"),
        }
    }
}
