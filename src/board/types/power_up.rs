//! Power-ups a piece can carry.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Power-up kinds. Only `Shield` currently affects move generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PowerUpKind {
    Guard,
    Shield,
    Sword,
    Flail,
}

impl PowerUpKind {
    /// Every power-up kind, in declaration order.
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Guard,
        PowerUpKind::Shield,
        PowerUpKind::Sword,
        PowerUpKind::Flail,
    ];
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PowerUpKind::Guard => "Guard",
            PowerUpKind::Shield => "Shield",
            PowerUpKind::Sword => "Sword",
            PowerUpKind::Flail => "Flail",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

impl PowerUp {
    #[must_use]
    pub const fn new(kind: PowerUpKind) -> Self {
        PowerUp { kind }
    }

    #[must_use]
    pub const fn shield() -> Self {
        PowerUp::new(PowerUpKind::Shield)
    }
}

impl From<PowerUpKind> for PowerUp {
    fn from(kind: PowerUpKind) -> Self {
        PowerUp::new(kind)
    }
}
