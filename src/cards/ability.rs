//! The closed ability catalogue.
//!
//! Abilities are resolved once from the card name when a runtime card is
//! built, then dispatched by exhaustive matching. Names outside the catalogue
//! get `None`.
//!
//! | Minion          | Ability      | Target |
//! |-----------------|--------------|--------|
//! | The Ripper      | `Weaken`     | enemy  |
//! | Miraj           | `SwapHealth` | enemy  |
//! | The Cursed One  | `Transform`  | enemy  |
//! | Disciple        | `Heal`       | ally   |
//!
//! | Hero             | Ability      | Row   |
//! |------------------|--------------|-------|
//! | Lord Royce       | `Freeze`     | enemy |
//! | Empress Thorina  | `DestroyMax` | enemy |
//! | King Mudface     | `BuffHealth` | own   |
//! | General Kocioraw | `BuffAttack` | own   |

use serde::{Deserialize, Serialize};

/// Which side of the board an ability may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSide {
    /// The acting player's own rows.
    Ally,
    /// The opponent's rows.
    Enemy,
}

/// Targeted minion abilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinionAbility {
    #[default]
    None,
    /// Target loses 2 attack, floored at 0.
    Weaken,
    /// Caster and target exchange health.
    SwapHealth,
    /// Target's attack and health exchange; zero attack means zero health.
    Transform,
    /// Target gains 2 health.
    Heal,
}

impl MinionAbility {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "The Ripper" => MinionAbility::Weaken,
            "Miraj" => MinionAbility::SwapHealth,
            "The Cursed One" => MinionAbility::Transform,
            "Disciple" => MinionAbility::Heal,
            _ => MinionAbility::None,
        }
    }

    /// Side this ability must target.
    ///
    /// Minions with no ability are held to the enemy side like any attack.
    #[must_use]
    pub fn target_side(self) -> TargetSide {
        match self {
            MinionAbility::Heal => TargetSide::Ally,
            MinionAbility::None
            | MinionAbility::Weaken
            | MinionAbility::SwapHealth
            | MinionAbility::Transform => TargetSide::Enemy,
        }
    }
}

/// Effects applied to every minion of one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowEffect {
    /// Freeze every minion.
    FreezeAll,
    /// Remove the minion with the highest health (lowest position wins ties).
    DestroyHighestHealth,
    /// +1 health to every minion.
    BoostHealth,
    /// +1 attack to every minion.
    BoostAttack,
}

/// Row-wide hero abilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroAbility {
    #[default]
    None,
    Freeze,
    DestroyMax,
    BuffHealth,
    BuffAttack,
}

impl HeroAbility {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Lord Royce" => HeroAbility::Freeze,
            "Empress Thorina" => HeroAbility::DestroyMax,
            "King Mudface" => HeroAbility::BuffHealth,
            "General Kocioraw" => HeroAbility::BuffAttack,
            _ => HeroAbility::None,
        }
    }

    /// Row effect this ability applies, if any.
    #[must_use]
    pub fn row_effect(self) -> Option<RowEffect> {
        match self {
            HeroAbility::None => None,
            HeroAbility::Freeze => Some(RowEffect::FreezeAll),
            HeroAbility::DestroyMax => Some(RowEffect::DestroyHighestHealth),
            HeroAbility::BuffHealth => Some(RowEffect::BoostHealth),
            HeroAbility::BuffAttack => Some(RowEffect::BoostAttack),
        }
    }

    /// Side whose row this ability must target. `None` places no constraint.
    #[must_use]
    pub fn target_side(self) -> Option<TargetSide> {
        match self {
            HeroAbility::None => None,
            HeroAbility::Freeze | HeroAbility::DestroyMax => Some(TargetSide::Enemy),
            HeroAbility::BuffHealth | HeroAbility::BuffAttack => Some(TargetSide::Ally),
        }
    }
}
