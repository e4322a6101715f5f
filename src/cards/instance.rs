//! Runtime cards - minions and heroes.
//!
//! Both wrap the shared `CardData` and add their own state:
//! - `Minion`: frozen / attacked flags, tank and druid flags, targeted ability
//! - `Hero`: row ability and an "acted this round" flag
//!
//! Only minions can be placed on the board. `CardRef` is the tagged variant
//! over both, used wherever either kind is handled uniformly (projections).
//!
//! Tank, druid and ability are fixed from the name at construction.

use serde::{Deserialize, Serialize};

use super::ability::{HeroAbility, MinionAbility};
use super::definition::CardData;
use crate::core::HERO_STARTING_HEALTH;

const TANK_NAMES: [&str; 2] = ["Goliath", "Warden"];
const DRUID_NAMES: [&str; 2] = ["The Ripper", "Miraj"];

/// A creature card in a deck, hand or board row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Minion {
    pub data: CardData,

    /// Cannot attack or use its ability until its owner's turn ends.
    pub frozen: bool,

    /// Attacked or used its ability this round.
    pub has_attacked: bool,

    tank: bool,
    druid: bool,
    ability: MinionAbility,
}

impl Minion {
    /// Build a minion, deriving tank, druid and ability from its name.
    #[must_use]
    pub fn new(data: CardData) -> Self {
        let name = data.name.as_str();
        Self {
            tank: TANK_NAMES.contains(&name),
            druid: DRUID_NAMES.contains(&name),
            ability: MinionAbility::from_name(name),
            frozen: false,
            has_attacked: false,
            data,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    #[must_use]
    pub fn mana_cost(&self) -> u32 {
        self.data.mana_cost
    }

    #[must_use]
    pub fn attack(&self) -> u32 {
        self.data.attack_damage
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.data.health
    }

    /// Mandatory attack target while on its owner's front row.
    #[must_use]
    pub fn is_tank(&self) -> bool {
        self.tank
    }

    #[must_use]
    pub fn is_druid(&self) -> bool {
        self.druid
    }

    /// Tank and druid minions are placed on the front row.
    #[must_use]
    pub fn is_front_row(&self) -> bool {
        self.tank || self.druid
    }

    #[must_use]
    pub fn ability(&self) -> MinionAbility {
        self.ability
    }

    /// Subtract `amount` health. Returns true if the minion died.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.data.health = self.data.health.saturating_sub_unsigned(amount);
        self.is_dead()
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.data.health <= 0
    }

    /// Apply `ability`, cast by a minion with `caster_health`, to this minion.
    ///
    /// Returns the caster's new health when the ability exchanges it.
    pub fn apply_ability(&mut self, ability: MinionAbility, caster_health: i32) -> Option<i32> {
        match ability {
            MinionAbility::None => None,
            MinionAbility::Weaken => {
                self.data.attack_damage = self.data.attack_damage.saturating_sub(2);
                None
            }
            MinionAbility::SwapHealth => {
                let previous = self.data.health;
                self.data.health = caster_health;
                Some(previous)
            }
            MinionAbility::Transform => {
                let attack = self.data.attack_damage;
                self.data.attack_damage = u32::try_from(self.data.health).unwrap_or(0);
                self.data.health = i32::try_from(attack).unwrap_or(i32::MAX);
                if self.data.attack_damage == 0 {
                    self.data.health = 0;
                }
                None
            }
            MinionAbility::Heal => {
                self.data.health += 2;
                None
            }
        }
    }
}

/// A player's avatar. Never placed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    pub data: CardData,

    /// Used its ability this round.
    pub has_acted: bool,

    ability: HeroAbility,
}

impl Hero {
    /// Build a hero at full health with no attack, ability keyed by name.
    #[must_use]
    pub fn new(mut data: CardData) -> Self {
        data.health = HERO_STARTING_HEALTH;
        data.attack_damage = 0;
        Self {
            ability: HeroAbility::from_name(&data.name),
            has_acted: false,
            data,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Mana spent per ability use.
    #[must_use]
    pub fn mana_cost(&self) -> u32 {
        self.data.mana_cost
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.data.health
    }

    #[must_use]
    pub fn ability(&self) -> HeroAbility {
        self.ability
    }

    /// Subtract `amount` health. Returns true if the hero died.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.data.health = self.data.health.saturating_sub_unsigned(amount);
        self.is_dead()
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.data.health <= 0
    }
}

/// Borrowed view over either card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRef<'a> {
    Minion(&'a Minion),
    Hero(&'a Hero),
}

impl<'a> CardRef<'a> {
    /// The shared attributes.
    #[must_use]
    pub fn data(self) -> &'a CardData {
        match self {
            CardRef::Minion(minion) => &minion.data,
            CardRef::Hero(hero) => &hero.data,
        }
    }
}

impl<'a> From<&'a Minion> for CardRef<'a> {
    fn from(minion: &'a Minion) -> Self {
        CardRef::Minion(minion)
    }
}

impl<'a> From<&'a Hero> for CardRef<'a> {
    fn from(hero: &'a Hero) -> Self {
        CardRef::Hero(hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minion(name: &str, attack: u32, health: i32) -> Minion {
        Minion::new(CardData::new(name, 1, attack, health))
    }

    #[test]
    fn test_flags_from_name() {
        assert!(minion("Goliath", 0, 3).is_tank());
        assert!(minion("Warden", 0, 3).is_tank());
        assert!(minion("The Ripper", 0, 3).is_druid());
        assert!(minion("Miraj", 0, 3).is_druid());

        let plain = minion("Sentinel", 1, 3);
        assert!(!plain.is_tank());
        assert!(!plain.is_druid());
        assert!(!plain.is_front_row());
        assert_eq!(plain.ability(), MinionAbility::None);
    }

    #[test]
    fn test_take_damage() {
        let mut target = minion("Sentinel", 1, 3);

        assert!(!target.take_damage(2));
        assert_eq!(target.health(), 1);
        assert!(target.take_damage(4));
        assert_eq!(target.health(), -3);
    }

    #[test]
    fn test_weaken_floors_at_zero() {
        let mut target = minion("Sentinel", 3, 3);

        target.apply_ability(MinionAbility::Weaken, 1);
        assert_eq!(target.attack(), 1);
        target.apply_ability(MinionAbility::Weaken, 1);
        assert_eq!(target.attack(), 0);
    }

    #[test]
    fn test_swap_health_returns_caster_health() {
        let mut target = minion("Sentinel", 1, 7);

        let caster_health = target.apply_ability(MinionAbility::SwapHealth, 2);

        assert_eq!(caster_health, Some(7));
        assert_eq!(target.health(), 2);
    }

    #[test]
    fn test_transform_swaps_attack_and_health() {
        let mut target = minion("Sentinel", 2, 5);

        target.apply_ability(MinionAbility::Transform, 1);

        assert_eq!(target.attack(), 5);
        assert_eq!(target.health(), 2);
    }

    #[test]
    fn test_transform_zero_attack_kills() {
        let mut target = minion("Sentinel", 2, 0);

        target.apply_ability(MinionAbility::Transform, 5);

        assert_eq!(target.attack(), 0);
        assert_eq!(target.health(), 0);
        assert!(target.is_dead());
    }

    #[test]
    fn test_heal() {
        let mut target = minion("Sentinel", 1, 1);

        assert_eq!(target.apply_ability(MinionAbility::Heal, 9), None);
        assert_eq!(target.health(), 3);
    }

    #[test]
    fn test_hero_starts_at_fixed_health() {
        let hero = Hero::new(CardData::new("Empress Thorina", 3, 5, 12));

        assert_eq!(hero.health(), HERO_STARTING_HEALTH);
        assert_eq!(hero.data.attack_damage, 0);
        assert_eq!(hero.ability(), HeroAbility::DestroyMax);
        assert!(!hero.has_acted);
    }

    #[test]
    fn test_unknown_hero_has_no_ability() {
        let hero = Hero::new(CardData::new("Stranger", 1, 0, 30));
        assert_eq!(hero.ability(), HeroAbility::None);
    }

    #[test]
    fn test_card_ref() {
        let minion = minion("Goliath", 1, 1);
        let hero = Hero::new(CardData::new("Lord Royce", 1, 0, 30));

        assert_eq!(CardRef::from(&minion).data().name, "Goliath");
        assert_eq!(CardRef::from(&hero).data().name, "Lord Royce");
    }
}
