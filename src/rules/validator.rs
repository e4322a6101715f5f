//! Pre-condition checks for mutating commands.
//!
//! A `Validator` borrows a snapshot of match state and answers one question
//! per call: would this command be legal for the current player right now?
//! It never mutates. The match engine only applies a command after the
//! matching check returned `Ok`.
//!
//! Checks run in a fixed order per command kind and stop at the first
//! failure, so the reported reason is deterministic.

use super::error::Rejection;
use crate::board::{Board, RowKind, RowSlot};
use crate::cards::{Minion, TargetSide};
use crate::core::{Command, Coordinates, PlayerId, PlayerMap, TurnState};
use crate::game::Player;

/// Read-only view over the state a command is checked against.
#[derive(Clone, Copy, Debug)]
pub struct Validator<'a> {
    board: &'a Board,
    players: &'a PlayerMap<Player>,
    turn: &'a TurnState,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub fn new(board: &'a Board, players: &'a PlayerMap<Player>, turn: &'a TurnState) -> Self {
        Self {
            board,
            players,
            turn,
        }
    }

    fn current(&self) -> PlayerId {
        self.turn.current_player
    }

    /// Check any command. Queries are always legal except a card lookup on
    /// an empty position.
    pub fn check(&self, command: &Command) -> Result<(), Rejection> {
        match *command {
            Command::PlaceCard { hand_idx } => self.check_place(hand_idx).map(|_| ()),
            Command::CardUsesAttack {
                card_attacker,
                card_attacked,
            } => self.check_card_attack(card_attacker, card_attacked),
            Command::CardUsesAbility {
                card_attacker,
                card_attacked,
            } => self.check_card_ability(card_attacker, card_attacked),
            Command::UseAttackHero { card_attacker } => self.check_hero_attack(card_attacker),
            Command::UseHeroAbility { affected_row } => {
                self.check_hero_ability(affected_row).map(|_| ())
            }
            Command::GetCardAtPosition { x, y } => self.check_card_at(Coordinates::new(x, y)),
            _ => Ok(()),
        }
    }

    /// Place the hand card at `hand_idx`. Returns the row it would land on.
    pub fn check_place(&self, hand_idx: usize) -> Result<RowSlot, Rejection> {
        let player = &self.players[self.current()];
        let card = player
            .hand_card(hand_idx)
            .ok_or(Rejection::InvalidHandIndex { hand_idx })?;

        if player.mana() < card.mana_cost() {
            return Err(Rejection::NotEnoughManaToPlace { hand_idx });
        }

        let slot = RowSlot::of(self.current(), RowKind::for_minion(card));
        if self.board.is_full(slot) {
            return Err(Rejection::RowFull { row: slot.index() });
        }
        Ok(slot)
    }

    /// Minion at `attacker` attacks the minion at `target`.
    pub fn check_card_attack(&self, attacker: Coordinates, target: Coordinates) -> Result<(), Rejection> {
        let (attacking, defending, defender) = self.card_pair(attacker, target)?;

        if defender == self.current() {
            return Err(Rejection::TargetNotEnemy { at: target });
        }
        if attacking.has_attacked {
            return Err(Rejection::AlreadyAttacked { at: attacker });
        }
        self.check_taunt(defender, defending, target)?;
        if attacking.frozen {
            return Err(Rejection::AttackerFrozen { at: attacker });
        }
        Ok(())
    }

    /// Minion at `attacker` uses its ability on the minion at `target`.
    ///
    /// Ally-targeting abilities must hit the current player's rows and skip
    /// the taunt rule. Everything else targets the enemy like an attack.
    pub fn check_card_ability(&self, attacker: Coordinates, target: Coordinates) -> Result<(), Rejection> {
        let (attacking, defending, defender) = self.card_pair(attacker, target)?;
        let side = attacking.ability().target_side();

        match side {
            TargetSide::Ally if defender != self.current() => {
                return Err(Rejection::TargetNotAlly { at: target });
            }
            TargetSide::Enemy if defender == self.current() => {
                return Err(Rejection::TargetNotEnemy { at: target });
            }
            _ => {}
        }
        if attacking.frozen {
            return Err(Rejection::AttackerFrozen { at: attacker });
        }
        if attacking.has_attacked {
            return Err(Rejection::AlreadyAttacked { at: attacker });
        }
        if side == TargetSide::Enemy {
            self.check_taunt(defender, defending, target)?;
        }
        Ok(())
    }

    /// Minion at `attacker` attacks the opposing hero.
    pub fn check_hero_attack(&self, attacker: Coordinates) -> Result<(), Rejection> {
        let attacking = self
            .board
            .card_at(attacker)
            .ok_or(Rejection::InvalidAttacker { at: attacker })?;

        if attacking.frozen {
            return Err(Rejection::AttackerFrozen { at: attacker });
        }
        if attacking.has_attacked {
            return Err(Rejection::AlreadyAttacked { at: attacker });
        }
        if self.board.has_tank(self.current().opponent()) {
            return Err(Rejection::NotTank { at: None });
        }
        Ok(())
    }

    /// Current hero uses its ability on `affected_row`. Returns the slot.
    pub fn check_hero_ability(&self, affected_row: usize) -> Result<RowSlot, Rejection> {
        let slot = RowSlot::new(affected_row).ok_or(Rejection::InvalidRow { affected_row })?;
        let player = &self.players[self.current()];
        let hero = player.hero();

        if player.mana() < hero.mana_cost() {
            return Err(Rejection::NotEnoughManaForHero { affected_row });
        }
        if hero.has_acted {
            return Err(Rejection::HeroAlreadyActed { affected_row });
        }
        let own_row = self.board.addressable(self.current(), affected_row).is_some();
        match hero.ability().target_side() {
            Some(TargetSide::Enemy) if own_row => Err(Rejection::RowNotEnemy { affected_row }),
            Some(TargetSide::Ally) if !own_row => Err(Rejection::RowNotOwn { affected_row }),
            _ => Ok(slot),
        }
    }

    /// A card exists at `at`.
    pub fn check_card_at(&self, at: Coordinates) -> Result<(), Rejection> {
        self.board
            .card_at(at)
            .map(|_| ())
            .ok_or(Rejection::NoCardAtPosition { at })
    }

    /// Both minions plus the owner of the target's row.
    fn card_pair(
        &self,
        attacker: Coordinates,
        target: Coordinates,
    ) -> Result<(&'a Minion, &'a Minion, PlayerId), Rejection> {
        let attacking = self
            .board
            .card_at(attacker)
            .ok_or(Rejection::NoCardAtPosition { at: attacker })?;
        let defending = self
            .board
            .card_at(target)
            .ok_or(Rejection::NoCardAtPosition { at: target })?;
        let defender = self
            .board
            .owner_of_slot(target.x)
            .ok_or(Rejection::NoCardAtPosition { at: target })?;
        Ok((attacking, defending, defender))
    }

    /// A tank on `defender`'s front row must be the target.
    fn check_taunt(&self, defender: PlayerId, defending: &Minion, target: Coordinates) -> Result<(), Rejection> {
        if self.board.has_tank(defender) && !defending.is_tank() {
            return Err(Rejection::NotTank { at: Some(target) });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardData;

    struct Fixture {
        board: Board,
        players: PlayerMap<Player>,
        turn: TurnState,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                board: Board::new(),
                players: PlayerMap::new(|_| {
                    Player::new(&[], CardData::new("Lord Royce", 2, 0, 30), 0)
                }),
                turn: TurnState::new(PlayerId::ONE),
            }
        }

        fn with_hero(mut self, player: PlayerId, name: &str) -> Self {
            self.players[player] = Player::new(&[], CardData::new(name, 2, 0, 30), 0);
            self
        }

        fn place(&mut self, player: PlayerId, name: &str) -> Coordinates {
            let minion = Minion::new(CardData::new(name, 1, 2, 4));
            let kind = RowKind::for_minion(&minion);
            let position = self.board.place(player, kind, minion).unwrap();
            Coordinates::new(RowSlot::of(player, kind).index(), position)
        }

        fn validator(&self) -> Validator<'_> {
            Validator::new(&self.board, &self.players, &self.turn)
        }
    }

    #[test]
    fn test_place_checks_hand_then_mana_then_row() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.validator().check_place(0),
            Err(Rejection::InvalidHandIndex { hand_idx: 0 })
        );

        let deck = vec![CardData::new("Sentinel", 3, 1, 1); 6];
        fx.players[PlayerId::ONE] = Player::new(&deck, CardData::new("Lord Royce", 2, 0, 30), 0);
        fx.players[PlayerId::ONE].draw();
        assert_eq!(
            fx.validator().check_place(0),
            Err(Rejection::NotEnoughManaToPlace { hand_idx: 0 })
        );

        fx.players[PlayerId::ONE].add_mana(3);
        assert_eq!(fx.validator().check_place(0), Ok(RowSlot::of(PlayerId::ONE, RowKind::Back)));

        for _ in 0..5 {
            fx.place(PlayerId::ONE, "Sentinel");
        }
        assert_eq!(fx.validator().check_place(0), Err(Rejection::RowFull { row: 3 }));
    }

    #[test]
    fn test_card_attack_order() {
        let mut fx = Fixture::new();
        let attacker = fx.place(PlayerId::ONE, "Sentinel");
        let own = fx.place(PlayerId::ONE, "Berserker");
        let enemy = fx.place(PlayerId::TWO, "Sentinel");
        let missing = Coordinates::new(0, 4);

        assert_eq!(
            fx.validator().check_card_attack(attacker, missing),
            Err(Rejection::NoCardAtPosition { at: missing })
        );
        assert_eq!(
            fx.validator().check_card_attack(attacker, own),
            Err(Rejection::TargetNotEnemy { at: own })
        );
        assert_eq!(fx.validator().check_card_attack(attacker, enemy), Ok(()));

        // Already attacked wins over frozen.
        let minion = fx.board.card_at_mut(attacker).unwrap();
        minion.has_attacked = true;
        minion.frozen = true;
        assert_eq!(
            fx.validator().check_card_attack(attacker, enemy),
            Err(Rejection::AlreadyAttacked { at: attacker })
        );

        fx.board.card_at_mut(attacker).unwrap().has_attacked = false;
        assert_eq!(
            fx.validator().check_card_attack(attacker, enemy),
            Err(Rejection::AttackerFrozen { at: attacker })
        );
    }

    #[test]
    fn test_taunt_on_attack() {
        let mut fx = Fixture::new();
        let attacker = fx.place(PlayerId::ONE, "Sentinel");
        let back = fx.place(PlayerId::TWO, "Sentinel");
        let tank = fx.place(PlayerId::TWO, "Goliath");

        assert_eq!(
            fx.validator().check_card_attack(attacker, back),
            Err(Rejection::NotTank { at: Some(back) })
        );
        assert_eq!(fx.validator().check_card_attack(attacker, tank), Ok(()));
        assert_eq!(
            fx.validator().check_hero_attack(attacker),
            Err(Rejection::NotTank { at: None })
        );
    }

    #[test]
    fn test_ability_sides() {
        let mut fx = Fixture::new();
        let disciple = fx.place(PlayerId::ONE, "Disciple");
        let ripper = fx.place(PlayerId::ONE, "The Ripper");
        let enemy = fx.place(PlayerId::TWO, "Sentinel");
        fx.place(PlayerId::TWO, "Warden");

        assert_eq!(
            fx.validator().check_card_ability(disciple, enemy),
            Err(Rejection::TargetNotAlly { at: enemy })
        );
        // Ally abilities ignore the enemy tank.
        assert_eq!(fx.validator().check_card_ability(disciple, ripper), Ok(()));

        assert_eq!(
            fx.validator().check_card_ability(ripper, disciple),
            Err(Rejection::TargetNotEnemy { at: disciple })
        );
        assert_eq!(
            fx.validator().check_card_ability(ripper, enemy),
            Err(Rejection::NotTank { at: Some(enemy) })
        );
    }

    #[test]
    fn test_ability_frozen_before_attacked() {
        let mut fx = Fixture::new();
        let ripper = fx.place(PlayerId::ONE, "The Ripper");
        let enemy = fx.place(PlayerId::TWO, "Sentinel");

        let minion = fx.board.card_at_mut(ripper).unwrap();
        minion.has_attacked = true;
        minion.frozen = true;

        assert_eq!(
            fx.validator().check_card_ability(ripper, enemy),
            Err(Rejection::AttackerFrozen { at: ripper })
        );
    }

    #[test]
    fn test_hero_attack_needs_attacker() {
        let mut fx = Fixture::new();
        let missing = Coordinates::new(3, 0);
        assert_eq!(
            fx.validator().check_hero_attack(missing),
            Err(Rejection::InvalidAttacker { at: missing })
        );

        let attacker = fx.place(PlayerId::ONE, "Sentinel");
        assert_eq!(fx.validator().check_hero_attack(attacker), Ok(()));
    }

    #[test]
    fn test_hero_ability_checks() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.validator().check_hero_ability(4),
            Err(Rejection::InvalidRow { affected_row: 4 })
        );
        assert_eq!(
            fx.validator().check_hero_ability(1),
            Err(Rejection::NotEnoughManaForHero { affected_row: 1 })
        );

        fx.players[PlayerId::ONE].add_mana(5);
        assert_eq!(
            fx.validator().check_hero_ability(2),
            Err(Rejection::RowNotEnemy { affected_row: 2 })
        );
        assert_eq!(fx.validator().check_hero_ability(1), Ok(RowSlot::new(1).unwrap()));

        fx.players[PlayerId::ONE].hero_mut().has_acted = true;
        assert_eq!(
            fx.validator().check_hero_ability(1),
            Err(Rejection::HeroAlreadyActed { affected_row: 1 })
        );
    }

    #[test]
    fn test_buff_hero_targets_own_rows() {
        let mut fx = Fixture::new().with_hero(PlayerId::TWO, "King Mudface");
        fx.turn.flip();
        fx.players[PlayerId::TWO].add_mana(2);

        assert_eq!(
            fx.validator().check_hero_ability(3),
            Err(Rejection::RowNotOwn { affected_row: 3 })
        );
        assert!(fx.validator().check_hero_ability(0).is_ok());
    }

    #[test]
    fn test_enemy_hero_sides_follow_current_player() {
        let mut fx = Fixture::new().with_hero(PlayerId::TWO, "Empress Thorina");
        fx.turn.flip();
        fx.players[PlayerId::TWO].add_mana(2);

        for own in [0, 1] {
            assert_eq!(
                fx.validator().check_hero_ability(own),
                Err(Rejection::RowNotEnemy { affected_row: own })
            );
        }
        assert_eq!(fx.validator().check_hero_ability(2), Ok(RowSlot::new(2).unwrap()));
        assert_eq!(fx.validator().check_hero_ability(3), Ok(RowSlot::new(3).unwrap()));
    }

    #[test]
    fn test_queries_pass_except_empty_position() {
        let fx = Fixture::new();
        assert_eq!(fx.validator().check(&Command::GetCardsOnTable), Ok(()));
        assert_eq!(
            fx.validator().check(&Command::GetCardAtPosition { x: 1, y: 0 }),
            Err(Rejection::NoCardAtPosition {
                at: Coordinates::new(1, 0)
            })
        );
    }
}
