//! The match engine.
//!
//! `Match` owns both players, the board, the turn counters and the session
//! for the duration of one match. Commands are validated against a
//! `Validator` snapshot, then applied with no further checks.
//!
//! ## Round flow
//!
//! ```text
//! start ─► start-round ─► turn ─► end-turn ─► turn ─► end-turn ─► start-round ─► ...
//! ```
//!
//! A start-round bumps the round, clears attacked/acted flags and gives both
//! players one card and `min(round, 10)` mana. It runs at match start and
//! after every second ended turn.

use im::Vector;
use log::{debug, info};

use super::outcome::{CardView, HeroView, Outcome, Projection, ResultSink};
use super::player::Player;
use super::session::Session;
use crate::board::{Board, RowKind, RowSlot};
use crate::cards::{DeckPool, Minion};
use crate::core::{
    Command, CommandRecord, Coordinates, MatchPhase, MatchSetup, PlayerId, PlayerMap, TurnState,
    PLAYER_COUNT,
};
use crate::rules::{GameResult, Rejection, RulesEngine, SetupError, Validator};

/// One match between two players.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{CardData, DeckPool};
/// use card_duel::core::{Command, MatchSetup, PlayerId};
/// use card_duel::game::{Match, Outcome, Projection, Session};
///
/// let deck = vec![CardData::new("Sentinel", 1, 1, 2); 4];
/// let decks = DeckPool::new(vec![deck.clone()], vec![deck]);
/// let setup = MatchSetup::new(
///     CardData::new("Lord Royce", 2, 0, 30),
///     CardData::new("King Mudface", 2, 0, 30),
/// );
///
/// let mut game = Match::start(Session::new(), &decks, &setup).unwrap();
/// let mut sink: Vec<Outcome> = Vec::new();
///
/// game.dispatch(Command::PlaceCard { hand_idx: 0 }, &mut sink);
/// game.dispatch(Command::GetPlayerMana { player_idx: PlayerId::ONE }, &mut sink);
///
/// assert!(sink[0].is_success());
/// assert_eq!(sink[1].output(), Some(&Projection::Number(0)));
/// ```
#[derive(Clone, Debug)]
pub struct Match {
    players: PlayerMap<Player>,
    board: Board,
    turn: TurnState,
    phase: MatchPhase,
    session: Session,
    history: Vector<CommandRecord>,
}

impl Match {
    /// Set up a fresh match and run the first start-round.
    ///
    /// Both decks are shuffled with the setup's seed. Fails if either
    /// player's deck index is not in `decks`.
    pub fn start(session: Session, decks: &DeckPool, setup: &MatchSetup) -> Result<Self, SetupError> {
        let build = |player: PlayerId| -> Result<Player, SetupError> {
            let index = setup.deck_index(player);
            let deck = decks
                .deck(player, index)
                .ok_or(SetupError::UnknownDeck { player, index })?;
            Ok(Player::new(deck, setup.hero(player).clone(), setup.shuffle_seed))
        };
        let players = PlayerMap::from_pair(build(PlayerId::ONE)?, build(PlayerId::TWO)?);

        let mut game = Self {
            players,
            board: Board::new(),
            turn: TurnState::new(setup.starting_player),
            phase: MatchPhase::NotStarted,
            session,
            history: Vector::new(),
        };
        info!(
            "match started: {} vs {}, seed {}, {} first",
            game.players[PlayerId::ONE].hero().name(),
            game.players[PlayerId::TWO].hero().name(),
            setup.shuffle_seed,
            setup.starting_player
        );
        game.start_round();
        game.phase = MatchPhase::InProgress;
        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Accepted mutating commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Hand the session back once the match is done with it.
    #[must_use]
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Snapshot validator over the current state.
    #[must_use]
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(&self.board, &self.players, &self.turn)
    }

    // === Command entry point ===

    /// Run one command and report its outcome(s) to `sink`.
    ///
    /// Emits one success or rejection, plus a game-ended record if this
    /// command killed a hero.
    pub fn dispatch(&mut self, command: Command, sink: &mut impl ResultSink) {
        debug!(
            "{} (round {}, turn {}): {:?}",
            self.turn.current_player, self.turn.round, self.turn.turn, command
        );
        let was_over = self.is_terminal().is_some();

        match self.execute(&command) {
            Ok(output) => sink.emit(Outcome::success(command, output)),
            Err(rejection) => {
                debug!("{} rejected: {}", command.name(), rejection);
                sink.emit(Outcome::rejected(command, rejection));
            }
        }

        if !was_over {
            if let Some(result) = self.is_terminal() {
                sink.emit(Outcome::game_ended(result));
            }
        }
    }

    // === Round flow ===

    fn start_round(&mut self) {
        let mana = self.turn.begin_round();
        self.board.reset_attack_flags();
        for (_, player) in self.players.iter_mut() {
            player.hero_mut().has_acted = false;
        }

        for _ in 0..PLAYER_COUNT {
            let player = &mut self.players[self.turn.current_player];
            player.draw();
            player.add_mana(mana);
            self.turn.flip();
        }
        info!("round {} started, +{} mana each", self.turn.round, mana);
    }

    fn end_turn(&mut self) {
        self.board.unfreeze(self.turn.current_player);
        if self.turn.end_turn() {
            self.start_round();
        }
    }

    // === Mutations ===

    fn place_card(&mut self, hand_idx: usize) {
        let current = self.turn.current_player;
        let player = &mut self.players[current];
        let Some(card) = player.take_from_hand(hand_idx) else {
            return;
        };
        let cost = card.mana_cost();

        match self.board.place(current, RowKind::for_minion(&card), card) {
            Ok(_) => {
                player.spend_mana(cost);
            }
            Err(card) => player.return_to_hand(hand_idx, card),
        }
    }

    /// Mark the minion at `at` as having attacked. Returns its attack value.
    fn mark_attacker(&mut self, at: Coordinates) -> Option<u32> {
        let minion = self.board.card_at_mut(at)?;
        minion.has_attacked = true;
        Some(minion.attack())
    }

    fn remove_if_dead(&mut self, at: Coordinates) {
        if self.board.card_at(at).is_some_and(Minion::is_dead) {
            if let Some(dead) = self.board.remove_at(at) {
                debug!("{} at {} destroyed", dead.name(), at);
            }
        }
    }

    fn card_attack(&mut self, attacker: Coordinates, target: Coordinates) {
        let Some(damage) = self.mark_attacker(attacker) else {
            return;
        };
        if let Some(defending) = self.board.card_at_mut(target) {
            defending.take_damage(damage);
        }
        self.remove_if_dead(target);
    }

    fn card_ability(&mut self, attacker: Coordinates, target: Coordinates) {
        let Some((ability, caster_health)) = self
            .board
            .card_at(attacker)
            .map(|caster| (caster.ability(), caster.health()))
        else {
            return;
        };

        let swapped = self
            .board
            .card_at_mut(target)
            .and_then(|defending| defending.apply_ability(ability, caster_health));

        if let Some(caster) = self.board.card_at_mut(attacker) {
            caster.has_attacked = true;
            if let Some(health) = swapped {
                caster.data.health = health;
            }
        }
        self.remove_if_dead(target);
    }

    fn hero_attack(&mut self, attacker: Coordinates) {
        let Some(damage) = self.mark_attacker(attacker) else {
            return;
        };
        let current = self.turn.current_player;
        let enemy = &mut self.players[current.opponent()];

        if enemy.hero_mut().take_damage(damage) {
            self.finish(current);
        }
    }

    fn hero_ability(&mut self, affected_row: usize) {
        let Some(slot) = RowSlot::new(affected_row) else {
            return;
        };
        let player = &mut self.players[self.turn.current_player];
        let (ability, cost) = (player.hero().ability(), player.hero().mana_cost());

        if let Some(effect) = ability.row_effect() {
            if let Some(destroyed) = self.board.apply_to_row(slot, effect) {
                debug!("{} destroyed by {:?}", destroyed.name(), ability);
            }
        }
        player.spend_mana(cost);
        player.hero_mut().has_acted = true;
    }

    /// Move to `Ended` and count the win. Only the first kill counts.
    fn finish(&mut self, winner: PlayerId) {
        if matches!(self.phase, MatchPhase::Ended { .. }) {
            return;
        }
        self.phase = MatchPhase::Ended { winner };
        self.session.record_win(winner);
        info!(
            "match ended: {} won ({} games played)",
            winner,
            self.session.total_games()
        );
    }

    // === Queries ===

    fn project(&self, command: &Command) -> Option<Projection> {
        let projection = match *command {
            Command::GetPlayerDeck { player_idx } => Projection::deck(&self.players[player_idx]),
            Command::GetPlayerHero { player_idx } => {
                Projection::Hero(HeroView::from(self.players[player_idx].hero()))
            }
            Command::GetPlayerTurn => Projection::Player(self.turn.current_player),
            Command::GetCardsInHand { player_idx } => Projection::hand(&self.players[player_idx]),
            Command::GetPlayerMana { player_idx } => {
                Projection::Number(self.players[player_idx].mana())
            }
            Command::GetCardsOnTable => Projection::table(&self.board),
            Command::GetCardAtPosition { x, y } => {
                Projection::Card(CardView::from(self.board.card_at(Coordinates::new(x, y))?))
            }
            Command::GetFrozenCardsOnTable => Projection::cards(self.board.frozen_cards()),
            Command::GetTotalGamesPlayed => Projection::Number(self.session.total_games()),
            Command::GetPlayerOneWins => Projection::Number(self.session.wins(PlayerId::ONE)),
            Command::GetPlayerTwoWins => Projection::Number(self.session.wins(PlayerId::TWO)),
            _ => return None,
        };
        Some(projection)
    }
}

impl RulesEngine for Match {
    type Output = Option<Projection>;

    fn validate(&self, command: &Command) -> Result<(), Rejection> {
        self.validator().check(command)
    }

    fn apply(&mut self, command: &Command) -> Option<Projection> {
        if !command.is_mutating() {
            return self.project(command);
        }

        self.history.push_back(CommandRecord::new(
            self.turn.current_player,
            command.clone(),
            self.turn.round,
            self.turn.turn,
        ));

        match *command {
            Command::EndPlayerTurn => self.end_turn(),
            Command::PlaceCard { hand_idx } => self.place_card(hand_idx),
            Command::CardUsesAttack {
                card_attacker,
                card_attacked,
            } => self.card_attack(card_attacker, card_attacked),
            Command::CardUsesAbility {
                card_attacker,
                card_attacked,
            } => self.card_ability(card_attacker, card_attacked),
            Command::UseAttackHero { card_attacker } => self.hero_attack(card_attacker),
            Command::UseHeroAbility { affected_row } => self.hero_ability(affected_row),
            _ => {}
        }
        None
    }

    fn is_terminal(&self) -> Option<GameResult> {
        match self.phase {
            MatchPhase::Ended { winner } => Some(GameResult::Winner(winner)),
            MatchPhase::NotStarted | MatchPhase::InProgress => None,
        }
    }
}
