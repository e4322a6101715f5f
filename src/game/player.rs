//! Per-match player state: mana, deck, hand and hero.
//!
//! Decks draw from the front. Hands keep draw order. A fresh `Player` is
//! built for every match; cross-match tallies live on the `Session`.

use std::collections::VecDeque;

use crate::cards::{CardData, Hero, Minion};
use crate::core::GameRng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    mana: u32,
    deck: VecDeque<Minion>,
    hand: Vec<Minion>,
    hero: Hero,
}

impl Player {
    /// Build a player from a deck list and hero card.
    ///
    /// The deck is shuffled once with a fresh RNG keyed by `seed`.
    #[must_use]
    pub fn new(deck: &[CardData], hero: CardData, seed: u64) -> Self {
        let mut cards: Vec<Minion> = deck.iter().cloned().map(Minion::new).collect();
        GameRng::new(seed).shuffle(&mut cards);

        Self {
            mana: 0,
            deck: cards.into(),
            hand: Vec::new(),
            hero: Hero::new(hero),
        }
    }

    // === Mana ===

    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn add_mana(&mut self, amount: u32) {
        self.mana += amount;
    }

    /// Spend mana. Returns false, spending nothing, if there is not enough.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        match self.mana.checked_sub(cost) {
            Some(rest) => {
                self.mana = rest;
                true
            }
            None => false,
        }
    }

    // === Deck & hand ===

    pub fn deck(&self) -> impl Iterator<Item = &Minion> {
        self.deck.iter()
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Move the front card of the deck into the hand.
    ///
    /// Returns false if the deck is empty.
    pub fn draw(&mut self) -> bool {
        match self.deck.pop_front() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[Minion] {
        &self.hand
    }

    #[must_use]
    pub fn hand_card(&self, index: usize) -> Option<&Minion> {
        self.hand.get(index)
    }

    /// Take the card at `index` out of the hand.
    pub fn take_from_hand(&mut self, index: usize) -> Option<Minion> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    /// Put a card back at `index` (clamped to the hand size).
    pub fn return_to_hand(&mut self, index: usize, card: Minion) {
        let index = index.min(self.hand.len());
        self.hand.insert(index, card);
    }

    // === Hero ===

    #[must_use]
    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }
}
