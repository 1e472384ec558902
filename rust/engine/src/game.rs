use std::collections::BTreeMap;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::player::Player;
use crate::rules::{classify_group, ActionBudget, ActionKind, ActionRejected, GroupKind};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 3;
/// Cards dealt to each player at setup.
pub const INITIAL_HAND_SIZE: usize = 4;

/// One Notty session: the players, the deck and whose turn it is.
///
/// Every action method checks its precondition first and returns `false`
/// without touching any state when it does not hold. Use the `can_*`
/// predicates or [`Game::check_action`] to ask before acting.
///
/// Win detection is explicit: call [`Game::check_win_condition`] after each
/// action that removes cards from a hand.
///
/// # Examples
///
/// ```
/// use notty_engine::game::Game;
/// use notty_engine::player::Player;
///
/// let players = vec![Player::human("Ada"), Player::computer("Bot")];
/// let mut game = Game::new(players, Some(7)).unwrap();
/// assert_eq!(game.deck_size(), 82);
///
/// assert!(game.player_draws_multiple(2));
/// assert_eq!(game.current_player().hand().size(), 6);
/// assert!(!game.can_draw());
///
/// game.next_turn();
/// assert_eq!(game.current_player_index(), 1);
/// assert!(game.can_draw());
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha20Rng> {
    players: Vec<Player>,
    deck: Deck,
    current_player_index: usize,
    winner: Option<usize>,
    game_over: bool,
    actions_used: ActionBudget,
    rng: R,
    seed: Option<u64>,
}

impl Game<ChaCha20Rng> {
    /// Starts a game with a ChaCha20 generator. Without a seed a random one is
    /// picked; [`Game::seed`] reports it either way.
    pub fn new(players: Vec<Player>, seed: Option<u64>) -> Result<Self, EngineError> {
        let seed = seed.unwrap_or_else(rand::random);
        Self::start(players, ChaCha20Rng::seed_from_u64(seed), Some(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Starts a game drawing all randomness from `rng`.
    pub fn with_rng(players: Vec<Player>, rng: R) -> Result<Self, EngineError> {
        Self::start(players, rng, None)
    }

    /// Assembles a game from an arranged table without shuffling or dealing.
    ///
    /// The deck and hands together must hold exactly the 90-card deck. Turn
    /// starts at player 0 with a fresh action budget.
    pub fn from_parts(players: Vec<Player>, deck: Deck, rng: R) -> Result<Self, EngineError> {
        validate_player_count(players.len())?;
        let mut pool: Vec<Card> = deck.cards().to_vec();
        for p in &players {
            pool.extend_from_slice(p.hand().cards());
        }
        if pool.len() != DECK_SIZE {
            return Err(EngineError::CardsNotConserved {
                expected: DECK_SIZE,
                found: pool.len(),
            });
        }
        if let Some((missing, extra)) = pool_mismatch(&pool) {
            return Err(EngineError::CardPoolMismatch { missing, extra });
        }
        Ok(Self {
            players,
            deck,
            current_player_index: 0,
            winner: None,
            game_over: false,
            actions_used: ActionBudget::default(),
            rng,
            seed: None,
        })
    }

    fn start(players: Vec<Player>, rng: R, seed: Option<u64>) -> Result<Self, EngineError> {
        validate_player_count(players.len())?;
        let mut game = Self {
            players,
            deck: Deck::new(),
            current_player_index: 0,
            winner: None,
            game_over: false,
            actions_used: ActionBudget::default(),
            rng,
            seed,
        };
        game.setup();
        info!(
            players = game.players.len(),
            seed = ?game.seed,
            deck = game.deck.size(),
            "game started"
        );
        Ok(game)
    }

    fn setup(&mut self) {
        self.deck.shuffle(&mut self.rng);
        for i in 0..self.players.len() {
            let cards = self.deck.draw_multiple(INITIAL_HAND_SIZE);
            self.give_cards(i, &cards);
        }
    }

    /// Adds cards to a hand, sending any the hand refuses back to the deck.
    fn give_cards(&mut self, player: usize, cards: &[Card]) {
        let outcomes = self.players[player]
            .hand_mut()
            .add_cards(cards, &mut self.rng);
        let refused: Vec<Card> = outcomes
            .into_iter()
            .filter(|&(_, added)| !added)
            .map(|(c, _)| c)
            .collect();
        if !refused.is_empty() {
            debug!(player, refused = refused.len(), "hand full, returning cards to deck");
            self.deck.add_cards(refused);
        }
    }

    // --- queries -------------------------------------------------------

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Every player except the current one, with their seat index.
    pub fn other_players(&self) -> impl Iterator<Item = (usize, &Player)> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != self.current_player_index)
    }

    pub fn next_player_index(&self) -> usize {
        (self.current_player_index + 1) % self.players.len()
    }

    pub fn next_player(&self) -> &Player {
        &self.players[self.next_player_index()]
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner_index(&self) -> Option<usize> {
        self.winner
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    pub fn actions_used(&self) -> &ActionBudget {
        &self.actions_used
    }

    /// Seed of the built-in generator, when the game was started with one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    // --- availability ----------------------------------------------------

    /// Explains whether `kind` may be taken right now.
    pub fn check_action(&self, kind: ActionKind) -> Result<(), ActionRejected> {
        if self.game_over {
            return Err(ActionRejected::GameOver);
        }
        if !self.actions_used.is_available(kind) {
            return Err(ActionRejected::AlreadyUsed(kind));
        }
        match kind {
            ActionKind::Draw => {
                if self.deck.is_empty() {
                    return Err(ActionRejected::DeckEmpty);
                }
                if self.current_player().hand().is_full() {
                    return Err(ActionRejected::HandFull);
                }
            }
            ActionKind::Steal => {
                if self.other_players().all(|(_, p)| p.hand().is_empty()) {
                    return Err(ActionRejected::NothingToSteal);
                }
            }
            // a full hand is fine here: the paired discard follows
            ActionKind::DrawDiscardDraw => {
                if self.deck.is_empty() {
                    return Err(ActionRejected::DeckEmpty);
                }
            }
            ActionKind::DrawDiscardDiscard => {
                if self.actions_used.used(ActionKind::DrawDiscardDraw) != 1 {
                    return Err(ActionRejected::DiscardWithoutDraw);
                }
            }
        }
        Ok(())
    }

    /// Like [`Game::check_action`] for steal, also validating the target.
    pub fn check_steal(&self, target: usize) -> Result<(), ActionRejected> {
        self.check_action(ActionKind::Steal)?;
        match self.players.get(target) {
            Some(p) if target != self.current_player_index && !p.hand().is_empty() => Ok(()),
            _ => Err(ActionRejected::InvalidTarget(target)),
        }
    }

    /// Checks a group discard: the cards must form a run or a set and all be
    /// held by the current player.
    pub fn check_group(&self, cards: &[Card]) -> Result<GroupKind, ActionRejected> {
        if self.game_over {
            return Err(ActionRejected::GameOver);
        }
        let kind = classify_group(cards).ok_or(ActionRejected::InvalidGroup)?;
        if !self.current_player().hand().contains_all(cards) {
            return Err(ActionRejected::CardNotInHand);
        }
        Ok(kind)
    }

    pub fn can_draw(&self) -> bool {
        self.check_action(ActionKind::Draw).is_ok()
    }

    pub fn can_steal(&self) -> bool {
        self.check_action(ActionKind::Steal).is_ok()
    }

    pub fn can_draw_discard_draw(&self) -> bool {
        self.check_action(ActionKind::DrawDiscardDraw).is_ok()
    }

    pub fn can_draw_discard_discard(&self) -> bool {
        self.check_action(ActionKind::DrawDiscardDiscard).is_ok()
    }

    pub fn can_pass(&self) -> bool {
        !self.game_over
    }

    // --- actions ---------------------------------------------------------

    /// Draws up to `count` cards into the current hand. Fewer arrive when the
    /// deck runs out or the hand fills up part-way.
    pub fn player_draws_multiple(&mut self, count: usize) -> bool {
        if let Err(reason) = self.check_action(ActionKind::Draw) {
            return self.reject(ActionKind::Draw, reason);
        }
        let cards = self.deck.draw_multiple(count);
        self.give_cards(self.current_player_index, &cards);
        self.actions_used.record(ActionKind::Draw);
        debug!(
            player = self.current_player_index,
            requested = count,
            drawn = cards.len(),
            "draw"
        );
        true
    }

    /// Takes a random card from `target`. The card is added even when it
    /// pushes the current hand past the cap.
    pub fn player_steals(&mut self, target: usize) -> bool {
        if let Err(reason) = self.check_steal(target) {
            return self.reject(ActionKind::Steal, reason);
        }
        let victim = self.players[target].hand_mut();
        victim.shuffle(&mut self.rng);
        let Some(card) = victim.take_top() else {
            return self.reject(ActionKind::Steal, ActionRejected::InvalidTarget(target));
        };
        let thief = self.current_player_index;
        self.players[thief]
            .hand_mut()
            .add_card(card, true, &mut self.rng);
        self.actions_used.record(ActionKind::Steal);
        debug!(player = thief, target, "steal");
        true
    }

    /// First half of draw-discard: one card from the deck, full hand or not.
    /// A full hand refuses the card and it goes back on the deck.
    pub fn player_draw_discard_draws(&mut self) -> bool {
        if let Err(reason) = self.check_action(ActionKind::DrawDiscardDraw) {
            return self.reject(ActionKind::DrawDiscardDraw, reason);
        }
        let card = match self.deck.draw() {
            Ok(c) => c,
            Err(_) => return self.reject(ActionKind::DrawDiscardDraw, ActionRejected::DeckEmpty),
        };
        let player = self.current_player_index;
        let kept = self.players[player]
            .hand_mut()
            .add_card(card, false, &mut self.rng);
        if !kept {
            self.deck.add_card(card);
        }
        self.actions_used.record(ActionKind::DrawDiscardDraw);
        debug!(player, kept, "draw-discard draw");
        true
    }

    /// Second half of draw-discard: returns `card` from the current hand to
    /// the deck.
    pub fn player_draw_discard_discards(&mut self, card: Card) -> bool {
        if let Err(reason) = self.check_action(ActionKind::DrawDiscardDiscard) {
            return self.reject(ActionKind::DrawDiscardDiscard, reason);
        }
        let player = self.current_player_index;
        if !self.players[player].hand_mut().remove_card(&card) {
            return self.reject(ActionKind::DrawDiscardDiscard, ActionRejected::CardNotInHand);
        }
        self.deck.add_card(card);
        self.actions_used.record(ActionKind::DrawDiscardDiscard);
        debug!(player, %card, "draw-discard discard");
        true
    }

    /// Discards a run or set from the current hand back into the deck. Not
    /// budgeted: any number of groups may go in one turn.
    pub fn player_discards_group(&mut self, cards: &[Card]) -> bool {
        let kind = match self.check_group(cards) {
            Ok(kind) => kind,
            Err(reason) => return self.reject("group", reason),
        };
        let player = self.current_player_index;
        self.players[player].hand_mut().remove_cards(cards);
        self.deck.add_cards(cards.iter().copied());
        debug!(player, ?kind, cards = cards.len(), "group discarded");
        true
    }

    /// Ends the current turn.
    pub fn player_passes(&mut self) -> bool {
        if !self.can_pass() {
            return self.reject("pass", ActionRejected::GameOver);
        }
        debug!(player = self.current_player_index, "pass");
        self.next_turn();
        true
    }

    /// Hands the turn to the next seat and clears the action budget.
    pub fn next_turn(&mut self) {
        self.current_player_index = self.next_player_index();
        self.actions_used.reset();
    }

    /// Declares the first player (in seat order) with an empty hand the
    /// winner. Once a winner exists it is kept and `true` is returned.
    pub fn check_win_condition(&mut self) -> bool {
        if self.winner.is_some() {
            return true;
        }
        let Some(index) = self.players.iter().position(|p| p.hand().is_empty()) else {
            return false;
        };
        self.winner = Some(index);
        self.game_over = true;
        info!(winner = index, name = self.players[index].name(), "game over");
        true
    }

    fn reject(&self, action: impl fmt::Display, reason: ActionRejected) -> bool {
        debug!(
            player = self.current_player_index,
            %action,
            %reason,
            "action rejected"
        );
        false
    }

    /// A serializable view of the table for presentation code.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            deck_size: self.deck.size(),
            current_player: self.current_player_index,
            game_over: self.game_over,
            winner: self.winner,
            players: self
                .players
                .iter()
                .map(|p| PlayerView {
                    name: p.name().to_string(),
                    is_human: p.is_human(),
                    hand_size: p.hand().size(),
                    cards: p.hand().cards().to_vec(),
                })
                .collect(),
            actions_used: ActionKind::ALL
                .iter()
                .map(|&k| (k, self.actions_used.used(k)))
                .collect(),
            available: ActionKind::ALL
                .iter()
                .copied()
                .filter(|&k| self.check_action(k).is_ok())
                .collect(),
        }
    }
}

/// First card short of its copies and first card over them, comparing a
/// 90-card pool against the full deck.
fn pool_mismatch(pool: &[Card]) -> Option<(Card, Card)> {
    let mut counts: BTreeMap<Card, i32> = BTreeMap::new();
    for c in full_deck() {
        *counts.entry(c).or_default() += 1;
    }
    for c in pool {
        *counts.entry(*c).or_default() -= 1;
    }
    let missing = counts.iter().find(|&(_, &n)| n > 0).map(|(&c, _)| c)?;
    let extra = counts.iter().find(|&(_, &n)| n < 0).map(|(&c, _)| c)?;
    Some((missing, extra))
}

fn validate_player_count(count: usize) -> Result<(), EngineError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(EngineError::InvalidPlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}

/// Public table state at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub deck_size: usize,
    pub current_player: usize,
    pub game_over: bool,
    pub winner: Option<usize>,
    pub players: Vec<PlayerView>,
    pub actions_used: BTreeMap<ActionKind, u8>,
    /// Budgeted actions the current player may take now.
    pub available: Vec<ActionKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub is_human: bool,
    pub hand_size: usize,
    pub cards: Vec<Card>,
}
