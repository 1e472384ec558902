//! # notty-engine: Notty Rules Engine
//!
//! The turn-based rules engine for Notty, a card game for two or three
//! players. The engine owns the deck and every hand, enforces the per-turn
//! action budget and group-discard rules, and detects the winner. It performs
//! no I/O; a presentation layer reads its state and forwards user input to
//! its action methods.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Color, Card) and full-deck construction
//! - [`deck`] - The draw pile: shuffle, draw, replenish
//! - [`hand`] - Bounded player hands with overflow for steals
//! - [`player`] - Player identity and hand ownership
//! - [`rules`] - Action kinds, per-turn budget and group validity
//! - [`game`] - Turn orchestration, actions and win detection
//! - [`errors`] - Construction errors
//!
//! ## Quick Start
//!
//! ```rust
//! use notty_engine::game::Game;
//! use notty_engine::player::Player;
//!
//! let players = vec![Player::human("Ada"), Player::computer("Computer 1")];
//! let mut game = Game::new(players, Some(42)).unwrap();
//!
//! if game.can_draw() {
//!     game.player_draws_multiple(3);
//! }
//! game.check_win_condition();
//! game.player_passes();
//! assert_eq!(game.current_player_index(), 1);
//! ```
//!
//! ## Deterministic Play
//!
//! Randomness is injected. [`game::Game::new`] seeds a ChaCha20 generator;
//! [`game::Game::with_rng`] accepts any [`rand::Rng`]:
//!
//! ```rust
//! use notty_engine::game::Game;
//! use notty_engine::player::Player;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let seat = || vec![Player::human("A"), Player::human("B")];
//! let g1 = Game::with_rng(seat(), ChaCha20Rng::seed_from_u64(3)).unwrap();
//! let g2 = Game::with_rng(seat(), ChaCha20Rng::seed_from_u64(3)).unwrap();
//! assert_eq!(g1.players(), g2.players());
//! ```
//!
//! ## Group Validation
//!
//! ```rust
//! use notty_engine::cards::Card;
//! use notty_engine::rules::card_group_is_valid;
//!
//! let run: Vec<Card> = ["red 1", "red 2", "red 3"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! assert!(card_group_is_valid(&run));
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;
