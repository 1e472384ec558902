#![allow(dead_code)]

use notty_engine::cards::Card;
use notty_engine::deck::Deck;
use notty_engine::game::Game;
use notty_engine::player::Player;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub fn card(s: &str) -> Card {
    s.parse().expect("valid card")
}

pub fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| card(s)).collect()
}

pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Builds a game where player `i` holds exactly `hands[i]` and the deck holds
/// everything else.
pub fn arranged_game(hands: &[&[&str]]) -> Game<ChaCha20Rng> {
    let mut deck = Deck::new();
    let mut r = rng(99);
    let players = hands
        .iter()
        .enumerate()
        .map(|(i, hand)| {
            let mut p = Player::new(format!("P{}", i), i == 0);
            for c in cards(hand) {
                assert!(deck.remove_card(&c), "card {} not available", c);
                p.hand_mut().add_card(c, true, &mut r);
            }
            p
        })
        .collect();
    Game::from_parts(players, deck, rng(7)).expect("arranged table is valid")
}

pub fn total_cards(game: &Game<ChaCha20Rng>) -> usize {
    game.deck_size()
        + game
            .players()
            .iter()
            .map(|p| p.hand().size())
            .sum::<usize>()
}

pub fn two_players() -> Vec<Player> {
    vec![Player::human("Human"), Player::computer("Computer 1")]
}

pub fn three_players() -> Vec<Player> {
    vec![
        Player::human("Human"),
        Player::computer("Computer 1"),
        Player::computer("Computer 2"),
    ]
}
