//! # holdem-engine: Texas Hold'em Rules Engine
//!
//! A deterministic adjudicator for one hand of Texas Hold'em: hand scoring,
//! side-pot settlement for unequal all-ins, and the betting-turn / phase
//! state machine that ties them together. Hosts (a terminal client, an HTTP
//! service, a bot) drive it through discrete, synchronous calls and read the
//! resulting state back; reproducible RNG makes every hand replayable.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`board`] - Community cards with the enforced 0→3→4→5 reveal sequence
//! - [`hand`] - Hand evaluation into banded, totally ordered scores
//! - [`pot`] - Side-pot settlement from per-player contributions
//! - [`turn`] - Per-street betting-round state machine
//! - [`rules`] - Action validation against stack and betting state
//! - [`player`] - Seat state: balance, bets, flags, hole cards
//! - [`game`] - Hand orchestration from deal to settlement
//! - [`logger`] - JSONL hand-history records
//! - [`errors`] - Domain error types
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_hand, HandCategory};
//!
//! // Score a 7-card hand (two hole cards plus the board)
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let result = evaluate_hand(&cards).expect("7 cards is well-formed input");
//! assert_eq!(result.category, HandCategory::RoyalFlush);
//! assert!(result.score >= 900.0);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! // Same seed produces the same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will deal identical card sequences
//! ```
//!
//! ## Side Pots
//!
//! Unequal all-in amounts settle into layered pots; folded chips stay in
//! the pot but folded seats can never win one:
//!
//! ```rust
//! use holdem_engine::pot::{compute_pots, PlayerContribution};
//!
//! let pots = compute_pots(&[
//!     PlayerContribution { player_id: 0, total_contributed: 100, folded: false },
//!     PlayerContribution { player_id: 1, total_contributed: 200, folded: false },
//! ]);
//! assert_eq!(pots[0].amount, 200); // main pot, both eligible
//! assert_eq!(pots[1].amount, 100); // side layer, only player 1
//! assert_eq!(pots[1].eligible, vec![1]);
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod turn;
