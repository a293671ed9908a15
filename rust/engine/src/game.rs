use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, HandResult};
use crate::logger::{ActionRecord, HandRecord, Street};
use crate::player::{Player, PlayerAction};
use crate::pot::{compute_pots, Pot};
use crate::rules::validate_action;
use crate::turn::TurnManager;

/// Phase of the current hand. Strictly advances forward; `Finished` is the
/// only phase from which a new hand may start (besides `NotStarted`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Preflop,
    Flop,
    Turn,
    River,
    Finished,
}

/// Settlement of one pot at showdown: who tied for the best hand among the
/// eligible seats, and what each of them was paid.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotAward {
    pub pot_name: String,
    pub amount: u32,
    pub winners: Vec<usize>,
    pub payouts: Vec<(usize, u32)>,
}

/// Hand-level orchestrator: owns the deck, board, seats, and the per-street
/// turn manager, and drives Preflop→Flop→Turn→River→showdown. One instance
/// adjudicates one table; the host serializes access to it.
///
/// # Examples
///
/// ```
/// use holdem_engine::game::{GameManager, GamePhase};
/// use holdem_engine::player::{Player, PlayerAction};
///
/// let seats = vec![
///     Player::new(0, "alice", 1000),
///     Player::new(1, "bob", 1000),
/// ];
/// let mut game = GameManager::new(seats, 10, 20, Some(42));
/// game.start_new_hand().expect("two funded seats");
/// assert_eq!(game.phase(), GamePhase::Preflop);
///
/// // the dealer posts the small blind heads-up and acts first
/// assert_eq!(game.current_player(), Some(0));
/// game.submit_action(PlayerAction::Fold).expect("fold is always legal");
/// assert_eq!(game.phase(), GamePhase::Finished);
/// ```
#[derive(Debug)]
pub struct GameManager {
    players: Vec<Player>,
    deck: Deck,
    board: Board,
    turn: TurnManager,
    phase: GamePhase,
    dealer: usize,
    small_blind: u32,
    big_blind: u32,
    seed: Option<u64>,
    actions: Vec<ActionRecord>,
    pots: Vec<Pot>,
    awards: Vec<PotAward>,
}

impl GameManager {
    /// Builds a table. Panics on structural misuse: fewer than two seats,
    /// seat ids out of order, a zero small blind, or big blind < small blind.
    pub fn new(seats: Vec<Player>, small_blind: u32, big_blind: u32, seed: Option<u64>) -> Self {
        assert!(seats.len() >= 2, "a table needs at least two seats");
        assert!(
            seats.iter().enumerate().all(|(i, p)| p.id() == i),
            "seat ids must match table order"
        );
        assert!(small_blind > 0, "small blind must be positive");
        assert!(big_blind >= small_blind, "big blind must cover the small blind");
        let deck = match seed {
            Some(s) => Deck::new_with_seed(s),
            None => Deck::new(),
        };
        Self {
            players: seats,
            deck,
            board: Board::new(),
            turn: TurnManager::new(),
            phase: GamePhase::NotStarted,
            dealer: 0,
            small_blind,
            big_blind,
            seed,
            actions: Vec::new(),
            pots: Vec::new(),
            awards: Vec::new(),
        }
    }

    /// Resets every seat, shuffles, deals two hole cards to each funded
    /// seat, posts blinds, and opens the preflop round. Seats that busted
    /// sit the hand out. Fails when fewer than two seats can be dealt in.
    pub fn start_new_hand(&mut self) -> Result<(), GameError> {
        if matches!(
            self.phase,
            GamePhase::Preflop | GamePhase::Flop | GamePhase::Turn | GamePhase::River
        ) {
            return Err(GameError::HandInProgress);
        }
        if self.players.iter().filter(|p| p.balance() > 0).count() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        for p in &mut self.players {
            p.reset_for_hand();
            if p.balance() == 0 {
                p.fold();
            }
        }
        self.board.clear();
        self.deck.shuffle();
        self.actions.clear();
        self.pots.clear();
        self.awards.clear();

        let n = self.players.len();
        for _ in 0..2 {
            for offset in 1..=n {
                let seat = (self.dealer + offset) % n;
                if !self.players[seat].is_folded() {
                    let card = self.deck.deal_card().expect("fresh deck covers hole cards");
                    self.players[seat].give_card(card);
                }
            }
        }

        self.phase = GamePhase::Preflop;
        self.turn
            .start_preflop(&mut self.players, self.dealer, self.small_blind, self.big_blind);
        if self.round_over() {
            self.advance_phase();
        }
        Ok(())
    }

    /// Validates and applies one action for the current player. Domain
    /// rejections leave the hand untouched; on success the betting round
    /// and, when it completes, the phase both advance before returning.
    pub fn submit_action(&mut self, action: PlayerAction) -> Result<(), GameError> {
        let seat = self.turn.current_player().ok_or(match self.phase {
            GamePhase::NotStarted | GamePhase::Finished => GameError::NoHandInProgress,
            _ => GameError::NoBettingRound,
        })?;
        let p = &self.players[seat];
        let validated = validate_action(
            p.balance(),
            p.street_bet(),
            self.turn.current_bet(),
            self.turn.min_raise(),
            action.clone(),
        )?;
        self.turn.apply_action(&mut self.players, seat, validated)?;
        self.actions.push(ActionRecord {
            player_id: seat,
            street: self.street(),
            action,
        });
        if self.round_over() {
            self.advance_phase();
        }
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn current_player(&self) -> Option<usize> {
        self.turn.current_player()
    }
    pub fn current_bet(&self) -> u32 {
        self.turn.current_bet()
    }
    pub fn min_raise(&self) -> u32 {
        self.turn.min_raise()
    }
    pub fn board(&self) -> &[Card] {
        self.board.cards()
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    /// Chips wagered so far this hand, across all seats.
    pub fn total_pot(&self) -> u32 {
        self.players.iter().map(|p| p.total_contributed()).sum()
    }

    /// Pot breakdown; computed at settlement, empty before that.
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    /// Per-pot settlement results; empty until the hand finishes.
    pub fn awards(&self) -> &[PotAward] {
        &self.awards
    }

    /// Hand history record for the finished hand, under the given id.
    pub fn hand_record(&self, hand_id: String) -> Option<HandRecord> {
        if self.phase != GamePhase::Finished {
            return None;
        }
        Some(HandRecord {
            hand_id,
            seed: self.seed,
            actions: self.actions.clone(),
            board: self.board.cards().to_vec(),
            pots: self.pots.clone(),
            awards: self.awards.clone(),
            result: None,
            ts: None,
        })
    }

    fn street(&self) -> Street {
        match self.phase {
            GamePhase::Flop => Street::Flop,
            GamePhase::Turn => Street::Turn,
            GamePhase::River => Street::River,
            _ => Street::Preflop,
        }
    }

    fn round_over(&self) -> bool {
        !self.turn.is_active() || self.turn.is_round_complete(&self.players)
    }

    fn live_seats(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| !p.is_folded())
            .map(|p| p.id())
            .collect()
    }

    /// Advances streets until a round needs input or the hand settles.
    /// Before each advance: one live seat left, or every live seat all-in,
    /// short-circuits to settlement (running the board out first).
    fn advance_phase(&mut self) {
        loop {
            let live = self.live_seats();
            if live.len() <= 1 {
                self.settle();
                return;
            }
            if live.iter().all(|&s| self.players[s].is_all_in()) {
                self.run_out_board();
                self.settle();
                return;
            }
            match self.phase {
                GamePhase::Preflop => {
                    self.board.deal_flop(&mut self.deck);
                    self.phase = GamePhase::Flop;
                }
                GamePhase::Flop => {
                    self.board.deal_turn(&mut self.deck);
                    self.phase = GamePhase::Turn;
                }
                GamePhase::Turn => {
                    self.board.deal_river(&mut self.deck);
                    self.phase = GamePhase::River;
                }
                GamePhase::River => {
                    self.run_out_board();
                    self.settle();
                    return;
                }
                GamePhase::NotStarted | GamePhase::Finished => return,
            }
            self.turn
                .start_postflop(&mut self.players, self.dealer, self.big_blind);
            if !self.round_over() {
                return;
            }
        }
    }

    fn run_out_board(&mut self) {
        if self.board.is_empty() {
            self.board.deal_flop(&mut self.deck);
        }
        if self.board.len() == 3 {
            self.board.deal_turn(&mut self.deck);
        }
        if self.board.len() == 4 {
            self.board.deal_river(&mut self.deck);
        }
    }

    /// Computes the pot layers and pays them out. With one live seat the
    /// whole sum goes to it unevaluated; otherwise each pot goes to the
    /// eligible seats tied at the best 7-card score. Odd chips go one at a
    /// time to tied winners in seat order after the dealer.
    fn settle(&mut self) {
        self.phase = GamePhase::Finished;
        // folds can end a hand while the survivor still holds the turn
        self.turn.end_round();
        let contributions: Vec<_> = self.players.iter().map(|p| p.contribution()).collect();
        self.pots = compute_pots(&contributions);

        let live = self.live_seats();
        self.awards = if live.len() == 1 {
            let winner = live[0];
            self.pots
                .iter()
                .map(|pot| PotAward {
                    pot_name: pot.name.clone(),
                    amount: pot.amount,
                    winners: vec![winner],
                    payouts: vec![(winner, pot.amount)],
                })
                .collect()
        } else {
            let results = self.showdown_results(&live);
            self.pots
                .iter()
                .map(|pot| self.award_pot(pot, &results))
                .collect()
        };

        for award in &self.awards {
            for &(seat, amount) in &award.payouts {
                self.players[seat].add_chips(amount);
            }
        }
        self.dealer = (self.dealer + 1) % self.players.len();
    }

    fn showdown_results(&self, live: &[usize]) -> Vec<(usize, HandResult)> {
        live.iter()
            .map(|&seat| {
                let mut cards: Vec<Card> = self.board.cards().to_vec();
                cards.extend(self.players[seat].hole_cards().into_iter().flatten());
                let result =
                    evaluate_hand(&cards).expect("live seat holds two cards plus the board");
                (seat, result)
            })
            .collect()
    }

    fn award_pot(&self, pot: &Pot, results: &[(usize, HandResult)]) -> PotAward {
        // a layer no live seat reached is split among all live seats
        let contenders: Vec<usize> = if pot.eligible.is_empty() {
            results.iter().map(|&(seat, _)| seat).collect()
        } else {
            pot.eligible.clone()
        };
        let best = results
            .iter()
            .filter(|(seat, _)| contenders.contains(seat))
            .map(|(_, r)| r.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let mut winners: Vec<usize> = results
            .iter()
            .filter(|(seat, r)| contenders.contains(seat) && r.score == best)
            .map(|&(seat, _)| seat)
            .collect();
        let n = self.players.len();
        let first_after_dealer = (self.dealer + 1) % n;
        winners.sort_by_key(|&seat| (seat + n - first_after_dealer) % n);

        let share = pot.amount / winners.len() as u32;
        let remainder = pot.amount % winners.len() as u32;
        let payouts: Vec<(usize, u32)> = winners
            .iter()
            .enumerate()
            .map(|(i, &seat)| {
                let extra = u32::from((i as u32) < remainder);
                (seat, share + extra)
            })
            .collect();

        let mut named_winners = winners.clone();
        named_winners.sort_unstable();
        PotAward {
            pot_name: pot.name.clone(),
            amount: pot.amount,
            winners: named_winners,
            payouts,
        }
    }
}
