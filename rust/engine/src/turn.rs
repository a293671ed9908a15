use crate::errors::GameError;
use crate::player::Player;
use crate::rules::ValidatedAction;

/// Drives one street of betting over a seat slice: whose turn it is, the
/// bet to match, the minimum raise increment, and round completion. Built
/// fresh for every street; the game manager owns the players.
#[derive(Debug, Default)]
pub struct TurnManager {
    current: usize,
    current_bet: u32,
    min_raise: u32,
    last_raiser: Option<usize>,
    active: bool,
}

impl TurnManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seat whose turn it is, while the round is active.
    pub fn current_player(&self) -> Option<usize> {
        self.active.then_some(self.current)
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }

    pub fn last_raiser(&self) -> Option<usize> {
        self.last_raiser
    }

    /// Closes the round; further actions are rejected until the next street
    /// starts. The game manager calls this when a hand settles while seats
    /// could still act (everyone else folded).
    pub fn end_round(&mut self) {
        self.active = false;
    }

    /// Posts the blinds (a short stack posts all-in), sets the bet to match
    /// to the big blind, and opens the action on the seat after the big
    /// blind. Heads-up, the dealer posts the small blind and acts first.
    pub fn start_preflop(
        &mut self,
        players: &mut [Player],
        dealer: usize,
        small_blind: u32,
        big_blind: u32,
    ) {
        let (sb_seat, bb_seat) = if live_count(players) == 2 {
            let dealer_live = if players[dealer].is_folded() {
                next_live_seat(players, dealer).expect("two live seats")
            } else {
                dealer
            };
            let other = next_live_seat(players, dealer_live).expect("two live seats");
            (dealer_live, other)
        } else {
            let sb = next_live_seat(players, dealer).expect("live seat after dealer");
            let bb = next_live_seat(players, sb).expect("live seat after small blind");
            (sb, bb)
        };
        players[sb_seat].commit(small_blind);
        players[bb_seat].commit(big_blind);

        self.current_bet = big_blind;
        self.min_raise = big_blind;
        self.last_raiser = None;
        self.active = true;
        self.current = bb_seat;
        self.advance(players);
    }

    /// Clears street bets and acted flags, zeroes the bet to match, and
    /// opens the action on the first seat after the dealer that can act.
    pub fn start_postflop(&mut self, players: &mut [Player], dealer: usize, big_blind: u32) {
        for p in players.iter_mut() {
            p.reset_for_street();
        }
        self.current_bet = 0;
        self.min_raise = big_blind;
        self.last_raiser = None;
        self.active = true;
        self.current = dealer;
        self.advance(players);
    }

    /// Applies a validated action for the given seat. Wrong seat or an
    /// inactive round is a rejection with no state change.
    pub fn apply_action(
        &mut self,
        players: &mut [Player],
        seat: usize,
        action: ValidatedAction,
    ) -> Result<(), GameError> {
        if !self.active {
            return Err(GameError::NoBettingRound);
        }
        if seat != self.current {
            return Err(GameError::NotPlayersTurn {
                expected: self.current,
                actual: seat,
            });
        }

        match action {
            ValidatedAction::Fold => players[seat].fold(),
            ValidatedAction::Check => players[seat].set_acted(true),
            ValidatedAction::Call(add)
            | ValidatedAction::Bet(add)
            | ValidatedAction::Raise(add)
            | ValidatedAction::AllIn(add) => {
                players[seat].commit(add);
                players[seat].set_acted(true);
                let new_bet = players[seat].street_bet();
                if new_bet > self.current_bet {
                    self.reopen_action(players, seat, new_bet);
                }
            }
        }
        self.advance(players);
        Ok(())
    }

    /// A bet above the current one reopens the street: every other seat
    /// that can still act must decide again, even if it already called.
    fn reopen_action(&mut self, players: &mut [Player], raiser: usize, new_bet: u32) {
        let increment = new_bet - self.current_bet;
        // a short all-in does not grow the minimum increment
        if increment >= self.min_raise {
            self.min_raise = increment;
        }
        self.current_bet = new_bet;
        self.last_raiser = Some(raiser);
        for (i, p) in players.iter_mut().enumerate() {
            if i != raiser && p.can_act() {
                p.set_acted(false);
            }
        }
    }

    /// The round is complete when at most one seat is still in the hand, or
    /// every non-folded seat is all-in or has acted and matched the bet.
    pub fn is_round_complete(&self, players: &[Player]) -> bool {
        let live: Vec<&Player> = players.iter().filter(|p| !p.is_folded()).collect();
        if live.len() <= 1 {
            return true;
        }
        live.iter().all(|p| {
            p.is_all_in() || (p.has_acted() && p.street_bet() == self.current_bet)
        })
    }

    fn advance(&mut self, players: &[Player]) {
        let n = players.len();
        for offset in 1..=n {
            let seat = (self.current + offset) % n;
            if self.needs_action(&players[seat]) {
                self.current = seat;
                return;
            }
        }
        self.active = false;
    }

    fn needs_action(&self, p: &Player) -> bool {
        p.can_act() && (!p.has_acted() || p.street_bet() < self.current_bet)
    }
}

fn live_count(players: &[Player]) -> usize {
    players.iter().filter(|p| !p.is_folded()).count()
}

fn next_live_seat(players: &[Player], from: usize) -> Option<usize> {
    let n = players.len();
    (1..=n)
        .map(|offset| (from + offset) % n)
        .find(|&seat| !players[seat].is_folded())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize, balance: u32) -> Vec<Player> {
        (0..n).map(|i| Player::new(i, format!("p{i}"), balance)).collect()
    }

    #[test]
    fn preflop_blinds_and_first_to_act() {
        let mut players = table(3, 1000);
        let mut tm = TurnManager::new();
        tm.start_preflop(&mut players, 0, 10, 20);
        assert_eq!(players[1].street_bet(), 10);
        assert_eq!(players[2].street_bet(), 20);
        assert_eq!(tm.current_bet(), 20);
        // under the gun is the seat after the big blind
        assert_eq!(tm.current_player(), Some(0));
    }

    #[test]
    fn heads_up_dealer_posts_small_and_acts_first() {
        let mut players = table(2, 1000);
        let mut tm = TurnManager::new();
        tm.start_preflop(&mut players, 1, 10, 20);
        assert_eq!(players[1].street_bet(), 10);
        assert_eq!(players[0].street_bet(), 20);
        assert_eq!(tm.current_player(), Some(1));
    }

    #[test]
    fn short_big_blind_goes_all_in_but_bet_stands() {
        let mut players = table(3, 1000);
        players[2] = Player::new(2, "p2", 15);
        let mut tm = TurnManager::new();
        tm.start_preflop(&mut players, 0, 10, 20);
        assert!(players[2].is_all_in());
        assert_eq!(players[2].street_bet(), 15);
        assert_eq!(tm.current_bet(), 20);
    }

    #[test]
    fn wrong_seat_is_rejected_without_state_change() {
        let mut players = table(3, 1000);
        let mut tm = TurnManager::new();
        tm.start_preflop(&mut players, 0, 10, 20);
        let err = tm.apply_action(&mut players, 2, ValidatedAction::Check);
        assert_eq!(
            err,
            Err(GameError::NotPlayersTurn {
                expected: 0,
                actual: 2
            })
        );
        assert_eq!(tm.current_player(), Some(0));
    }
}
