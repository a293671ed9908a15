use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::pot::PlayerContribution;

/// A player action as requested by the host, before validation.
/// `Bet`/`Raise` carry the increment over the current bet; short amounts
/// are downgraded to all-in by [`crate::rules::validate_action`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when there is no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting for the given amount
    Bet(u32),
    /// Raise the current bet by the given amount
    Raise(u32),
    /// Commit the entire remaining balance
    AllIn,
}

/// One seat at the table: chip balance, per-street bet, total wagered this
/// hand, hole cards, and the flags the turn manager drives.
#[derive(Debug, Clone)]
pub struct Player {
    id: usize,
    name: String,
    balance: u32,
    street_bet: u32,
    total_contributed: u32,
    folded: bool,
    all_in: bool,
    acted: bool,
    hole: [Option<Card>; 2],
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, balance: u32) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            street_bet: 0,
            total_contributed: 0,
            folded: false,
            all_in: false,
            acted: false,
            hole: [None, None],
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn balance(&self) -> u32 {
        self.balance
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }
    pub fn total_contributed(&self) -> u32 {
        self.total_contributed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    /// A seat can act while it still holds chips and has not folded.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, card: Card) {
        if self.hole[0].is_none() {
            self.hole[0] = Some(card);
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(card);
        } else {
            panic!("player {} already holds two cards", self.id);
        }
    }

    /// Clears cards, bets, and flags for a fresh hand. Balance carries over.
    pub fn reset_for_hand(&mut self) {
        self.street_bet = 0;
        self.total_contributed = 0;
        self.folded = false;
        self.all_in = false;
        self.acted = false;
        self.hole = [None, None];
    }

    /// Clears the per-street bet and acted flag between streets.
    pub fn reset_for_street(&mut self) {
        self.street_bet = 0;
        self.acted = false;
    }

    pub fn set_acted(&mut self, acted: bool) {
        self.acted = acted;
    }

    pub fn fold(&mut self) {
        self.folded = true;
        self.acted = true;
    }

    /// Moves chips from the balance into the current street's bet, capped
    /// at the balance; committing everything marks the seat all-in.
    /// Returns the chips actually moved.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.balance);
        self.balance -= moved;
        self.street_bet += moved;
        self.total_contributed += moved;
        if self.balance == 0 {
            self.all_in = true;
        }
        moved
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub fn contribution(&self) -> PlayerContribution {
        PlayerContribution {
            player_id: self.id,
            total_contributed: self.total_contributed,
            folded: self.folded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_caps_at_balance_and_flags_all_in() {
        let mut p = Player::new(0, "p0", 100);
        assert_eq!(p.commit(60), 60);
        assert_eq!(p.balance(), 40);
        assert!(!p.is_all_in());
        assert_eq!(p.commit(60), 40);
        assert!(p.is_all_in());
        assert_eq!(p.total_contributed(), 100);
    }

    #[test]
    fn street_reset_keeps_hand_contribution() {
        let mut p = Player::new(1, "p1", 500);
        p.commit(200);
        p.reset_for_street();
        assert_eq!(p.street_bet(), 0);
        assert_eq!(p.total_contributed(), 200);
        assert!(!p.has_acted());
    }
}
