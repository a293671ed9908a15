use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// The ten hand categories, weakest first. Each occupies a disjoint score
/// band of width 100 (HighCard 0..100, OnePair 100..200, ... RoyalFlush 900..1000),
/// so ordering by score alone matches standard poker ranking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    fn band(self) -> f64 {
        (self as u8 as f64) * 100.0
    }
}

/// Best five-card hand found in the input, with a totally ordered score.
#[derive(Debug, Clone, PartialEq)]
pub struct HandResult {
    pub category: HandCategory,
    pub score: f64,
    /// The five cards that produced the score, rank-descending.
    pub cards: Vec<Card>,
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.score.total_cmp(&b.score)
}

/// Scores the best 5-card hand from 5 to 7 cards (hole cards plus board).
/// Every 5-card subset is scored and the maximum kept; fails only when
/// fewer than 5 cards are supplied.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandResult, GameError> {
    if cards.len() < 5 {
        return Err(GameError::TooFewCards(cards.len()));
    }
    let mut best: Option<HandResult> = None;
    for five in five_card_subsets(cards) {
        let result = score_five(five);
        if best
            .as_ref()
            .map_or(true, |b| result.score > b.score)
        {
            best = Some(result);
        }
    }
    Ok(best.expect("at least one 5-card subset"))
}

fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::with_capacity(21);
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
    out
}

fn score_five(mut five: [Card; 5]) -> HandResult {
    five.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));

    let mut counts = [0u8; 15];
    for c in &five {
        counts[c.rank.value() as usize] += 1;
    }
    let is_flush = five.iter().all(|c| c.suit == five[0].suit);
    let straight_high = detect_straight_high(&counts);

    let quad = rank_with_count(&counts, 4);
    let trips = rank_with_count(&counts, 3);
    let pairs = ranks_with_count(&counts, 2);
    let singles = ranks_with_count(&counts, 1);

    let (category, vals): (HandCategory, Vec<u8>) = if is_flush && straight_high == Some(14) {
        (HandCategory::RoyalFlush, vec![])
    } else if let (true, Some(high)) = (is_flush, straight_high) {
        (HandCategory::StraightFlush, vec![high])
    } else if let Some(q) = quad {
        let kicker = singles.first().copied().unwrap_or(2);
        (HandCategory::FourOfAKind, vec![q, kicker])
    } else if let (Some(t), Some(&p)) = (trips, pairs.first()) {
        (HandCategory::FullHouse, vec![t, p])
    } else if is_flush {
        (HandCategory::Flush, rank_values(&five))
    } else if let Some(high) = straight_high {
        (HandCategory::Straight, vec![high])
    } else if let Some(t) = trips {
        let mut vals = vec![t];
        vals.extend(singles.iter().take(2));
        (HandCategory::ThreeOfAKind, vals)
    } else if pairs.len() >= 2 {
        let mut vals = vec![pairs[0], pairs[1]];
        vals.extend(singles.first());
        (HandCategory::TwoPair, vals)
    } else if let Some(&p) = pairs.first() {
        let mut vals = vec![p];
        vals.extend(singles.iter().take(3));
        (HandCategory::OnePair, vals)
    } else {
        (HandCategory::HighCard, rank_values(&five))
    };

    HandResult {
        score: banded_score(category, &vals),
        category,
        cards: five.to_vec(),
    }
}

/// Tie-break values (ranks normalized to 0..=12) combined as a base-13
/// positional number and scaled into the category's band. Within a category
/// the value list has a fixed length, so strictly higher kickers always map
/// to a strictly higher score without crossing into the next band.
fn banded_score(category: HandCategory, vals: &[u8]) -> f64 {
    if vals.is_empty() {
        return category.band();
    }
    let mut raw = 0u64;
    for &v in vals {
        raw = raw * 13 + u64::from(v - 2);
    }
    let max = 13u64.pow(vals.len() as u32) - 1;
    category.band() + 99.0 * (raw as f64) / (max as f64)
}

/// Highest straight among the distinct ranks; the wheel (A-2-3-4-5)
/// counts as a 5-high straight.
fn detect_straight_high(counts: &[u8; 15]) -> Option<u8> {
    for high in (6..=14u8).rev() {
        if (high - 4..=high).all(|r| counts[r as usize] > 0) {
            return Some(high);
        }
    }
    if counts[14] > 0 && (2..=5).all(|r| counts[r] > 0) {
        return Some(5);
    }
    None
}

fn rank_with_count(counts: &[u8; 15], want: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&r| counts[r as usize] == want)
}

fn ranks_with_count(counts: &[u8; 15], want: u8) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] == want)
        .collect()
}

fn rank_values(five: &[Card; 5]) -> Vec<u8> {
    five.iter().map(|c| c.rank.value()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank as R, Suit as S};

    fn c(s: S, r: R) -> Card {
        Card { suit: s, rank: r }
    }

    #[test]
    fn rejects_short_input() {
        let cards = [
            c(S::Hearts, R::Two),
            c(S::Hearts, R::Three),
            c(S::Hearts, R::Four),
            c(S::Hearts, R::Five),
        ];
        assert_eq!(evaluate_hand(&cards), Err(GameError::TooFewCards(4)));
    }

    #[test]
    fn seven_cards_enumerate_21_subsets() {
        let cards: Vec<Card> = crate::cards::full_deck().into_iter().take(7).collect();
        assert_eq!(five_card_subsets(&cards).len(), 21);
    }

    #[test]
    fn band_boundaries_hold() {
        // a max-kicker high card stays below the weakest pair
        let high = banded_score(HandCategory::HighCard, &[14, 13, 12, 11, 9]);
        let pair = banded_score(HandCategory::OnePair, &[2, 5, 4, 3]);
        assert!(high < 100.0);
        assert!(pair >= 100.0);
        assert!(high < pair);
    }
}
