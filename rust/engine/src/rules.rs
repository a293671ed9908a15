use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// An action after validation. The carried amount is always the number of
/// chips the seat moves into its street bet for this action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

/// Validates a requested action against the seat's balance and the table's
/// betting state, converting it into the chips actually moved.
///
/// Short calls, bets, and raises are downgraded to [`ValidatedAction::AllIn`]
/// rather than rejected; checking while facing a bet and betting or raising
/// below the minimum increment are domain errors the host can re-prompt on.
///
/// # Arguments
///
/// * `balance` - chips the seat still holds
/// * `street_bet` - chips the seat already committed this street
/// * `current_bet` - the street's bet to match
/// * `min_raise` - minimum raise increment (the big blind, or the last full raise)
/// * `action` - the action the player wishes to perform
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// // Calling a 50 bet with chips to spare
/// let v = validate_action(1000, 0, 50, 100, PlayerAction::Call);
/// assert!(matches!(v, Ok(ValidatedAction::Call(50))));
///
/// // A raise the stack cannot cover becomes an all-in
/// let v = validate_action(80, 0, 50, 100, PlayerAction::Raise(100));
/// assert!(matches!(v, Ok(ValidatedAction::AllIn(80))));
/// ```
///
/// ```
/// use holdem_engine::rules::validate_action;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::errors::GameError;
///
/// // Checking while facing a bet is rejected
/// let v = validate_action(1000, 0, 50, 100, PlayerAction::Check);
/// assert!(matches!(v, Err(GameError::CannotCheck { to_call: 50 })));
///
/// // Raising below the minimum increment is rejected
/// let v = validate_action(1000, 0, 50, 100, PlayerAction::Raise(50));
/// assert!(matches!(v, Err(GameError::InvalidBetAmount { .. })));
/// ```
pub fn validate_action(
    balance: u32,
    street_bet: u32,
    current_bet: u32,
    min_raise: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = current_bet.saturating_sub(street_bet);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CannotCheck { to_call })
            }
        }
        A::Call => {
            if balance <= to_call {
                Ok(ValidatedAction::AllIn(balance))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        // An opening bet while a bet already stands is a raise of the same size.
        A::Bet(amount) if current_bet > 0 => validate_raise(balance, to_call, min_raise, amount),
        A::Bet(amount) => {
            // a whole-stack open below the minimum is a legal short shove,
            // same as the raise path
            if amount >= balance {
                return Ok(ValidatedAction::AllIn(balance));
            }
            if amount < min_raise {
                return Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: min_raise,
                });
            }
            Ok(ValidatedAction::Bet(amount))
        }
        A::Raise(amount) => validate_raise(balance, to_call, min_raise, amount),
        A::AllIn => Ok(ValidatedAction::AllIn(balance)),
    }
}

fn validate_raise(
    balance: u32,
    to_call: u32,
    min_raise: u32,
    amount: u32,
) -> Result<ValidatedAction, GameError> {
    let add = to_call.saturating_add(amount);
    if add >= balance {
        return Ok(ValidatedAction::AllIn(balance));
    }
    if amount < min_raise {
        return Err(GameError::InvalidBetAmount {
            amount,
            minimum: min_raise,
        });
    }
    Ok(ValidatedAction::Raise(add))
}
