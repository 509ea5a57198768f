//! State machine trait for status enums.
//!
//! Booking and payment statuses share this interface so that every status
//! change goes through the same validation.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// let paid = booking.payment_status.transition_to(PaymentStatus::Paid)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Signal {
        Red,
        Green,
    }

    impl StateMachine for Signal {
        fn can_transition_to(&self, target: &Self) -> bool {
            matches!((self, target), (Signal::Red, Signal::Green))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Signal::Red => vec![Signal::Green],
                Signal::Green => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Signal::Red.transition_to(Signal::Green), Ok(Signal::Green));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let err = Signal::Green.transition_to(Signal::Red).unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_format(
                "state_transition",
                "Cannot transition from Green to Red"
            )
        );
    }
}
