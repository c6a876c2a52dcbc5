//! Status transition table
//!
//! Three states, two legal washer moves:
//!
//! | From | To | Role |
//! |------|----|------|
//! | (none) | washing | washer |
//! | washing | awaiting_payment | washer |
//! | awaiting_payment | washing | washer (re-wash) |
//! | awaiting_payment | finished | cashier, via payment only |
//!
//! Everything else is rejected without touching the record. A cashier
//! requesting a washer move fails exactly like an impossible move; there is
//! no separate authorization error at this level.

use shared::{CarStatus, Role};

use super::error::{RegistryError, RegistryResult};

/// Gate for car creation (the `(none) -> washing` row)
pub fn check_create(role: Role) -> RegistryResult<()> {
    if role != Role::Washer {
        return Err(RegistryError::InvalidTransition(format!(
            "only a washer can register a car, not a {}",
            role
        )));
    }
    Ok(())
}

/// Gate for a requested status move
///
/// `finished` is never a legal direct target: it is only reached through the
/// payment path, which carries its own checks.
pub fn check(current: CarStatus, target: CarStatus, role: Role) -> RegistryResult<()> {
    match (current, target, role) {
        (CarStatus::Washing, CarStatus::AwaitingPayment, Role::Washer) => Ok(()),
        (CarStatus::AwaitingPayment, CarStatus::Washing, Role::Washer) => Ok(()),
        (_, CarStatus::Finished, _) => Err(RegistryError::InvalidTransition(
            "finished is set by payment, not by a status update".to_string(),
        )),
        (from, to, role) => Err(RegistryError::InvalidTransition(format!(
            "cannot move a car from {} to {} as a {}",
            from, to, role
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn washer_moves_are_the_only_legal_ones() {
        assert!(check(CarStatus::Washing, CarStatus::AwaitingPayment, Role::Washer).is_ok());
        assert!(check(CarStatus::AwaitingPayment, CarStatus::Washing, Role::Washer).is_ok());
    }

    #[test]
    fn cashier_fails_identically_to_an_impossible_move() {
        let by_role = check(CarStatus::Washing, CarStatus::AwaitingPayment, Role::Cashier);
        let by_state = check(CarStatus::Finished, CarStatus::Washing, Role::Washer);
        assert!(matches!(by_role, Err(RegistryError::InvalidTransition(_))));
        assert!(matches!(by_state, Err(RegistryError::InvalidTransition(_))));
    }

    #[test]
    fn finished_is_never_a_direct_target() {
        for role in [Role::Washer, Role::Cashier] {
            for from in CarStatus::ALL {
                assert!(check(from, CarStatus::Finished, role).is_err());
            }
        }
    }

    #[test]
    fn finished_is_terminal() {
        for target in [CarStatus::Washing, CarStatus::AwaitingPayment] {
            assert!(check(CarStatus::Finished, target, Role::Washer).is_err());
        }
    }

    #[test]
    fn only_washers_create_cars() {
        assert!(check_create(Role::Washer).is_ok());
        assert!(check_create(Role::Cashier).is_err());
    }
}
