//! Field validators for create DTOs.
//!
//! Each function has the signature expected by `#[validate(custom(...))]`
//! so the DTOs in `sitebook-db` can reference them directly.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

/// Lower bound for progress and work-progress percentages.
pub const PERCENTAGE_MIN: Decimal = Decimal::ZERO;

/// Upper bound for progress and work-progress percentages.
pub const PERCENTAGE_MAX: Decimal = Decimal::ONE_HUNDRED;

/// Fractional digits stored for percentages (`NUMERIC(5,2)`).
pub const PERCENTAGE_SCALE: u32 = 2;

/// Fractional digits stored for money (`NUMERIC(15,2)`).
pub const MONEY_SCALE: u32 = 2;

/// Largest amount representable in `NUMERIC(15,2)`.
pub const MONEY_MAX: Decimal = Decimal::from_parts(2_764_472_319, 232_830, 0, false, MONEY_SCALE);

fn error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

/// Reject percentages outside `[0, 100]` or with more than two decimals.
pub fn validate_percentage(value: &Decimal) -> Result<(), ValidationError> {
    if *value < PERCENTAGE_MIN || *value > PERCENTAGE_MAX {
        return Err(error(
            "percentage_range",
            format!("Percentage {value} must be between {PERCENTAGE_MIN} and {PERCENTAGE_MAX}"),
        ));
    }
    if value.normalize().scale() > PERCENTAGE_SCALE {
        return Err(error(
            "percentage_scale",
            format!("Percentage {value} has more than {PERCENTAGE_SCALE} decimal places"),
        ));
    }
    Ok(())
}

/// Reject negative amounts, amounts beyond `NUMERIC(15,2)`, and sub-cent values.
pub fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(error(
            "money_negative",
            format!("Amount {value} must not be negative"),
        ));
    }
    if *value > MONEY_MAX {
        return Err(error(
            "money_range",
            format!("Amount {value} exceeds the maximum of {MONEY_MAX}"),
        ));
    }
    if value.normalize().scale() > MONEY_SCALE {
        return Err(error(
            "money_scale",
            format!("Amount {value} has more than {MONEY_SCALE} decimal places"),
        ));
    }
    Ok(())
}
