use crate::settlement::{normalize::subtotal_minor_units, MinorUnits};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketPriceError {
    BelowMinimum {
        minimum: MinorUnits,
        received: MinorUnits,
    },
}

/// Checks a paid ticket's price against the minimum the payment provider accepts.
///
/// The fee computation itself happily prices a one cent ticket; callers run this before
/// creating a charge. The discount is applied first, so a discount that pushes the price
/// under the minimum is rejected too.
/// # Arguments
/// * `amount_minor_units` - The ticket price as entered
/// * `discount_minor_units` - The discount applied to it
/// * `minimum` - The smallest subtotal that may be charged
/// # Returns
/// * `Result<MinorUnits, TicketPriceError>` - The normalized subtotal if it is chargeable
pub fn validate_paid_ticket_price(
    amount_minor_units: i64,
    discount_minor_units: i64,
    minimum: MinorUnits,
) -> Result<MinorUnits, TicketPriceError> {
    let subtotal = subtotal_minor_units(amount_minor_units, discount_minor_units);

    if subtotal < minimum {
        return Err(TicketPriceError::BelowMinimum {
            minimum,
            received: subtotal,
        });
    }

    Ok(subtotal)
}
