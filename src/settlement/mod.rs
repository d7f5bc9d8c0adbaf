//! Fee settlement for paid tickets.
//!
//! Turns a ticket price, a discount and two fee schedules (platform and payment processor)
//! into what the buyer is charged and how that charge splits between the platform, the
//! processor and the organizer. Inputs flow through four steps:
//!
//! 1. [`normalize`] clamps the amount and discount into a non-negative subtotal.
//! 2. [`mode`] maps the requested mode, including the legacy `ON_TOP`, onto INCLUDED or ADDED.
//! 3. [`solver`] computes the fees and the total.
//! 4. [`compose`] builds the [`FeeBreakdown`] and enforces its invariants.
//!
//! The computation is pure and allocation free on the happy path, so it can be called on
//! every keystroke of a price field.

pub mod compose;
pub mod mode;
pub mod normalize;
pub mod solver;
pub mod types;

pub use mode::{resolve_fee_mode, FeeMode, FeeModeToken, UnknownFeeModeToken};
pub use types::{FeeBreakdown, FeeSchedule, FeeSettlementInput, MinorUnits};

/// Computes the fee breakdown for a ticket charge.
///
/// Never fails: malformed amounts are clamped and a processor rate of 100% or more falls
/// back to an additive total. See the module docs for the steps involved.
pub fn compute_fee_settlement(input: &FeeSettlementInput) -> FeeBreakdown {
    let subtotal =
        normalize::subtotal_minor_units(input.amount_minor_units, input.discount_minor_units);
    let mode = FeeMode::from(input.fee_mode);

    let solved = solver::solve(subtotal, mode, &input.platform_fee, &input.processor_fee);

    compose::compose(subtotal, mode, solved)
}
