use ethnum::U256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullMathError {
    DivisionByZero,
    Overflow,
}

/// Returns `round(a * b / denominator)` with ties rounded up.
///
/// The quotient is exact: the remainder decides the rounding, no floating point
/// is involved. For non-negative operands this is round-half-away-from-zero.
pub fn mul_div_round_half_up(a: U256, b: U256, denominator: U256) -> Result<U256, FullMathError> {
    if denominator == U256::ZERO {
        return Err(FullMathError::DivisionByZero);
    }

    let product = a.checked_mul(b).ok_or(FullMathError::Overflow)?;

    let quotient = product / denominator;
    let remainder = product % denominator;

    // remainder * 2 >= denominator, written so it cannot overflow
    if remainder >= denominator - remainder {
        quotient.checked_add(U256::ONE).ok_or(FullMathError::Overflow)
    } else {
        Ok(quotient)
    }
}
