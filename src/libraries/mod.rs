pub mod constants;
pub mod fee_math;
pub mod full_math;
pub mod safe_cast;
