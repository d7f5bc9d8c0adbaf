pub mod candid_types;
pub mod libraries;
pub mod logs;
pub mod quote;
pub mod schedule;
pub mod settlement;
pub mod validation;

#[cfg(test)]
pub mod tests;
