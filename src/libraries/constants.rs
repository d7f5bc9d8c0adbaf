/// Denominator for fee rates expressed in basis points (100% = 10,000).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Platform fee used when the live fee schedule is unavailable: 8% + 0.30.
pub const DEFAULT_PLATFORM_FEE_BPS: u32 = 800;
pub const DEFAULT_PLATFORM_FEE_FIXED: u64 = 30;

/// Processor fee used when the live fee schedule is unavailable: 1.4% + 0.25.
pub const DEFAULT_PROCESSOR_FEE_BPS: u32 = 140;
pub const DEFAULT_PROCESSOR_FEE_FIXED: u64 = 25;
