/// Base reporting currency; every balance is normalized into it before it
/// reaches the engine.
pub const BASE_CURRENCY: &str = "BRL";

/// Decimal precision for internal calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// IPS risk-profile value above which a client review is considered pending
pub const PENDING_REVIEW_RISK_THRESHOLD: &str = "4";
