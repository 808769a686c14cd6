/// Order value of a candidate that must run as early as possible
pub const HIGHEST_PRECEDENCE: i32 = i32::MIN;
/// Order value of a candidate that must run as late as possible
pub const LOWEST_PRECEDENCE: i32 = i32::MAX;
/// Order value used when a candidate declares none (or cannot be resolved)
pub const DEFAULT_ORDER: i32 = 0;

/// Default tracing filter for the command line binary
pub const DEFAULT_LOG_FILTER: &str = "activation_order=info";
