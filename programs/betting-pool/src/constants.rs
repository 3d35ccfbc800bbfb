/// Maximum number of outcome labels a pool can carry; fixes the size of the
/// per-outcome stake table in the Pool record.
pub const MAX_OUTCOMES: usize = 8;

/// Version tag written into every Pool record. Bump on any layout change.
pub const POOL_VERSION: u8 = 1;
