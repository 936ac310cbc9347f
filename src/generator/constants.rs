// Default limits for the generator
pub const MAX_TERMS: usize = 4;
pub const MAX_ATTEMPTS: usize = 50;
pub const PERMISSIVE_THRESHOLD: i64 = 100;
pub const MAX_RANGE_LEN: u64 = 100_000;
