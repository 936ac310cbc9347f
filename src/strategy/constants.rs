// Tuning constants for the decomposition strategies
pub const GREEDY_BRANCHING: usize = 3;
pub const MIXED_MIN_SEED: i64 = 16;
pub const PERMISSIVE_FACTOR: i64 = 2;
pub const AGGRESSIVE_FACTORS: &[i64] = &[3, 2];
