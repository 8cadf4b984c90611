use rust_decimal::Decimal;

/// Smallest units per whole AGT.
pub const ONE_AGT: u64 = 100_000_000;

/// Paid to the author of block #0.
pub const GENESIS_REWARD: u64 = 5_000_000 * ONE_AGT;

/// Paid to the author of every later block.
pub const BLOCK_REWARD: u64 = 40 * ONE_AGT;

/// Smallest units to AGT
pub fn smallest_to_agt(amount: u64) -> Decimal {
    Decimal::from(amount) / Decimal::from(ONE_AGT)
}

/// Human readable amount, e.g. `40 AGT` or `0.5 AGT`.
pub fn format_agt(amount: u64) -> String {
    format!("{} AGT", smallest_to_agt(amount).normalize())
}
