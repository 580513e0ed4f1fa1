//! Currency formatting utilities for Bitcoin and satoshi values
//!
//! Output values are shown in both BTC and satoshi units for readability
//! and precision.

/// Satoshis per Bitcoin
const SATS_PER_BTC: u64 = 100_000_000;

/// Format a satoshi amount as dual BTC + sats display
///
/// Integer arithmetic keeps all eight decimal places exact, even for values
/// above what an f64 represents precisely.
///
/// # Examples
/// ```
/// use txp::utils::currency::format_sats_as_btc;
///
/// assert_eq!(
///     format_sats_as_btc(32454049),
///     "0.32454049 BTC (32454049 sats)"
/// );
/// assert_eq!(
///     format_sats_as_btc(5471),
///     "0.00005471 BTC (5471 sats)"
/// );
/// ```
pub fn format_sats_as_btc(sats: u64) -> String {
    format!(
        "{}.{:08} BTC ({} sats)",
        sats / SATS_PER_BTC,
        sats % SATS_PER_BTC,
        sats
    )
}
