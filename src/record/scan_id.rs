//! Scan identifier generation.

use rand::Rng;

use crate::config::{SCAN_ID_ALPHABET, SCAN_ID_PREFIX, SCAN_ID_RANDOM_LEN};

/// Generates a short, human-presentable scan identifier such as `SCAN-K3Q9ZP1AB`.
///
/// Uniqueness is best-effort: 36^9 combinations keep collisions unlikely, but the
/// identifier only correlates a scan with its export and carries no security weight.
pub fn generate_scan_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SCAN_ID_RANDOM_LEN)
        .map(|_| SCAN_ID_ALPHABET[rng.random_range(0..SCAN_ID_ALPHABET.len())] as char)
        .collect();
    format!("{SCAN_ID_PREFIX}{suffix}")
}
