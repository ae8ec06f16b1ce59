//! Selector code generation.
//!
//! Every user-facing row (cash-flow entries, products, accounts) carries a
//! short code users type back in commands, distinct from the internal
//! primary key. Codes are 2 random bytes rendered as 4 uppercase hex
//! characters. There is no uniqueness check or retry-on-collision; at this
//! scale the collision odds are an accepted risk.

use rand::Rng;

/// Length in characters of every generated selector code.
pub const SELECTOR_LEN: usize = 4;

/// Generates a fresh selector code, e.g. `"3FA9"`.
#[must_use]
pub fn generate() -> String {
    let bytes: [u8; 2] = rand::rng().random();
    format!("{:02X}{:02X}", bytes[0], bytes[1])
}
