//! Bank account number extraction.
//!
//! Slips print account numbers as `DDD-D-DDDDD-D` (hyphens optional). The
//! first occurrence is taken as the sender and the second as the receiver.
//! That ordering is a layout heuristic, not something the text proves.

use super::patterns::ACCOUNT_NUMBER;

/// Sender and receiver accounts in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPair {
    pub from_account: Option<String>,
    pub to_account: Option<String>,
}

/// Assign the first two account numbers to sender and receiver.
///
/// Matches beyond the second are discarded.
pub fn extract_accounts(text: &str) -> AccountPair {
    let mut accounts = ACCOUNT_NUMBER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    AccountPair {
        from_account: accounts.next(),
        to_account: accounts.next(),
    }
}
