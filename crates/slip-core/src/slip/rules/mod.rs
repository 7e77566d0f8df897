//! Rule-based field extractors for Thai transfer slips.

pub mod accounts;
pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod reference;
pub mod transfer;

pub use accounts::{extract_accounts, AccountPair};
pub use amounts::{AmountExtractor, FeeExtractor};
pub use dates::{DateExtractor, TimeExtractor};
pub use reference::ReferenceExtractor;
pub use transfer::{detect_transfer_type, TransferType};

use regex::Regex;
use tracing::trace;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Outcome of running a single matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<T> {
    /// The pattern did not match, or its capture was rejected.
    NoMatch,
    /// The pattern matched and the capture was accepted.
    Matched(T),
}

impl<T> MatchOutcome<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Matched(value) => Some(value),
            Self::NoMatch => None,
        }
    }
}

/// An accepted match and the candidate that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Index of the candidate pattern that produced it (0 = most trusted).
    pub rank: usize,
}

/// A named candidate pattern whose first capture group is the value.
#[derive(Clone, Copy)]
pub struct Candidate {
    pub name: &'static str,
    pub pattern: &'static Regex,
}

impl Candidate {
    pub fn new(name: &'static str, pattern: &'static Regex) -> Self {
        Self { name, pattern }
    }

    /// Run this candidate once: first regex match only, then `accept`.
    pub fn try_match<T>(
        &self,
        rank: usize,
        text: &str,
        accept: impl Fn(&str) -> Option<T>,
    ) -> MatchOutcome<ExtractionMatch<T>> {
        let Some(caps) = self.pattern.captures(text) else {
            return MatchOutcome::NoMatch;
        };
        let Some(group) = caps.get(1) else {
            return MatchOutcome::NoMatch;
        };

        match accept(group.as_str()) {
            Some(value) => MatchOutcome::Matched(ExtractionMatch { value, rank }),
            None => {
                trace!("{} matched {:?} but the value was rejected", self.name, group.as_str());
                MatchOutcome::NoMatch
            }
        }
    }
}

/// Try `candidates` in order; the first accepted match wins.
pub fn first_match<T>(
    candidates: &[Candidate],
    text: &str,
    accept: impl Fn(&str) -> Option<T>,
) -> Option<ExtractionMatch<T>> {
    candidates
        .iter()
        .enumerate()
        .find_map(|(rank, candidate)| candidate.try_match(rank, text, &accept).into_option())
}
