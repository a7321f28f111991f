//! Repetition-policy selection over a frequency table
//!
//! Least and most repeating only consider characters seen more than once,
//! so they never overlap with the non-repeating pick.

use crate::core::model::{FrequencyTable, RepetitionPolicy};

/// Pick the first character matching `policy`, in first-seen order
pub fn select(table: &FrequencyTable, policy: RepetitionPolicy) -> Option<u8> {
    match policy {
        RepetitionPolicy::NonRepeating => first_with_count(table, 1),
        RepetitionPolicy::LeastRepeating => repeated_counts(table)
            .min()
            .and_then(|min| first_with_count(table, min)),
        RepetitionPolicy::MostRepeating => repeated_counts(table)
            .max()
            .and_then(|max| first_with_count(table, max)),
    }
}

fn repeated_counts(table: &FrequencyTable) -> impl Iterator<Item = usize> + '_ {
    table.iter().map(|(_, count)| count).filter(|&count| count != 1)
}

fn first_with_count(table: &FrequencyTable, wanted: usize) -> Option<u8> {
    table
        .iter()
        .find(|&(_, count)| count == wanted)
        .map(|(byte, _)| byte)
}
