use std::collections::btree_map::Entry;

use tracing::warn;

use crate::core::models::{ResultSummary, SubmissionRecord};

/// Keeps the latest submission per problem short-code.
///
/// A stored record is replaced unless it is strictly newer than the incoming
/// one, so on equal timestamps the record seen last wins.
pub fn summarize<I>(records: I) -> ResultSummary
where
    I: IntoIterator<Item = SubmissionRecord>,
{
    let mut summary = ResultSummary::new();

    for record in records {
        let Some(code) = record.problem_code() else {
            warn!(detail = %record.detail, "Skipping submission without a problem title");
            continue;
        };

        match summary.entry(code) {
            Entry::Occupied(mut slot) => {
                if slot.get().time <= record.time {
                    slot.insert(record);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    summary
}
