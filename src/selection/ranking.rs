use std::cmp::Ordering;

use crate::record::PraiseRecord;

/// Bounded leaderboard view over a record snapshot.
///
/// Sorted by thank count descending; equal counts break by ascending id.
/// The tie-break is part of the contract here, not an accident of whatever
/// order the store returned.
pub fn top_k(mut records: Vec<PraiseRecord>, k: usize) -> Vec<PraiseRecord> {
    records.sort_by(|a, b| {
        // Descending count
        let count_cmp = b.thank_count.cmp(&a.thank_count);
        if count_cmp != Ordering::Equal {
            count_cmp
        } else {
            // Ascending ID
            a.id.cmp(&b.id)
        }
    });

    debug_assert!(records.windows(2).all(|w| {
        let a = &w[0];
        let b = &w[1];
        a.thank_count > b.thank_count || (a.thank_count == b.thank_count && a.id <= b.id)
    }));

    records.truncate(k);
    records
}
