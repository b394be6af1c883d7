//! Display-order helpers for ordered child rows (department programs and
//! statistics).

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Position given to the first child in a reordering.
pub const FIRST_POSITION: i32 = 1;

/// Turn a requested id order into `(id, display_order)` pairs.
///
/// `requested` must be a permutation of `existing`: every child exactly once
/// and nothing from another parent.
pub fn plan_reorder(existing: &[DbId], requested: &[DbId]) -> Result<Vec<(DbId, i32)>, CoreError> {
    let mut seen = HashSet::with_capacity(requested.len());
    for id in requested {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "ids contains {id} more than once"
            )));
        }
    }

    let existing_set: HashSet<DbId> = existing.iter().copied().collect();
    if let Some(stranger) = requested.iter().find(|id| !existing_set.contains(id)) {
        return Err(CoreError::Validation(format!(
            "id {stranger} does not belong to this department"
        )));
    }
    if requested.len() != existing_set.len() {
        return Err(CoreError::Validation(format!(
            "ids must list all {} items",
            existing_set.len()
        )));
    }

    Ok(requested
        .iter()
        .zip(FIRST_POSITION..)
        .map(|(id, pos)| (*id, pos))
        .collect())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn reorder_assigns_sequential_positions() {
        let plan = plan_reorder(&[10, 11, 12], &[12, 10, 11]).unwrap();
        assert_eq!(plan, vec![(12, 1), (10, 2), (11, 3)]);
    }

    #[test]
    fn reorder_rejects_duplicates() {
        assert_matches!(plan_reorder(&[1, 2], &[1, 1]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn reorder_rejects_foreign_ids() {
        assert_matches!(plan_reorder(&[1, 2], &[1, 3]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn reorder_requires_every_child() {
        assert_matches!(plan_reorder(&[1, 2, 3], &[2, 1]), Err(CoreError::Validation(_)));
    }
}
