//! Winner selection.
//!
//! Served results are ranked by served count (descending, stable). The
//! top entry wins only when its count differs from the runner-up's; a lone
//! representative always wins. Only the top two entries are compared.

use crate::models::ServedResult;

/// Sorts served results by served count, highest first. Equal counts keep
/// their incoming order.
pub fn rank(served: &mut [ServedResult]) {
    served.sort_by(|a, b| b.served.cmp(&a.served));
}

/// Selects the winner from a ranking produced by [`rank`].
///
/// Returns `None` when the ranking is empty or the top two counts tie.
pub fn select_winner(ranking: &[ServedResult]) -> Option<u32> {
    match ranking {
        [] => None,
        [only] => Some(only.id()),
        [first, second, ..] if first.served == second.served => None,
        [first, ..] => Some(first.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Representative;

    fn result(id: u32, served: usize) -> ServedResult {
        ServedResult {
            representative: Representative::new(id, id * 10),
            served,
        }
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let mut served = vec![result(1, 2), result(2, 5), result(3, 2), result(4, 7)];
        rank(&mut served);
        let ids: Vec<u32> = served.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_unique_leader_wins() {
        let ranking = vec![result(4, 7), result(2, 5)];
        assert_eq!(select_winner(&ranking), Some(4));
    }

    #[test]
    fn test_tie_for_first_has_no_winner() {
        let ranking = vec![result(1, 3), result(2, 3), result(3, 1)];
        assert_eq!(select_winner(&ranking), None);
    }

    #[test]
    fn test_all_zero_has_no_winner() {
        let ranking = vec![result(1, 0), result(2, 0)];
        assert_eq!(select_winner(&ranking), None);
    }

    #[test]
    fn test_single_representative_wins_with_zero() {
        assert_eq!(select_winner(&[result(9, 0)]), Some(9));
    }

    #[test]
    fn test_empty_ranking() {
        assert_eq!(select_winner(&[]), None);
    }
}
