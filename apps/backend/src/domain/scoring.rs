//! Table scoring: final scores in, ranks and point figures out.
//!
//! `score_table` is a pure function; persistence of its output is the
//! services layer's job. Re-submitting recomputes every derived field, so the
//! output is always a complete replacement set for the table.

use std::collections::HashSet;
use std::fmt;
use std::ops::Add;

use crate::domain::seating::{TableType, Wind};
use crate::errors::domain::{DomainError, ValidationKind};

/// Fixed sum of the four final scores at a table.
pub const TABLE_TOTAL_SCORE: i32 = 100_000;

/// Baseline subtracted before converting a final score to score points.
pub const SCORE_PT_BASELINE: i32 = 25_000;

/// Defensive upper bound on a single final score; not a game rule.
pub const MAX_FINAL_SCORE: i32 = 200_000;

/// A point figure with one decimal place, stored exactly as tenths.
///
/// Score points are multiples of 0.1 for any realistic mahjong score, and
/// integer tenths keep the per-table total-point sums exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Pt(i32);

impl Pt {
    pub const ZERO: Pt = Pt(0);

    pub fn from_tenths(tenths: i32) -> Self {
        Pt(tenths)
    }

    pub fn from_points(points: i32) -> Self {
        Pt(points * 10)
    }

    pub fn tenths(self) -> i32 {
        self.0
    }
}

impl Add for Pt {
    type Output = Pt;

    fn add(self, rhs: Pt) -> Pt {
        Pt(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Pt {
    fn sum<I: Iterator<Item = Pt>>(iter: I) -> Pt {
        iter.fold(Pt::ZERO, Add::add)
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{}", abs / 10, abs % 10)
    }
}

/// One submitted seat score, with the seat's fixed wind attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score_id: i64,
    pub wind: Wind,
    pub final_score: i32,
}

/// Derived result for one seat. `rank` is 1 (best) through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatScore {
    pub score_id: i64,
    pub final_score: i32,
    pub rank: u8,
    pub score_pt: Pt,
    pub rank_pt: i32,
    pub total_pt: Pt,
}

/// Score points for one seat: `(final_score - 25000) / 1000`, one decimal
/// place, half away from zero.
pub fn score_pt(final_score: i32) -> Pt {
    let diff = final_score - SCORE_PT_BASELINE;
    let tenths = if diff >= 0 {
        (diff + 50) / 100
    } else {
        (diff - 50) / 100
    };
    Pt::from_tenths(tenths)
}

/// Validate a table's four submitted scores and compute ranks and points.
///
/// Output is index-aligned with `entries`. Ranks are a permutation of 1..=4;
/// equal final scores are broken by wind, the seat closer to east taking the
/// better rank.
pub fn score_table(
    table_type: TableType,
    entries: &[ScoreEntry],
) -> Result<[SeatScore; 4], DomainError> {
    if entries.len() != 4 {
        return Err(DomainError::validation(
            ValidationKind::EntryCount,
            format!("Expected 4 score entries, got {}", entries.len()),
        ));
    }

    let distinct: HashSet<i64> = entries.iter().map(|e| e.score_id).collect();
    if distinct.len() != entries.len() {
        return Err(DomainError::validation(
            ValidationKind::DuplicateScoreId,
            "Score entries must reference 4 distinct seats",
        ));
    }

    for entry in entries {
        if !(0..=MAX_FINAL_SCORE).contains(&entry.final_score) {
            return Err(DomainError::validation(
                ValidationKind::ScoreOutOfRange,
                format!(
                    "Final score {} outside [0, {MAX_FINAL_SCORE}]",
                    entry.final_score
                ),
            ));
        }
    }

    let total: i64 = entries.iter().map(|e| i64::from(e.final_score)).sum();
    if total != i64::from(TABLE_TOTAL_SCORE) {
        return Err(DomainError::validation(
            ValidationKind::ScoreSum,
            format!("Final scores sum to {total}, expected {TABLE_TOTAL_SCORE}"),
        ));
    }

    // Sort seats best-first: descending score, ties to the wind closer to east.
    let mut order: [usize; 4] = [0, 1, 2, 3];
    order.sort_by(|&a, &b| {
        entries[b]
            .final_score
            .cmp(&entries[a].final_score)
            .then_with(|| entries[a].wind.priority().cmp(&entries[b].wind.priority()))
    });

    let mut rank_of = [0u8; 4];
    for (pos, &idx) in order.iter().enumerate() {
        rank_of[idx] = (pos + 1) as u8;
    }

    let rank_points = table_type.rank_points();
    Ok(core::array::from_fn(|i| {
        let entry = &entries[i];
        let rank = rank_of[i];
        let score_pt = score_pt(entry.final_score);
        let rank_pt = rank_points[usize::from(rank - 1)];
        SeatScore {
            score_id: entry.score_id,
            final_score: entry.final_score,
            rank,
            score_pt,
            rank_pt,
            total_pt: Pt::from_points(rank_pt) + score_pt,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::ValidationKind;

    fn entry(score_id: i64, wind: Wind, final_score: i32) -> ScoreEntry {
        ScoreEntry {
            score_id,
            wind,
            final_score,
        }
    }

    fn even_split(table_type: TableType) -> [SeatScore; 4] {
        let entries = [
            entry(1, Wind::East, 25_000),
            entry(2, Wind::South, 25_000),
            entry(3, Wind::West, 25_000),
            entry(4, Wind::North, 25_000),
        ];
        score_table(table_type, &entries).unwrap()
    }

    #[test]
    fn even_split_ranks_by_wind_and_pays_rank_points_only() {
        let results = even_split(TableType::First);

        assert_eq!(results.map(|r| r.rank), [1, 2, 3, 4]);
        assert_eq!(results.map(|r| r.score_pt), [Pt::ZERO; 4]);
        assert_eq!(results.map(|r| r.rank_pt), [40, 30, 20, 10]);
        assert_eq!(
            results.map(|r| r.total_pt),
            [40, 30, 20, 10].map(Pt::from_points)
        );
    }

    #[test]
    fn score_points_are_signed_tenths() {
        let entries = [
            entry(1, Wind::East, 48_300),
            entry(2, Wind::South, 31_200),
            entry(3, Wind::West, 18_000),
            entry(4, Wind::North, 2_500),
        ];
        let results = score_table(TableType::Upper, &entries).unwrap();

        assert_eq!(results[0].score_pt, Pt::from_tenths(233)); // +23.3
        assert_eq!(results[1].score_pt, Pt::from_tenths(62)); // +6.2
        assert_eq!(results[2].score_pt, Pt::from_tenths(-70)); // -7.0
        assert_eq!(results[3].score_pt, Pt::from_tenths(-225)); // -22.5
        assert_eq!(results.iter().map(|r| r.score_pt).sum::<Pt>(), Pt::ZERO);
    }

    #[test]
    fn total_points_sum_to_the_table_constant() {
        for (table_type, expected) in [
            (TableType::First, 100),
            (TableType::Upper, 220),
            (TableType::Lower, 140),
        ] {
            let entries = [
                entry(1, Wind::East, 41_500),
                entry(2, Wind::South, 28_700),
                entry(3, Wind::West, 22_100),
                entry(4, Wind::North, 7_700),
            ];
            let results = score_table(table_type, &entries).unwrap();
            let total: Pt = results.iter().map(|r| r.total_pt).sum();
            assert_eq!(total, Pt::from_points(expected));
        }
    }

    #[test]
    fn tie_break_prefers_the_wind_closer_to_east() {
        let entries = [
            entry(1, Wind::North, 30_000),
            entry(2, Wind::East, 30_000),
            entry(3, Wind::South, 20_000),
            entry(4, Wind::West, 20_000),
        ];
        let results = score_table(TableType::First, &entries).unwrap();

        // East beats north at 30k; south beats west at 20k.
        assert_eq!(results[0].rank, 2);
        assert_eq!(results[1].rank, 1);
        assert_eq!(results[2].rank, 3);
        assert_eq!(results[3].rank, 4);
    }

    #[test]
    fn resubmission_is_idempotent() {
        let entries = [
            entry(1, Wind::East, 33_400),
            entry(2, Wind::South, 33_300),
            entry(3, Wind::West, 33_300),
            entry(4, Wind::North, 0),
        ];
        let first = score_table(TableType::Lower, &entries).unwrap();
        let second = score_table(TableType::Lower, &entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_wrong_entry_count() {
        let entries = [
            entry(1, Wind::East, 50_000),
            entry(2, Wind::South, 50_000),
        ];
        let err = score_table(TableType::First, &entries).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::EntryCount, _)
        ));
    }

    #[test]
    fn rejects_duplicate_score_ids() {
        let entries = [
            entry(7, Wind::East, 25_000),
            entry(7, Wind::South, 25_000),
            entry(8, Wind::West, 25_000),
            entry(9, Wind::North, 25_000),
        ];
        let err = score_table(TableType::First, &entries).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::DuplicateScoreId, _)
        ));
    }

    #[test]
    fn rejects_bad_sum() {
        let entries = [
            entry(1, Wind::East, 30_000),
            entry(2, Wind::South, 30_000),
            entry(3, Wind::West, 30_000),
            entry(4, Wind::North, 30_000),
        ];
        let err = score_table(TableType::First, &entries).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::ScoreSum, _)
        ));
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let entries = [
            entry(1, Wind::East, -100),
            entry(2, Wind::South, 40_100),
            entry(3, Wind::West, 30_000),
            entry(4, Wind::North, 30_000),
        ];
        let err = score_table(TableType::First, &entries).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::ScoreOutOfRange, _)
        ));
    }

    #[test]
    fn pt_displays_with_one_decimal() {
        assert_eq!(Pt::from_tenths(0).to_string(), "0.0");
        assert_eq!(Pt::from_tenths(75).to_string(), "7.5");
        assert_eq!(Pt::from_tenths(-75).to_string(), "-7.5");
        assert_eq!(Pt::from_tenths(-5).to_string(), "-0.5");
        assert_eq!(Pt::from_points(220).to_string(), "220.0");
    }
}
