//! Proptest generators for domain inputs.

use backend::domain::matching::{PreviousSeat, PreviousTable};
use backend::domain::{ScoreEntry, Wind};
use proptest::prelude::*;

/// 16 distinct player ids in arbitrary order.
pub fn sixteen_players() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::hash_set(1i64..1_000_000, 16)
        .prop_map(|set| set.into_iter().collect::<Vec<i64>>())
        .prop_shuffle()
}

/// Four fully ranked previous tables over players 1..=16, each table's ranks
/// a random permutation of 1..=4.
pub fn ranked_previous_tables() -> impl Strategy<Value = Vec<PreviousTable>> {
    let rank_perm = Just(vec![1u8, 2, 3, 4]).prop_shuffle();
    proptest::collection::vec(rank_perm, 4).prop_map(|perms| {
        perms
            .into_iter()
            .enumerate()
            .map(|(t, ranks)| PreviousTable {
                seats: ranks
                    .into_iter()
                    .enumerate()
                    .map(|(s, rank)| PreviousSeat {
                        player_id: (t * 4 + s + 1) as i64,
                        rank: Some(rank),
                    })
                    .collect(),
            })
            .collect()
    })
}

/// Four score entries at distinct winds whose final scores sum to 100000.
///
/// Scores are multiples of 100, as real mahjong settlements are.
pub fn valid_score_entries() -> impl Strategy<Value = Vec<ScoreEntry>> {
    let winds = Just(vec![Wind::East, Wind::South, Wind::West, Wind::North]).prop_shuffle();
    (0..=1_000i32, 0..=1_000i32, 0..=1_000i32, winds)
        .prop_filter_map("scores must sum to 100000", |(a, b, c, winds)| {
            let d = 1_000 - a - b - c;
            if d < 0 {
                return None;
            }
            Some(
                [a * 100, b * 100, c * 100, d * 100]
                    .into_iter()
                    .zip(winds)
                    .enumerate()
                    .map(|(i, (final_score, wind))| ScoreEntry {
                        score_id: (i + 1) as i64,
                        wind,
                        final_score,
                    })
                    .collect::<Vec<ScoreEntry>>(),
            )
        })
}
