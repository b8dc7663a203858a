//! Session matching: seats 16 players across 4 tables.
//!
//! Session 1 is a uniform random draw; later sessions promote ranks 1-2 of
//! every table into the upper pool and relegate ranks 3-4 into the lower
//! pool, then reshuffle each pool. Pure planning only, no persistence.

use std::collections::HashSet;

use crate::domain::seating::{TableType, Wind};
use crate::domain::shuffle::Shuffler;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// Tables per session and seats per table are fixed by the league format.
pub const TABLES_PER_SESSION: usize = 4;
pub const SEATS_PER_TABLE: usize = 4;
pub const PLAYERS_PER_SESSION: usize = TABLES_PER_SESSION * SEATS_PER_TABLE;

/// One planned seat: a player at a wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatPlan {
    pub player_id: i64,
    pub wind: Wind,
}

/// One planned table. `table_number` is 1-based within the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePlan {
    pub table_number: u8,
    pub table_type: TableType,
    pub seats: [SeatPlan; SEATS_PER_TABLE],
}

/// A seat of the previous session as the matcher sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviousSeat {
    pub player_id: i64,
    pub rank: Option<u8>,
}

/// A table of the previous session, seats in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousTable {
    pub seats: Vec<PreviousSeat>,
}

fn seat_group(group: &[i64]) -> [SeatPlan; SEATS_PER_TABLE] {
    core::array::from_fn(|i| SeatPlan {
        player_id: group[i],
        wind: Wind::SEATING[i],
    })
}

/// Plan the first session: shuffle all 16 players and slice them into four
/// `First` tables, winds assigned in seating order.
pub fn match_first_session<S: Shuffler>(
    player_ids: &[i64],
    shuffler: &mut S,
) -> Result<[TablePlan; TABLES_PER_SESSION], DomainError> {
    if player_ids.len() != PLAYERS_PER_SESSION {
        return Err(DomainError::validation(
            ValidationKind::PlayerCount,
            format!(
                "First session requires exactly {PLAYERS_PER_SESSION} players, got {}",
                player_ids.len()
            ),
        ));
    }

    let distinct: HashSet<i64> = player_ids.iter().copied().collect();
    if distinct.len() != player_ids.len() {
        return Err(DomainError::validation(
            ValidationKind::PlayerCount,
            "First session players must be distinct",
        ));
    }

    let mut shuffled = player_ids.to_vec();
    shuffler.shuffle(&mut shuffled);

    Ok(core::array::from_fn(|i| TablePlan {
        table_number: (i + 1) as u8,
        table_type: TableType::First,
        seats: seat_group(&shuffled[i * SEATS_PER_TABLE..(i + 1) * SEATS_PER_TABLE]),
    }))
}

/// Plan session N from the fully scored tables of session N-1.
///
/// Ranks 1-2 of each table feed the upper pool, ranks 3-4 the lower pool;
/// each pool is shuffled independently, then sliced into two tables. Upper
/// tables take numbers 1-2, lower tables 3-4.
pub fn match_next_session<S: Shuffler>(
    previous_tables: &[PreviousTable],
    shuffler: &mut S,
) -> Result<[TablePlan; TABLES_PER_SESSION], DomainError> {
    let mut upper: Vec<i64> = Vec::with_capacity(PLAYERS_PER_SESSION / 2);
    let mut lower: Vec<i64> = Vec::with_capacity(PLAYERS_PER_SESSION / 2);

    for table in previous_tables {
        for seat in &table.seats {
            let rank = seat.rank.ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::IncompleteScores,
                    "Previous session has unscored seats",
                )
            })?;
            match rank {
                1 | 2 => upper.push(seat.player_id),
                3 | 4 => lower.push(seat.player_id),
                other => {
                    return Err(DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("Seat rank {other} outside 1..=4"),
                    ))
                }
            }
        }
    }

    // The 4-table/4-seat shape guarantees 8 per pool; anything else means the
    // stored session data is structurally broken.
    if upper.len() != PLAYERS_PER_SESSION / 2 || lower.len() != PLAYERS_PER_SESSION / 2 {
        return Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!(
                "Promotion pools must hold 8 players each, got {} upper / {} lower",
                upper.len(),
                lower.len()
            ),
        ));
    }

    shuffler.shuffle(&mut upper);
    shuffler.shuffle(&mut lower);

    Ok(core::array::from_fn(|i| {
        let (table_type, pool, offset) = if i < 2 {
            (TableType::Upper, &upper, i)
        } else {
            (TableType::Lower, &lower, i - 2)
        };
        TablePlan {
            table_number: (i + 1) as u8,
            table_type,
            seats: seat_group(&pool[offset * SEATS_PER_TABLE..(offset + 1) * SEATS_PER_TABLE]),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shuffle::test_shufflers::{NoopShuffler, ReverseShuffler};
    use crate::domain::shuffle::SeededShuffler;

    fn players(n: usize) -> Vec<i64> {
        (1..=n as i64).collect()
    }

    fn assert_valid_partition(tables: &[TablePlan], expected_players: &[i64]) {
        let mut seen: Vec<i64> = Vec::new();
        for table in tables {
            let winds: HashSet<Wind> = table.seats.iter().map(|s| s.wind).collect();
            assert_eq!(winds.len(), SEATS_PER_TABLE, "winds must be distinct");
            seen.extend(table.seats.iter().map(|s| s.player_id));
        }
        let mut seen_sorted = seen.clone();
        seen_sorted.sort_unstable();
        let mut expected = expected_players.to_vec();
        expected.sort_unstable();
        assert_eq!(seen_sorted, expected, "every player seated exactly once");
    }

    #[test]
    fn first_session_seats_all_players_once() {
        let ids = players(16);
        let tables = match_first_session(&ids, &mut SeededShuffler::new(99)).unwrap();

        assert_eq!(tables.len(), 4);
        for (i, table) in tables.iter().enumerate() {
            assert_eq!(table.table_number as usize, i + 1);
            assert_eq!(table.table_type, TableType::First);
        }
        assert_valid_partition(&tables, &ids);
    }

    #[test]
    fn first_session_is_a_pure_function_of_the_shuffle() {
        let ids = players(16);
        let tables = match_first_session(&ids, &mut NoopShuffler).unwrap();

        // Identity shuffle: players seated in input order, winds in seating order.
        assert_eq!(tables[0].seats[0].player_id, 1);
        assert_eq!(tables[0].seats[0].wind, Wind::East);
        assert_eq!(tables[0].seats[3].player_id, 4);
        assert_eq!(tables[0].seats[3].wind, Wind::North);
        assert_eq!(tables[3].seats[0].player_id, 13);
        assert_eq!(tables[3].seats[3].player_id, 16);

        let reversed = match_first_session(&ids, &mut ReverseShuffler).unwrap();
        assert_eq!(reversed[0].seats[0].player_id, 16);
        assert_eq!(reversed[3].seats[3].player_id, 1);
    }

    #[test]
    fn first_session_rejects_wrong_player_count() {
        let err = match_first_session(&players(15), &mut NoopShuffler).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::PlayerCount, _)
        ));

        let err = match_first_session(&players(17), &mut NoopShuffler).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::PlayerCount, _)
        ));
    }

    #[test]
    fn first_session_rejects_duplicate_players() {
        let mut ids = players(16);
        ids[15] = 1;
        let err = match_first_session(&ids, &mut NoopShuffler).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::PlayerCount, _)
        ));
    }

    /// Previous tables where table t seats players 4t+1..4t+4 ranked in order.
    fn scored_previous() -> Vec<PreviousTable> {
        (0..4)
            .map(|t| PreviousTable {
                seats: (0..4)
                    .map(|s| PreviousSeat {
                        player_id: (t * 4 + s + 1) as i64,
                        rank: Some((s + 1) as u8),
                    })
                    .collect(),
            })
            .collect()
    }

    #[test]
    fn next_session_promotes_and_relegates_by_rank() {
        let previous = scored_previous();
        let tables = match_next_session(&previous, &mut SeededShuffler::new(7)).unwrap();

        assert_eq!(
            tables.iter().map(|t| t.table_type).collect::<Vec<_>>(),
            [
                TableType::Upper,
                TableType::Upper,
                TableType::Lower,
                TableType::Lower
            ]
        );
        assert_eq!(
            tables.iter().map(|t| t.table_number).collect::<Vec<_>>(),
            [1, 2, 3, 4]
        );
        assert_valid_partition(&tables, &players(16));

        // Ranks 1-2 are players 1,2,5,6,9,10,13,14; they must all be upper.
        let upper_players: HashSet<i64> = tables[..2]
            .iter()
            .flat_map(|t| t.seats.iter().map(|s| s.player_id))
            .collect();
        let expected_upper: HashSet<i64> =
            [1, 2, 5, 6, 9, 10, 13, 14].into_iter().collect();
        assert_eq!(upper_players, expected_upper);
    }

    #[test]
    fn next_session_with_identity_shuffle_keeps_collection_order() {
        let previous = scored_previous();
        let tables = match_next_session(&previous, &mut NoopShuffler).unwrap();

        // Upper pool collects ranks 1,2 per table in table order.
        let first_upper: Vec<i64> = tables[0].seats.iter().map(|s| s.player_id).collect();
        assert_eq!(first_upper, [1, 2, 5, 6]);
        let second_lower: Vec<i64> = tables[3].seats.iter().map(|s| s.player_id).collect();
        assert_eq!(second_lower, [11, 12, 15, 16]);
    }

    #[test]
    fn next_session_requires_every_seat_ranked() {
        let mut previous = scored_previous();
        previous[2].seats[1].rank = None;

        let err = match_next_session(&previous, &mut NoopShuffler).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::IncompleteScores, _)
        ));
    }

    #[test]
    fn next_session_flags_broken_pools_as_corruption() {
        // Three tables only: pools end up short, which is a storage fault,
        // not caller input.
        let previous: Vec<PreviousTable> = scored_previous().into_iter().take(3).collect();
        let err = match_next_session(&previous, &mut NoopShuffler).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Infra(InfraErrorKind::DataCorruption, _)
        ));

        // A rank outside 1..=4 is likewise corrupt data.
        let mut previous = scored_previous();
        previous[0].seats[0].rank = Some(5);
        let err = match_next_session(&previous, &mut NoopShuffler).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Infra(InfraErrorKind::DataCorruption, _)
        ));
    }
}
