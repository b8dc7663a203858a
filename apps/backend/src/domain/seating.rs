//! Seat winds and table types.
//!
//! These are closed domain enums; persistence-layer equivalents live in
//! `crate::entities` and are converted at the repo boundary.

/// Seat wind at a four-player table.
///
/// Also the fixed seating and tie-break order: east before south before west
/// before north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    /// Winds in seating order. Groups of four players are seated in exactly
    /// this order by the matchers.
    pub const SEATING: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    /// Tie-break priority: lower value wins the better rank on equal score.
    pub fn priority(self) -> u8 {
        match self {
            Wind::East => 0,
            Wind::South => 1,
            Wind::West => 2,
            Wind::North => 3,
        }
    }
}

/// Table category, governing the rank-point scale.
///
/// `First` only appears in session 1; later sessions seat two `Upper` and two
/// `Lower` tables via promotion/relegation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableType {
    First,
    Upper,
    Lower,
}

impl TableType {
    /// Rank points by placement (index 0 = rank 1).
    pub fn rank_points(self) -> [i32; 4] {
        match self {
            TableType::First => [40, 30, 20, 10],
            TableType::Upper => [80, 70, 40, 30],
            TableType::Lower => [60, 50, 20, 10],
        }
    }

    /// Sum of the rank points handed out at one table of this type.
    ///
    /// Score points cancel out across a table, so this is also the exact sum
    /// of total points per table.
    pub fn total_rank_points(self) -> i32 {
        self.rank_points().iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seating_order_covers_all_winds() {
        assert_eq!(
            Wind::SEATING,
            [Wind::East, Wind::South, Wind::West, Wind::North]
        );
        for (i, wind) in Wind::SEATING.iter().enumerate() {
            assert_eq!(wind.priority() as usize, i);
        }
    }

    #[test]
    fn rank_point_totals_per_table_type() {
        assert_eq!(TableType::First.total_rank_points(), 100);
        assert_eq!(TableType::Upper.total_rank_points(), 220);
        assert_eq!(TableType::Lower.total_rank_points(), 140);
    }
}
