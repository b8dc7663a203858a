//! DTOs for leagues_sea adapter.

use crate::entities::leagues::LeagueStatus;

/// DTO for creating a league together with its roster.
#[derive(Debug, Clone)]
pub struct LeagueCreate {
    pub name: String,
    pub description: Option<String>,
    pub created_by: i64,
    /// Roster names in display order; the first is linked to the creator.
    pub player_names: Vec<String>,
}

/// DTO for a status transition.
#[derive(Debug, Clone)]
pub struct LeagueUpdateStatus {
    pub league_id: i64,
    pub status: LeagueStatus,
}
