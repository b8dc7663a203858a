//! Membership repository functions for the domain layer.
//!
//! This is the access-control surface the services consult: admin capability
//! gates session creation, admin-or-scorer gates score entry.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::memberships_sea as memberships_adapter;
use crate::entities::league_members::{self, MemberRole};
use crate::errors::domain::DomainError;

/// League roles for capability checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueRole {
    Admin,
    Scorer,
    Viewer,
}

/// League membership domain model
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueMembership {
    pub id: i64,
    pub league_id: i64,
    pub user_id: i64,
    pub role: LeagueRole,
}

// Free functions (generic) mirroring the adapter surface

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    user_id: i64,
) -> Result<Option<LeagueMembership>, DomainError> {
    let membership = memberships_adapter::find_membership(conn, league_id, user_id).await?;
    Ok(membership.map(LeagueMembership::from))
}

pub async fn create_membership(
    txn: &DatabaseTransaction,
    league_id: i64,
    user_id: i64,
    role: LeagueRole,
) -> Result<LeagueMembership, DomainError> {
    let dto = memberships_adapter::MembershipCreate {
        league_id,
        user_id,
        role: role.into(),
    };
    let membership = memberships_adapter::create_membership(txn, dto).await?;
    Ok(LeagueMembership::from(membership))
}

/// Whether the user holds the admin role in the league
pub async fn is_league_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    let membership = find_membership(conn, league_id, user_id).await?;
    Ok(matches!(
        membership,
        Some(LeagueMembership {
            role: LeagueRole::Admin,
            ..
        })
    ))
}

/// Whether the user may enter table scores (admin or scorer)
pub async fn can_enter_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    let membership = find_membership(conn, league_id, user_id).await?;
    Ok(matches!(
        membership.map(|m| m.role),
        Some(LeagueRole::Admin) | Some(LeagueRole::Scorer)
    ))
}

// Conversions between SeaORM models and domain models

impl From<league_members::Model> for LeagueMembership {
    fn from(model: league_members::Model) -> Self {
        Self {
            id: model.id,
            league_id: model.league_id,
            user_id: model.user_id,
            role: model.role.into(),
        }
    }
}

impl From<MemberRole> for LeagueRole {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::Admin => LeagueRole::Admin,
            MemberRole::Scorer => LeagueRole::Scorer,
            MemberRole::Viewer => LeagueRole::Viewer,
        }
    }
}

impl From<LeagueRole> for MemberRole {
    fn from(role: LeagueRole) -> Self {
        match role {
            LeagueRole::Admin => MemberRole::Admin,
            LeagueRole::Scorer => MemberRole::Scorer,
            LeagueRole::Viewer => MemberRole::Viewer,
        }
    }
}
