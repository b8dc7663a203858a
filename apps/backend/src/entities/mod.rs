pub mod league_members;
pub mod league_sessions;
pub mod leagues;
pub mod players;
pub mod session_tables;
pub mod table_scores;
pub mod users;

pub use league_members::Entity as LeagueMembers;
pub use league_members::Model as LeagueMember;
pub use league_sessions::Entity as LeagueSessions;
pub use league_sessions::Model as LeagueSession;
pub use leagues::Entity as Leagues;
pub use leagues::Model as League;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use session_tables::Entity as SessionTables;
pub use session_tables::Model as SessionTable;
pub use table_scores::Entity as TableScores;
pub use table_scores::Model as TableScore;
pub use users::Entity as Users;
pub use users::Model as User;
