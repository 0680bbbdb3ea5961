mod leaderboard_entry;

pub use leaderboard_entry::LeaderboardEntry;
