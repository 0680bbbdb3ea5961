pub mod leaderboard_handler;

pub use leaderboard_handler::{
    __path_create_leaderboard_entry, __path_list_leaderboard, create_leaderboard_entry,
    list_leaderboard,
};
