//! Player scores.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/leaderboard?page=N` | Ten entries per page, highest score first |
//! | POST | `/leaderboard` | Record a score |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{LeaderboardRepository, PgLeaderboardRepository};
pub use services::LeaderboardService;
