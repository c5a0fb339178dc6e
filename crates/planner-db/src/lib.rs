//! Database layer: connection pool, embedded migrations, row models, and
//! query functions for the `tasks` table.

pub mod config;
pub mod models;
pub mod pool;
pub mod queries;
