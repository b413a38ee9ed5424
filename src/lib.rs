pub mod cdn;
pub mod config;
pub mod discord;
pub mod error;
pub mod lookup;
pub mod models;
pub mod routes;
pub mod state;
