//! Infrastructure layer - database bootstrap, state building and store error mapping.

pub mod db;
pub mod db_errors;
pub mod state;
