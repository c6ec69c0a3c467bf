//! Phonebook HTTP API: CRUD over person records stored in SQLite.

pub mod api;
pub mod cli;
pub mod constants;
pub mod db;
pub mod errors;
pub mod person;
pub mod schema;
pub mod utils;
