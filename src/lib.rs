pub mod db;
pub mod errors;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod questions;
pub mod report;
pub mod session;
pub mod templates_structs;
