pub mod board;
pub mod infra;
pub mod stats;
