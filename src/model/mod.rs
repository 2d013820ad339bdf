pub mod category;
pub mod config;
pub mod goal;
pub mod infra;
pub mod schedule;
pub mod tab;
pub mod task;

pub use category::*;
pub use config::*;
pub use goal::*;
pub use infra::*;
pub use schedule::*;
pub use tab::*;
pub use task::*;
