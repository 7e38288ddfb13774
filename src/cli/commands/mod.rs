pub mod context;
pub mod extract;
pub mod install;
pub mod remove;
pub mod stats;

mod command_result;

pub use command_result::*;
