pub mod assignment;
pub mod commands;
pub mod error;
pub mod output;
pub mod plan;

pub mod cmd {
    pub use super::commands::Cli;
}
