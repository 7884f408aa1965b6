pub mod io;
pub mod output;
pub mod panels;
mod shell;

pub use shell::run_cli;
