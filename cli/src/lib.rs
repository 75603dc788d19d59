pub mod cli;
pub mod err;
pub mod command;
pub mod render;
pub mod repl;

pub use cli::{Cli, Commands};
pub use command::Command;
pub use err::*;
pub use repl::{Repl, Reply};
