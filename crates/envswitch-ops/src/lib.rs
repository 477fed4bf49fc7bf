//! Side-effecting operations for envswitch.
//!
//! This crate performs the two effects a completed selection can have:
//! copying the chosen environment file over the destination, and handing
//! the terminal over to a follow-up command.

mod copy;
mod exec;

pub use copy::{copy_env_file, destination_path};
pub use exec::{execute, split_command, status_code};
