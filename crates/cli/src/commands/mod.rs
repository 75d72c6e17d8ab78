//! One module per `sevp` command.
//!
//! Each module exposes a `run` function called by the binary, and keeps the
//! text it prints in pure functions so it can be tested without a terminal.

pub mod init;
pub mod list;
pub mod pick;
pub mod view;
