//! Transports that feed text into the command interpreter

pub mod telegram;
pub mod terminal;
pub mod util;
