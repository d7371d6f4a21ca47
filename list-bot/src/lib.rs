//! Named lists managed through plain-text chat commands.
//!
//! A [`lists::ListStore`] owns the lists and their JSON document; the
//! [`commands`] interpreter turns a line of text into a store operation and
//! a reply; [`channels`] carry text to and from Telegram or a terminal.

pub mod channels;
pub mod commands;
pub mod config;
pub mod lists;
