//! Session layer.
//!
//! Hosts the game in an actor that owns all mutable game state and drives the fixed
//! tick. Input, restart and inspection arrive as messages.

pub mod messages;
pub mod server;
pub mod stdin;

pub use server::GameSession;
