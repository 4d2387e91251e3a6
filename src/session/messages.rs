use actix::prelude::*;
use uuid::Uuid;

use crate::game::types::{Key, Location};

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct KeyPressed(pub Key);

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct KeyReleased(pub Key);

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct ReleaseAll;

/// Starts a new round. Only honored while the game is over; the reply says whether
/// the round was restarted.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "bool")]
pub struct Restart;

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Exit;

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub session_id: Uuid,
    pub round: u32,
    pub tick: u64,
    pub paused: bool,
    pub game_over: bool,
    pub health: i32,
    pub is_dead: bool,
    pub location: Location,
    pub enemy_count: usize,
}
