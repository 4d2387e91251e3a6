pub mod types;
pub mod sprite;
pub mod state;
pub mod game_loop;

pub mod entities;
pub mod managers;
pub mod systems;
