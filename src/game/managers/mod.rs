//! Per-tick collaborators of the game loop.
//!
//! Each manager owns one concern (held input, background scroll, enemies, ground and
//! damage rules) and is passed explicitly to the loop through [`crate::game::state::GameState`].

pub mod input;
pub mod background;
pub mod entity;
pub mod game;

pub use input::InputListener;
pub use background::BackgroundManager;
pub use entity::EntityManager;
pub use game::GameManager;
