//! One tick of the game.
//!
//! The session actor calls [`tick`] on a fixed interval. Everything here is
//! synchronous and deterministic for a given state, so the loop can also be stepped
//! by hand.

use log::info;

use crate::game::state::GameState;
use crate::game::systems::render::{Frame, build_frame, draw_health};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub status: TickStatus,
    pub hurt: bool,
    pub frame: Frame,
}

/// Advance the game by one tick and return the frame to display.
pub fn tick(state: &mut GameState) -> TickOutcome {
    state.tick += 1;

    // Held keys become velocity before anything moves.
    let grounded = state.game.is_grounded(&state.character);
    state.input.update_velocities(&mut state.character, grounded);
    let velocity = state.character.velocity();

    state.background.update_background_location(&velocity);

    state.character.advance();
    state.game.run_ground_check(&mut state.character);

    let mut frame = build_frame(state);

    let hurt = state
        .game
        .was_character_hurt(&state.character, state.entities.enemy_list());
    if hurt {
        state.character.take_single_point_of_damage();
        info!(
            "[GameLoop] Character hurt at tick {}, health {}",
            state.tick,
            state.character.health()
        );
    }

    let status = if state.character.is_dead() {
        if !state.game.is_game_over() {
            info!(
                "[GameLoop] Game over at tick {} (session_id={})",
                state.tick, state.session_id
            );
        }
        state.game.set_game_over(true);
        TickStatus::GameOver
    } else {
        TickStatus::Running
    };

    draw_health(&mut frame, state);
    TickOutcome { status, hurt, frame }
}
