use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};
use std::time::Duration;

use crate::game::game_loop::{TickStatus, tick};
use crate::game::state::GameState;
use crate::game::systems::render::RenderTarget;
use crate::session::messages::{
    Exit, GetSnapshot, KeyPressed, KeyReleased, ReleaseAll, Restart, Snapshot,
};

pub struct GameSession {
    state: GameState,
    renderer: Box<dyn RenderTarget>,
    tick_timer: Option<SpawnHandle>,
    stop_system_on_exit: bool,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[GameSession] Started session_id={} tick={}ms",
            self.state.session_id, self.state.settings.tick_millis
        );
        self.resume(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!(
            "[GameSession] Stopped session_id={} after {} ticks",
            self.state.session_id, self.state.tick
        );
        if self.stop_system_on_exit {
            System::current().stop();
        }
    }
}

impl GameSession {
    pub fn new(state: GameState, renderer: Box<dyn RenderTarget>) -> Self {
        Self {
            state,
            renderer,
            tick_timer: None,
            stop_system_on_exit: false,
        }
    }

    /// Also shut the actix system down when the session stops.
    pub fn stop_system_on_exit(mut self) -> Self {
        self.stop_system_on_exit = true;
        self
    }

    fn resume(&mut self, ctx: &mut Context<Self>) {
        if self.tick_timer.is_some() {
            return;
        }
        let period = Duration::from_millis(self.state.settings.tick_millis.max(1));
        let handle = ctx.run_interval(period, |act, ctx| {
            act.on_tick(ctx);
        });
        self.tick_timer = Some(handle);
    }

    fn pause(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.tick_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    fn on_tick(&mut self, ctx: &mut Context<Self>) {
        let outcome = tick(&mut self.state);
        self.renderer.render(&outcome.frame);

        if outcome.status == TickStatus::GameOver {
            self.pause(ctx);
            info!(
                "[GameSession] Paused on game over: session_id={} round={} tick={}",
                self.state.session_id, self.state.round, self.state.tick
            );
        }
    }

    fn snapshot(&self) -> Snapshot {
        let character = &self.state.character;
        Snapshot {
            session_id: self.state.session_id,
            round: self.state.round,
            tick: self.state.tick,
            paused: self.tick_timer.is_none(),
            game_over: self.state.game.is_game_over(),
            health: character.health(),
            is_dead: character.is_dead(),
            location: character.location(),
            enemy_count: self.state.entities.enemy_list().len(),
        }
    }
}

impl Handler<KeyPressed> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: KeyPressed, _: &mut Context<Self>) -> Self::Result {
        self.state.input.key_pressed(msg.0);
    }
}

impl Handler<KeyReleased> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: KeyReleased, _: &mut Context<Self>) -> Self::Result {
        self.state.input.key_released(msg.0);
    }
}

impl Handler<ReleaseAll> for GameSession {
    type Result = ();

    fn handle(&mut self, _: ReleaseAll, _: &mut Context<Self>) -> Self::Result {
        self.state.input.release_all();
    }
}

impl Handler<Restart> for GameSession {
    type Result = bool;

    fn handle(&mut self, _: Restart, ctx: &mut Context<Self>) -> Self::Result {
        if !self.state.game.is_game_over() {
            debug!("[GameSession] Restart ignored, game is still running");
            return false;
        }
        self.state.restart();
        self.resume(ctx);
        true
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.snapshot())
    }
}

impl Handler<Exit> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Exit, ctx: &mut Context<Self>) -> Self::Result {
        self.pause(ctx);
        ctx.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::game::entities::Enemy;
    use crate::game::systems::render::NullRenderer;
    use crate::game::types::Key;
    use actix::clock::sleep;

    fn settings() -> Settings {
        Settings {
            tick_millis: 5,
            restart_enemy_count: 0,
            ..Settings::default()
        }
    }

    #[actix::test]
    async fn fresh_session_is_running() {
        let state = GameState::with_seed(settings(), 1);
        let addr = GameSession::new(state, Box::new(NullRenderer)).start();

        let snapshot = addr.send(GetSnapshot).await.unwrap();
        assert!(!snapshot.paused);
        assert!(!snapshot.game_over);
        assert!(!snapshot.is_dead);
        assert_eq!(snapshot.health, 1);
        assert_eq!(snapshot.round, 1);
    }

    #[actix::test]
    async fn held_key_moves_character_between_ticks() {
        let state = GameState::with_seed(settings(), 2);
        let start = state.character.location();
        let addr = GameSession::new(state, Box::new(NullRenderer)).start();

        addr.send(KeyPressed(Key::Right)).await.unwrap();
        sleep(Duration::from_millis(60)).await;
        let snapshot = addr.send(GetSnapshot).await.unwrap();

        assert!(snapshot.tick > 0);
        assert!(snapshot.location.x() > start.x());
        assert_eq!(snapshot.location.y(), start.y());
    }

    #[actix::test]
    async fn game_over_pauses_until_restart() {
        let mut state = GameState::with_seed(settings(), 3);
        let at = state.character.location();
        let enemy = Enemy::new(at, &mut state.sprites);
        state.entities.enemy_list_mut().push(enemy);
        let addr = GameSession::new(state, Box::new(NullRenderer)).start();

        sleep(Duration::from_millis(60)).await;
        let over = addr.send(GetSnapshot).await.unwrap();
        assert!(over.game_over);
        assert!(over.paused);
        assert!(over.is_dead);
        assert_eq!(over.tick, 1);

        assert!(addr.send(Restart).await.unwrap());
        let restarted = addr.send(GetSnapshot).await.unwrap();
        assert!(!restarted.game_over);
        assert!(!restarted.paused);
        assert!(!restarted.is_dead);
        assert_eq!(restarted.health, 1);
        assert_eq!(restarted.round, 2);
        assert_eq!(restarted.enemy_count, 0);
        assert_ne!(restarted.session_id, over.session_id);
    }

    #[actix::test]
    async fn restart_while_running_is_ignored() {
        let state = GameState::with_seed(settings(), 4);
        let addr = GameSession::new(state, Box::new(NullRenderer)).start();

        assert!(!addr.send(Restart).await.unwrap());
        assert_eq!(addr.send(GetSnapshot).await.unwrap().round, 1);
    }

    #[actix::test]
    async fn exit_stops_the_session() {
        let state = GameState::with_seed(settings(), 5);
        let addr = GameSession::new(state, Box::new(NullRenderer)).start();

        addr.send(Exit).await.unwrap();
        sleep(Duration::from_millis(20)).await;
        assert!(!addr.connected());
    }
}
