use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::config::settings::Settings;
use crate::game::entities::{Character, SpawnArea};
use crate::game::managers::{BackgroundManager, EntityManager, GameManager, InputListener};
use crate::game::sprite::SpriteCache;
use crate::game::systems::render::HudSprites;
use crate::game::types::{Location, Velocity};

/// Everything one play session mutates, owned in one place and handed to the loop.
#[derive(Debug)]
pub struct GameState {
    pub settings: Settings,
    pub session_id: Uuid,
    pub tick: u64,
    pub round: u32,
    pub character: Character,
    pub input: InputListener,
    pub background: BackgroundManager,
    pub entities: EntityManager,
    pub game: GameManager,
    pub sprites: SpriteCache,
    pub hud: HudSprites,
    rng: StdRng,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Deterministic enemy placement, for tests and replays.
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, rng: StdRng) -> Self {
        let mut sprites = SpriteCache::new();
        let game = GameManager::new(
            settings.screen_width,
            settings.ground_y,
            settings.gravity,
            settings.hurt_cooldown_ticks,
        );
        let hud = HudSprites::load(&mut sprites, settings.background_width, settings.screen_height);

        let mut state = GameState {
            session_id: Uuid::new_v4(),
            tick: 0,
            round: 1,
            character: Character::new(Location::new(0, 0), &mut sprites),
            input: InputListener::new(settings.walk_speed, settings.jump_speed),
            background: BackgroundManager::new(settings.background_width),
            entities: EntityManager::new(),
            game,
            sprites,
            hud,
            rng,
            settings,
        };
        state.place_character();
        state.character.set_health(state.settings.character_health);
        state.respawn_enemies();

        info!(
            "[GameState] New game session_id={} enemies={} sprites={}",
            state.session_id,
            state.entities.enemy_list().len(),
            state.sprites.len()
        );
        state
    }

    pub fn spawn_area(&self) -> SpawnArea {
        SpawnArea {
            center_x: self.game.center_x_cord(),
            spread: self.settings.level_spread,
            safe_zone: self.settings.spawn_safe_zone,
            ground_y: self.game.ground_y(),
        }
    }

    fn place_character(&mut self) {
        let x = self.game.center_x_cord();
        let y = self.game.ground_level(&self.character);
        self.character.set_location(Location::new(x, y));
    }

    fn respawn_enemies(&mut self) {
        let area = self.spawn_area();
        self.entities.clear();
        self.entities.spawn_random_entities(
            self.settings.restart_enemy_count,
            area,
            &mut self.rng,
            &mut self.sprites,
        );
    }

    /// Starts a new round: fresh enemies, character back on the spawn point with full
    /// health, game-over cleared.
    pub fn restart(&mut self) {
        self.respawn_enemies();

        self.place_character();
        self.character.set_velocity(Velocity::default());
        self.character.set_is_dead(false);
        self.character.set_health(self.settings.character_health);

        self.game.set_game_over(false);
        self.game.reset_cooldown();
        self.session_id = Uuid::new_v4();
        self.round += 1;

        info!(
            "[GameState] Restart round={} session_id={} enemies={}",
            self.round,
            self.session_id,
            self.entities.enemy_list().len()
        );
    }
}
