//! Game rendering system.
//!
//! Each tick produces a [`Frame`]: a flat, back-to-front list of sprite draws in screen
//! coordinates. The frame is handed to a [`RenderTarget`], which decides what to do
//! with it (print a status line, emit JSON, or nothing).

use std::io::Write;

use log::warn;
use serde::Serialize;
use uuid::Uuid;

use crate::config::game::MAX_HUD_HEARTS;
use crate::config::sprites::{BACKGROUND, GAME_OVER, HEART};
use crate::game::sprite::{Sprite, SpriteCache};
use crate::game::state::GameState;
use crate::game::types::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Layer {
    Background,
    Character,
    Enemy,
    Hud,
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    pub layer: Layer,
    pub sprite: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DrawCommand {
    fn new(layer: Layer, sprite: &Sprite, x: i32, y: i32) -> Self {
        Self {
            layer,
            sprite: sprite.path.clone(),
            x,
            y,
            width: sprite.width,
            height: sprite.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub session_id: Uuid,
    pub tick: u64,
    pub health: i32,
    pub game_over: bool,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.layer == layer)
    }
}

/// Sprites that belong to the screen rather than to an actor.
#[derive(Debug, Clone)]
pub struct HudSprites {
    pub background: Sprite,
    pub heart: Sprite,
    pub game_over: Sprite,
}

impl HudSprites {
    pub fn load(sprites: &mut SpriteCache, background_width: i32, screen_height: i32) -> Self {
        let mut background = sprites.get_or_load(BACKGROUND);
        if background.path != BACKGROUND {
            // Placeholder stretched over the scroll area.
            background.width = u32::try_from(background_width).unwrap_or(0);
            background.height = u32::try_from(screen_height).unwrap_or(0);
        }
        Self {
            background,
            heart: sprites.get_or_load(HEART),
            game_over: sprites.get_or_load(GAME_OVER),
        }
    }
}

/// Screen x at which an enemy is drawn: its world offset from the character, anchored
/// at the point where the character itself is drawn.
pub fn enemy_screen_x(enemy: Location, character: Location, screen_width: i32, character_width: i32) -> i32 {
    enemy
        .x()
        .saturating_sub(character.x())
        .saturating_add(screen_width / 2 - character_width / 2)
}

/// Background, character and enemies, in that order.
pub fn build_frame(state: &GameState) -> Frame {
    let hud = &state.hud;
    let screen_width = state.settings.screen_width;
    let character = &state.character;
    let mut commands = Vec::with_capacity(state.entities.enemy_list().len() + 4);

    let bg = state.background.background_location();
    commands.push(DrawCommand::new(Layer::Background, &hud.background, bg.x(), bg.y()));

    let sprite = character.current_sprite();
    commands.push(DrawCommand::new(
        Layer::Character,
        sprite,
        screen_width / 2 - sprite.width_px() / 2,
        character.location().y(),
    ));

    let anchor_width = character.right_sprite().width_px();
    for enemy in state.entities.enemy_list() {
        let x = enemy_screen_x(enemy.location(), character.location(), screen_width, anchor_width);
        commands.push(DrawCommand::new(Layer::Enemy, enemy.current_sprite(), x, enemy.location().y()));
    }

    Frame {
        session_id: state.session_id,
        tick: state.tick,
        health: character.health(),
        game_over: state.game.is_game_over(),
        commands,
    }
}

/// One heart per health point while alive, the centered game-over overlay once dead.
pub fn draw_health(frame: &mut Frame, state: &GameState) {
    let hud = &state.hud;
    let character = &state.character;
    frame.health = character.health();
    frame.game_over = state.game.is_game_over();

    if !character.is_dead() {
        let step = hud.heart.width_px() + 5;
        for i in 0..character.health().min(MAX_HUD_HEARTS) {
            let x = 25i32.saturating_add(i.saturating_mul(step));
            frame.commands.push(DrawCommand::new(Layer::Hud, &hud.heart, x, 25));
        }
    } else {
        let x = state.settings.screen_width / 2 - hud.game_over.width_px() / 2;
        let y = state.settings.screen_height / 2 - hud.game_over.height_px() / 2;
        frame.commands.push(DrawCommand::new(Layer::Overlay, &hud.game_over, x, y));
    }
}

pub trait RenderTarget {
    fn render(&mut self, frame: &Frame);
}

pub struct NullRenderer;

impl RenderTarget for NullRenderer {
    fn render(&mut self, _frame: &Frame) {}
}

/// Prints a status line every `every` frames, and the game-over banner immediately.
pub struct TerminalRenderer<W: Write = std::io::Stdout> {
    out: W,
    every: u64,
    screen_width: i32,
}

impl TerminalRenderer {
    pub fn new(every: u64, screen_width: i32) -> Self {
        Self::with_writer(std::io::stdout(), every, screen_width)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, every: u64, screen_width: i32) -> Self {
        Self {
            out,
            every: every.max(1),
            screen_width,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn is_on_screen(&self, command: &DrawCommand) -> bool {
        let width = i32::try_from(command.width).unwrap_or(i32::MAX);
        command.x.saturating_add(width) >= 0 && command.x < self.screen_width
    }
}

impl<W: Write> RenderTarget for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) {
        let result = if frame.game_over {
            writeln!(self.out, "--- GAME OVER (tick {}) --- type `restart` or `quit`", frame.tick)
        } else if frame.tick % self.every != 0 {
            return;
        } else {
            let character = frame.layer(Layer::Character).next();
            let background = frame.layer(Layer::Background).next();
            let on_screen = frame.layer(Layer::Enemy).filter(|c| self.is_on_screen(c)).count();

            writeln!(
                self.out,
                "[tick {:>6}] health {} | y {} | background x {} | enemies on screen {}",
                frame.tick,
                frame.health,
                character.map(|c| c.y).unwrap_or_default(),
                background.map(|c| c.x).unwrap_or_default(),
                on_screen,
            )
        };
        if let Err(err) = result {
            warn!("[Render] Failed to print frame {}: {}", frame.tick, err);
        }
    }
}

/// Writes every frame as one JSON line.
pub struct JsonFrameSink<W: Write> {
    out: W,
}

impl<W: Write> JsonFrameSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderTarget for JsonFrameSink<W> {
    fn render(&mut self, frame: &Frame) {
        let result = serde_json::to_writer(&mut self.out, frame)
            .map_err(std::io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(err) = result {
            warn!("[Render] Failed to write frame {}: {}", frame.tick, err);
        }
    }
}
