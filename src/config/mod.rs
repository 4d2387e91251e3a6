/// Main configuration module.
/// 
/// Re-exports submodules for gameplay constants, sprite paths and runtime settings.
pub mod game;
pub mod sprites;
pub mod settings;
