//! Desktop Pong: winit window, wgpu renderer and the menu / game screens
//! on top of the `game_core` simulation.

pub mod app;
pub mod button;
pub mod camera;
pub mod clock;
pub mod draw;
pub mod hud;
pub mod input;
pub mod logger;
pub mod mesh;
pub mod renderer;
pub mod screens;
pub mod settings;
pub mod stack;
pub mod text;
