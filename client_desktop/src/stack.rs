//! Screen stack
//!
//! Screens (menu, game) are kept last-in/first-out. Only the top screen is
//! updated and drawn; the application ends once the stack is empty.

use game_core::{Arena, Rgb};
use tracing::info;

use crate::draw::DrawList;
use crate::input::InputState;
use crate::text::TextMeasure;

/// What a screen sees during one update
pub struct Context<'a> {
    pub input: &'a InputState,
    pub frame_time: f32,
    pub arena: Arena,
    pub measure: &'a dyn TextMeasure,
}

/// Requested change to the stack after an update
pub enum Transition {
    None,
    Push(Box<dyn Screen>),
    Pop,
}

pub trait Screen {
    fn name(&self) -> &'static str;

    fn update(&mut self, ctx: &Context) -> Transition;

    fn draw(&self, list: &mut DrawList);

    /// The window changed size while this screen was on top (or underneath)
    fn on_resize(&mut self, _arena: Arena, _measure: &dyn TextMeasure) {}

    fn clear_color(&self) -> Rgb {
        Rgb::BLACK
    }
}

#[derive(Default)]
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
}

impl ScreenStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, screen: Box<dyn Screen>) {
        info!(screen = screen.name(), depth = self.screens.len() + 1, "push screen");
        self.screens.push(screen);
    }

    /// Update the top screen and apply its transition.
    ///
    /// Returns `false` once the stack is empty.
    pub fn update(&mut self, ctx: &Context) -> bool {
        let Some(top) = self.screens.last_mut() else {
            return false;
        };

        if ctx.input.resized().is_some() {
            top.on_resize(ctx.arena, ctx.measure);
        }

        match top.update(ctx) {
            Transition::None => {}
            Transition::Push(screen) => self.push(screen),
            Transition::Pop => {
                if let Some(popped) = self.screens.pop() {
                    info!(screen = popped.name(), depth = self.screens.len(), "pop screen");
                }
                // The uncovered screen may have missed resizes
                if let Some(top) = self.screens.last_mut() {
                    top.on_resize(ctx.arena, ctx.measure);
                }
            }
        }

        !self.screens.is_empty()
    }

    pub fn draw(&self, list: &mut DrawList) {
        if let Some(top) = self.screens.last() {
            top.draw(list);
        }
    }

    /// Clear color of the top screen
    pub fn clear_color(&self) -> Rgb {
        self.screens
            .last()
            .map_or(Rgb::BLACK, |top| top.clear_color())
    }

    pub fn top_name(&self) -> Option<&'static str> {
        self.screens.last().map(|top| top.name())
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }
}
