//! Keyboard, mouse and window input collected between frames

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Per-button mouse state
#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    clicked: bool,
    released: bool,
    holding: bool,
}

impl ButtonState {
    fn press(&mut self) {
        if !self.holding {
            self.clicked = true;
        }
        self.holding = true;
    }

    fn release(&mut self) {
        self.holding = false;
        self.released = true;
    }
}

/// Input gathered from window events.
///
/// Held keys and buttons persist across frames; the pressed / released / clicked
/// flags only describe the current frame and are cleared by [`InputState::begin_frame`].
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
    released: HashSet<KeyCode>,
    left: ButtonState,
    right: ButtonState,
    mouse: Vec2,
    resized: Option<Vec2>,
    closed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget this frame's edges, keep held keys
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.left.clicked = false;
        self.left.released = false;
        self.right.clicked = false;
        self.right.released = false;
        self.resized = None;
    }

    /// Record a winit window event
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                match event.state {
                    ElementState::Pressed if !event.repeat => self.press_key(code),
                    ElementState::Pressed => {}
                    ElementState::Released => self.release_key(code),
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press_mouse(*button),
                ElementState::Released => self.release_mouse(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.move_mouse(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::Focused(false) => {
                // Releases are lost while unfocused
                self.held.clear();
                self.left.holding = false;
                self.right.holding = false;
            }
            WindowEvent::CloseRequested => self.close(),
            _ => {}
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.held.remove(&key);
        self.released.insert(key);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.left.press(),
            MouseButton::Right => self.right.press(),
            _ => {}
        }
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.left.release(),
            MouseButton::Right => self.right.release(),
            _ => {}
        }
    }

    pub fn move_mouse(&mut self, position: Vec2) {
        self.mouse = position;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.resized = Some(Vec2::new(width as f32, height as f32));
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn key_released(&self, key: KeyCode) -> bool {
        self.released.contains(&key)
    }

    pub fn key_holding(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn left_mouse_clicked(&self) -> bool {
        self.left.clicked
    }

    pub fn left_mouse_released(&self) -> bool {
        self.left.released
    }

    pub fn left_mouse_holding(&self) -> bool {
        self.left.holding
    }

    pub fn right_mouse_clicked(&self) -> bool {
        self.right.clicked
    }

    pub fn right_mouse_released(&self) -> bool {
        self.right.released
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse
    }

    /// New window size if the window was resized this frame
    pub fn resized(&self) -> Option<Vec2> {
        self.resized
    }

    pub fn window_closed(&self) -> bool {
        self.closed
    }
}

/// Vertical paddle direction from W/S or the arrow keys
pub fn paddle_direction(input: &InputState) -> i8 {
    let mut dir = 0;
    if input.key_holding(KeyCode::KeyW) || input.key_holding(KeyCode::ArrowUp) {
        dir -= 1;
    }
    if input.key_holding(KeyCode::KeyS) || input.key_holding(KeyCode::ArrowDown) {
        dir += 1;
    }
    dir
}
