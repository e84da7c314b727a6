mod game;
mod menu;
mod rally;

pub use game::GameScreen;
pub use menu::MenuScreen;
pub use rally::Rally;
