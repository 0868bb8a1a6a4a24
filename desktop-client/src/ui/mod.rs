mod game;
mod menu;

pub use menu::{LaunchOptions, MENU_WINDOW_SIZE, MenuApp};
