pub mod action;
pub mod app;
pub mod components;
pub mod events;
pub mod session;
pub mod tab_manager;
pub mod terminal_guard;

pub use action::Action;
pub use app::App;
pub use events::{AppEvent, InputMode, ViewMode};
pub use session::SortTab;
pub use tab_manager::TabManager;
