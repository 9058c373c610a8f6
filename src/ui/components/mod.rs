mod array_view;
mod global_footer;
mod key_hints;
mod log_view;
mod progress;
mod scrollbar;
mod status_bar;
mod tab_bar;
mod text_input;
pub mod theme;

pub use array_view::{role_style, ArrayView, PLACEHOLDER};
pub use global_footer::{FooterContext, GlobalFooter};
pub use key_hints::{render_key_hints, KeyHintBarStyle};
pub use log_view::LogViewState;
pub use progress::ProgressBar;
pub use scrollbar::render_vertical_scrollbar;
pub use status_bar::{StatusBar, StatusKind, StatusMessage};
pub use tab_bar::TabBar;
pub use text_input::TextInputState;
