mod app;
mod theme;
mod widgets;

pub use app::{draw_app, history_lines, run_app, AppState, Command, Status};
pub use theme::Theme;
pub use widgets::TextInput;
