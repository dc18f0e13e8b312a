//! UI Components
//!
//! Reusable Leptos components.

mod drag_preview;
mod list_item;
mod log_panel;
mod settings_bar;
mod task_list;

pub use drag_preview::DragPreview;
pub use list_item::ListItem;
pub use log_panel::LogPanel;
pub use settings_bar::SettingsBar;
pub use task_list::TaskList;
