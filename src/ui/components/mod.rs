mod data_grid;
mod filter_bar;
mod menu_bar;
mod settings_dialog;
mod status_bar;

pub use data_grid::DataGrid;
pub use filter_bar::{FilterBar, FilterBarEvent};
pub use menu_bar::{MenuBar, MenuBarEvent};
pub use settings_dialog::{SettingsDialog, SettingsDialogEvent};
pub use status_bar::StatusBar;
