mod app;
mod plot_view;
mod table_view;
mod ui_config;
mod ui_text;

pub use app::App;

pub(crate) use plot_view::PlotView;
pub(crate) use table_view::{SortColumn, SortDirection, TableView};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
