mod cli_mode;
mod editor_utils;
mod list_mode;
mod path_mode;
mod today_mode;
mod use_color;

pub use cli_mode::CliModeResult;
pub use list_mode::list_mode;
pub use path_mode::path_mode;
pub use today_mode::today_mode;
pub use use_color::use_color;
