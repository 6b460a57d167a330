pub mod about_section;
pub mod input_sidebar;
pub mod log_panel;
pub mod portfolio_section;
pub mod result_panel;

pub use input_sidebar::{FormState, render_input_sidebar};
pub use log_panel::{LogBuffer, render_logs_panel};
