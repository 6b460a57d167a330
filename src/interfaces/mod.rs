pub mod content;
pub mod format;
pub mod html_report;
pub mod view_models;

#[cfg(feature = "ui")]
pub mod components;
#[cfg(feature = "ui")]
pub mod dashboard;
#[cfg(feature = "ui")]
pub mod dashboard_components;
#[cfg(feature = "ui")]
pub mod design_system;
