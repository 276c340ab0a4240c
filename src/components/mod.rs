//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alert;
pub mod chart_panel;
pub mod dataset_form;
pub mod dialog;
pub mod loading;
pub mod sidebar;

pub use alert::AlertHost;
pub use chart_panel::GraphPanel;
pub use dataset_form::DatasetForm;
pub use dialog::DialogHost;
pub use loading::Loading;
pub use sidebar::Sidebar;
