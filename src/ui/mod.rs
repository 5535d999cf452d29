pub mod app;
pub mod center_panel;
pub mod left_panel;
pub mod phase_view;
pub mod settings;
