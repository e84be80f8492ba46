pub mod app;
pub mod demos;
pub mod info_panel;
pub mod sidebar;
pub mod theme;
pub mod visualizer;
