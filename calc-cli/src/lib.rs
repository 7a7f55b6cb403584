pub mod app;
pub mod logging;
pub mod render;
pub mod settings;
