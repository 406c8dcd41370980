pub mod app;
pub mod input;
pub mod pane;
pub mod render;
pub mod theme;

pub use app::run;
