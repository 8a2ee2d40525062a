pub mod app;
pub mod generator;
pub mod model;
pub mod notify;
pub mod podcast;
pub mod scoring;
pub mod session;
pub mod ui;

pub use app::SimuladoApp;
