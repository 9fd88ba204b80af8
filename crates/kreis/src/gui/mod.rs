pub mod app;
pub mod form;
pub mod theme;
pub mod wheel;
