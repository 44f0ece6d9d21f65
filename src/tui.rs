pub mod app;
pub mod controller;
pub(crate) mod ui;
