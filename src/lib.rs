pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod nav;
pub mod screens;
pub mod sync;
pub mod ui;
