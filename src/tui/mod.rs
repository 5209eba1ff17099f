//! Terminal UI for Tmuber
//!
//! Built on iocraft's declarative component model. State transitions live
//! in `model` as pure functions; `app` wires them to the terminal.

pub mod app;
pub mod components;
pub mod model;
pub mod screens;
pub mod theme;

pub use app::TmuberApp;
