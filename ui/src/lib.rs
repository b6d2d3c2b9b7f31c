#![warn(clippy::all, rust_2018_idioms)]
//! egui front end of the roster app: logout dialog, user listing and the
//! pages hosting them.

pub mod app;
pub mod pages;
pub mod state;
pub mod widgets;

pub use app::RosterApp;
