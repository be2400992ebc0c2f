//! Ratatui front end: renders the table and turns key presses into table actions.

pub mod app;
pub mod controller;
pub mod ui;
