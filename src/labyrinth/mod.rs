pub mod ascii_utils;
pub mod cell;
pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod events;
pub mod generator;
pub mod json_utils;
pub mod map;
pub mod maze;
pub mod path;
pub mod session;
pub mod solver;
pub mod tracker;
pub mod walls;

#[cfg(test)]
mod fixtures;
