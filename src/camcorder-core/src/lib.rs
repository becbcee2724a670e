//! Camcorder Core Library
//!
//! Configuration, logging and the recording session driver behind the
//! `camcorder` command.

pub mod colored_logger;
pub mod config;
pub mod session;
