//! Command handlers

pub mod save;
