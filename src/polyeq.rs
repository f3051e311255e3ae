//! Main module for polyeq library functionality

pub mod analysis;
pub mod formats;
pub mod lexing;
pub mod recognizing;
pub mod session;
pub mod variables;
