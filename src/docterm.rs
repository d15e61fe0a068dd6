//! Main module for docterm library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod testing;
