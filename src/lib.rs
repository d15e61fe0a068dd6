//! # docterm
//!
//! Turns parsed documentation trees into styled, width-aware layouts for the terminal.
//!
//! The pipeline lives in the [docterm](docterm) module:
//! [ast](docterm::ast) (input tree) → [render](docterm::render) (tokens, lines, blocks)
//! → [layout](docterm::layout) (wrapped, styled lines).

pub mod docterm;
