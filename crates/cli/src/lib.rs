//! # Haven CLI
//!
//! Interactive console and scripted demo for the relief registry.

pub mod commands;
pub mod interactive;
