//! CLI Commands

pub mod demo;

pub use demo::DemoCommand;
