//! Domain Models - The vocabulary of the relief operation
//!
//! Every name here should match how relief staff talk about the system.

pub mod camp;
pub mod supply;
pub mod victim;
