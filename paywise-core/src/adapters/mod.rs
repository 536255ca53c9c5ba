//! Concrete implementations of the ports

pub mod demo;
mod memory;
mod pin;

pub use memory::{InMemoryBank, StaticDirectory};
pub use pin::PinVerifier;
