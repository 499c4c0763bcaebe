#![allow(clippy::bool_assert_comparison)]

mod automaton;
mod error;
mod evolve;
mod generation;
mod read;
mod rule;

pub use automaton::{Automaton, Cycle};
pub use error::Error;
pub use generation::Generation;
pub use read::{Config, Symbols};
pub use rule::Rule;
