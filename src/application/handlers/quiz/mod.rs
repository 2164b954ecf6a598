//! Quiz handlers.

mod runner;

pub use runner::QuizRunner;
