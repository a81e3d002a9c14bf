//! Colleague adapters

pub mod console;
pub mod recording;

pub use console::ConsoleColleague;
pub use recording::RecordingColleague;
