//! Domain traits - Capability sets implemented by concrete participants

pub mod colleague;
pub mod mediator;

pub use colleague::Colleague;
pub use mediator::Mediator;
