//! Message distribution between colleagues

pub mod mediator;

pub use mediator::BroadcastMediator;
