//! Application layer - Distribution and orchestration
//! 
//! This layer contains:
//! - Errors: Mediator, colleague and config failures
//! - Messaging: The broadcast mediator
//! - Services: Scenario wiring and playback

pub mod errors;
pub mod services;
pub mod messaging;
