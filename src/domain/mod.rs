//! Domain layer - Core participants of the mediator pattern
//! 
//! This layer contains:
//! - Entities: Identity and message values (ColleagueId, Message)
//! - Traits: The two capability sets (Colleague, Mediator)

pub mod entities;
pub mod traits;
