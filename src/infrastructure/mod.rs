//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Scenario loading from YAML
//! - Adapters: Concrete colleagues (console output, recording)

pub mod config;
pub mod adapters;
