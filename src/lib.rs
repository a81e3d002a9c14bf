//! Mediator pattern: colleagues talk to each other only through mediators.
//!
//! - [`domain`] defines the `Colleague` and `Mediator` capability traits and
//!   the values they exchange.
//! - [`application`] holds the broadcast mediator, the error taxonomy, and the
//!   scenario service that wires participants from configuration.
//! - [`infrastructure`] provides YAML configuration and concrete colleagues.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{ColleagueError, ConfigError, MediatorError, ReferenceKind, ScenarioError};
pub use application::messaging::BroadcastMediator;
pub use application::services::{ScenarioReport, ScenarioService};
pub use domain::entities::{ColleagueId, Message};
pub use domain::traits::{Colleague, Mediator};
