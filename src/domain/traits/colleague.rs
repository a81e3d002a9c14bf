use crate::application::errors::{ColleagueError, MediatorError};
use crate::domain::entities::{ColleagueId, Message};
use super::Mediator;

/// Colleague trait - a participant that only talks to peers through a mediator
pub trait Colleague: Send + Sync {
    /// Identity used by mediators to skip the sender
    fn id(&self) -> ColleagueId;

    /// Display name, only used for output
    fn name(&self) -> &str;

    /// Handle a message distributed by a mediator
    fn receive(&self, message: &Message) -> Result<(), ColleagueError>;

    /// Send a message to every other member of `mediator`
    fn send(&self, mediator: &dyn Mediator, message: Message) -> Result<(), MediatorError> {
        tracing::debug!("{} sending via {}", self.name(), mediator.name());
        mediator.distribute(self.id(), &message)
    }
}
