use std::sync::Arc;
use crate::application::errors::MediatorError;
use crate::domain::entities::{ColleagueId, Message};
use super::Colleague;

/// Mediator trait - holds membership and forwards messages between colleagues
pub trait Mediator: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Add a colleague to this mediator's membership
    fn register(&self, colleague: Arc<dyn Colleague>) -> Result<(), MediatorError>;

    /// Deliver `message` to every member except `sender`, in registration order
    fn distribute(&self, sender: ColleagueId, message: &Message) -> Result<(), MediatorError>;
}
