//! Recording adapter for tests and scripted inspection

use std::sync::{Arc, Mutex};
use crate::application::errors::ColleagueError;
use crate::domain::entities::{ColleagueId, Message};
use crate::domain::traits::Colleague;

/// Delivery log shared between several recording colleagues
pub type SharedLog = Arc<Mutex<Vec<String>>>;

/// Colleague that keeps every message it receives
pub struct RecordingColleague {
    id: ColleagueId,
    name: String,
    received: Mutex<Vec<Message>>,
    log: Option<SharedLog>,
    fail_on: Option<String>,
}

impl RecordingColleague {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ColleagueId::new(),
            name: name.into(),
            received: Mutex::new(Vec::new()),
            log: None,
            fail_on: None,
        }
    }

    pub fn shared_log() -> SharedLog {
        Arc::new(Mutex::new(Vec::new()))
    }

    /// Also append "<name> received <message>" to a log shared with other colleagues
    pub fn with_log(mut self, log: SharedLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Reject any message whose text equals `text`
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.fail_on = Some(text.into());
        self
    }

    /// Messages received so far, oldest first
    pub fn received(&self) -> Vec<Message> {
        self.received.lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Colleague for RecordingColleague {
    fn id(&self) -> ColleagueId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &Message) -> Result<(), ColleagueError> {
        if self.fail_on.as_deref() == Some(message.as_str()) {
            return Err(ColleagueError::Rejected(format!("{} refuses '{}'", self.name, message)));
        }

        self.received.lock()
            .map_err(|_| ColleagueError::Rejected("Lock poisoned".to_string()))?
            .push(message.clone());

        if let Some(log) = &self.log {
            log.lock()
                .map_err(|_| ColleagueError::Rejected("Lock poisoned".to_string()))?
                .push(format!("{} received {}", self.name, message));
        }
        Ok(())
    }
}
