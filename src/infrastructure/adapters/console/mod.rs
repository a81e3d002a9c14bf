//! Console adapter - prints every received message

use std::io::{self, Write};
use std::sync::Mutex;
use crate::application::errors::ColleagueError;
use crate::domain::entities::{ColleagueId, Message};
use crate::domain::traits::Colleague;

/// Colleague that writes "<name> received <message>" for each delivery
pub struct ConsoleColleague<W: Write + Send = io::Stdout> {
    id: ColleagueId,
    name: String,
    out: Mutex<W>,
}

impl ConsoleColleague {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_writer(name, io::stdout())
    }
}

impl<W: Write + Send> ConsoleColleague<W> {
    pub fn with_writer(name: impl Into<String>, out: W) -> Self {
        Self {
            id: ColleagueId::new(),
            name: name.into(),
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> Colleague for ConsoleColleague<W> {
    fn id(&self) -> ColleagueId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &Message) -> Result<(), ColleagueError> {
        let mut out = self.out.lock()
            .map_err(|_| ColleagueError::Rejected("Output lock poisoned".to_string()))?;
        writeln!(out, "{} received {}", self.name, message)?;
        out.flush()?;
        Ok(())
    }
}
