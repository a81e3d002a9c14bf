use std::collections::HashMap;
use std::sync::Arc;
use crate::application::errors::{MediatorError, ReferenceKind, ScenarioError};
use crate::application::messaging::BroadcastMediator;
use crate::domain::entities::Message;
use crate::domain::traits::{Colleague, Mediator};
use crate::infrastructure::config::{Config, SendConfig};

/// Summary of a finished scenario run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioReport {
    pub colleagues: usize,
    pub mediators: usize,
    pub sends: usize,
}

/// Wires colleagues and mediators from a config and plays its sends
pub struct ScenarioService {
    colleagues: HashMap<String, Arc<dyn Colleague>>,
    mediators: HashMap<String, BroadcastMediator>,
}

impl ScenarioService {
    /// Build every colleague with `factory`, then register mediator members in declared order
    pub fn build<F>(config: &Config, factory: F) -> Result<Self, ScenarioError>
    where
        F: Fn(&str) -> Arc<dyn Colleague>,
    {
        config.validate()?;

        let colleagues = config.colleagues.iter()
            .map(|name| (name.clone(), factory(name)))
            .collect();

        let mut service = Self {
            colleagues,
            mediators: HashMap::new(),
        };

        for mediator_config in &config.mediators {
            let mediator = BroadcastMediator::new(mediator_config.name.clone());
            for member in &mediator_config.members {
                let colleague = service.colleague(member)?.clone();
                mediator.register(colleague)?;
            }
            service.mediators.insert(mediator_config.name.clone(), mediator);
        }

        tracing::info!(
            "Scenario wired: {} colleagues, {} mediators",
            service.colleagues.len(),
            service.mediators.len()
        );
        Ok(service)
    }

    pub fn colleague(&self, name: &str) -> Result<&Arc<dyn Colleague>, MediatorError> {
        self.colleagues.get(name).ok_or_else(|| MediatorError::InvalidReference {
            kind: ReferenceKind::Colleague,
            name: name.to_string(),
        })
    }

    pub fn mediator(&self, name: &str) -> Result<&BroadcastMediator, MediatorError> {
        self.mediators.get(name).ok_or_else(|| MediatorError::InvalidReference {
            kind: ReferenceKind::Mediator,
            name: name.to_string(),
        })
    }

    /// Have colleague `from` send `message` through mediator `via`
    pub fn send(&self, from: &str, via: &str, message: impl Into<Message>) -> Result<(), MediatorError> {
        let colleague = self.colleague(from)?;
        let mediator = self.mediator(via)?;
        colleague.send(mediator, message.into())
    }

    /// Play sends in order, stopping at the first failure
    pub fn run(&self, sends: &[SendConfig]) -> Result<ScenarioReport, MediatorError> {
        for (step, send) in sends.iter().enumerate() {
            tracing::info!("Step {}: {} -> {} via {}", step + 1, send.from, send.message, send.via);
            self.send(&send.from, &send.via, send.message.as_str())?;
        }

        Ok(ScenarioReport {
            colleagues: self.colleagues.len(),
            mediators: self.mediators.len(),
            sends: sends.len(),
        })
    }

    /// Build and run a whole config
    pub fn play<F>(config: &Config, factory: F) -> Result<ScenarioReport, ScenarioError>
    where
        F: Fn(&str) -> Arc<dyn Colleague>,
    {
        let service = Self::build(config, factory)?;
        Ok(service.run(&config.sends)?)
    }
}
