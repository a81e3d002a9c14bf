//! Broadcast mediator - Forwards each message to every other registered colleague

use std::sync::{Arc, RwLock};
use crate::application::errors::MediatorError;
use crate::domain::entities::{ColleagueId, Message};
use crate::domain::traits::{Colleague, Mediator};

/// Mediator with an insertion-ordered, duplicate-free membership
pub struct BroadcastMediator {
    name: String,
    members: RwLock<Vec<Arc<dyn Colleague>>>,
}

impl BroadcastMediator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: RwLock::new(Vec::new()),
        }
    }

    /// Names of registered colleagues, in registration order
    pub fn members(&self) -> Vec<String> {
        self.members.read()
            .ok()
            .map(|m| m.iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default()
    }

    /// Check if a colleague is registered
    pub fn contains(&self, id: ColleagueId) -> bool {
        self.members.read()
            .ok()
            .map(|m| m.iter().any(|c| c.id() == id))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.members.read()
            .ok()
            .map(|m| m.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Result<Vec<Arc<dyn Colleague>>, MediatorError> {
        self.members.read()
            .map(|m| m.clone())
            .map_err(|_| MediatorError::Internal("Lock poisoned".to_string()))
    }
}

impl Mediator for BroadcastMediator {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, colleague: Arc<dyn Colleague>) -> Result<(), MediatorError> {
        let mut members = self.members.write()
            .map_err(|_| MediatorError::Internal("Lock poisoned".to_string()))?;

        if members.iter().any(|c| c.id() == colleague.id()) {
            return Err(MediatorError::AlreadyRegistered {
                mediator: self.name.clone(),
                colleague: colleague.name().to_string(),
            });
        }

        tracing::info!("Registered {} with {}", colleague.name(), self.name);
        members.push(colleague);
        Ok(())
    }

    fn distribute(&self, sender: ColleagueId, message: &Message) -> Result<(), MediatorError> {
        // Deliver from a snapshot so a receiver may register or send without deadlocking.
        let members = self.snapshot()?;

        for colleague in members.iter().filter(|c| c.id() != sender) {
            tracing::debug!("[{}] -> {}: {}", self.name, colleague.name(), message);
            if let Err(e) = colleague.receive(message) {
                tracing::warn!("[{}] Delivery to {} failed: {}", self.name, colleague.name(), e);
                return Err(MediatorError::DeliveryFailure {
                    mediator: self.name.clone(),
                    recipient: colleague.name().to_string(),
                    source: e,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Weak;
    use crate::application::errors::ColleagueError;
    use crate::infrastructure::adapters::recording::RecordingColleague;

    /// Registers `late` on its mediator and forwards what it hears as "re:<msg>"
    struct Relay {
        id: ColleagueId,
        mediator: Weak<BroadcastMediator>,
        late: Arc<RecordingColleague>,
    }

    impl Colleague for Relay {
        fn id(&self) -> ColleagueId {
            self.id
        }

        fn name(&self) -> &str {
            "relay"
        }

        fn receive(&self, message: &Message) -> Result<(), ColleagueError> {
            let mediator = self.mediator.upgrade()
                .ok_or_else(|| ColleagueError::Rejected("mediator dropped".to_string()))?;
            mediator.register(self.late.clone())
                .map_err(|e| ColleagueError::Rejected(e.to_string()))?;
            self.send(&*mediator, Message::new(format!("re:{}", message)))
                .map_err(|e| ColleagueError::Rejected(e.to_string()))
        }
    }

    fn names(received: &[Message]) -> Vec<String> {
        received.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_sender_is_skipped() {
        let mediator = BroadcastMediator::new("M");
        let a = Arc::new(RecordingColleague::new("A"));
        let b = Arc::new(RecordingColleague::new("B"));
        let c = Arc::new(RecordingColleague::new("C"));
        mediator.register(a.clone()).unwrap();
        mediator.register(b.clone()).unwrap();
        mediator.register(c.clone()).unwrap();

        a.send(&mediator, Message::from("m")).unwrap();

        assert!(a.received().is_empty());
        assert_eq!(names(&b.received()), vec!["m"]);
        assert_eq!(names(&c.received()), vec!["m"]);
    }

    #[test]
    fn test_delivery_follows_registration_order() {
        let log = RecordingColleague::shared_log();
        let mediator = BroadcastMediator::new("M");
        let a = Arc::new(RecordingColleague::new("A").with_log(log.clone()));
        let b = Arc::new(RecordingColleague::new("B").with_log(log.clone()));
        let c = Arc::new(RecordingColleague::new("C").with_log(log.clone()));
        mediator.register(b.clone()).unwrap();
        mediator.register(a.clone()).unwrap();
        mediator.register(c.clone()).unwrap();

        a.send(&mediator, Message::from("m")).unwrap();

        let order = log.lock().unwrap().clone();
        assert_eq!(order, vec!["B received m", "C received m"]);
        assert_eq!(mediator.members(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mediator = BroadcastMediator::new("M");
        let a = Arc::new(RecordingColleague::new("A"));
        let b = Arc::new(RecordingColleague::new("B"));
        mediator.register(a.clone()).unwrap();
        mediator.register(b.clone()).unwrap();

        let result = mediator.register(b.clone());
        assert!(matches!(result, Err(MediatorError::AlreadyRegistered { .. })));
        assert_eq!(mediator.len(), 2);

        // Rejected duplicate still receives exactly once
        a.send(&mediator, Message::from("once")).unwrap();
        assert_eq!(b.received().len(), 1);
    }

    #[test]
    fn test_same_name_distinct_colleagues() {
        let mediator = BroadcastMediator::new("M");
        let first = Arc::new(RecordingColleague::new("twin"));
        let second = Arc::new(RecordingColleague::new("twin"));
        mediator.register(first.clone()).unwrap();
        mediator.register(second.clone()).unwrap();

        first.send(&mediator, Message::from("hi")).unwrap();

        assert!(first.received().is_empty());
        assert_eq!(second.received().len(), 1);
    }

    #[test]
    fn test_lone_member_gets_nothing() {
        let mediator = BroadcastMediator::new("M");
        let a = Arc::new(RecordingColleague::new("A"));
        mediator.register(a.clone()).unwrap();

        a.send(&mediator, Message::from("echo?")).unwrap();

        assert!(a.received().is_empty());
    }

    #[test]
    fn test_empty_mediator_distributes_nothing() {
        let mediator = BroadcastMediator::new("M");
        assert!(mediator.is_empty());
        assert!(mediator.distribute(ColleagueId::new(), &Message::from("x")).is_ok());
    }

    #[test]
    fn test_non_member_sender_reaches_everyone() {
        let mediator = BroadcastMediator::new("M");
        let outsider = RecordingColleague::new("X");
        let a = Arc::new(RecordingColleague::new("A"));
        mediator.register(a.clone()).unwrap();

        outsider.send(&mediator, Message::from("hello")).unwrap();

        assert!(!mediator.contains(outsider.id()));
        assert_eq!(a.received().len(), 1);
    }

    #[test]
    fn test_failure_aborts_remaining_deliveries() {
        let mediator = BroadcastMediator::new("M");
        let a = Arc::new(RecordingColleague::new("A"));
        let b = Arc::new(RecordingColleague::new("B").failing_on("bad"));
        let c = Arc::new(RecordingColleague::new("C"));
        mediator.register(a.clone()).unwrap();
        mediator.register(b.clone()).unwrap();
        mediator.register(c.clone()).unwrap();

        let err = a.send(&mediator, Message::from("bad")).unwrap_err();

        match err {
            MediatorError::DeliveryFailure { mediator, recipient, .. } => {
                assert_eq!(mediator, "M");
                assert_eq!(recipient, "B");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(c.received().is_empty());

        // Later messages still flow
        a.send(&mediator, Message::from("good")).unwrap();
        assert_eq!(names(&c.received()), vec!["good"]);
    }

    #[test]
    fn test_concurrent_senders() {
        let mediator = Arc::new(BroadcastMediator::new("M"));
        let sink = Arc::new(RecordingColleague::new("sink"));
        mediator.register(sink.clone()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let mediator = mediator.clone();
                std::thread::spawn(move || {
                    let sender = Arc::new(RecordingColleague::new(format!("s{i}")));
                    mediator.register(sender.clone()).unwrap();
                    for n in 0..10 {
                        sender.send(&*mediator, Message::new(format!("{i}-{n}"))).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.received().len(), 40);
        assert_eq!(mediator.len(), 5);
    }

    #[test]
    fn test_receiver_can_reenter() {
        let mediator = Arc::new(BroadcastMediator::new("M"));
        let a = Arc::new(RecordingColleague::new("A"));
        let late = Arc::new(RecordingColleague::new("late"));
        let relay = Arc::new(Relay {
            id: ColleagueId::new(),
            mediator: Arc::downgrade(&mediator),
            late: late.clone(),
        });
        mediator.register(a.clone()).unwrap();
        mediator.register(relay.clone()).unwrap();

        a.send(&*mediator, Message::from("x")).unwrap();

        assert_eq!(names(&a.received()), vec!["re:x"]);
        assert_eq!(mediator.members(), vec!["A", "relay", "late"]);
        // Joined mid-delivery: sees the relayed message only
        assert_eq!(names(&late.received()), vec!["re:x"]);
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let mediator = Arc::new(BroadcastMediator::new("M"));
        let poisoner = mediator.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.members.write().unwrap();
            panic!("poison membership lock");
        })
        .join();

        let result = mediator.register(Arc::new(RecordingColleague::new("A")));
        assert!(matches!(result, Err(MediatorError::Internal(_))));

        let result = mediator.distribute(ColleagueId::new(), &Message::from("x"));
        assert!(matches!(result, Err(MediatorError::Internal(_))));
    }
}
