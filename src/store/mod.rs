//! In-memory service store
//!
//! The single authoritative list of tracked services. All mutations arrive as
//! [`ServiceCommand`] values dispatched by the UI layer and go through
//! [`ServiceStore::dispatch`], which builds a new list value per transition
//! rather than editing records in place. State lives for one session only;
//! nothing here touches disk.

use chrono::{Duration, Local};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{AiService, BillingCycle, Money, ServiceCategory, ServiceDraft, ServiceId};

/// A mutation request produced by the UI layer
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Entry-form submission: append a new record, or replace the record
    /// with the target identifier (identifier preserved)
    Submit {
        draft: ServiceDraft,
        target: Option<ServiceId>,
    },
    /// Remove the record with this identifier; a no-op if absent
    Delete(ServiceId),
}

/// What a dispatched command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(ServiceId),
    Updated(ServiceId),
    Deleted(ServiceId),
}

/// Owner of the authoritative in-memory service list
#[derive(Debug, Default)]
pub struct ServiceStore {
    services: Vec<AiService>,
}

impl ServiceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the example records shown on first launch
    pub fn with_examples() -> Self {
        let today = Local::now().date_naive();

        let seed = |name: &str, provider: &str, dollars: i64, cycle, category, due: Option<i64>| {
            AiService {
                id: ServiceId::new(),
                name: name.to_string(),
                provider: provider.to_string(),
                amount: Money::from_dollars(dollars),
                billing_cycle: cycle,
                category,
                next_billing: due.map(|days| today + Duration::days(days)),
            }
        };

        Self {
            services: vec![
                seed(
                    "ChatGPT Plus",
                    "OpenAI",
                    20,
                    BillingCycle::Monthly,
                    ServiceCategory::Subscription,
                    Some(15),
                ),
                seed(
                    "Claude Pro",
                    "Anthropic",
                    20,
                    BillingCycle::Monthly,
                    ServiceCategory::Subscription,
                    Some(8),
                ),
                seed(
                    "GitHub Copilot",
                    "GitHub",
                    10,
                    BillingCycle::Monthly,
                    ServiceCategory::Subscription,
                    Some(22),
                ),
                seed(
                    "API Credits",
                    "OpenAI",
                    50,
                    BillingCycle::OneTime,
                    ServiceCategory::Credits,
                    None,
                ),
            ],
        }
    }

    /// Current list snapshot, in insertion order
    pub fn services(&self) -> &[AiService] {
        &self.services
    }

    /// Number of tracked services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Look up a record by identifier
    pub fn get(&self, id: ServiceId) -> Option<&AiService> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Apply a command, replacing the list with a new snapshot
    pub fn dispatch(&mut self, command: ServiceCommand) -> TrackerResult<StoreEvent> {
        match command {
            ServiceCommand::Submit {
                draft,
                target: Some(target),
            } => {
                if self.get(target).is_none() {
                    return Err(TrackerError::service_not_found(target.to_string()));
                }
                // Full-record replace: identifier preserved, everything else
                // taken from the draft
                self.services = self
                    .services
                    .iter()
                    .map(|s| {
                        if s.id == target {
                            AiService::from_draft(target, draft.clone())
                        } else {
                            s.clone()
                        }
                    })
                    .collect();
                Ok(StoreEvent::Updated(target))
            }
            ServiceCommand::Submit {
                draft,
                target: None,
            } => {
                let id = ServiceId::new();
                let mut next = self.services.clone();
                next.push(AiService::from_draft(id, draft));
                self.services = next;
                Ok(StoreEvent::Added(id))
            }
            ServiceCommand::Delete(id) => {
                self.services = self
                    .services
                    .iter()
                    .filter(|s| s.id != id)
                    .cloned()
                    .collect();
                Ok(StoreEvent::Deleted(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, dollars: i64) -> ServiceDraft {
        ServiceDraft::new(
            name,
            "OpenAI",
            Money::from_dollars(dollars),
            BillingCycle::Monthly,
            ServiceCategory::Subscription,
        )
    }

    #[test]
    fn test_add_appends_with_fresh_unique_id() {
        let mut store = ServiceStore::with_examples();
        let before = store.len();
        let existing: Vec<ServiceId> = store.services().iter().map(|s| s.id).collect();

        let event = store
            .dispatch(ServiceCommand::Submit {
                draft: draft("Test", 20),
                target: None,
            })
            .unwrap();

        assert_eq!(store.len(), before + 1);
        let StoreEvent::Added(id) = event else {
            panic!("expected Added event");
        };
        assert!(!existing.contains(&id));
        assert_eq!(store.services().last().unwrap().name, "Test");
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut store = ServiceStore::with_examples();
        let target = store.services()[0].id;
        let before = store.len();

        let event = store
            .dispatch(ServiceCommand::Submit {
                draft: draft("Renamed", 99),
                target: Some(target),
            })
            .unwrap();

        assert_eq!(event, StoreEvent::Updated(target));
        assert_eq!(store.len(), before);

        let matches: Vec<_> = store
            .services()
            .iter()
            .filter(|s| s.id == target)
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].amount, Money::from_dollars(99));
        assert_eq!(matches[0].name, "Renamed");
    }

    #[test]
    fn test_edit_missing_target_is_an_error() {
        let mut store = ServiceStore::with_examples();
        let result = store.dispatch(ServiceCommand::Submit {
            draft: draft("Ghost", 1),
            target: Some(ServiceId::new()),
        });
        assert!(result.is_err());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_removes_record() {
        let mut store = ServiceStore::with_examples();
        let target = store.services()[1].id;
        let before = store.len();

        store.dispatch(ServiceCommand::Delete(target)).unwrap();

        assert_eq!(store.len(), before - 1);
        assert!(store.get(target).is_none());
    }

    #[test]
    fn test_delete_missing_id_leaves_list_unchanged() {
        let mut store = ServiceStore::with_examples();
        let before: Vec<ServiceId> = store.services().iter().map(|s| s.id).collect();

        store.dispatch(ServiceCommand::Delete(ServiceId::new())).unwrap();

        let after: Vec<ServiceId> = store.services().iter().map(|s| s.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut store = ServiceStore::new();
        for name in ["a", "b", "c"] {
            store
                .dispatch(ServiceCommand::Submit {
                    draft: draft(name, 1),
                    target: None,
                })
                .unwrap();
        }
        let names: Vec<_> = store.services().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_seed_examples() {
        let store = ServiceStore::with_examples();
        assert_eq!(store.len(), 4);
        // Recurring seeds carry a next billing date, the one-time credit does not
        assert!(store.services()[0].next_billing.is_some());
        assert!(store.services()[3].next_billing.is_none());
    }
}
