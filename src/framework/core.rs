//! # Core Resource Framework
//!
//! This module defines the generic building blocks every collection in the library uses.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all stored record types must implement.
//! - [`ResourceStore`]: The generic ID-keyed arena that owns entities of one type.
//!
//! Cross-entity relations are never stored as references. A record that points at
//! another record keeps its `Id`, and the owner of both stores resolves it with
//! [`ResourceStore::get`].

use serde::de::{self, DeserializeOwned};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait, DTOs and Actions)
// =============================================================================

/// Trait that any record type must implement to be managed by a [`ResourceStore`].
///
/// # Architecture Note
/// By defining a contract (`Entity`) that all record types (User, Product, Purchase)
/// satisfy, the store logic is written *once* and reused for every collection.
///
/// Associated types keep the payloads apart: a `User` is built from a `UserCreate`,
/// and the compiler rejects a `ProductCreate` sent to the user store.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned {
    /// The unique identifier for this entity. Also the key in the persisted mapping,
    /// so it must serialize as a string.
    type Id: Eq + Hash + Ord + Clone + Display + Debug + Serialize + DeserializeOwned;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Debug;

    /// Enum representing entity-specific mutations (e.g., `Deposit`).
    /// Use `()` for immutable entities.
    type Action: Debug;

    /// The result type returned by actions.
    type ActionResult: Debug;

    /// The error type for this entity, covering validation and lookup failures.
    type Error: std::error::Error;

    /// Generates a fresh identifier for a record about to be created.
    fn next_id() -> Self::Id;

    fn id(&self) -> &Self::Id;

    /// Checks the invariants a stored record must always satisfy.
    ///
    /// Run on every record when a store is saved or loaded, so a file that
    /// breaks them is never written and never accepted.
    fn validate(&self) -> Result<(), Self::Error>;

    /// Construct the full entity from the ID and payload, enforcing its invariants.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The error reported when `id` has no entry in the store.
    fn not_found(id: &Self::Id) -> Self::Error;

    /// Handle an entity-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

/// Short type name used as the `entity_type` log field
/// (e.g. "User" instead of "library_store::model::user::User").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

// =============================================================================
// 2. THE GENERIC STORE
// =============================================================================

/// ID-keyed arena owning every entity of one type.
///
/// Iteration order follows the underlying `HashMap` and is unspecified.
/// Serialization is the exception: entries are written sorted by key so the
/// persisted file is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<T: Entity> {
    store: HashMap<T::Id, T>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Builds a new entity under a freshly generated ID and stores it.
    ///
    /// Nothing is inserted when the entity rejects its payload.
    pub fn create(&mut self, params: T::Create) -> Result<&T, T::Error> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?params, "Create");
        let id = T::next_id();

        let item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(e);
            }
        };

        Ok(self.insert(id, item))
    }

    /// Stores an entity built by `build` under a freshly generated ID.
    ///
    /// For entities whose construction cannot fail.
    pub fn create_with(&mut self, build: impl FnOnce(T::Id) -> T) -> &T {
        let id = T::next_id();
        let item = build(id.clone());
        self.insert(id, item)
    }

    fn insert(&mut self, id: T::Id, item: T) -> &T {
        info!(entity_type = entity_type::<T>(), %id, size = self.store.len() + 1, "Created");
        let item = match self.store.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(item);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(item),
        };
        &*item
    }

    /// Exact-key lookup.
    pub fn get(&self, id: &T::Id) -> Result<&T, T::Error> {
        let item = self.store.get(id);
        debug!(entity_type = entity_type::<T>(), %id, found = item.is_some(), "Get");
        item.ok_or_else(|| T::not_found(id))
    }

    /// Runs an action against the stored entity, mutating it in place.
    pub fn perform_action(
        &mut self,
        id: &T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?action, "Action");
        let Some(item) = self.store.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(T::not_found(id));
        };

        let result = item.handle_action(action);
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        result
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.store.contains_key(id)
    }

    /// All stored entities, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.store.values()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

// =============================================================================
// 3. PERSISTED FORM
// =============================================================================

impl<T: Entity> Serialize for ResourceStore<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entity_type = entity_type::<T>();
        for item in self.store.values() {
            if let Err(e) = item.validate() {
                let msg = format!("{entity_type} {}: {e}", item.id());
                return Err(<S::Error as ser::Error>::custom(msg));
            }
        }
        let sorted: BTreeMap<&T::Id, &T> = self.store.iter().collect();
        sorted.serialize(serializer)
    }
}

/// Rejects records whose key differs from their ID or that fail [`Entity::validate`].
impl<'de, T: Entity> Deserialize<'de> for ResourceStore<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entity_type = entity_type::<T>();
        let store = HashMap::<T::Id, T>::deserialize(deserializer)?;
        for (key, item) in &store {
            if key != item.id() {
                let msg = format!("{entity_type} keyed {key} has ID {}", item.id());
                return Err(<D::Error as de::Error>::custom(msg));
            }
            if let Err(e) = item.validate() {
                let msg = format!("{entity_type} {key}: {e}");
                return Err(<D::Error as de::Error>::custom(msg));
            }
        }
        Ok(Self { store })
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    // --- Domain Definition ---

    static NEXT_ID: AtomicU64 = AtomicU64::new(1);

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Counter {
        id: String,
        label: String,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        label: String,
    }

    #[derive(Debug)]
    enum CounterAction {
        Increment,
        Decrement,
    }

    #[derive(Debug, PartialEq, thiserror::Error)]
    enum CounterError {
        #[error("Counter not found: {0}")]
        NotFound(String),
        #[error("Invalid label")]
        InvalidLabel,
        #[error("Counter underflow")]
        Underflow,
    }

    impl Entity for Counter {
        type Id = String;
        type Create = CounterCreate;
        type Action = CounterAction;
        type ActionResult = u32;
        type Error = CounterError;

        fn next_id() -> String {
            format!("counter_{}", NEXT_ID.fetch_add(1, Ordering::SeqCst))
        }

        fn id(&self) -> &String {
            &self.id
        }

        fn validate(&self) -> Result<(), CounterError> {
            if self.label.is_empty() {
                return Err(CounterError::InvalidLabel);
            }
            Ok(())
        }

        fn from_create_params(id: String, params: CounterCreate) -> Result<Self, CounterError> {
            if params.label.is_empty() {
                return Err(CounterError::InvalidLabel);
            }
            Ok(Self {
                id,
                label: params.label,
                value: 0,
            })
        }

        fn not_found(id: &String) -> CounterError {
            CounterError::NotFound(id.clone())
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
            match action {
                CounterAction::Increment => self.value += 1,
                CounterAction::Decrement => {
                    self.value = self.value.checked_sub(1).ok_or(CounterError::Underflow)?;
                }
            }
            Ok(self.value)
        }
    }

    fn create(store: &mut ResourceStore<Counter>, label: &str) -> String {
        store
            .create(CounterCreate {
                label: label.into(),
            })
            .expect("create counter")
            .id
            .clone()
    }

    // --- Tests ---

    #[test]
    fn test_create_get_and_action() {
        let mut store = ResourceStore::<Counter>::new();
        let id = create(&mut store, "visits");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().label, "visits");

        assert_eq!(store.perform_action(&id, CounterAction::Increment), Ok(1));
        assert_eq!(store.perform_action(&id, CounterAction::Increment), Ok(2));
        assert_eq!(store.get(&id).unwrap().value, 2);
    }

    #[test]
    fn test_rejected_create_inserts_nothing() {
        let mut store = ResourceStore::<Counter>::new();
        let result = store.create(CounterCreate { label: String::new() });

        assert_eq!(result.unwrap_err(), CounterError::InvalidLabel);
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_action_leaves_entity_unchanged() {
        let mut store = ResourceStore::<Counter>::new();
        let id = create(&mut store, "stock");

        let result = store.perform_action(&id, CounterAction::Decrement);
        assert_eq!(result, Err(CounterError::Underflow));
        assert_eq!(store.get(&id).unwrap().value, 0);
    }

    #[test]
    fn test_missing_id_uses_entity_error() {
        let mut store = ResourceStore::<Counter>::new();
        let missing = "counter_missing".to_string();

        assert_eq!(
            store.get(&missing).unwrap_err(),
            CounterError::NotFound(missing.clone())
        );
        assert_eq!(
            store.perform_action(&missing, CounterAction::Increment),
            Err(CounterError::NotFound(missing))
        );
    }

    #[test]
    fn test_serializes_sorted_by_key() {
        let mut store = ResourceStore::<Counter>::new();
        let ids: Vec<String> = ["c", "a", "b"]
            .iter()
            .map(|label| create(&mut store, label))
            .collect();

        let json = serde_json::to_string(&store).unwrap();
        let mut sorted = ids.clone();
        sorted.sort();
        let positions: Vec<usize> = sorted
            .iter()
            .map(|id| json.find(&format!("\"{id}\":")).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let restored: ResourceStore<Counter> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn test_create_with_stores_built_entity() {
        let mut store = ResourceStore::<Counter>::new();
        let id = store
            .create_with(|id| Counter {
                id,
                label: "built".into(),
                value: 7,
            })
            .id
            .clone();

        assert_eq!(store.get(&id).unwrap().value, 7);
    }

    #[test]
    fn test_invalid_record_is_not_serialized() {
        let mut store = ResourceStore::<Counter>::new();
        create(&mut store, "fine");
        store.create_with(|id| Counter {
            id,
            label: String::new(),
            value: 0,
        });

        let err = serde_json::to_string(&store).unwrap_err();
        assert!(err.to_string().contains("Invalid label"), "{err}");
    }

    #[test]
    fn test_load_rejects_key_id_mismatch() {
        let json = r#"{"a": {"id": "b", "label": "x", "value": 1}}"#;
        let err = serde_json::from_str::<ResourceStore<Counter>>(json).unwrap_err();
        assert!(err.to_string().contains("keyed a has ID b"), "{err}");
    }

    #[test]
    fn test_load_rejects_invalid_record() {
        let json = r#"{"a": {"id": "a", "label": "", "value": 1}}"#;
        assert!(serde_json::from_str::<ResourceStore<Counter>>(json).is_err());
    }
}
