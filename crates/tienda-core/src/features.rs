//! # Admin Feature Store
//!
//! Which dashboard sections are switched on.
//!
//! ## Store Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FeatureStore (Clone)                             │
//! │                                                                         │
//! │   set() / set_enabled() ──► watch::Sender<Vec<AdminFeature>>            │
//! │                                     │                                   │
//! │                     ┌───────────────┼────────────────┐                  │
//! │                     ▼               ▼                ▼                  │
//! │               subscribe()      subscribe()        get()                 │
//! │               sidebar menu     route guard        snapshot              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is an ordinary value: build one from [`CoreConfig`] at startup
//! and hand clones to whatever needs it. There is no global instance.
//!
//! [`CoreConfig`]: crate::config::CoreConfig

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::AdminFeature;

/// Observable list of admin features.
///
/// Cloning yields another handle to the same store.
#[derive(Debug, Clone)]
pub struct FeatureStore {
    tx: Arc<watch::Sender<Vec<AdminFeature>>>,
}

impl FeatureStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: Vec<AdminFeature>) -> Self {
        let (tx, _) = watch::channel(initial);
        FeatureStore { tx: Arc::new(tx) }
    }

    /// Snapshot of the current features.
    pub fn get(&self) -> Vec<AdminFeature> {
        self.tx.borrow().clone()
    }

    /// Replaces the whole list and notifies subscribers.
    pub fn set(&self, features: Vec<AdminFeature>) {
        debug!(count = features.len(), "Replacing admin features");
        self.tx.send_replace(features);
    }

    /// Receiver that sees every later change.
    ///
    /// ## Example
    /// ```rust
    /// use tienda_core::features::FeatureStore;
    /// use tienda_core::AdminFeature;
    ///
    /// let store = FeatureStore::new(AdminFeature::defaults());
    /// let mut rx = store.subscribe();
    ///
    /// store.set_enabled("expenses", false).unwrap();
    ///
    /// assert!(rx.has_changed().unwrap());
    /// let seen = rx.borrow_and_update();
    /// assert!(seen.iter().any(|f| f.key == "expenses" && !f.enabled));
    /// ```
    pub fn subscribe(&self) -> watch::Receiver<Vec<AdminFeature>> {
        self.tx.subscribe()
    }

    /// Whether `key` is known and enabled.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.tx
            .borrow()
            .iter()
            .any(|feature| feature.key == key && feature.enabled)
    }

    /// Keys of the enabled features, in store order.
    pub fn enabled_keys(&self) -> Vec<String> {
        self.tx
            .borrow()
            .iter()
            .filter(|feature| feature.enabled)
            .map(|feature| feature.key.clone())
            .collect()
    }

    /// Switches one feature on or off.
    ///
    /// Subscribers are only notified when the flag actually changes.
    pub fn set_enabled(&self, key: &str, enabled: bool) -> CoreResult<()> {
        let mut found = false;
        self.tx.send_if_modified(|features| {
            match features.iter_mut().find(|feature| feature.key == key) {
                Some(feature) => {
                    found = true;
                    let changed = feature.enabled != enabled;
                    feature.enabled = enabled;
                    changed
                }
                None => false,
            }
        });

        if !found {
            return Err(CoreError::UnknownFeature(key.to_string()));
        }

        debug!(key = %key, enabled = %enabled, "Admin feature toggled");
        Ok(())
    }
}

impl Default for FeatureStore {
    /// Store with every dashboard section enabled.
    fn default() -> Self {
        FeatureStore::new(AdminFeature::defaults())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_initial_features() {
        let store = FeatureStore::new(vec![
            AdminFeature::new("orders", "Pedidos", true),
            AdminFeature::new("users", "Usuarios", false),
        ]);
        let features = store.get();
        assert_eq!(features.len(), 2);
        assert!(store.is_enabled("orders"));
        assert!(!store.is_enabled("users"));
        assert!(!store.is_enabled("reports"));
        assert_eq!(store.enabled_keys(), vec!["orders".to_string()]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = FeatureStore::default();
        let handle = store.clone();

        handle.set_enabled("invoices", false).unwrap();
        assert!(!store.is_enabled("invoices"));
    }

    #[test]
    fn test_unknown_feature_is_an_error() {
        let store = FeatureStore::default();
        let err = store.set_enabled("reports", true).unwrap_err();
        assert!(matches!(err, CoreError::UnknownFeature(key) if key == "reports"));
    }

    #[test]
    fn test_noop_toggle_does_not_notify() {
        let store = FeatureStore::default();
        let rx = store.subscribe();

        store.set_enabled("orders", true).unwrap();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_set_replaces_everything() {
        let store = FeatureStore::default();
        store.set(vec![AdminFeature::new("orders", "Pedidos", true)]);
        assert_eq!(store.get().len(), 1);
        assert!(!store.is_enabled("inventory"));
    }

    #[tokio::test]
    async fn test_subscriber_sees_changes() {
        let store = FeatureStore::default();
        let mut rx = store.subscribe();

        let writer = store.clone();
        let task = tokio::spawn(async move {
            writer.set_enabled("deliveries", false).unwrap();
        });

        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();
        assert!(seen.iter().any(|f| f.key == "deliveries" && !f.enabled));

        task.await.unwrap();
    }
}
