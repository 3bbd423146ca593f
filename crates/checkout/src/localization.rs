//! Resource-lookup seam for customer-facing messages.
//!
//! The cart logic never hardcodes display strings. Anything shown to a
//! customer is fetched through [`ResourceLookup`], passed in explicitly by
//! the caller, so the domain code stays testable without a live
//! localization subsystem.

use std::collections::HashMap;

/// Resource key for the conflicting-shipment-schedules cart message.
pub const CONFLICTING_SHIPMENT_SCHEDULES: &str = "ShoppingCart.ConflictingShipmentSchedules";

/// Provides localized display strings by resource key.
pub trait ResourceLookup {
    /// Look up the message for `key`.
    ///
    /// Implementations should always return something displayable; the
    /// usual fallback for an unknown key is the key itself.
    fn resource(&self, key: &str) -> String;
}

/// In-memory [`ResourceLookup`] with English defaults.
///
/// Suitable for tests and for deployments that do not localize. Unknown
/// keys fall back to the key text, which keeps a missing translation
/// visible without breaking the flow that asked for it.
#[derive(Debug, Clone)]
pub struct StaticResources {
    messages: HashMap<String, String>,
}

impl StaticResources {
    /// English defaults for every key the checkout crate uses.
    #[must_use]
    pub fn english() -> Self {
        let mut messages = HashMap::new();
        messages.insert(
            CONFLICTING_SHIPMENT_SCHEDULES.to_owned(),
            "Your cart contains recurring products with conflicting shipment schedules. \
             Only one schedule per order is supported."
                .to_owned(),
        );
        Self { messages }
    }

    /// Add or override a message.
    #[must_use]
    pub fn with(mut self, key: &str, message: &str) -> Self {
        self.messages.insert(key.to_owned(), message.to_owned());
        self
    }
}

impl Default for StaticResources {
    fn default() -> Self {
        Self::english()
    }
}

impl ResourceLookup for StaticResources {
    fn resource(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}
