use std::sync::Arc;

use crate::domain::client::outbound::{GetPort, SwitchPort};

/// Entrance to the domain logic, providing ports for external adapters.
pub struct ApplicationCore {
    pub get: Arc<dyn GetPort>,
    pub switch: Arc<dyn SwitchPort>,
}

impl ApplicationCore {
    /// Create a new [`ApplicationCore`] by injecting external adapters.
    pub fn setup(get: Arc<dyn GetPort>, switch: Arc<dyn SwitchPort>) -> ApplicationCore {
        Self { get, switch }
    }
}
