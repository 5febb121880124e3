//! Dispatch parameters: how the bridge runs each unit of work.
//!
//! These are application-layer concerns, not domain policy: the domain
//! state machine is the same whether or not a deadline applies.

use crate::ports::unit_of_work::InputDelivery;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Deadline for one unit of work. `None` lets it run to completion.
    pub timeout: Option<Duration>,
    /// How arguments reach the worker.
    pub delivery: InputDelivery,
}

impl DispatchParams {
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_delivery(mut self, delivery: InputDelivery) -> Self {
        self.delivery = delivery;
        self
    }
}
