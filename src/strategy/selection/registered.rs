use std::sync::Arc;

use crate::{
    registry::TestRegistry,
    selection::{Selection, TestSelector},
};

/// Select every registered test, in registration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegisteredOrder;

impl TestSelector for RegisteredOrder {
    fn select(&self, registry: &TestRegistry) -> Selection {
        Selection {
            tests: registry.iter().map(Arc::clone).collect(),
            ..Selection::default()
        }
    }
}
