//! Invoice identifier allocation.

use std::fmt;

use invoice_model::{Invoice, InvoiceId};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::WorkspaceError;

/// How the next invoice id is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// One past the highest id ever issued or seeded. Ids are never reused.
    #[default]
    Monotonic,
    /// List length plus one, skipping forward past any id already present.
    ListLength,
}

impl IdPolicy {
    pub const ALL: [Self; 2] = [Self::Monotonic, Self::ListLength];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monotonic => "Monotonic",
            Self::ListLength => "List length",
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hands out ids for new invoices.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    policy: IdPolicy,
    /// Highest id issued or observed so far.
    high_water: Option<InvoiceId>,
}

impl IdAllocator {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            policy,
            high_water: None,
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Record an id that already exists (seeded or loaded).
    pub fn observe(&mut self, id: InvoiceId) {
        if self.high_water.is_none_or(|high| id > high) {
            self.high_water = Some(id);
        }
    }

    /// Allocate the id for a new invoice appended to `invoices`.
    ///
    /// Fails with [`WorkspaceError::IdsExhausted`] once the next id would
    /// pass `u32::MAX`; an id already in `invoices` is never returned.
    pub fn allocate(&mut self, invoices: &[Invoice]) -> Result<InvoiceId, WorkspaceError> {
        let id = match self.policy {
            IdPolicy::Monotonic => {
                let highest = invoices.iter().map(|i| i.id).chain(self.high_water).max();
                match highest {
                    Some(highest) => highest.next().ok_or(WorkspaceError::IdsExhausted)?,
                    None => InvoiceId::new(1),
                }
            }
            IdPolicy::ListLength => {
                let next = u32::try_from(invoices.len())
                    .ok()
                    .and_then(|count| count.checked_add(1))
                    .ok_or(WorkspaceError::IdsExhausted)?;
                let mut id = InvoiceId::new(next);
                while invoices.iter().any(|i| i.id == id) {
                    warn!(%id, "Invoice id already in use, advancing");
                    id = id.next().ok_or(WorkspaceError::IdsExhausted)?;
                }
                id
            }
        };
        self.observe(id);
        Ok(id)
    }
}
