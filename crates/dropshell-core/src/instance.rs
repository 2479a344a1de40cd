//! Normalized instance records and listing pages

use serde::{Deserialize, Serialize};

/// One remote instance, reduced to what the selector and launcher need
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSummary {
    pub id: u64,
    pub name: String,
    pub region: String,
    /// Empty when the instance reported no private address
    pub private_addr: String,
    /// Empty when the instance reported no public address
    pub public_addr: String,
}

impl InstanceSummary {
    pub fn has_public_addr(&self) -> bool {
        !self.public_addr.is_empty()
    }
}

/// One page of a remote listing
///
/// Pages are replaced wholesale when the selector moves, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<InstanceSummary>,
    pub last_page: bool,
}

impl Page {
    pub fn new(items: Vec<InstanceSummary>, last_page: bool) -> Self {
        Self { items, last_page }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
