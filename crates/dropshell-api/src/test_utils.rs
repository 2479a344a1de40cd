//! In-memory [`PageSource`] for tests
//!
//! Slices a fixed list of instances into pages of whatever size is
//! requested and records every call.

use std::collections::HashMap;
use std::sync::Mutex;

use dropshell_core::prelude::*;
use dropshell_core::{InstanceSummary, Page};

use crate::page_source::PageSource;

/// Creates an instance whose addresses are derived from its id.
pub fn test_instance(id: u64, name: &str) -> InstanceSummary {
    InstanceSummary {
        id,
        name: name.to_string(),
        region: "nyc1".to_string(),
        private_addr: format!("10.0.0.{id}"),
        public_addr: format!("203.0.113.{id}"),
    }
}

/// Creates one instance per name with ids counting up from 1.
pub fn test_instances(names: &[&str]) -> Vec<InstanceSummary> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| test_instance(i as u64 + 1, name))
        .collect()
}

#[derive(Debug, Default)]
pub struct FakePageSource {
    items: Vec<InstanceSummary>,
    failures: HashMap<u32, String>,
    calls: Mutex<Vec<(u32, u32)>>,
}

impl FakePageSource {
    pub fn new(items: Vec<InstanceSummary>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Make every request for `page` fail with an API error
    pub fn fail_on(mut self, page: u32, message: impl Into<String>) -> Self {
        self.failures.insert(page, message.into());
        self
    }

    /// `(page, page_size)` of every call so far
    pub fn calls(&self) -> Vec<(u32, u32)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn slice(&self, page: u32, page_size: u32) -> Page {
        let size = page_size.max(1) as usize;
        let start = (page.max(1) as usize - 1) * size;
        let end = (start + size).min(self.items.len());
        let items = self.items.get(start..end).unwrap_or_default().to_vec();
        Page::new(items, end >= self.items.len())
    }
}

impl PageSource for FakePageSource {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((page, page_size));
        }
        if let Some(message) = self.failures.get(&page) {
            return Err(Error::api(message.clone()));
        }
        Ok(self.slice(page, page_size))
    }
}
