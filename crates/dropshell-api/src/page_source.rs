//! The page-at-a-time seam between the selector and the remote listing

use dropshell_core::prelude::*;
use dropshell_core::Page;

use crate::client::DropletsClient;

/// Fetch one page of instance summaries
///
/// Stateless request/response: implementations keep nothing between calls.
/// `page` is 1-based and both arguments must be at least 1.
#[trait_variant::make(PageSource: Send)]
pub trait LocalPageSource {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page>;
}

impl PageSource for DropletsClient {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page> {
        let raw = self.list_droplets(page, page_size).await?;
        let items = raw.droplets.iter().map(|d| d.to_summary()).collect();
        Ok(Page::new(items, raw.last_page))
    }
}
