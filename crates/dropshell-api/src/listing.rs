//! Non-interactive `droplet list` table
//!
//! Walks every page until the API says there are no more, then prints one
//! row per droplet sorted by region and name.

use dropshell_core::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::client::DropletsClient;
use crate::protocol::Droplet;

pub const HEADERS: [&str; 9] = [
    "id",
    "name",
    "region",
    "image_name",
    "image_id",
    "size",
    "price $/mo",
    "public_addr",
    "private_addr",
];

/// One table row, already formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub id: u64,
    pub name: String,
    pub region: String,
    pub image_name: String,
    pub image_id: u64,
    pub size: String,
    pub price_monthly: f64,
    pub public_addr: String,
    pub private_addr: String,
}

impl From<&Droplet> for ListingRow {
    fn from(droplet: &Droplet) -> Self {
        let (private_addr, public_addr) = droplet.addresses();
        Self {
            id: droplet.id,
            name: droplet.name.clone(),
            region: droplet.region.slug.clone(),
            image_name: droplet.image.name.clone(),
            image_id: droplet.image.id,
            size: droplet.size.slug.clone(),
            price_monthly: droplet.size.price_monthly,
            public_addr,
            private_addr,
        }
    }
}

impl ListingRow {
    fn cells(&self) -> [String; 9] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.region.clone(),
            self.image_name.clone(),
            self.image_id.to_string(),
            self.size.clone(),
            format!("${:.2}", self.price_monthly),
            self.public_addr.clone(),
            self.private_addr.clone(),
        ]
    }
}

/// Fetch every page and return the rows sorted by region, then name
pub async fn fetch_all_rows(client: &DropletsClient, page_size: u32) -> Result<Vec<ListingRow>> {
    let mut rows = Vec::new();
    let mut page = 1;

    loop {
        let batch = client.list_droplets(page, page_size).await?;
        rows.extend(batch.droplets.iter().map(ListingRow::from));
        if batch.last_page {
            break;
        }
        page += 1;
    }

    info!("Listed {} droplets across {} page(s)", rows.len(), page);
    sort_rows(&mut rows);
    Ok(rows)
}

pub fn sort_rows(rows: &mut [ListingRow]) {
    rows.sort_by(|a, b| a.region.cmp(&b.region).then_with(|| a.name.cmp(&b.name)));
}

/// Render rows as a plain column-aligned table
///
/// Widths are measured in terminal columns, so wide characters in droplet
/// names do not break alignment.
pub fn render_table(rows: &[ListingRow]) -> String {
    let cells: Vec<[String; 9]> = rows.iter().map(ListingRow::cells).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_uppercase()).collect();
    push_line(&mut out, &header, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let cell = cell.as_ref();
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
