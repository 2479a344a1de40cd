//! Wire types for `GET /v2/droplets`
//!
//! Only the fields dropshell reads are modeled; serde ignores the rest.
//! Everything that can be absent in practice carries `#[serde(default)]`.

use dropshell_core::{classify_addresses, InstanceSummary};
use serde::Deserialize;

/// Body of a successful listing response
#[derive(Debug, Clone, Deserialize)]
pub struct DropletsResponse {
    #[serde(default)]
    pub droplets: Vec<Droplet>,
    #[serde(default)]
    pub links: Option<Links>,
}

impl DropletsResponse {
    /// No `links`, no `pages` or no `next` all mean this is the last page
    pub fn is_last_page(&self) -> bool {
        self.links
            .as_ref()
            .and_then(|links| links.pages.as_ref())
            .and_then(|pages| pages.next.as_deref())
            .map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub pages: Option<PageLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub networks: Networks,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Size {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub price_monthly: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkV4 {
    pub ip_address: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl Droplet {
    /// `(private, public)` derived from the first two v4 addresses
    pub fn addresses(&self) -> (String, String) {
        let addrs: Vec<&str> = self
            .networks
            .v4
            .iter()
            .map(|net| net.ip_address.as_str())
            .collect();
        classify_addresses(&addrs)
    }

    pub fn to_summary(&self) -> InstanceSummary {
        let (private_addr, public_addr) = self.addresses();
        InstanceSummary {
            id: self.id,
            name: self.name.clone(),
            region: self.region.slug.clone(),
            private_addr,
            public_addr,
        }
    }
}

/// One decoded page of raw droplet records
#[derive(Debug, Clone)]
pub struct DropletsPage {
    pub droplets: Vec<Droplet>,
    pub last_page: bool,
}

impl From<DropletsResponse> for DropletsPage {
    fn from(response: DropletsResponse) -> Self {
        let last_page = response.is_last_page();
        Self {
            droplets: response.droplets,
            last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "droplets": [
            {
                "id": 3164444,
                "name": "example.com",
                "memory": 1024,
                "region": {"slug": "nyc3", "name": "New York 3"},
                "image": {"id": 6918990, "name": "14.04 x64", "distribution": "Ubuntu"},
                "size": {"slug": "s-1vcpu-1gb", "price_monthly": 6.0},
                "networks": {
                    "v4": [
                        {"ip_address": "10.128.192.124", "type": "private"},
                        {"ip_address": "192.241.165.154", "type": "public"}
                    ],
                    "v6": []
                }
            }
        ],
        "links": {"pages": {"next": "https://api.digitalocean.com/v2/droplets?page=2&per_page=1"}},
        "meta": {"total": 2}
    }"#;

    #[test]
    fn test_decode_listing() {
        let response: DropletsResponse = serde_json::from_str(BODY).unwrap();
        assert_eq!(response.droplets.len(), 1);
        assert!(!response.is_last_page());

        let droplet = &response.droplets[0];
        assert_eq!(droplet.region.slug, "nyc3");
        assert_eq!(droplet.image.id, 6918990);
        assert_eq!(droplet.size.price_monthly, 6.0);
    }

    #[test]
    fn test_summary_classifies_addresses() {
        let response: DropletsResponse = serde_json::from_str(BODY).unwrap();
        let summary = response.droplets[0].to_summary();
        assert_eq!(summary.id, 3164444);
        assert_eq!(summary.private_addr, "10.128.192.124");
        assert_eq!(summary.public_addr, "192.241.165.154");
    }

    #[test]
    fn test_missing_links_is_last_page() {
        let response: DropletsResponse = serde_json::from_str(r#"{"droplets": []}"#).unwrap();
        assert!(response.is_last_page());
    }

    #[test]
    fn test_links_without_next_is_last_page() {
        let response: DropletsResponse = serde_json::from_str(
            r#"{"droplets": [], "links": {"pages": {"prev": "https://example/?page=1"}}}"#,
        )
        .unwrap();
        assert!(response.is_last_page());

        let response: DropletsResponse =
            serde_json::from_str(r#"{"droplets": [], "links": {}}"#).unwrap();
        assert!(response.is_last_page());
    }

    #[test]
    fn test_droplet_without_networks() {
        let droplet: Droplet = serde_json::from_str(r#"{"id": 7, "name": "bare"}"#).unwrap();
        let summary = droplet.to_summary();
        assert!(summary.private_addr.is_empty());
        assert!(summary.public_addr.is_empty());
        assert!(summary.region.is_empty());
    }
}
