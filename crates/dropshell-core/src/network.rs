//! Private/public IPv4 address classification

use std::net::Ipv4Addr;

/// Check whether an address belongs to a private range
///
/// Loopback (`127.0.0.0/8`) and the RFC1918 blocks count as private.
/// Anything that does not parse as IPv4 is treated as public so that it
/// still shows up somewhere.
pub fn is_private_addr(addr: &str) -> bool {
    match addr.trim().parse::<Ipv4Addr>() {
        Ok(ip) => ip.is_loopback() || ip.is_private(),
        Err(_) => false,
    }
}

/// Split the first two reported addresses into `(private, public)`
///
/// Each address lands in the slot of its class. When both classify the
/// same way the second one wins. Missing slots are empty strings.
pub fn classify_addresses<S: AsRef<str>>(addrs: &[S]) -> (String, String) {
    let mut private = String::new();
    let mut public = String::new();

    for addr in addrs.iter().take(2) {
        let addr = addr.as_ref();
        if addr.is_empty() {
            continue;
        }
        if is_private_addr(addr) {
            private = addr.to_string();
        } else {
            public = addr.to_string();
        }
    }

    (private, public)
}
