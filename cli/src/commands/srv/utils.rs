//! # Folio Server Utilities
//!
//! File: cli/src/commands/srv/utils.rs
//! Author: Christi Mahu
//!
//! Startup helpers for `folio srv`: a sanity check of the served directory and
//! the machine's LAN address for the "Network URL" line.
//!
use std::net::{IpAddr, UdpSocket};
use std::path::Path;
use tracing::{debug, info, warn};

/// Logs what is about to be served. Returns `false` (and warns) when the
/// directory has no `index.html`, which usually means `folio build` was not run.
pub fn inspect_site_directory(path: &Path) -> bool {
    match std::fs::read_dir(path) {
        Ok(entries) => {
            let names: Vec<String> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect();
            info!("Serving {} entries from {}", names.len(), path.display());
            debug!("Entries: {:?}", names);
        }
        Err(e) => {
            warn!(
                "Could not read directory contents for '{}': {}",
                path.display(),
                e
            );
        }
    }

    let has_index = path.join("index.html").is_file();
    if !has_index {
        warn!(
            "No index.html in {}. Run `folio build` to generate the site.",
            path.display()
        );
    }
    has_index
}

/// Address of the interface that would route to the internet. Connecting a UDP
/// socket sends no packets; it only selects a route.
pub fn local_network_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    if ip.is_loopback() || ip.is_unspecified() {
        debug!("No routable local address found");
        return None;
    }
    info!("Found local IP: {}", ip);
    Some(ip)
}
