//! Configuration constants.
//!
//! This module defines the compiled-in endpoint list and the fixed formats used
//! for scan identifiers, export file names and map links.

/// Geolocation endpoints tried in order when no `--endpoint` is given.
///
/// Order is fallback priority: the first endpoint that answers successfully wins.
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://ipapi.co/json/",
    "https://ipwho.is/",
    "https://ip-api.com/json/",
];

/// Prefix of every scan identifier (`SCAN-XXXXXXXXX`).
pub const SCAN_ID_PREFIX: &str = "SCAN-";

/// Number of random base-36 characters following [`SCAN_ID_PREFIX`].
pub const SCAN_ID_RANDOM_LEN: usize = 9;

/// Alphabet for the random part of a scan identifier.
pub const SCAN_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Prefix of exported file names (`ip_scan_<scan_id>_<epoch_millis>.json`).
pub const EXPORT_FILE_PREFIX: &str = "ip_scan_";

/// Base of the embeddable OpenStreetMap view.
pub const MAP_EMBED_BASE_URL: &str = "https://www.openstreetmap.org/export/embed.html";

/// Half-width of the map bounding box in degrees, applied to both axes.
pub const MAP_BBOX_DELTA: f64 = 0.1;

/// Default User-Agent string for HTTP requests.
///
/// Some of the free geolocation APIs reject requests without a User-Agent, so
/// one is always sent. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_recon/", env!("CARGO_PKG_VERSION"));
