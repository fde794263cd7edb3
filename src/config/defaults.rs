//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{api, tiles};

/// Default geocoding endpoint
pub const DEFAULT_GEOCODER_URL: &str = api::NOMINATIM_URL;

/// Default Accept-Language header for geocoding requests
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Default geocoding request timeout in seconds
pub const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 10;

/// Default geocoding cache capacity (0 disables caching)
pub const DEFAULT_CACHE_SIZE: usize = 0;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7979;

/// Default map tile template
pub const DEFAULT_TILE_URL: &str = tiles::OSM_TILE_URL;

/// Default tile attribution
pub const DEFAULT_ATTRIBUTION: &str = tiles::OSM_ATTRIBUTION;

/// Default initial map zoom
pub const DEFAULT_ZOOM: u8 = 1;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geospan";
