// Static settings

// Credential sizing. Each field lives in a fixed heapless buffer.
pub const WIFI_SSID_MAX: usize = 32; // 802.11 SSID limit
pub const WIFI_PASS_MAX: usize = 63; // WPA2 passphrase limit
pub const API_ID_MAX: usize = 64; // Spotify ids/secrets are 32 hex chars, keep headroom
pub const REFRESH_TOKEN_MAX: usize = 256;
