// Template credentials. Fill these in before flashing, or leave them as-is
// and set build-time environment variables of the same names (see `config`).
// Keep real values out of version control.

// wifi credentials

/// Wi-Fi network name.
pub const WIFI_SSID: &str = "your_wifi_here";
/// WPA2 passphrase.
pub const WIFI_PASS: &str = "your_password_here";

// spotify developer credentials
// get these from https://developer.spotify.com/dashboard

/// OAuth application id issued by the developer dashboard.
pub const CLIENT_ID: &str = "your_client_id_here";
/// OAuth application secret issued alongside the id.
pub const CLIENT_SECRET: &str = "your_secret_here";

/// Long-lived token exchanged for short-lived access tokens,
/// generated separately with your own account.
pub const REFRESH_TOKEN: &str = "your_refresh_token_here";
