use heapless::String;
use log::warn;
use snafu::{Snafu, ensure};

use crate::secrets;
use crate::settings::{API_ID_MAX, REFRESH_TOKEN_MAX, WIFI_PASS_MAX, WIFI_SSID_MAX};

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// A required credential was left blank.
    #[snafu(display("{field} is empty"))]
    Empty { field: &'static str },
    /// A credential does not fit its fixed buffer.
    #[snafu(display("{field} is longer than {max} bytes"))]
    TooLong { field: &'static str, max: usize },
}

/// Immutable process-wide credentials, built once at startup.
///
/// Each value comes from a build-time environment variable named after the
/// matching constant in [`secrets`], falling back to the template
/// placeholder so the crate always compiles before real values exist.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// WiFi SSID
    pub wifi_ssid: String<WIFI_SSID_MAX>,
    /// WPA2 passphrase. None is Open network.
    pub wifi_pass: Option<String<WIFI_PASS_MAX>>,
    /// OAuth application id
    pub client_id: String<API_ID_MAX>,
    /// OAuth application secret
    pub client_secret: String<API_ID_MAX>,
    /// Long-lived token traded for short-lived access tokens
    pub refresh_token: String<REFRESH_TOKEN_MAX>,
}

impl Credentials {
    /// Builds the credential set from build-time environment overrides,
    /// falling back to the [`secrets`] placeholders.
    pub fn new() -> Result<Self, CredentialError> {
        Self::from_values(
            option_env!("WIFI_SSID").unwrap_or(secrets::WIFI_SSID),
            option_env!("WIFI_PASS").unwrap_or(secrets::WIFI_PASS),
            option_env!("CLIENT_ID").unwrap_or(secrets::CLIENT_ID),
            option_env!("CLIENT_SECRET").unwrap_or(secrets::CLIENT_SECRET),
            option_env!("REFRESH_TOKEN").unwrap_or(secrets::REFRESH_TOKEN),
        )
    }

    /// Validates and stores the five values. An empty passphrase selects an
    /// open network; every other field must be non-empty and within bounds.
    pub fn from_values(
        wifi_ssid: &str,
        wifi_pass: &str,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<Self, CredentialError> {
        let creds = Credentials {
            wifi_ssid: bounded("WIFI_SSID", wifi_ssid)?,
            wifi_pass: match wifi_pass {
                "" => None,
                pw => Some(bounded("WIFI_PASS", pw)?),
            },
            client_id: bounded("CLIENT_ID", client_id)?,
            client_secret: bounded("CLIENT_SECRET", client_secret)?,
            refresh_token: bounded("REFRESH_TOKEN", refresh_token)?,
        };

        if !creds.is_provisioned() {
            warn!("template credentials still in place, connection attempts will fail");
        }

        Ok(creds)
    }

    /// True once every field differs from its template placeholder.
    pub fn is_provisioned(&self) -> bool {
        self.wifi_ssid.as_str() != secrets::WIFI_SSID
            && self.wifi_pass.as_deref() != Some(secrets::WIFI_PASS)
            && self.client_id.as_str() != secrets::CLIENT_ID
            && self.client_secret.as_str() != secrets::CLIENT_SECRET
            && self.refresh_token.as_str() != secrets::REFRESH_TOKEN
    }
}

fn bounded<const N: usize>(
    field: &'static str,
    value: &str,
) -> Result<String<N>, CredentialError> {
    ensure!(!value.is_empty(), EmptySnafu { field });
    value.try_into().map_err(|_| CredentialError::TooLong { field, max: N })
}

// Keeps passphrase and tokens out of log output.
impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("wifi_ssid", &self.wifi_ssid)
            .finish_non_exhaustive()
    }
}
