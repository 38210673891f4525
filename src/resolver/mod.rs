//! Public IP resolution with provider fallback.
//!
//! The resolver performs the primary lookup against a full-featured
//! IP-geolocation endpoint; on any failure (network, non-2xx status,
//! provider-reported error) it falls back to a minimal IP-only endpoint. The
//! fallback never surfaces its own errors: it either yields a usable IP or
//! nothing, and "nothing" re-raises the original primary failure.

mod payload;
mod types;

pub use types::IpInfo;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error_handling::{categorize_reqwest_error, InitializationError, ResolveError};
use payload::{FallbackPayload, PrimaryPayload};

/// Resolves the machine's public IP info via two configured providers.
///
/// Holds no mutable state between calls; each call performs its own fetches
/// and is safe to invoke repeatedly and concurrently. The two requests within
/// one call are strictly sequential -- the fallback is only attempted after
/// the primary definitively fails.
#[derive(Debug, Clone)]
pub struct IpResolver {
    client: reqwest::Client,
    primary_url: Url,
    fallback_url: Url,
}

impl IpResolver {
    /// Creates a resolver from a configured HTTP client and endpoint URLs.
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client carrying the connect/read timeouts
    /// * `config` - Configuration naming the primary and fallback endpoints
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::EndpointUrlError` if either configured
    /// endpoint is not a valid URL.
    pub fn new(client: reqwest::Client, config: &Config) -> Result<Self, InitializationError> {
        let primary_url = parse_endpoint(&config.primary_url)?;
        let fallback_url = parse_endpoint(&config.fallback_url)?;
        Ok(Self {
            client,
            primary_url,
            fallback_url,
        })
    }

    /// Resolves the public IP info, falling back to the IP-only provider.
    ///
    /// On primary success, returns the fully mapped [`IpInfo`]. On primary
    /// failure, attempts the fallback endpoint; a usable fallback IP yields an
    /// [`IpInfo`] with every other field empty/absent, while a failing or
    /// blank fallback re-raises the original primary error.
    ///
    /// # Errors
    ///
    /// Returns the primary attempt's [`ResolveError`] -- `Network`,
    /// `HttpStatus`, or `Provider` -- when neither provider produced a result.
    pub async fn resolve(&self) -> Result<IpInfo, ResolveError> {
        match self.fetch_primary().await {
            Ok(info) => Ok(info),
            Err(primary_error) => {
                warn!(
                    "Primary lookup via {} failed: {}; trying fallback",
                    self.primary_url, primary_error
                );
                match self.fetch_fallback().await {
                    Some(info) => {
                        debug!("Fallback lookup yielded {}", info.ip);
                        Ok(info)
                    }
                    None => Err(primary_error),
                }
            }
        }
    }

    /// Queries the primary provider and maps the full payload.
    async fn fetch_primary(&self) -> Result<IpInfo, ResolveError> {
        let payload: PrimaryPayload = self.get_json(&self.primary_url).await?;
        if !payload.success {
            return Err(ResolveError::Provider {
                detail: payload.failure_detail(),
            });
        }
        Ok(IpInfo::from(payload))
    }

    /// Queries the fallback provider for an IP-only record.
    ///
    /// The fallback's own errors are swallowed (logged at debug level), never
    /// surfacing in place of the primary error. A blank `ip` also counts as
    /// "no result".
    async fn fetch_fallback(&self) -> Option<IpInfo> {
        let payload: FallbackPayload = match self.get_json(&self.fallback_url).await {
            Ok(payload) => payload,
            Err(error) => {
                debug!(
                    "Fallback lookup via {} failed: {}",
                    self.fallback_url, error
                );
                return None;
            }
        };
        if payload.ip.trim().is_empty() {
            debug!("Fallback lookup via {} returned a blank ip", self.fallback_url);
            return None;
        }
        Some(IpInfo {
            ip: payload.ip,
            ..IpInfo::default()
        })
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// A transport failure maps to `Network`, a status outside 200-299 maps to
    /// `HttpStatus`, and a body read/decode failure maps back to `Network`.
    /// The response is consumed or dropped on every path, releasing the
    /// underlying connection.
    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ResolveError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(categorize_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::HttpStatus {
                code: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(categorize_reqwest_error)
    }
}

fn parse_endpoint(url: &str) -> Result<Url, InitializationError> {
    Url::parse(url).map_err(|source| InitializationError::EndpointUrlError {
        url: url.to_string(),
        source,
    })
}
