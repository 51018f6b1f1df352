//! Bearer token formatting, parsing, and HMAC signing.
//!
//! A token looks like `sf_v1_{user_id}_{expires_unix}.{signature}`, where the
//! signature is the unpadded base64url HMAC-SHA256 of the signing input built
//! by [`build_signing_input`].

use std::{fmt, str::FromStr};

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::domain::users::records::UserId;

type HmacSha256 = Hmac<Sha256>;

/// Token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "sf";

/// Minimum accepted signing secret length, in bytes.
pub const TOKEN_SECRET_MIN_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTokenVersion {
    V1,
}

impl ApiTokenVersion {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl FromStr for ApiTokenVersion {
    type Err = ApiTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

/// HMAC key used to sign and verify tokens.
#[derive(Clone)]
pub struct TokenSecret {
    bytes: Zeroizing<Vec<u8>>,
}

impl TokenSecret {
    /// Wrap raw key material.
    ///
    /// # Errors
    ///
    /// Returns [`ApiTokenError::SecretTooShort`] when fewer than
    /// [`TOKEN_SECRET_MIN_BYTES`] bytes are given.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ApiTokenError> {
        let bytes = Zeroizing::new(bytes);

        if bytes.len() < TOKEN_SECRET_MIN_BYTES {
            return Err(ApiTokenError::SecretTooShort);
        }

        Ok(Self { bytes })
    }

    /// Decode a standard base64 secret, as stored in configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not valid base64 or is too short.
    pub fn from_base64(encoded: &str) -> Result<Self, ApiTokenError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(ApiTokenError::InvalidSecretEncoding)?;

        Self::from_bytes(bytes)
    }

    /// Generate a fresh random secret.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new(vec![0_u8; TOKEN_SECRET_MIN_BYTES]);

        OsRng.fill_bytes(&mut bytes);

        Self { bytes }
    }

    /// Standard base64 form, suitable for `TOKEN_SECRET`.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.bytes.as_slice())
    }

    fn mac(&self) -> Result<HmacSha256, ApiTokenError> {
        HmacSha256::new_from_slice(&self.bytes).map_err(|_invalid| ApiTokenError::SecretTooShort)
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(**redacted**)")
    }
}

#[derive(Debug, Clone)]
pub struct ParsedApiToken {
    pub user: UserId,
    pub version: ApiTokenVersion,
    pub expires_at: Timestamp,
    pub signature: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token uses an unsupported version")]
    UnsupportedVersion,

    #[error("api token signature encoding is invalid")]
    InvalidSignatureEncoding(#[source] base64::DecodeError),

    #[error("token secret is not valid base64")]
    InvalidSecretEncoding(#[source] base64::DecodeError),

    #[error("token secret is too short")]
    SecretTooShort,
}

#[must_use]
pub fn format_api_token(
    user: UserId,
    version: ApiTokenVersion,
    expires_at: Timestamp,
    signature: &[u8],
) -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}_{}_{}.{}",
        version.segment(),
        user,
        expires_at.as_second(),
        URL_SAFE_NO_PAD.encode(signature)
    )
}

pub fn parse_api_token(token: &str) -> Result<ParsedApiToken, ApiTokenError> {
    let (claims, signature) = token.split_once('.').ok_or(ApiTokenError::InvalidFormat)?;

    let mut parts = claims.splitn(4, '_');

    let prefix = parts.next().ok_or(ApiTokenError::InvalidFormat)?;
    let version_segment = parts.next().ok_or(ApiTokenError::InvalidFormat)?;
    let user_segment = parts.next().ok_or(ApiTokenError::InvalidFormat)?;
    let expires_segment = parts.next().ok_or(ApiTokenError::InvalidFormat)?;

    if prefix != API_TOKEN_PREFIX {
        return Err(ApiTokenError::InvalidFormat);
    }

    let version = ApiTokenVersion::from_str(version_segment)?;

    let user = user_segment
        .parse::<i64>()
        .map_err(|_invalid| ApiTokenError::InvalidFormat)?;

    let expires_at = expires_segment
        .parse::<i64>()
        .ok()
        .and_then(|seconds| Timestamp::from_second(seconds).ok())
        .ok_or(ApiTokenError::InvalidFormat)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(ApiTokenError::InvalidSignatureEncoding)?;

    Ok(ParsedApiToken {
        user: UserId::from_i64(user),
        version,
        expires_at,
        signature,
    })
}

/// Build the canonical HMAC input bytes for a token.
///
/// Format: `{user_id}:{version_i16_decimal}:{expires_unix_seconds}`
#[must_use]
pub fn build_signing_input(
    user: UserId,
    version: ApiTokenVersion,
    expires_at: Timestamp,
) -> Vec<u8> {
    format!("{user}:{}:{}", version.as_i16(), expires_at.as_second()).into_bytes()
}

/// Sign `input` with `secret`.
///
/// # Errors
///
/// Returns an error if the secret cannot key the MAC.
pub fn sign(secret: &TokenSecret, input: &[u8]) -> Result<Vec<u8>, ApiTokenError> {
    let mut mac = secret.mac()?;

    mac.update(input);

    Ok(mac.finalize().into_bytes().to_vec())
}

/// Constant-time check of `signature` over `input`.
///
/// # Errors
///
/// Returns an error if the secret cannot key the MAC.
pub fn verify_signature(
    secret: &TokenSecret,
    input: &[u8],
    signature: &[u8],
) -> Result<bool, ApiTokenError> {
    let mut mac = secret.mac()?;

    mac.update(input);

    Ok(mac.verify_slice(signature).is_ok())
}
