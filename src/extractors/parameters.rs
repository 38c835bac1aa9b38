// src/extractors/parameters.rs
use crate::profile::models::{ConnectionParameters, Document, PROTOCOL};
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::str::FromStr;

// Matches `HOST=addr:port` anywhere, including `OVPN_ACCESS_SERVER_WSHOST=...`
static REMOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"HOST=([\.\-a-zA-Z0-9]+):([0-9]+)").expect("Failed to compile REMOTE_RE")
});

static CIPHER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"cipher ([\-a-zA-Z0-9]+)").expect("Failed to compile CIPHER_RE")
});

static RENEG_SEC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"reneg-sec ([0-9]+)").expect("Failed to compile RENEG_SEC_RE")
});

static KEY_DIRECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"key-direction ([0-1])").expect("Failed to compile KEY_DIRECTION_RE")
});

static NOBIND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"nobind").expect("Failed to compile NOBIND_RE")
});

/// Scalar directives that must be present for the readme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKey {
    Host,
    Port,
    Cipher,
    RenegSec,
    KeyDirection,
}

impl ParameterKey {
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKey::Host => "host",
            ParameterKey::Port => "port",
            ParameterKey::Cipher => "cipher",
            ParameterKey::RenegSec => "reneg-sec",
            ParameterKey::KeyDirection => "key-direction",
        }
    }

    /// Pattern and capture group holding this parameter's value.
    fn pattern(&self) -> (&'static Regex, usize) {
        match self {
            ParameterKey::Host => (&*REMOTE_RE, 1),
            ParameterKey::Port => (&*REMOTE_RE, 2),
            ParameterKey::Cipher => (&*CIPHER_RE, 1),
            ParameterKey::RenegSec => (&*RENEG_SEC_RE, 1),
            ParameterKey::KeyDirection => (&*KEY_DIRECTION_RE, 1),
        }
    }
}

/// Returns the first value captured for `key`.
/// The rest of the document may hold arbitrary bytes; only the captured value is decoded.
pub fn extract_parameter<'a>(document: &'a Document, key: ParameterKey) -> Result<&'a str, ExtractError> {
    let (re, group) = key.pattern();
    let raw = re
        .captures(document.content())
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_bytes())
        .ok_or_else(|| ExtractError::ParameterNotFound(key.name().to_string()))?;

    std::str::from_utf8(raw).map_err(|_| ExtractError::InvalidParameter {
        name: key.name().to_string(),
        value: String::from_utf8_lossy(raw).into_owned(),
    })
}

/// `false` when the `nobind` token appears anywhere in the document.
pub fn detect_bind_flag(document: &Document) -> bool {
    !NOBIND_RE.is_match(document.content())
}

fn parse_parameter<T: FromStr>(document: &Document, key: ParameterKey) -> Result<T, ExtractError> {
    let raw = extract_parameter(document, key)?;
    raw.parse::<T>().map_err(|_| ExtractError::InvalidParameter {
        name: key.name().to_string(),
        value: raw.to_string(),
    })
}

/// Collects every connection parameter. Fails on the first one missing.
pub fn extract_connection_parameters(document: &Document) -> Result<ConnectionParameters, ExtractError> {
    let params = ConnectionParameters {
        remote_host: extract_parameter(document, ParameterKey::Host)?.to_string(),
        remote_port: extract_parameter(document, ParameterKey::Port)?.to_string(),
        protocol: PROTOCOL,
        cipher: extract_parameter(document, ParameterKey::Cipher)?.to_string(),
        bind: detect_bind_flag(document),
        reneg_sec: extract_parameter(document, ParameterKey::RenegSec)?.to_string(),
        key_direction: parse_parameter(document, ParameterKey::KeyDirection)?,
    };

    match serde_json::to_string(&params) {
        Ok(json) => tracing::debug!("Parsed connection parameters: {}", json),
        Err(e) => tracing::debug!("Could not serialize connection parameters: {}", e),
    }

    Ok(params)
}
