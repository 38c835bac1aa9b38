// src/profile/models.rs
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Raw bytes of an OpenVPN client profile together with where it came from.
/// Profiles are not required to be valid UTF-8.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    content: Vec<u8>,
}

impl Document {
    pub fn new<P: AsRef<Path>>(path: P, content: Vec<u8>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            content,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// The four certificate/key blocks embedded in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Ca,
    Cert,
    Key,
    TlsAuth,
}

impl SectionKind {
    /// All sections, in the order their files are written.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Ca,
        SectionKind::Cert,
        SectionKind::Key,
        SectionKind::TlsAuth,
    ];

    /// Name used in the `<tag>...</tag>` delimiters.
    pub fn tag(&self) -> &'static str {
        match self {
            SectionKind::Ca => "ca",
            SectionKind::Cert => "cert",
            SectionKind::Key => "key",
            SectionKind::TlsAuth => "tls-auth",
        }
    }

    /// Extension appended to the profile base name for this section's file.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            SectionKind::Ca => "ca.crt",
            SectionKind::Cert => "crt",
            SectionKind::Key => "key",
            SectionKind::TlsAuth => "tls-auth",
        }
    }
}

/// Matched section blocks keyed by section. Missing sections have no entry.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    sections: BTreeMap<SectionKind, Vec<u8>>,
}

impl ExtractionResult {
    pub fn insert(&mut self, kind: SectionKind, content: Vec<u8>) {
        self.sections.insert(kind, content);
    }

    pub fn get(&self, kind: SectionKind) -> Option<&[u8]> {
        self.sections.get(&kind).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

}

/// Transport protocol reported in the readme. Profiles handled here always tunnel over UDP.
pub const PROTOCOL: &str = "UDP";

/// Scalar connection directives summarized in the readme.
/// Port and renegotiation interval are kept as captured digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionParameters {
    pub remote_host: String,
    pub remote_port: String,
    pub protocol: &'static str,
    pub cipher: String,
    pub bind: bool,
    pub reneg_sec: String,
    pub key_direction: u8,
}

impl ConnectionParameters {
    /// Local and remote ports, written as `local/remote`.
    pub fn port_pair(&self) -> String {
        format!("{}/{}", self.remote_port, self.remote_port)
    }

    pub fn bind_label(&self) -> &'static str {
        if self.bind {
            "Yes"
        } else {
            "No"
        }
    }
}
