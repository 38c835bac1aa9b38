// src/extractors/section.rs

// --- Imports ---
use crate::profile::models::{Document, ExtractionResult, SectionKind};
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

// --- Constants ---
// Characters allowed between the tags of an embedded block: PEM bodies,
// static key comments ("# 2048 bit OpenVPN static key") and hex lines.
const SECTION_BODY_CLASS: &str = r"[\(\)#\n\-\+/= a-zA-Z0-9]";

fn compile_section_pattern(kind: SectionKind) -> Regex {
    let tag = regex::escape(kind.tag());
    let pattern = format!(r"<{tag}>\n{SECTION_BODY_CLASS}+?</{tag}>");
    Regex::new(&pattern).expect("Failed to compile section pattern")
}

// --- Regex Patterns (Lazy Static) ---
static CA_RE: Lazy<Regex> = Lazy::new(|| compile_section_pattern(SectionKind::Ca));
static CERT_RE: Lazy<Regex> = Lazy::new(|| compile_section_pattern(SectionKind::Cert));
static KEY_RE: Lazy<Regex> = Lazy::new(|| compile_section_pattern(SectionKind::Key));
static TLS_AUTH_RE: Lazy<Regex> = Lazy::new(|| compile_section_pattern(SectionKind::TlsAuth));

fn section_regex(kind: SectionKind) -> &'static Regex {
    match kind {
        SectionKind::Ca => &*CA_RE,
        SectionKind::Cert => &*CERT_RE,
        SectionKind::Key => &*KEY_RE,
        SectionKind::TlsAuth => &*TLS_AUTH_RE,
    }
}

// --- Main Extractor Structure ---
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self { Self {} }

    /// Returns the first `<tag>\n...</tag>` block for `kind`, tags included.
    pub fn extract_section<'a>(
        &self,
        document: &'a Document,
        kind: SectionKind,
    ) -> Result<&'a [u8], ExtractError> {
        let re = section_regex(kind);
        tracing::trace!("Matching <{}> with pattern: {}", kind.tag(), re.as_str());

        re.find(document.content())
            .map(|m| m.as_bytes())
            .ok_or_else(|| ExtractError::SectionNotFound(format!("<{}> block", kind.tag())))
    }

    /// Runs `extract_section` for every section. Missing sections are logged and left out.
    pub fn extract_all(&self, document: &Document) -> ExtractionResult {
        let mut result = ExtractionResult::default();

        for kind in SectionKind::ALL {
            match self.extract_section(document, kind) {
                Ok(block) => {
                    tracing::debug!("Found <{}> block ({} bytes)", kind.tag(), block.len());
                    result.insert(kind, block.to_vec());
                }
                Err(e) => tracing::warn!("{}", e),
            }
        }

        result
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const CA_BLOCK: &str = "<ca>\n-----BEGIN CERTIFICATE-----\nMIIBszCCAVmgAwIBAgIJ+abc/def=\n-----END CERTIFICATE-----\n</ca>";
    const TLS_BLOCK: &str = "<tls-auth>\n#\n# 2048 bit OpenVPN static key\n#\n-----BEGIN OpenVPN Static key V1-----\n0123456789abcdef\n-----END OpenVPN Static key V1-----\n</tls-auth>";

    fn doc(content: &str) -> Document {
        Document::new("client.ovpn", content.as_bytes().to_vec())
    }

    #[test]
    fn test_extracts_block_including_tags() {
        let content = format!("client\ndev tun\n{}\nkey-direction 1\n{}\n", CA_BLOCK, TLS_BLOCK);
        let document = doc(&content);
        let extractor = SectionExtractor::new();

        assert_eq!(extractor.extract_section(&document, SectionKind::Ca).unwrap(), CA_BLOCK.as_bytes());
        assert_eq!(extractor.extract_section(&document, SectionKind::TlsAuth).unwrap(), TLS_BLOCK.as_bytes());
    }

    #[test]
    fn test_only_first_occurrence_is_used() {
        let content = "<key>\nFIRST\n</key>\n<key>\nSECOND\n</key>\n";
        let document = doc(content);

        let block = SectionExtractor::new().extract_section(&document, SectionKind::Key).unwrap();
        assert_eq!(block, b"<key>\nFIRST\n</key>");
    }

    #[test]
    fn test_disallowed_characters_prevent_match() {
        // '.' and '\r' are outside the allowed body characters
        let document = doc("<cert>\nabc.def\n</cert>\n<key>\r\nabc\r\n</key>\n");
        let extractor = SectionExtractor::new();

        assert!(matches!(
            extractor.extract_section(&document, SectionKind::Cert),
            Err(ExtractError::SectionNotFound(_))
        ));
        assert!(extractor.extract_section(&document, SectionKind::Key).is_err());
    }

    #[test]
    fn test_opening_tag_requires_newline() {
        let document = doc("<ca>inline</ca>\n");
        assert!(SectionExtractor::new().extract_section(&document, SectionKind::Ca).is_err());
    }

    #[test]
    fn test_cert_pattern_does_not_match_ca() {
        let document = doc(CA_BLOCK);
        assert!(SectionExtractor::new().extract_section(&document, SectionKind::Cert).is_err());
    }

    #[test]
    fn test_non_utf8_bytes_outside_blocks_are_ignored() {
        let mut content = b"# G\xe9n\xe9r\xe9 par l'admin\n".to_vec();
        content.extend_from_slice(CA_BLOCK.as_bytes());
        let document = Document::new("client.ovpn", content);

        let block = SectionExtractor::new().extract_section(&document, SectionKind::Ca).unwrap();
        assert_eq!(block, CA_BLOCK.as_bytes());
    }

    #[test]
    fn test_extract_all_is_best_effort() {
        let content = format!("{}\n<cert>\nCERT\n</cert>\n<key>\nKEY\n</key>\n", CA_BLOCK);
        let document = doc(&content);

        let result = SectionExtractor::new().extract_all(&document);
        assert_eq!(result.len(), 3);
        assert_eq!(result.get(SectionKind::Cert), Some(&b"<cert>\nCERT\n</cert>"[..]));
        assert_eq!(result.get(SectionKind::TlsAuth), None);
    }
}
