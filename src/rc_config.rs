//! The structured `.talismanrc` format and its exemption queries.

use crate::error::ConfigError;
use crate::matcher::PatternMatcher;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default name of the structured config file at the repository root.
pub const DEFAULT_RC_FILE: &str = ".talismanrc";

/// Per-file exemption entry in `.talismanrc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIgnoreConfig {
    /// Glob-style pattern naming the exempted file.
    #[serde(rename = "filename")]
    pub file_name: String,
    /// Expected checksum of the file's content. Recorded here, verified
    /// elsewhere.
    pub checksum: String,
    /// Detectors to skip for this file. Empty means all of them.
    pub ignore_detectors: Vec<String>,
}

impl FileIgnoreConfig {
    /// Whether this entry exempts anything for `detector_name`: it needs a
    /// usable filename and must either name the detector or be unscoped.
    fn is_effective(&self, detector_name: &str) -> bool {
        !is_blank(&self.file_name)
            && (self.ignore_detectors.is_empty()
                || self.ignore_detectors.iter().any(|d| d == detector_name))
    }
}

/// The decoded `.talismanrc` document.
///
/// Queries are pure functions over the immutable entry list, so a parsed
/// config can be shared across threads without synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalismanRc {
    #[serde(rename = "fileignoreconfig")]
    pub file_ignore_config: Vec<FileIgnoreConfig>,
}

impl TalismanRc {
    /// Decode a `.talismanrc` document.
    ///
    /// Malformed content degrades to the empty config so a broken file does
    /// not block the scan; the failure is logged. Use
    /// [`Self::try_from_bytes`] to surface the failure instead.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::try_from_bytes(bytes).unwrap_or_else(|err| {
            warn!("Unable to parse {DEFAULT_RC_FILE}, ignoring its rules: {err}");
            Self::default()
        })
    }

    /// Decode a `.talismanrc` document, keeping the failure.
    ///
    /// An empty or null document is a normal state and decodes to the
    /// default, not an error.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let doc: Option<Self> = serde_yaml::from_slice(bytes)?;
        Ok(doc.unwrap_or_default())
    }

    /// Whether the document decoded to no entries at all.
    pub fn is_empty(&self) -> bool {
        self.file_ignore_config.is_empty()
    }

    /// Whether no entry can exempt a change unconditionally: either there
    /// are no entries, or every usable entry is scoped to specific
    /// detectors. Callers use this to skip exemption checks entirely.
    pub fn accepts_all(&self) -> bool {
        !self
            .file_ignore_config
            .iter()
            .any(|entry| !is_blank(&entry.file_name) && entry.ignore_detectors.is_empty())
    }

    /// Whether `detector_name` should check the change at all.
    pub fn accept<M: PatternMatcher>(&self, addition: &M, detector_name: &str) -> bool {
        !self.deny(addition, detector_name)
    }

    /// Whether the change is exempt from `detector_name`: true when any
    /// rule in force for the detector matches the change's path.
    pub fn deny<M: PatternMatcher>(&self, addition: &M, detector_name: &str) -> bool {
        self.effective_rules(detector_name)
            .iter()
            .any(|pattern| addition.matches(pattern))
    }

    /// Filename patterns of the entries in force for `detector_name`, in
    /// document order.
    pub fn effective_rules(&self, detector_name: &str) -> Vec<&str> {
        self.file_ignore_config
            .iter()
            .filter(|entry| entry.is_effective(detector_name))
            .map(|entry| entry.file_name.as_str())
            .collect()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
