//! Which format bridges this build and this machine provide.

use std::fmt;

use serde::Serialize;

use super::legacy::LegacyBridge;
use crate::error::{Error, Result};

/// A format bridge the converters depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capability {
    /// `.docx` reader (cargo feature `docx`)
    Docx,
    /// HTML-to-text bridge (cargo feature `html`)
    Html,
    /// External converter for `.doc` and `.rtf`
    Legacy,
    /// PDF text extraction (cargo feature `pdf`)
    Pdf,
}

impl Capability {
    /// Every capability, in display order.
    pub const ALL: [Capability; 4] = [
        Capability::Docx,
        Capability::Html,
        Capability::Legacy,
        Capability::Pdf,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Capability::Docx => "DOCX reader",
            Capability::Html => "HTML bridge",
            Capability::Legacy => "Legacy converter (pandoc)",
            Capability::Pdf => "PDF extraction",
        }
    }

    /// How to make the capability available.
    pub fn hint(self) -> &'static str {
        match self {
            Capability::Docx => "rebuild with the `docx` feature",
            Capability::Html => "rebuild with the `html` feature",
            Capability::Legacy => "install pandoc or set DOCDOWN_PANDOC to its path",
            Capability::Pdf => "rebuild with the `pdf` feature",
        }
    }

    /// The error reported when this capability is missing.
    pub fn missing(self) -> Error {
        Error::MissingCapability {
            capability: self.name(),
            hint: self.hint(),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities resolved once, before any file is converted.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    legacy: Option<LegacyBridge>,
}

impl Capabilities {
    /// Probe the build features and the external converter.
    pub fn detect() -> Self {
        let caps = Self {
            legacy: LegacyBridge::probe(),
        };
        for capability in Capability::ALL {
            log::debug!(
                "{}: {}",
                capability,
                if caps.is_available(capability) { "available" } else { "missing" }
            );
        }
        caps
    }

    /// Capabilities with an explicit legacy bridge (or none).
    pub fn with_legacy(legacy: Option<LegacyBridge>) -> Self {
        Self { legacy }
    }

    /// Whether a capability can be used.
    pub fn is_available(&self, capability: Capability) -> bool {
        match capability {
            Capability::Docx => cfg!(feature = "docx"),
            Capability::Html => cfg!(feature = "html"),
            Capability::Legacy => self.legacy.is_some(),
            Capability::Pdf => cfg!(feature = "pdf"),
        }
    }

    /// Fail with `MissingCapability` unless the capability is available.
    pub fn require(&self, capability: Capability) -> Result<()> {
        if self.is_available(capability) {
            Ok(())
        } else {
            Err(capability.missing())
        }
    }

    /// The legacy converter bridge.
    pub fn legacy(&self) -> Result<&LegacyBridge> {
        self.legacy
            .as_ref()
            .ok_or_else(|| Capability::Legacy.missing())
    }

    /// Availability of every capability, in display order.
    pub fn report(&self) -> Vec<(Capability, bool)> {
        Capability::ALL
            .iter()
            .map(|&c| (c, self.is_available(c)))
            .collect()
    }
}
