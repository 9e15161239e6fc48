//! DNS record value types.

use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

/// The record lookups the resolution facility can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DisplayMacro, EnumIterMacro)]
pub enum RecordKind {
    /// Nameserver records
    #[strum(to_string = "NS")]
    Ns,
    /// A and AAAA records
    #[strum(to_string = "A/AAAA")]
    Ip,
    /// Canonical name
    #[strum(to_string = "CNAME")]
    Cname,
    /// Mail exchanger records
    #[strum(to_string = "MX")]
    Mx,
    /// Text records
    #[strum(to_string = "TXT")]
    Txt,
}

/// A mail exchanger and its preference value.
///
/// Lower priority values are preferred, but records are kept in the order
/// the resolver returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    /// Mail server hostname
    pub host: String,
    /// Preference value
    pub priority: u16,
}

impl MxRecord {
    /// Creates an MX record.
    pub fn new(host: impl Into<String>, priority: u16) -> Self {
        Self {
            host: host.into(),
            priority,
        }
    }
}
