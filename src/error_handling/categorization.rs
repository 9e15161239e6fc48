//! Resolver error categorization.
//!
//! Turns hickory resolver failures into the short messages shown to users.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use crate::dns::RecordKind;
use crate::error_handling::LookupError;

/// Describes a resolver failure in a single short phrase.
///
/// NXDOMAIN answers become "no such host", empty answers become
/// "no records found" and timeouts become "i/o timeout". Everything else
/// keeps the resolver's own message.
pub fn describe_resolve_error(error: &ResolveError) -> String {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            "no such host".to_string()
        }
        ResolveErrorKind::NoRecordsFound { .. } => "no records found".to_string(),
        ResolveErrorKind::Timeout => "i/o timeout".to_string(),
        ResolveErrorKind::NoConnections => "no nameservers available".to_string(),
        _ => error.to_string(),
    }
}

/// Returns true when the server answered NOERROR but had no records of the
/// requested type.
pub fn is_empty_answer(error: &ResolveError) -> bool {
    matches!(
        error.kind(),
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NoError
    )
}

/// Wraps a resolver failure into a [`LookupError`], logging the raw cause.
pub fn to_lookup_error(kind: RecordKind, host: &str, error: &ResolveError) -> LookupError {
    log::debug!("{kind} lookup for {host} failed: {error}");
    LookupError::new(kind, host, describe_resolve_error(error))
}
