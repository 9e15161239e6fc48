//! The command dispatcher.
//!
//! Maps each [`QueryKind`] to its lookup and writes the formatted result.
//! Lookups run strictly one after another on the caller's task.

use std::io::{self, Write};

use anyhow::Result;

use crate::app::output::{write_banner, Section};
use crate::app::{Query, QueryKind};
use crate::dns::RecordLookup;
use crate::error_handling::LookupError;

/// Runs `query` against `resolver`, writing human-readable output to `out`.
///
/// Failure policy per operation:
/// - `version` never fails.
/// - `ns` returns the lookup error before printing anything.
/// - `ip`, `cname`, `mx` and `txt` print the error inline and continue with an
///   empty result.
/// - `all` attempts every lookup. The outcomes share one error slot that each
///   lookup overwrites (a success clears it), so only the TXT lookup's error is
///   printed. Overwritten errors are logged at debug level.
///
/// # Errors
///
/// Returns an error when the `ns` lookup fails or `out` cannot be written.
pub async fn dispatch<R, W>(query: &Query, resolver: &R, out: &mut W) -> Result<()>
where
    R: RecordLookup + ?Sized,
    W: Write,
{
    let host = query.host.as_str();
    log::debug!("Running {} for {host}", query.kind);

    match query.kind {
        QueryKind::Version => write_banner(out)?,
        QueryKind::Ns => {
            let nameservers = resolver.lookup_ns(host).await?;
            Section::nameservers(&nameservers).write_closed(out)?;
        }
        QueryKind::Ip => {
            let addresses = print_on_error(resolver.lookup_ip(host).await, out)?;
            Section::addresses(&addresses).write_closed(out)?;
        }
        QueryKind::Cname => {
            let cname = print_on_error(resolver.lookup_cname(host).await, out)?;
            Section::canonical_name(&cname).write_closed(out)?;
        }
        QueryKind::Mx => {
            let records = print_on_error(resolver.lookup_mx(host).await, out)?;
            Section::mail_exchangers(&records).write_closed(out)?;
        }
        QueryKind::Txt => {
            let records = print_on_error(resolver.lookup_txt(host).await, out)?;
            Section::text_records(&records).write_closed(out)?;
        }
        QueryKind::All => run_all(host, resolver, out).await?,
    }

    Ok(())
}

async fn run_all<R, W>(host: &str, resolver: &R, out: &mut W) -> Result<()>
where
    R: RecordLookup + ?Sized,
    W: Write,
{
    let mut last_error = None;
    let nameservers = overwrite_error(resolver.lookup_ns(host).await, &mut last_error);
    let addresses = overwrite_error(resolver.lookup_ip(host).await, &mut last_error);
    let cname = overwrite_error(resolver.lookup_cname(host).await, &mut last_error);
    let exchangers = overwrite_error(resolver.lookup_mx(host).await, &mut last_error);
    let texts = overwrite_error(resolver.lookup_txt(host).await, &mut last_error);

    if let Some(error) = last_error {
        writeln!(out, "{error}")?;
    }

    write_banner(out)?;

    let sections = [
        Section::nameservers(&nameservers),
        Section::addresses(&addresses),
        Section::canonical_name(&cname),
        Section::mail_exchangers(&exchangers),
        Section::text_records(&texts),
    ];
    for section in &sections {
        writeln!(out, "\n")?;
        section.write_open(out)?;
    }

    Ok(())
}

/// Prints a lookup error inline and substitutes an empty result.
fn print_on_error<T, W>(result: Result<T, LookupError>, out: &mut W) -> io::Result<T>
where
    T: Default,
    W: Write,
{
    match result {
        Ok(value) => Ok(value),
        Err(error) => {
            writeln!(out, "{error}")?;
            Ok(T::default())
        }
    }
}

/// Stores this lookup's outcome in the shared error slot, replacing whatever
/// an earlier lookup left there.
fn overwrite_error<T: Default>(result: Result<T, LookupError>, slot: &mut Option<LookupError>) -> T {
    let (value, current) = match result {
        Ok(value) => (value, None),
        Err(error) => (T::default(), Some(error)),
    };
    if let Some(previous) = std::mem::replace(slot, current) {
        log::debug!("Discarding earlier {} lookup error: {previous}", previous.kind);
    }
    value
}
