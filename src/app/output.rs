//! Text rendering for lookup results.
//!
//! Every result type is turned into a [`Section`]: a title line, a separator,
//! and the value lines. Standalone subcommands close the section with a second
//! separator; the `all` report leaves it open.

use std::fmt::Display;
use std::io::{self, Write};
use std::net::IpAddr;

use crate::config::{AUTHOR, DISPLAY_NAME, ITEM_PREFIX, SEPARATOR, VERSION};
use crate::dns::MxRecord;

/// A titled block of result lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: &'static str,
    lines: Vec<String>,
}

impl Section {
    /// Nameserver hosts, one `[*]` line each.
    pub fn nameservers(nameservers: &[String]) -> Self {
        Self::items("Nameserver(s):", nameservers)
    }

    /// Resolved addresses, one `[*]` line each.
    pub fn addresses(addresses: &[IpAddr]) -> Self {
        Self::items("IP Address(es):", addresses)
    }

    /// The canonical name. Always exactly one `[*]` line, even when empty.
    pub fn canonical_name(cname: &str) -> Self {
        Self {
            title: "CNAME:",
            lines: vec![item(cname)],
        }
    }

    /// Mail exchangers as `Host:` / `Priority:` line pairs, in the given order.
    pub fn mail_exchangers(records: &[MxRecord]) -> Self {
        let lines = records
            .iter()
            .flat_map(|mx| {
                [
                    format!("Host: {}", mx.host),
                    format!("Priority: {}", mx.priority),
                ]
            })
            .collect();
        Self {
            title: "MX Record(s):",
            lines,
        }
    }

    /// TXT record strings, one `[*]` line each.
    pub fn text_records(records: &[String]) -> Self {
        Self::items("TXT Record(s):", records)
    }

    fn items<T: Display>(title: &'static str, values: &[T]) -> Self {
        Self {
            title,
            lines: values.iter().map(item).collect(),
        }
    }

    /// Section heading, including the trailing colon.
    pub fn title(&self) -> &str {
        self.title
    }

    /// Value lines, without the heading or separators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Writes the heading, separator, and value lines.
    pub fn write_open<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{SEPARATOR}")?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Writes the section followed by a closing separator.
    pub fn write_closed<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_open(out)?;
        writeln!(out, "{SEPARATOR}")
    }
}

fn item<T: Display + ?Sized>(value: &T) -> String {
    format!("{ITEM_PREFIX} {value}")
}

/// Writes the two-line version and author banner.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{DISPLAY_NAME} | {VERSION}")?;
    writeln!(out, "Author: {AUTHOR}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(section: &Section, closed: bool) -> String {
        let mut out = Vec::new();
        if closed {
            section.write_closed(&mut out).expect("write to Vec");
        } else {
            section.write_open(&mut out).expect("write to Vec");
        }
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn test_banner_is_two_lines() {
        let mut out = Vec::new();
        write_banner(&mut out).expect("write to Vec");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Syndicate | v0.1.4\nAuthor: Hifumi1337 (https://github.com/Hifumi1337)\n"
        );
    }

    #[test]
    fn test_closed_section_is_bracketed_by_separators() {
        let section = Section::nameservers(&["ns1.example.com.".to_string()]);
        assert_eq!(
            render(&section, true),
            format!("Nameserver(s):\n{SEPARATOR}\n[*] ns1.example.com.\n{SEPARATOR}\n")
        );
    }

    #[test]
    fn test_open_section_has_no_closing_separator() {
        let section = Section::text_records(&["v=spf1 -all".to_string()]);
        assert_eq!(
            render(&section, false),
            format!("TXT Record(s):\n{SEPARATOR}\n[*] v=spf1 -all\n")
        );
    }

    #[test]
    fn test_empty_canonical_name_still_prints_one_item() {
        let section = Section::canonical_name("");
        assert_eq!(section.lines(), ["[*] "]);
    }

    #[test]
    fn test_addresses_render_both_families() {
        let addresses: Vec<IpAddr> = vec![
            "93.184.216.34".parse().unwrap(),
            "2606:2800:220:1:248:1893:25c8:1946".parse().unwrap(),
        ];
        let section = Section::addresses(&addresses);
        assert_eq!(section.title(), "IP Address(es):");
        assert_eq!(
            section.lines(),
            [
                "[*] 93.184.216.34",
                "[*] 2606:2800:220:1:248:1893:25c8:1946"
            ]
        );
    }

    #[test]
    fn test_mail_exchangers_keep_input_order() {
        let records = vec![MxRecord::new("b.mx.", 20), MxRecord::new("a.mx.", 10)];
        let section = Section::mail_exchangers(&records);
        assert_eq!(
            section.lines(),
            ["Host: b.mx.", "Priority: 20", "Host: a.mx.", "Priority: 10"]
        );
    }
}
