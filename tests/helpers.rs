// Shared test helpers: a scripted resolver and output capture.
//
// FakeResolver answers every lookup from fixed data, can be told to fail
// individual record kinds, and records the order lookups were made in.

use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use syndicate::{dispatch, LookupError, MxRecord, Query, QueryKind, RecordKind, RecordLookup};

/// Resolver returning canned records.
#[derive(Default)]
pub struct FakeResolver {
    pub nameservers: Vec<String>,
    pub addresses: Vec<IpAddr>,
    pub canonical_name: String,
    pub exchangers: Vec<MxRecord>,
    pub texts: Vec<String>,
    failures: HashSet<RecordKind>,
    calls: Mutex<Vec<RecordKind>>,
}

impl FakeResolver {
    /// A resolver with one or more records of every type for `example.com`.
    pub fn populated() -> Self {
        Self {
            nameservers: vec!["a.iana-servers.net.".into(), "b.iana-servers.net.".into()],
            addresses: vec![
                "93.184.216.34".parse().unwrap(),
                "2606:2800:220:1:248:1893:25c8:1946".parse().unwrap(),
            ],
            canonical_name: "example.com.".into(),
            exchangers: vec![
                MxRecord::new("mx2.example.com.", 20),
                MxRecord::new("mx1.example.com.", 10),
            ],
            texts: vec!["v=spf1 -all".into(), "hello world".into()],
            ..Default::default()
        }
    }

    /// Makes lookups of `kind` fail with "no such host".
    pub fn failing(mut self, kind: RecordKind) -> Self {
        self.failures.insert(kind);
        self
    }

    /// Record kinds looked up so far, in call order.
    #[allow(dead_code)] // Used by other test files
    pub fn calls(&self) -> Vec<RecordKind> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T: Clone>(&self, kind: RecordKind, host: &str, value: &T) -> Result<T, LookupError> {
        self.calls.lock().unwrap().push(kind);
        if self.failures.contains(&kind) {
            Err(LookupError::new(kind, host, format!("no such host ({kind})")))
        } else {
            Ok(value.clone())
        }
    }
}

#[async_trait]
impl RecordLookup for FakeResolver {
    async fn lookup_ns(&self, host: &str) -> Result<Vec<String>, LookupError> {
        self.answer(RecordKind::Ns, host, &self.nameservers)
    }

    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.answer(RecordKind::Ip, host, &self.addresses)
    }

    async fn lookup_cname(&self, host: &str) -> Result<String, LookupError> {
        self.answer(RecordKind::Cname, host, &self.canonical_name)
    }

    async fn lookup_mx(&self, host: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.answer(RecordKind::Mx, host, &self.exchangers)
    }

    async fn lookup_txt(&self, host: &str) -> Result<Vec<String>, LookupError> {
        self.answer(RecordKind::Txt, host, &self.texts)
    }
}

/// Dispatches `kind` for `example.com` and returns the captured stdout.
#[allow(dead_code)] // Used by other test files
pub async fn run_capture(
    kind: QueryKind,
    resolver: &FakeResolver,
) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = dispatch(&Query::new("example.com", kind), resolver, &mut out).await;
    let text = String::from_utf8(out).expect("output should be UTF-8");
    (result, text)
}
