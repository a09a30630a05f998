// Shared test helpers for enrichment runs.
//
// Provides a canned DNS transport and CSV fixture utilities so the batch
// driver can be exercised without network access.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use domain_spf::{Config, LookupFailure, TxtLookup};

/// TXT answers keyed by queried name; unknown names are NXDOMAIN.
#[derive(Default)]
pub struct FakeLookup {
    answers: HashMap<String, Result<Vec<String>, LookupFailure>>,
    delays: HashMap<String, Duration>,
    cancel_on: Option<(String, CancellationToken)>,
    queries: AtomicUsize,
    queried_names: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl FakeLookup {
    /// Answers `name` with the given TXT records.
    pub fn txt(mut self, name: &str, records: &[&str]) -> Self {
        self.answers.insert(
            name.to_string(),
            Ok(records.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    /// Fails lookups of `name`.
    pub fn fail(mut self, name: &str, failure: LookupFailure) -> Self {
        self.answers.insert(name.to_string(), Err(failure));
        self
    }

    /// Delays the answer for `name`.
    pub fn delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    /// Cancels `token` when `name` is queried, like a Ctrl-C during that row.
    pub fn cancel_on(mut self, name: &str, token: CancellationToken) -> Self {
        self.cancel_on = Some((name.to_string(), token));
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.queried_names.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxtLookup for FakeLookup {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupFailure> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.queried_names.lock().unwrap().push(name.to_string());
        if let Some((trigger, token)) = &self.cancel_on {
            if trigger == name {
                token.cancel();
            }
        }
        if let Some(delay) = self.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }
        self.answers
            .get(name)
            .cloned()
            .unwrap_or(Err(LookupFailure::NxDomain))
    }
}

/// Writes `contents` to `name` inside `dir` and returns the path.
pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write input fixture");
    path
}

/// Config reading `input` and writing `out.csv` next to it.
#[allow(dead_code)]
pub fn config_for(input: &Path) -> Config {
    Config {
        input: input.to_path_buf(),
        output: input.with_file_name("out.csv"),
        ..Default::default()
    }
}

/// Reads a `;`-separated output table into header and rows.
#[allow(dead_code)]
pub fn read_output(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .expect("Failed to open output");
    let headers = reader
        .headers()
        .expect("Failed to read output header")
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .map(|r| {
            r.expect("Failed to read output row")
                .iter()
                .map(String::from)
                .collect()
        })
        .collect();
    (headers, rows)
}
