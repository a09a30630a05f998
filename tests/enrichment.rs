//! End-to-end tests for the batch driver with a canned DNS transport.

use std::sync::Arc;
use std::time::Duration;

use domain_spf::{run_enrichment_with, ConfigError, InputError, LookupFailure, SpfResolver};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

#[path = "helpers.rs"]
mod helpers;

use helpers::{config_for, read_output, write_input, FakeLookup};

#[tokio::test]
async fn test_every_outcome_is_rendered_in_its_row() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "domains.csv",
        "name;url\n\
         a;example.com\n\
         b;https://example.org/path\n\
         c;nonexistent-domain-xyz123.test\n\
         d;bare.example\n\
         e;slow-server.test\n\
         f;broken.example\n\
         g;::::not a url::::\n\
         h;\n",
    );
    let lookup = FakeLookup::default()
        .txt("example.com", &["v=spf1 include:_spf.example.com ~all", "x=1"])
        .txt("example.org", &["google-site-verification=abc"])
        .fail("bare.example", LookupFailure::NoData)
        .fail("slow-server.test", LookupFailure::Timeout)
        .fail("broken.example", LookupFailure::Other("connection refused".into()));
    let resolver = SpfResolver::new(lookup);
    let config = config_for(&input);

    let report = run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap();

    let (headers, rows) = read_output(&config.output);
    assert_eq!(headers, ["name", "url", "spf_record"]);
    let spf: Vec<&str> = rows.iter().map(|r| r[2].as_str()).collect();
    assert_eq!(
        spf,
        [
            "v=spf1 include:_spf.example.com ~all",
            "No SPF record found",
            "Domain not found",
            "No TXT records",
            "DNS Timeout",
            "Error: connection refused",
            "Invalid URL format",
            "Domain not found",
        ]
    );
    assert_eq!(rows[1][1], "https://example.org/path");

    assert_eq!(report.total_rows, 8);
    assert_eq!(report.found, 1);
    assert_eq!(report.not_found, 1);
    assert_eq!(report.failed, 6);
    assert!(!report.interrupted);
    assert_eq!(report.output_path, config.output);
}

#[tokio::test]
async fn test_order_preserved_with_concurrency() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "domains.csv",
        "url\nslow.example\nfast1.example\nfast2.example\nfast3.example\n",
    );
    let lookup = FakeLookup::default()
        .txt("slow.example", &["v=spf1 a -all"])
        .delay("slow.example", Duration::from_millis(100))
        .txt("fast1.example", &["v=spf1 b -all"])
        .txt("fast2.example", &["v=spf1 c -all"])
        .txt("fast3.example", &["v=spf1 d -all"]);
    let resolver = SpfResolver::new(lookup);
    let config = domain_spf::Config {
        concurrency: 4,
        ..config_for(&input)
    };

    run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap();

    let (_, rows) = read_output(&config.output);
    let got: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r[0].as_str(), r[1].as_str()))
        .collect();
    assert_eq!(
        got,
        [
            ("slow.example", "v=spf1 a -all"),
            ("fast1.example", "v=spf1 b -all"),
            ("fast2.example", "v=spf1 c -all"),
            ("fast3.example", "v=spf1 d -all"),
        ]
    );
}

#[tokio::test]
async fn test_multiple_spf_records_survive_delimiter() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "domains.csv", "url\nexample.com\n");
    let lookup = FakeLookup::default().txt("example.com", &["v=spf1 a -all", "v=spf1 mx ~all"]);
    let resolver = SpfResolver::new(lookup);
    let config = config_for(&input);

    run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap();

    let (_, rows) = read_output(&config.output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], ["example.com", "v=spf1 a -all; v=spf1 mx ~all"]);
}

#[tokio::test]
async fn test_unnamed_columns_are_dropped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "domains.csv",
        "Unnamed: 0;url;owner;\n0;example.com;alice;\n",
    );
    let resolver = SpfResolver::new(FakeLookup::default().txt("example.com", &["v=spf1 -all"]));
    let config = config_for(&input);

    run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap();

    let (headers, rows) = read_output(&config.output);
    assert_eq!(headers, ["url", "owner", "spf_record"]);
    assert_eq!(rows, [["example.com", "alice", "v=spf1 -all"]]);
}

#[tokio::test]
async fn test_existing_spf_column_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "domains.csv",
        "url;spf_record;note\nexample.com;stale;keep\n",
    );
    let resolver = SpfResolver::new(FakeLookup::default().txt("example.com", &["v=spf1 -all"]));
    let config = config_for(&input);

    run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap();

    let (headers, rows) = read_output(&config.output);
    assert_eq!(headers, ["url", "spf_record", "note"]);
    assert_eq!(rows, [["example.com", "v=spf1 -all", "keep"]]);
}

#[tokio::test]
async fn test_missing_url_column_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "domains.csv", "domain\nexample.com\n");
    let lookup = Arc::new(FakeLookup::default());
    let resolver = SpfResolver::new(Arc::clone(&lookup));
    let config = config_for(&input);

    let err = run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::MissingColumn { column }) if column == "url"
    ));
    assert_eq!(err.to_string(), "Column 'url' does not exist in the table!");
    assert!(!config.output.exists());
    assert_eq!(lookup.query_count(), 0);
}

#[tokio::test]
async fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir.path().join("absent.csv"));
    let resolver = SpfResolver::new(FakeLookup::default());

    let err = run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::FileNotFound(_))
    ));
    assert!(!config.output.exists());
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "domains.csv", "url\nexample.com\n");
    let config = domain_spf::Config {
        concurrency: 0,
        ..config_for(&input)
    };
    let resolver = SpfResolver::new(FakeLookup::default());

    let err = run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap_err();

    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    assert_eq!(config_err.field, "concurrency");
}

#[tokio::test]
async fn test_interrupt_keeps_completed_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "domains.csv",
        "url\na.example\nb.example\nc.example\nd.example\n",
    );
    let cancel = CancellationToken::new();
    let lookup = Arc::new(
        FakeLookup::default()
            .txt("a.example", &["v=spf1 a -all"])
            .txt("b.example", &["v=spf1 b -all"])
            .txt("c.example", &["v=spf1 c -all"])
            .cancel_on("b.example", cancel.clone()),
    );
    let resolver = SpfResolver::new(Arc::clone(&lookup));
    let config = config_for(&input);

    let report = run_enrichment_with(&config, &resolver, cancel).await.unwrap();

    assert!(report.interrupted);
    assert_eq!(report.total_rows, 2);
    let (headers, rows) = read_output(&config.output);
    assert_eq!(headers, ["url", "spf_record"]);
    assert_eq!(
        rows,
        [
            ["a.example", "v=spf1 a -all"],
            ["b.example", "v=spf1 b -all"],
        ]
    );
    assert_eq!(lookup.queried_names(), ["a.example", "b.example"]);
}

#[tokio::test]
async fn test_custom_delimiter_and_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "domains.tsv", "site\tkind\nexample.com\tmail\n");
    let resolver = SpfResolver::new(FakeLookup::default().txt("example.com", &["v=spf1 -all"]));
    let config = domain_spf::Config {
        delimiter: '\t',
        url_column: "site".to_string(),
        spf_column: "spf".to_string(),
        ..config_for(&input)
    };

    run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap();

    let written = std::fs::read_to_string(&config.output).unwrap();
    assert_eq!(written, "site\tkind\tspf\nexample.com\tmail\tv=spf1 -all\n");
}

#[tokio::test]
async fn test_header_only_input_writes_header() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "domains.csv", "url\n");
    let resolver = SpfResolver::new(FakeLookup::default());
    let config = config_for(&input);

    let report = run_enrichment_with(&config, &resolver, CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.total_rows, 0);
    assert_eq!(std::fs::read_to_string(&config.output).unwrap(), "url;spf_record\n");
}
