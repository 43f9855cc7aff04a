//! End-to-end tests against a real LLM provider.
//!
//! These make live API calls, so they are gated behind the `E2E_ENABLED`
//! environment variable and do not run in CI unless explicitly requested.
//! The PDFs are still generated in memory; only the model is real.
//!
//! Run with:
//!   E2E_ENABLED=1 OPENAI_API_KEY=sk-... cargo test --test e2e -- --nocapture

mod common;

use common::{hello_world_pdf, long_pdf};
use edgequake_pdfsum::{shared_model, summarize_document, Document, SummaryConfig};
use std::sync::Arc;

macro_rules! e2e_skip_unless_enabled {
    () => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP — set E2E_ENABLED=1 to run e2e tests");
            return;
        }
    }};
}

/// Assert the summary passes basic quality checks.
fn assert_summary_quality(summary: &str, context: &str) {
    assert!(!summary.trim().is_empty(), "[{context}] summary is empty");
    assert!(
        !summary.starts_with("```"),
        "[{context}] summary still wrapped in a code fence"
    );
    assert!(
        !summary.contains('\n'),
        "[{context}] summary should be a single paragraph"
    );
    for ch in ['\u{200B}', '\u{FEFF}', '\u{200C}', '\u{200D}', '\u{2060}'] {
        assert!(
            !summary.contains(ch),
            "[{context}] summary contains invisible char U+{:04X}",
            ch as u32
        );
    }
    println!("[{context}] ✓  {} chars: {summary}", summary.len());
}

#[tokio::test]
async fn test_live_single_page() {
    e2e_skip_unless_enabled!();

    let config = SummaryConfig::default();
    let output = summarize_document(&Document::new("hello.pdf", hello_world_pdf()), &config)
        .await
        .expect("summarize_document should succeed");

    assert_eq!(output.stats.chunk_count, 1);
    assert_summary_quality(&output.summary, "single page");
}

#[tokio::test]
async fn test_live_multi_chunk_is_deterministic() {
    e2e_skip_unless_enabled!();

    let config = SummaryConfig::builder()
        .chunk_size(400)
        .max_length(60)
        .min_length(20)
        .build()
        .unwrap();
    let doc = Document::new("report.pdf", long_pdf(4));

    let first = summarize_document(&doc, &config).await.expect("first run");
    let second = summarize_document(&doc, &config).await.expect("second run");

    assert!(first.stats.chunk_count >= 2);
    assert_summary_quality(&first.summary, "multi chunk");
    assert_eq!(first.summary, second.summary, "temperature 0 should repeat itself");
}

#[tokio::test]
async fn test_live_model_is_shared() {
    e2e_skip_unless_enabled!();

    let config = SummaryConfig::default();
    let a = shared_model(&config).expect("provider configured");
    let b = shared_model(&config).expect("provider configured");
    assert!(Arc::ptr_eq(&a, &b));
}
