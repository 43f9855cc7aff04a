//! Shared fixtures: PDFs built in memory with lopdf and deterministic models.
#![allow(dead_code)]

use async_trait::async_trait;
use edgequake_pdfsum::{ModelError, ModelReply, SummaryBounds, SummaryConfig, SummaryModel, SummaryRequest};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// ── PDF builders ─────────────────────────────────────────────────────────────

/// A PDF with one page per entry; each page shows its lines top to bottom.
/// An empty entry produces a page with graphics but no text.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let kids: Vec<Object> = pages
        .iter()
        .map(|lines| add_page(&mut doc, pages_id, resources_id, lines).into())
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialise test PDF");
    bytes
}

fn add_page(doc: &mut Document, parent: ObjectId, resources: ObjectId, lines: &[&str]) -> ObjectId {
    let operations = if lines.is_empty() {
        vec![
            Operation::new("re", vec![50.into(), 50.into(), 200.into(), 100.into()]),
            Operation::new("f", vec![]),
        ]
    } else {
        let mut ops = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("TL", vec![14.into()]),
            Operation::new("Td", vec![50.into(), 780.into()]),
        ];
        for line in lines {
            ops.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            ops.push(Operation::new("T*", vec![]));
        }
        ops.push(Operation::new("ET", vec![]));
        ops
    };
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode content stream"),
    ));
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => parent,
        "Contents" => content_id,
        "Resources" => resources,
    })
}

/// One page reading "Hello world.".
pub fn hello_world_pdf() -> Vec<u8> {
    pdf_with_pages(&[&["Hello world."]])
}

/// A single page with a filled rectangle and no text.
pub fn blank_pdf() -> Vec<u8> {
    pdf_with_pages(&[&[]])
}

/// `pages` pages of distinct sentences, several hundred characters each.
pub fn long_pdf(pages: usize) -> Vec<u8> {
    let texts: Vec<Vec<String>> = (1..=pages)
        .map(|p| {
            (1..=6)
                .map(|s| format!("Page {p} sentence {s} talks about the quarterly figures in detail."))
                .collect()
        })
        .collect();
    let borrowed: Vec<Vec<&str>> = texts
        .iter()
        .map(|lines| lines.iter().map(String::as_str).collect())
        .collect();
    let refs: Vec<&[&str]> = borrowed.iter().map(Vec::as_slice).collect();
    pdf_with_pages(&refs)
}

/// Panics if any word of `text` that fits in `max` characters is split
/// across chunks.
pub fn assert_words_whole(text: &str, chunks: &[String], max: usize) {
    fn words(s: &str) -> impl Iterator<Item = &str> {
        s.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
    }
    let kept: std::collections::HashSet<&str> = chunks.iter().flat_map(|c| words(c)).collect();
    for word in words(text).filter(|w| w.chars().count() <= max) {
        assert!(kept.contains(word), "word {word:?} was cut in {chunks:?}");
    }
}

// ── Models ───────────────────────────────────────────────────────────────────

/// Deterministic model: the summary is the chunk's first word and length.
/// Records every request so tests can check call order and bounds.
#[derive(Default)]
pub struct RecordingModel {
    calls: Mutex<Vec<(String, SummaryBounds)>>,
    failing: AtomicBool,
}

impl RecordingModel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every following call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn chunks(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn bounds(&self) -> Vec<SummaryBounds> {
        self.calls.lock().unwrap().iter().map(|(_, b)| *b).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// What this model answers for `chunk`.
    pub fn expected_summary(chunk: &str) -> String {
        let first = chunk.split_whitespace().next().unwrap_or_default();
        format!("<{}:{}>", first, chunk.chars().count())
    }
}

#[async_trait]
impl SummaryModel for RecordingModel {
    fn name(&self) -> &str {
        "recording"
    }

    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<ModelReply, ModelError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.chunk.to_string(), request.bounds));
        if self.failing.load(Ordering::SeqCst) {
            return Err(ModelError::Api("service unavailable".into()));
        }
        Ok(ModelReply {
            text: Self::expected_summary(request.chunk),
            input_tokens: request.chunk.len() / 4,
            output_tokens: 3,
        })
    }
}

/// Config wired to `model`, with no retries or backoff so failures are fast.
pub fn test_config(model: Arc<RecordingModel>, chunk_size: usize) -> SummaryConfig {
    SummaryConfig::builder()
        .summarizer(model)
        .chunk_size(chunk_size)
        .max_retries(0)
        .retry_backoff_ms(0)
        .build()
        .unwrap()
}
