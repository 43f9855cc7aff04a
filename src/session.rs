//! Interactive session: the upload → extract → summarise state machine.
//!
//! A [`Session`] owns one document at a time and reacts to
//! [`SessionEvent`]s. Each event runs to completion before `handle` returns,
//! so a caller never observes a half-finished transition; the transient
//! phases ([`Phase::Extracting`], [`Phase::Summarizing`]) are visible only
//! through the progress callback and the debug log.
//!
//! ```text
//!            upload                 text found
//!  Idle ───────────────▶ Extracting ──────────▶ Ready ──▶ Summarizing ──▶ Done
//!   ▲                        │                    ▲            │            │
//!   └── error / no text ─────┘                    └── failure ─┘            │
//!                                                 ▲                         │
//!                                                 └── length change/retry ──┘
//! ```
//!
//! A summarisation failure does not lose the document: the session falls
//! back to `Ready` with an error notice, and `Retry` or a new length runs
//! the pass again on the text it already has.

use crate::config::{SummaryBounds, SummaryConfig, MAX_LENGTH_RANGE, MIN_LENGTH_RANGE};
use crate::output::{Document, ExtractedText, SummaryOutput};
use crate::pipeline::extract;
use crate::summarize::summarize_extracted;
use std::fmt;
use tracing::{debug, info, warn};

/// Where the session is in the upload → summary flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No document loaded.
    Idle,
    /// Reading text out of the uploaded PDF.
    Extracting,
    /// Text extracted, no summary yet (or the last attempt failed).
    Ready,
    /// Model calls in flight.
    Summarizing,
    /// Summary available.
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Extracting => "extracting",
            Phase::Ready => "ready",
            Phase::Summarizing => "summarizing",
            Phase::Done => "done",
        };
        f.write_str(s)
    }
}

/// A message for the user, replacing whatever was shown before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Info(m) | Notice::Warning(m) | Notice::Error(m) => f.write_str(m),
        }
    }
}

pub const UPLOAD_PROMPT: &str = "Please upload a PDF file to start.";
pub const NO_TEXT_WARNING: &str = "No text could be extracted from the uploaded PDF.";

/// Input to [`Session::handle`].
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A new PDF replaces whatever was loaded.
    Upload(Document),
    /// New maximum summary length; clamped to 50–500.
    SetMaxLength(u32),
    /// New minimum summary length; clamped to 20–100.
    SetMinLength(u32),
    /// Summarise the loaded text again.
    Retry,
    /// Drop the document and go back to `Idle`.
    Reset,
}

/// One user's session.
#[derive(Debug)]
pub struct Session {
    config: SummaryConfig,
    phase: Phase,
    notice: Option<Notice>,
    document_name: Option<String>,
    extracted: Option<ExtractedText>,
    output: Option<SummaryOutput>,
}

impl Session {
    pub fn new(config: SummaryConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            notice: Some(Notice::Info(UPLOAD_PROMPT.to_string())),
            document_name: None,
            extracted: None,
            output: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn bounds(&self) -> SummaryBounds {
        self.config.bounds()
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn document_name(&self) -> Option<&str> {
        self.document_name.as_deref()
    }

    /// Text of the loaded document, once extraction succeeded.
    pub fn extracted_text(&self) -> Option<&str> {
        self.extracted.as_ref().map(|e| e.text.as_str())
    }

    /// The joined summary, in `Done`.
    pub fn summary(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.summary.as_str())
    }

    pub fn output(&self) -> Option<&SummaryOutput> {
        self.output.as_ref()
    }

    /// Apply one event and return the phase the session settled in.
    pub async fn handle(&mut self, event: SessionEvent) -> Phase {
        match event {
            SessionEvent::Upload(document) => self.upload(document).await,
            SessionEvent::SetMaxLength(n) => {
                let before = self.bounds();
                self.config.max_length = n.clamp(*MAX_LENGTH_RANGE.start(), *MAX_LENGTH_RANGE.end());
                self.on_bounds_changed(before).await;
            }
            SessionEvent::SetMinLength(n) => {
                let before = self.bounds();
                self.config.min_length = n.clamp(*MIN_LENGTH_RANGE.start(), *MIN_LENGTH_RANGE.end());
                self.on_bounds_changed(before).await;
            }
            SessionEvent::Retry => {
                if self.extracted.is_some() {
                    self.run_summary().await;
                } else {
                    debug!("Retry ignored: no document loaded");
                }
            }
            SessionEvent::Reset => {
                self.document_name = None;
                self.extracted = None;
                self.output = None;
                self.notice = Some(Notice::Info(UPLOAD_PROMPT.to_string()));
                self.transition(Phase::Idle);
            }
        }
        self.phase
    }

    async fn upload(&mut self, document: Document) {
        info!("Uploaded '{}' ({} bytes)", document.name, document.len());
        self.document_name = Some(document.name.clone());
        self.extracted = None;
        self.output = None;
        self.notice = None;
        self.transition(Phase::Extracting);

        if let Some(ref cb) = self.config.progress_callback {
            cb.on_extraction_start();
        }
        let extraction = extract::extract(&document).await;
        if let Some(e) = extraction.error {
            self.notice = Some(Notice::Error(format!("Failed to extract text: {e}")));
            self.transition(Phase::Idle);
            return;
        }
        if let Some(ref cb) = self.config.progress_callback {
            cb.on_extraction_complete(extraction.content.page_count, extraction.content.char_count());
        }
        if !extraction.content.has_text() {
            warn!("'{}' has no extractable text", document.name);
            self.notice = Some(Notice::Warning(NO_TEXT_WARNING.to_string()));
            self.transition(Phase::Idle);
            return;
        }

        self.extracted = Some(extraction.content);
        self.transition(Phase::Ready);
        self.run_summary().await;
    }

    /// Length changes only store the value until there is text to summarise.
    async fn on_bounds_changed(&mut self, before: SummaryBounds) {
        let after = self.bounds();
        if after == before {
            return;
        }
        debug!("Summary length {} → {}", before, after);
        if matches!(self.phase, Phase::Ready | Phase::Done) {
            self.run_summary().await;
        }
    }

    async fn run_summary(&mut self) {
        let Some(content) = self.extracted.take() else {
            return;
        };
        self.output = None;
        self.notice = None;
        self.transition(Phase::Summarizing);

        let result = summarize_extracted(&content, &self.config).await;
        self.extracted = Some(content);
        match result {
            Ok(output) => {
                self.output = Some(output);
                self.transition(Phase::Done);
            }
            Err(e) => {
                warn!("Summarisation failed: {}", e);
                self.notice = Some(Notice::Error(format!("Failed to summarize: {e}")));
                self.transition(Phase::Ready);
            }
        }
    }

    fn transition(&mut self, next: Phase) {
        debug!("Session: {} → {}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_upload_prompt() {
        let session = Session::new(SummaryConfig::default());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(
            session.notice(),
            Some(&Notice::Info(UPLOAD_PROMPT.to_string()))
        );
        assert!(session.extracted_text().is_none());
        assert!(session.summary().is_none());
    }

    #[tokio::test]
    async fn non_pdf_upload_returns_to_idle_with_error() {
        let mut session = Session::new(SummaryConfig::default());
        let phase = session
            .handle(SessionEvent::Upload(Document::new("a.png", b"\x89PNG....".to_vec())))
            .await;

        assert_eq!(phase, Phase::Idle);
        match session.notice() {
            Some(Notice::Error(m)) => assert!(m.starts_with("Failed to extract text:"), "got: {m}"),
            other => panic!("expected error notice, got {other:?}"),
        }
        assert_eq!(session.document_name(), Some("a.png"));
        assert!(session.extracted_text().is_none());
    }

    #[tokio::test]
    async fn length_change_while_idle_is_only_stored() {
        let mut session = Session::new(SummaryConfig::default());
        assert_eq!(session.handle(SessionEvent::SetMaxLength(300)).await, Phase::Idle);
        assert_eq!(session.handle(SessionEvent::SetMinLength(5)).await, Phase::Idle);
        assert_eq!(session.bounds(), SummaryBounds::new(20, 300));
    }

    #[tokio::test]
    async fn retry_without_document_is_ignored() {
        let mut session = Session::new(SummaryConfig::default());
        assert_eq!(session.handle(SessionEvent::Retry).await, Phase::Idle);
        assert_eq!(
            session.notice(),
            Some(&Notice::Info(UPLOAD_PROMPT.to_string()))
        );
    }

    #[tokio::test]
    async fn reset_restores_prompt() {
        let mut session = Session::new(SummaryConfig::default());
        session
            .handle(SessionEvent::Upload(Document::new("x", Vec::new())))
            .await;
        assert!(matches!(session.notice(), Some(Notice::Error(_))));

        assert_eq!(session.handle(SessionEvent::Reset).await, Phase::Idle);
        assert!(session.document_name().is_none());
        assert_eq!(
            session.notice(),
            Some(&Notice::Info(UPLOAD_PROMPT.to_string()))
        );
    }

    #[test]
    fn notice_display_is_the_message() {
        assert_eq!(Notice::Warning(NO_TEXT_WARNING.into()).to_string(), NO_TEXT_WARNING);
    }
}
