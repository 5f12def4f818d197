//! Pipeline front door: extract → clause scan + triage → summary.
//!
//! All engines are trait objects injected at construction, so the whole
//! pipeline runs against mocks in tests. `analyze` is infallible by
//! design: extraction failures degrade to empty text inside the
//! extractor, and the analysis stages are pure.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pipeline::analysis::{find_clauses, AnalysisResult};
use crate::pipeline::extraction::DocumentExtractor;
use crate::pipeline::nlp::{
    DateRecognizer, EntityRecognizer, LexiconSentiment, RuleSegmenter, SentenceSegmenter,
    SentimentClassifier,
};
use crate::pipeline::summary::{build_summary, Summary};
use crate::pipeline::triage::{triage, TriageResult};

/// The full three-part result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentAnalysis {
    pub summary: Summary,
    pub detailed_analysis: AnalysisResult,
    pub pros_cons_analysis: TriageResult,
}

impl DocumentAnalysis {
    /// The fixed result for the empty-text terminal state: sentinel
    /// triage lists, every finding category present and empty.
    pub fn no_text_sentinel() -> Self {
        Self {
            summary: Summary::no_text_sentinel(),
            detailed_analysis: AnalysisResult::default(),
            pros_cons_analysis: TriageResult::default(),
        }
    }
}

pub struct PolicyAnalyzer {
    extractor: DocumentExtractor,
    segmenter: Box<dyn SentenceSegmenter + Send + Sync>,
    sentiment: Box<dyn SentimentClassifier + Send + Sync>,
    entities: Box<dyn EntityRecognizer + Send + Sync>,
}

impl PolicyAnalyzer {
    pub fn new(
        extractor: DocumentExtractor,
        segmenter: Box<dyn SentenceSegmenter + Send + Sync>,
        sentiment: Box<dyn SentimentClassifier + Send + Sync>,
        entities: Box<dyn EntityRecognizer + Send + Sync>,
    ) -> Self {
        Self {
            extractor,
            segmenter,
            sentiment,
            entities,
        }
    }

    /// Default capability wiring around a given extractor.
    pub fn with_extractor(extractor: DocumentExtractor) -> Self {
        Self::new(
            extractor,
            Box::new(RuleSegmenter),
            Box::new(LexiconSentiment),
            Box::new(DateRecognizer),
        )
    }

    /// Everything default, non-interactive.
    pub fn with_defaults() -> Self {
        Self::with_extractor(DocumentExtractor::with_defaults())
    }

    /// Analyze the document at `path`.
    pub fn analyze(&self, path: &Path) -> DocumentAnalysis {
        tracing::info!(path = %path.display(), "Starting document analysis");
        let text = self.extractor.extract(path);
        self.analyze_extracted(&text)
    }

    /// Analyze already-extracted text. Empty text short-circuits to the
    /// sentinel result.
    pub fn analyze_text(&self, text: &str) -> DocumentAnalysis {
        self.analyze_extracted(text)
    }

    fn analyze_extracted(&self, text: &str) -> DocumentAnalysis {
        if text.is_empty() {
            tracing::warn!("No text extracted from document, returning sentinel result");
            return DocumentAnalysis::no_text_sentinel();
        }

        // Two independent passes over the same immutable text.
        let detailed = find_clauses(text, &*self.segmenter, &*self.entities);
        let triaged = triage(text, &*self.segmenter, &*self.sentiment);
        let summary = build_summary(&detailed, &triaged);

        tracing::info!(
            findings = detailed.findings.total(),
            pros = triaged.pros.len(),
            cons = triaged.cons.len(),
            hidden = triaged.hidden_details.len(),
            "Document analysis complete"
        );

        DocumentAnalysis {
            summary,
            detailed_analysis: detailed,
            pros_cons_analysis: triaged,
        }
    }
}
