// src/normalizer.rs
//! Tolerant reduction of analysis payloads to the canonical record
//!
//! Three upstream shapes are recognised: canonical names nested under
//! `structured_data`, flattened legacy names on the top-level object, and a
//! text value holding a (possibly fenced) JSON block. Any other input, and any
//! decode failure, degrades to [`AnalysisOutcome::Empty`]. Nothing here panics
//! or returns an error.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::types::{AnalysisOutcome, AnalysisReport, CandidateInfo, JobContext};

/// Member of the analyze response that carries the analysis payload
const ENVELOPE_KEY: &str = "ai_analysis";
const STRUCTURED_KEY: &str = "structured_data";
const FENCE: &str = "```";

// Canonical name first, legacy names after it
const MATCH_SCORE: &[&str] = &["match_score", "score", "resume_score"];
const MATCH_STATUS: &[&str] = &["match_status"];
const OVERALL_ASSESSMENT: &[&str] = &["overall_assessment", "summary"];
const CANDIDATE_INFO: &[&str] = &["candidate_info"];
const MATCHED_SKILLS: &[&str] = &["matched_skills", "strengths"];
const MISSING_SKILLS: &[&str] = &["missing_skills", "weaknesses"];
const FORMATTING_SCORE: &[&str] = &["formatting_score"];
const FORMATTING_ISSUES: &[&str] = &["formatting_issues"];
const RECOMMENDATIONS: &[&str] = &["recommendations", "suggestions"];
const JOB_CONTEXT: &[&str] = &["job_context"];
const ATS_SCORE: &[&str] = &["ats_score"];
const ATS_KEYWORDS_MISSING: &[&str] = &["ats_keywords_missing"];
const MODEL_USED: &[&str] = &["model_used"];

/// Observed payload variants, resolved once at the boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisPayload<'a> {
    /// Canonical names under `structured_data`; the outer object is kept for fallback
    Structured {
        nested: &'a Map<String, Value>,
        outer: &'a Map<String, Value>,
    },
    /// Legacy names directly on the top-level object
    Flattened(&'a Map<String, Value>),
    /// Serialized structured data inside a text value
    Text(&'a str),
    Absent,
}

impl<'a> AnalysisPayload<'a> {
    pub fn classify(body: Option<&'a Value>) -> Self {
        let Some(mut value) = body else {
            return Self::Absent;
        };

        if let Some(inner) = value.get(ENVELOPE_KEY) {
            value = inner;
        }

        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(outer) => match outer.get(STRUCTURED_KEY) {
                Some(Value::Object(nested)) => Self::Structured { nested, outer },
                Some(Value::String(text)) => Self::Text(text),
                _ => Self::Flattened(outer),
            },
            _ => Self::Absent,
        }
    }
}

/// Reduce a raw analyze response (or bare analysis payload) to the canonical record
pub fn normalize(body: Option<&Value>) -> AnalysisOutcome {
    resolve(AnalysisPayload::classify(body), true)
}

fn resolve(payload: AnalysisPayload<'_>, decode_text: bool) -> AnalysisOutcome {
    match payload {
        AnalysisPayload::Structured { nested, outer } => extract(&[nested, outer]),
        AnalysisPayload::Flattened(object) => extract(&[object]),
        AnalysisPayload::Text(text) if decode_text => decode_text_payload(text),
        AnalysisPayload::Text(_) => {
            debug!("Text payload nested inside decoded text, treating as empty");
            AnalysisOutcome::Empty
        }
        AnalysisPayload::Absent => AnalysisOutcome::Empty,
    }
}

fn decode_text_payload(text: &str) -> AnalysisOutcome {
    let cleaned = strip_code_fence(text);

    match serde_json::from_str::<Value>(cleaned) {
        Ok(decoded) => resolve(AnalysisPayload::classify(Some(&decoded)), false),
        Err(e) => {
            warn!("Failed to decode text analysis payload: {}", e);
            AnalysisOutcome::Empty
        }
    }
}

/// Remove a surrounding fenced-code-block marker and its optional info string
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix(FENCE) {
        body = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = body.trim_end().strip_suffix(FENCE) {
        body = rest;
    }

    body.trim()
}

// ===== Field Resolution =====

/// Ordered lookup over one or more JSON objects
struct Fields<'a> {
    layers: &'a [&'a Map<String, Value>],
}

impl Fields<'_> {
    /// First value that is present and readable, layers outermost-last
    fn find<T>(&self, names: &[&str], read: fn(&Value) -> Option<T>) -> Option<T> {
        for layer in self.layers {
            for name in names {
                if let Some(found) = layer.get(*name).and_then(read) {
                    return Some(found);
                }
            }
        }
        None
    }
}

fn extract(layers: &[&Map<String, Value>]) -> AnalysisOutcome {
    let fields = Fields { layers };

    let report = AnalysisReport {
        match_score: fields.find(MATCH_SCORE, read_score),
        match_status: fields.find(MATCH_STATUS, read_text),
        overall_assessment: fields.find(OVERALL_ASSESSMENT, read_text),
        candidate_info: fields.find(CANDIDATE_INFO, read_candidate),
        matched_skills: fields.find(MATCHED_SKILLS, read_list).unwrap_or_default(),
        missing_skills: fields.find(MISSING_SKILLS, read_list).unwrap_or_default(),
        formatting_score: fields.find(FORMATTING_SCORE, read_score),
        formatting_issues: fields.find(FORMATTING_ISSUES, read_list).unwrap_or_default(),
        recommendations: fields.find(RECOMMENDATIONS, read_list).unwrap_or_default(),
        job_context: fields.find(JOB_CONTEXT, read_job_context),
        ats_score: fields.find(ATS_SCORE, read_score),
        ats_keywords_missing: fields
            .find(ATS_KEYWORDS_MISSING, read_list)
            .unwrap_or_default(),
        model_used: fields.find(MODEL_USED, read_text),
    };

    AnalysisOutcome::from(report)
}

fn read_score(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim_end().parse().ok(),
        _ => None,
    };
    score.filter(|s: &f64| s.is_finite())
}

fn read_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn read_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(items.iter().filter_map(read_text).collect()),
        Value::String(_) => read_text(value).map(|item| vec![item]),
        _ => None,
    }
}

fn read_candidate(value: &Value) -> Option<CandidateInfo> {
    let object = value.as_object()?;
    let text = |name: &str| object.get(name).and_then(read_text);

    let info = CandidateInfo {
        name: text("name"),
        role: text("role"),
        experience: text("experience"),
        education: text("education"),
    };
    (!info.is_blank()).then_some(info)
}

fn read_job_context(value: &Value) -> Option<JobContext> {
    let object = value.as_object()?;
    let text = |name: &str| object.get(name).and_then(read_text);

    let context = JobContext {
        title: text("title"),
        requirements_summary: text("requirements_summary"),
    };
    (!context.is_blank()).then_some(context)
}
