//! Candidate lists feeding the decision wheel.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single weighted entry on a candidate list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Unique identifier for the candidate
    pub id: u64,

    /// ID of the parent list
    pub list_id: u64,

    /// Text shown on the wheel
    pub label: String,

    /// Relative likelihood of being drawn (at least 1)
    pub weight: u32,

    /// Timestamp when the candidate was added (UTC)
    pub created_at: Timestamp,
}

/// A named list of candidates owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateList {
    pub id: u64,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Candidates in insertion order
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CandidateList {
    /// Sum of all candidate weights.
    pub fn total_weight(&self) -> u64 {
        self.candidates.iter().map(|c| u64::from(c.weight)).sum()
    }
}

/// Compact list representation used by listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub candidate_count: u32,
    pub total_weight: u64,
    pub created_at: Timestamp,
}

/// The outcome of a wheel spin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelDraw {
    /// The list that was spun
    pub list_id: u64,
    /// Name of the list that was spun
    pub list_name: String,
    /// The drawn candidate
    pub candidate: Candidate,
    /// Probability the drawn candidate had (`weight / total weight`)
    pub probability: f64,
}
