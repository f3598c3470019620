//! Survey domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A survey as presented to the user.
///
/// The `date` field is always a parsed timestamp; converting the wire
/// format's ISO-8601 string happens in `opine-api`, and an unparsable date
/// never produces a `SurveyModel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyModel {
    /// Server-assigned survey identifier.
    pub id: String,
    /// The survey question text.
    pub question: String,
    /// When the survey was published.
    pub date: DateTime<Utc>,
    /// Whether the current account has already answered this survey.
    pub did_answer: bool,
}
