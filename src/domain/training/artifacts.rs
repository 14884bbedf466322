//! Compiled artifact models.
//!
//! Shapes mirror what the dialogue engine's training process reads:
//! `nlu.json` (training examples), `domain.yml` (intents and responses) and
//! `stories.md` (markdown story document).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One NLU training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub intent: String,
    pub text: String,
}

/// Envelope of the NLU training data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluData {
    pub rasa_nlu_data: ExampleSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSet {
    pub common_examples: Vec<TrainingExample>,
}

/// One button (or quick reply) of a compiled response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    pub title: String,
    pub payload: String,
}

impl ButtonSpec {
    /// Builds a button whose payload echoes its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            payload: label.clone(),
            title: label,
        }
    }
}

/// One compiled response entry, keyed by `utter_{intent}_{index}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtterResponse {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<ButtonSpec>>,
}

impl UtterResponse {
    /// A bare text response.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
            buttons: None,
        }
    }
}

/// Domain artifact: intent list plus the merged response map.
///
/// Response keys embed the intent id, so merging maps from different intents
/// can never collide. Insertion order is preserved so serialization is
/// byte-deterministic for a stable catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFile {
    pub intents: Vec<String>,
    pub responses: IndexMap<String, Vec<UtterResponse>>,
}

/// The three compiled artifacts, produced together from one catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifacts {
    pub nlu: NluData,
    pub domain: DomainFile,
    pub stories: String,
}

impl CompiledArtifacts {
    /// Serializes the NLU artifact to JSON.
    pub fn nlu_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.nlu)
    }

    /// Serializes the domain artifact to YAML.
    pub fn domain_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.domain)
    }
}
