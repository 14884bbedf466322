//! Knowledge compiler.
//!
//! Pure transformation from the full intent catalog (in stable catalog order)
//! to the three training artifacts. No partial or incremental compilation.

use crate::domain::foundation::IntentId;
use crate::domain::intent::{Intent, ResponseDirective};

use super::{ButtonSpec, CompileError, CompiledArtifacts, DomainFile, NluData, TrainingExample, UtterResponse};

/// Compiles the catalog into NLU examples, domain definitions and stories.
///
/// Deterministic: two runs over an unchanged catalog produce byte-identical
/// artifacts.
///
/// # Errors
///
/// - `DanglingDirective` if an image/button/quick-reply directive has no
///   preceding text directive within its intent
pub fn compile(intents: &[Intent]) -> Result<CompiledArtifacts, CompileError> {
    let mut nlu = NluData::default();
    let mut domain = DomainFile::default();
    let mut stories = String::new();

    for intent in intents {
        let examples = &mut nlu.rasa_nlu_data.common_examples;
        // The intent identifier doubles as a trivial example.
        examples.push(TrainingExample {
            intent: intent.id.to_string(),
            text: intent.id.to_string(),
        });
        if let Some(main_question) = &intent.main_question {
            examples.push(TrainingExample {
                intent: intent.id.to_string(),
                text: main_question.clone(),
            });
        }
        for knowledge in &intent.knowledges {
            examples.push(TrainingExample {
                intent: intent.id.to_string(),
                text: knowledge.question().to_string(),
            });
        }

        domain.intents.push(intent.id.to_string());

        let entries = compile_responses(intent)?;
        stories.push_str(&render_story(
            &intent.id,
            entries.iter().map(|(key, _)| key.as_str()),
        ));
        for (key, response) in entries {
            domain.responses.insert(key, vec![response]);
        }
    }

    Ok(CompiledArtifacts {
        nlu,
        domain,
        stories,
    })
}

/// Compiles one intent's directive sequence into keyed response entries,
/// in first-created order.
///
/// The fold threads the most recent text entry through the sequence: text
/// directives open a new entry keyed by their own index, everything else
/// attaches to that entry. A later button or quick-reply directive replaces
/// any button list attached earlier to the same text block.
fn compile_responses(intent: &Intent) -> Result<Vec<(String, UtterResponse)>, CompileError> {
    let mut entries: Vec<(String, UtterResponse)> = Vec::new();
    let mut last_text: Option<usize> = None;

    for (index, directive) in intent.responses.iter().enumerate() {
        match directive {
            ResponseDirective::Text(text) => {
                entries.push((
                    format!("utter_{}_{}", intent.id, index),
                    UtterResponse::text(text.clone()),
                ));
                last_text = Some(entries.len() - 1);
            }
            ResponseDirective::Image(url) => {
                let entry = last_text_entry(&mut entries, last_text, intent, index, directive)?;
                entry.image = Some(url.clone());
            }
            ResponseDirective::Button(raw) | ResponseDirective::QuickReply(raw) => {
                let buttons: Vec<ButtonSpec> = ResponseDirective::split_options(raw)
                    .into_iter()
                    .map(ButtonSpec::new)
                    .collect();
                let entry = last_text_entry(&mut entries, last_text, intent, index, directive)?;
                entry.buttons = Some(buttons);
            }
        }
    }

    Ok(entries)
}

/// Resolves the entry opened by the nearest preceding text directive.
fn last_text_entry<'a>(
    entries: &'a mut [(String, UtterResponse)],
    last_text: Option<usize>,
    intent: &Intent,
    index: usize,
    directive: &ResponseDirective,
) -> Result<&'a mut UtterResponse, CompileError> {
    let position = last_text.ok_or_else(|| CompileError::DanglingDirective {
        intent: intent.id.to_string(),
        index,
        kind: directive.kind(),
    })?;
    Ok(&mut entries[position].1)
}

/// Renders one story block: heading, intent invocation, then one line per
/// response key in first-created order.
fn render_story<'a>(intent_id: &IntentId, keys: impl Iterator<Item = &'a str>) -> String {
    let mut story = format!("## {}\n* {}", intent_id, intent_id);
    for key in keys {
        story.push_str(&format!("\n  - {}", key));
    }
    story.push_str("\n\n");
    story
}
