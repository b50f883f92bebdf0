//! Exercise definitions and the read-only exercise catalog.
//!
//! An exercise describes one training scenario: the business process under
//! study, the reference solution the learner is expected to reconstruct, and
//! the persona the simulated domain expert takes on during the interview.
//! Definitions are loaded once at process start and never change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of characters of the description shown in exercise listings.
const SUMMARY_DESCRIPTION_CHARS: usize = 200;

/// Persona attributes used to instruct the simulated domain expert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertPersona {
    /// Job role of the expert (e.g. "Warehouse Operations Manager").
    pub role: String,
    /// Experience background (e.g. "12 years in order fulfillment").
    pub experience: String,
    /// Communication style (e.g. "pragmatic, detail-oriented").
    pub style: String,
}

/// A single training exercise, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDefinition {
    /// Exercise title shown to learners.
    pub title: String,
    /// Full description of the business process.
    pub description: String,
    /// Reference solution the expert draws its knowledge from. Withheld
    /// from learners until they request the solution explicitly.
    pub reference_solution: String,
    /// Reference BPMN diagram, stored as an opaque string.
    pub bpmn_diagram: String,
    /// What the learner should take away from the exercise.
    pub learning_objectives: Vec<String>,
    /// Persona the expert assistant simulates.
    pub expert_persona: ExpertPersona,
}

impl ExerciseDefinition {
    /// Display name for the expert assistant bound to this exercise.
    pub fn assistant_name(&self) -> String {
        format!("BPM Domain Expert - {}", self.title)
    }

    /// Renders the instruction block used to provision the expert assistant.
    ///
    /// The instructions align the assistant with the process description and
    /// reference solution, and with the exercise's persona attributes.
    pub fn persona_instructions(&self) -> String {
        format!(
            r#"You are a domain expert being interviewed about the "{title}" business process.

DOMAIN ALIGNMENT:
Process Description: {description}
Reference Solution: {reference_solution}

Your role is to simulate a realistic business domain expert who knows the process intimately but responds naturally to questions. You should:

1. Provide accurate information about the process based on the reference solution
2. Not give away the entire process in one response
3. Answer questions as a real expert would - sometimes requiring follow-up questions for clarity
4. Use business terminology naturally
5. Occasionally mention practical considerations and edge cases
6. Guide the conversation subtly toward complete process understanding

PERSONA ALIGNMENT:
- Role: {role}
- Experience: {experience}
- Communication Style: {style}

Respond in a conversational, helpful manner. Add appropriate filler words and natural speech patterns. Be collaborative but not overly verbose. If asked about specific details not in your knowledge, acknowledge limitations professionally."#,
            title = self.title,
            description = self.description,
            reference_solution = self.reference_solution,
            role = self.expert_persona.role,
            experience = self.expert_persona.experience,
            style = self.expert_persona.style,
        )
    }

    /// Description shortened for listings: the first 200 characters plus an
    /// ellipsis marker.
    pub fn summary_description(&self) -> String {
        let mut short: String = self
            .description
            .chars()
            .take(SUMMARY_DESCRIPTION_CHARS)
            .collect();
        short.push_str("...");
        short
    }
}

/// Compact exercise view for listings. Carries no solution material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseSummary {
    pub code: String,
    pub title: String,
    pub description: String,
}

/// Read-only mapping from exercise code to definition.
///
/// Loaded once at startup; lookups are cheap and lock-free since the catalog
/// is never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: HashMap<String, ExerciseDefinition>,
}

impl ExerciseCatalog {
    /// Creates a catalog from a code -> definition mapping.
    pub fn from_definitions(exercises: HashMap<String, ExerciseDefinition>) -> Self {
        Self { exercises }
    }

    /// Looks up an exercise by code.
    pub fn get(&self, code: &str) -> Option<&ExerciseDefinition> {
        self.exercises.get(code)
    }

    /// Returns summaries of all exercises, ordered by code.
    pub fn summaries(&self) -> Vec<ExerciseSummary> {
        let mut summaries: Vec<ExerciseSummary> = self
            .exercises
            .iter()
            .map(|(code, def)| ExerciseSummary {
                code: code.clone(),
                title: def.title.clone(),
                description: def.summary_description(),
            })
            .collect();
        summaries.sort_by(|a, b| a.code.cmp(&b.code));
        summaries
    }

    /// Number of exercises in the catalog.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Returns true if the catalog holds no exercises.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
