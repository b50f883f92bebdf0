//! StartExerciseHandler - creates a session for one exercise run.

use std::sync::Arc;

use crate::application::error::ConversationError;
use crate::domain::{ConversationId, ExerciseCatalog, Session};
use crate::ports::{AssistantGateway, CreateAssistantRequest, SessionStore};

/// Command to start an exercise.
#[derive(Debug, Clone)]
pub struct StartExerciseCommand {
    pub exercise_code: String,
}

/// Public exercise view returned on session creation.
///
/// Carries everything the learner needs to begin the interview; the
/// reference solution and diagram are withheld.
#[derive(Debug, Clone)]
pub struct ExerciseOverview {
    pub code: String,
    pub title: String,
    pub description: String,
    pub learning_objectives: Vec<String>,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct StartExerciseResult {
    pub conversation_id: ConversationId,
    pub exercise: ExerciseOverview,
}

/// Handler for starting exercises.
///
/// Provisions a persona-configured assistant and a fresh thread on the
/// remote service, then registers the session locally. The store insert
/// happens last: if either remote call fails, no session is registered.
pub struct StartExerciseHandler {
    catalog: Arc<ExerciseCatalog>,
    gateway: Arc<dyn AssistantGateway>,
    store: Arc<dyn SessionStore>,
    model: String,
    temperature: f32,
}

impl StartExerciseHandler {
    pub fn new(
        catalog: Arc<ExerciseCatalog>,
        gateway: Arc<dyn AssistantGateway>,
        store: Arc<dyn SessionStore>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            catalog,
            gateway,
            store,
            model: model.into(),
            temperature,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartExerciseCommand,
    ) -> Result<StartExerciseResult, ConversationError> {
        // 1. Resolve the exercise before touching the remote service.
        let exercise = self
            .catalog
            .get(&cmd.exercise_code)
            .cloned()
            .ok_or_else(|| ConversationError::ExerciseNotFound(cmd.exercise_code.clone()))?;

        // 2. Provision the expert assistant for this exercise's persona.
        let assistant_id = self
            .gateway
            .create_assistant(CreateAssistantRequest::new(
                exercise.assistant_name(),
                exercise.persona_instructions(),
                self.model.as_str(),
                self.temperature,
            ))
            .await?;

        // 3. Provision the conversation thread.
        let thread_id = self.gateway.create_thread().await?;

        // 4. Register the session.
        let conversation_id = ConversationId::generate();
        let overview = ExerciseOverview {
            code: cmd.exercise_code.clone(),
            title: exercise.title.clone(),
            description: exercise.description.clone(),
            learning_objectives: exercise.learning_objectives.clone(),
        };

        let session = Session::new(
            conversation_id.clone(),
            thread_id.clone(),
            assistant_id.clone(),
            cmd.exercise_code,
            exercise,
        );
        self.store.insert(session).await?;

        tracing::info!(
            conversation_id = %conversation_id,
            exercise_code = %overview.code,
            assistant_id = %assistant_id,
            thread_id = %thread_id,
            "exercise session started"
        );

        Ok(StartExerciseResult {
            conversation_id,
            exercise: overview,
        })
    }
}
