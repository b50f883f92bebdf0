//! Use-case handlers.

mod send_message;
mod start_exercise;

pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
pub use start_exercise::{
    ExerciseOverview, StartExerciseCommand, StartExerciseHandler, StartExerciseResult,
};
