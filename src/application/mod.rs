// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the manager and holds UI workflow state
// - Serializes access to the manager for embedding front-ends
// - Translates errors into UI-friendly responses

pub mod error_handling;
pub mod session;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use session::{EditSession, SubmitOutcome};
pub use state::AppState;
