pub mod checks;
pub mod commands;
pub mod handlers;

/// Common result type of update handlers. Errors bubble to the dispatcher,
/// which logs them and keeps processing ("log and proceed").
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
