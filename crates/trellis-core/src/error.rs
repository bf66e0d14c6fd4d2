//! Error types and exit codes for trellis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph input, violated precondition)

use thiserror::Error;

/// Exit codes reported by the trellis CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph, violated precondition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Signalled by `alg::topsort` when the input graph contains a cycle.
///
/// A dedicated type so callers can tell "the graph has a cycle" apart from
/// every other failure; `alg::is_acyclic` swallows exactly this.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("graph contains a cycle")]
pub struct CycleError;

/// Errors that can occur during trellis operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Structural misuse (exit code 3)
    #[error("cannot set a named edge on a non-multigraph")]
    EdgeNameNotAllowed,

    #[error("cannot set parent in a non-compound graph")]
    NotCompound,

    #[error("setting parent of {child} to {parent} would create a cycle")]
    ParentWouldCycle { child: String, parent: String },

    // Algorithm preconditions (exit code 3)
    #[error("graph does not contain node: {id}")]
    NodeNotFound { id: String },

    #[error("negative weight {weight} on edge {v} -> {w}")]
    NegativeEdgeWeight { v: String, w: String, weight: f64 },

    #[error("input graph is not connected")]
    NotConnected,

    #[error(transparent)]
    Cycle(#[from] CycleError),

    // Priority queue misuse (exit code 1)
    #[error("queue underflow: no elements in queue")]
    QueueUnderflow,

    #[error("queue does not contain key: {key}")]
    QueueKeyNotFound { key: String },

    #[error("new priority {new} for {key} is greater than current priority {current}")]
    PriorityNotDecreased { key: String, current: f64, new: f64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GraphError::UsageError(_) => ExitCode::Usage,

            // Data errors
            GraphError::EdgeNameNotAllowed
            | GraphError::NotCompound
            | GraphError::ParentWouldCycle { .. }
            | GraphError::NodeNotFound { .. }
            | GraphError::NegativeEdgeWeight { .. }
            | GraphError::NotConnected
            | GraphError::Cycle(_)
            | GraphError::Json(_) => ExitCode::Data,

            // Generic failures
            GraphError::QueueUnderflow
            | GraphError::QueueKeyNotFound { .. }
            | GraphError::PriorityNotDecreased { .. }
            | GraphError::Io(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::EdgeNameNotAllowed => "edge_name_not_allowed",
            GraphError::NotCompound => "not_compound",
            GraphError::ParentWouldCycle { .. } => "parent_would_cycle",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::NegativeEdgeWeight { .. } => "negative_edge_weight",
            GraphError::NotConnected => "not_connected",
            GraphError::Cycle(_) => "cycle",
            GraphError::QueueUnderflow => "queue_underflow",
            GraphError::QueueKeyNotFound { .. } => "queue_key_not_found",
            GraphError::PriorityNotDecreased { .. } => "priority_not_decreased",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, GraphError>;
