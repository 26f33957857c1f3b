use thiserror::Error;

/// Failure of one of the packaging tools the snapshot is gathered from.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("Failed to run {command}: {reason}")]
    Spawn { command: String, reason: String },

    #[error("Command failed: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Unexpected output from {command}: {reason}")]
    InvalidOutput { command: String, reason: String },
}

/// Render a program and its arguments the way a shell user would type them.
pub(crate) fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
