use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    RenameSourceNotFound,
    RenameDestinationExists,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::RenameSourceNotFound => "rename.source_not_found",
            ErrorCode::RenameDestinationExists => "rename.destination_exists",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

/// Whether a missing rename source was a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    File,
    Directory,
}

impl PathKind {
    fn label(&self) -> &'static str {
        match self {
            PathKind::File => "File",
            PathKind::Directory => "Directory",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNotFoundDetails {
    pub kind: PathKind,
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationExistsDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn empty_details() -> Value {
    Value::Object(serde_json::Map::new())
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    /// The file or directory a step addresses does not exist.
    ///
    /// The message doubles as the console line for the skipped step,
    /// e.g. `File /work/CMakeLists.txt not found.`
    pub fn rename_source_not_found(kind: PathKind, path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("{} {} not found.", kind.label(), path);
        let details = serde_json::to_value(SourceNotFoundDetails { kind, path })
            .unwrap_or_else(|_| empty_details());

        Self::new(ErrorCode::RenameSourceNotFound, message, details)
    }

    pub fn rename_destination_exists(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("Directory {} already exists.", path);
        let details = serde_json::to_value(DestinationExistsDetails { path: path.clone() })
            .unwrap_or_else(|_| empty_details());

        Self::new(ErrorCode::RenameDestinationExists, message, details).with_hint(format!(
            "Move '{}' out of the way and run again to rename this directory",
            path
        ))
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| empty_details());

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalJsonErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| empty_details());

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    /// Message with the underlying cause and operation context, when the
    /// details carry them (`IO error (read x): Permission denied`).
    pub fn describe(&self) -> String {
        let cause = self.details.get("error").and_then(Value::as_str);
        let context = self.details.get("context").and_then(Value::as_str);

        match (cause, context) {
            (Some(cause), Some(context)) => format!("{} ({}): {}", self.message, context, cause),
            (Some(cause), None) => format!("{}: {}", self.message, cause),
            _ => self.message.clone(),
        }
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
