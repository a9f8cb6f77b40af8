use game_core::{ErrorSeverity, GameError, Position, RuleError};

/// Defects in the compiled-in scenario data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("map cell {position} holds unknown sprite index {raw}")]
    UnknownCell { raw: u8, position: Position },

    #[error("table '{table}' is invalid: {source}")]
    Table {
        table: &'static str,
        #[source]
        source: RuleError,
    },
}

impl ContentError {
    pub(crate) fn table(table: &'static str) -> impl FnOnce(RuleError) -> Self {
        move |source| ContentError::Table { table, source }
    }
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ContentError::UnknownCell { .. } => "CONTENT_UNKNOWN_CELL",
            ContentError::Table { .. } => "CONTENT_INVALID_TABLE",
        }
    }
}
