use thiserror::Error;

/// Errors surfaced to backoffice and approval page users
#[derive(Error, Debug)]
pub enum AppError {
    #[error("História de Usuário não encontrada: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Já existe uma HU com o ID {0}")]
    DuplicateStory(String),

    #[error("As colunas {missing:?} não foram encontradas na planilha {worksheet}")]
    MissingColumns {
        worksheet: String,
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("Linha {row} da planilha {worksheet} é inválida: {reason}")]
    InvalidRow {
        worksheet: String,
        row: usize,
        reason: String,
    },

    #[error("Armazenamento indisponível: {0:#}")]
    BackendUnavailable(#[source] anyhow::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Shorthand for a validation failure on a named form field
    pub fn required(field: &str) -> Self {
        AppError::Validation(format!("O campo \"{}\" é obrigatório", field))
    }

    /// Whether the error was caused by user input (shown inline on the form)
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::DuplicateStory(_))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::BackendUnavailable(err)
    }
}
