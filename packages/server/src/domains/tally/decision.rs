use serde::{Deserialize, Serialize};

use crate::common::AppError;

/// A stakeholder's decision on a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
    ChangesRequested,
}

impl Decision {
    pub const ALL: [Decision; 3] = [
        Decision::Approved,
        Decision::Rejected,
        Decision::ChangesRequested,
    ];

    /// Machine name, used in form values
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Rejected => "rejected",
            Decision::ChangesRequested => "changes_requested",
        }
    }

    /// Label written to the vote worksheet
    pub fn label(self) -> &'static str {
        match self {
            Decision::Approved => "Aprovado",
            Decision::Rejected => "Reprovado",
            Decision::ChangesRequested => "Ajuste",
        }
    }

    /// Button caption on the approval page
    pub fn action_label(self) -> &'static str {
        match self {
            Decision::Approved => "Aprovar",
            Decision::Rejected => "Reprovar",
            Decision::ChangesRequested => "Ajustar",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Decision {
    type Err = AppError;

    /// Accepts worksheet labels and machine names, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aprovado" | "approved" => Ok(Decision::Approved),
            "reprovado" | "rejected" => Ok(Decision::Rejected),
            "ajuste" | "changes_requested" => Ok(Decision::ChangesRequested),
            _ => Err(AppError::Validation(format!("Decisão inválida: {}", s.trim()))),
        }
    }
}

/// Aggregate status of a story, derived from all of its votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateStatus {
    Pending,
    Approved,
    Rejected,
    ChangesRequested,
}

impl AggregateStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregateStatus::Pending => "pending",
            AggregateStatus::Approved => "approved",
            AggregateStatus::Rejected => "rejected",
            AggregateStatus::ChangesRequested => "changes_requested",
        }
    }

    /// Label written to the story worksheet's status column
    pub fn label(self) -> &'static str {
        match self {
            AggregateStatus::Pending => "Pendente",
            AggregateStatus::Approved => "Aprovado",
            AggregateStatus::Rejected => "Reprovado",
            AggregateStatus::ChangesRequested => "Ajuste",
        }
    }
}

impl From<Decision> for AggregateStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approved => AggregateStatus::Approved,
            Decision::Rejected => AggregateStatus::Rejected,
            Decision::ChangesRequested => AggregateStatus::ChangesRequested,
        }
    }
}

impl std::fmt::Display for AggregateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AggregateStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pendente" | "pending" => Ok(AggregateStatus::Pending),
            other => other
                .parse::<Decision>()
                .map(AggregateStatus::from)
                .map_err(|_| AppError::Validation(format!("Status inválido: {}", s.trim()))),
        }
    }
}
