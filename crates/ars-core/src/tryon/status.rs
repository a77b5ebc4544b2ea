use serde::{Deserialize, Serialize};

/// Phase of a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingPhase {
    Idle,
    Uploading,
    Processing,
    Completed,
    Error,
}

/// Progress snapshot reported while a pipeline run is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStatus {
    pub status: ProcessingPhase,
    /// Percentage in `0..=100`.
    pub progress: u8,
    pub message: String,
}

impl ProcessingStatus {
    pub const START_MESSAGE: &'static str = "Iniciando processamento...";
    pub const COMPLETED_MESSAGE: &'static str = "Processamento concluído!";
    pub const ERROR_MESSAGE: &'static str = "Erro no processamento. Tente novamente.";

    pub fn starting() -> Self {
        Self {
            status: ProcessingPhase::Processing,
            progress: 0,
            message: Self::START_MESSAGE.to_string(),
        }
    }

    pub fn processing(progress: u8, message: impl Into<String>) -> Self {
        Self {
            status: ProcessingPhase::Processing,
            progress: progress.min(100),
            message: message.into(),
        }
    }

    pub fn completed() -> Self {
        Self {
            status: ProcessingPhase::Completed,
            progress: 100,
            message: Self::COMPLETED_MESSAGE.to_string(),
        }
    }

    pub fn error() -> Self {
        Self {
            status: ProcessingPhase::Error,
            progress: 0,
            message: Self::ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == ProcessingPhase::Error
    }
}
