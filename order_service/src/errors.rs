// order_service/src/errors.rs

use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use orderflow::FlowError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("There is no customer with the provided id.")]
  InvalidCustomer,

  #[error("There is no product with the provided id \"{0}\".")]
  InvalidProduct(Uuid),

  #[error("The requested quantity for product with id \"{0}\" is not available.")]
  InsufficientStock(Uuid),

  #[error("The requested quantity {quantity} for product with id \"{product_id}\" must be greater than zero.")]
  InvalidQuantity { product_id: Uuid, quantity: i32 },

  #[error("Repository Error: {0}")]
  Repository(#[source] anyhow::Error),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),

  // A step stopped the pipeline without reporting an error.
  #[error("Pipeline execution was halted by a handler.")]
  PipelineHalted,
}

impl AppError {
  /// Validation failures caused by the request itself.
  pub fn is_client_error(&self) -> bool {
    matches!(
      self,
      AppError::InvalidCustomer
        | AppError::InvalidProduct(_)
        | AppError::InsufficientStock(_)
        | AppError::InvalidQuantity { .. }
    )
  }

  /// HTTP status the request boundary should answer with.
  pub fn status_code(&self) -> u16 {
    match self {
      e if e.is_client_error() => 400,
      AppError::PipelineHalted => 409,
      _ => 500,
    }
  }

  pub fn response_body(&self) -> serde_json::Value {
    if self.is_client_error() {
      json!({"status": "error", "message": self.to_string()})
    } else {
      tracing::error!(application_error = ?self, "Responding with internal error");
      json!({"status": "error", "message": "Internal server error"})
    }
  }
}

// Handlers propagate collaborator failures with `?` on anyhow results.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Repository(err)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
