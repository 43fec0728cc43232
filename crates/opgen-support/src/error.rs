/// Failure of a single generated operation handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
  /// The request is missing fields, has the wrong parameter arity or a mistyped parameter.
  #[error("invalid request: {0}")]
  RequestValidation(String),

  /// The bridge answered with an envelope that cannot be interpreted.
  #[error("bridge protocol error: {0}")]
  BridgeProtocol(String),

  /// The bridge reported an explicit failure of the remote call.
  #[error("{0}")]
  BridgeApplication(String),

  /// No handler is registered for the requested operation.
  #[error("Unknown operation \"{0}\"")]
  Dispatch(String),
}

impl OperationError {
  pub fn request_validation(message: impl Into<String>) -> Self {
    Self::RequestValidation(message.into())
  }

  pub fn bridge_protocol(message: impl Into<String>) -> Self {
    Self::BridgeProtocol(message.into())
  }

  pub fn bridge_application(message: impl Into<String>) -> Self {
    Self::BridgeApplication(message.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    struct Case {
      error: OperationError,
      expected: &'static str,
    }

    let cases = [
      Case {
        error: OperationError::Dispatch("doesNotExist".to_string()),
        expected: "Unknown operation \"doesNotExist\"",
      },
      Case {
        error: OperationError::bridge_application("x"),
        expected: "x",
      },
      Case {
        error: OperationError::bridge_protocol("Got invalid response from the JSON bridge"),
        expected: "bridge protocol error: Got invalid response from the JSON bridge",
      },
      Case {
        error: OperationError::request_validation("Operation \"ping\" does not take any parameter"),
        expected: "invalid request: Operation \"ping\" does not take any parameter",
      },
    ];

    for case in cases {
      assert_eq!(case.error.to_string(), case.expected);
    }
  }
}
