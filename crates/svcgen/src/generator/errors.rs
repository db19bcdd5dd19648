use strum::Display;

/// Defects in the input model. All of them abort generation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ModelError {
  #[strum(to_string = "Shape '{shape}' referenced by '{referenced_by}' does not exist")]
  MissingShape { shape: String, referenced_by: String },
  #[strum(to_string = "Shape '{shape}' has unsupported kind '{kind}'")]
  UnknownShapeKind { shape: String, kind: String },
  #[strum(to_string = "Shape '{shape}' is a {kind} without a '{part}' reference")]
  MalformedWrapper { shape: String, kind: String, part: String },
  #[strum(to_string = "Shape '{shape}' wraps itself through '{via}'")]
  RecursiveWrapper { shape: String, via: String },
  #[strum(to_string = "Operation '{operation}' references missing {direction} shape '{shape}'")]
  OperationShapeMissing {
    operation: String,
    direction: String,
    shape: String,
  },
  #[strum(to_string = "Protocol '{protocol}' is not supported, only 'json' models can be generated")]
  UnsupportedProtocol { protocol: String },
}

impl std::error::Error for ModelError {}
