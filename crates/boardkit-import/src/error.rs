//! Error types for the import pipeline
//!
//! All error types use `thiserror`. Nothing in this layer performs I/O,
//! so no error is transient; every variant is a precondition violation
//! surfaced to the caller.

use boardkit_core::layer::Layer;
use thiserror::Error;

/// Import configuration rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// The import scale factor must be finite and strictly positive.
    #[error("Invalid import scale {scale}: must be finite and greater than zero")]
    InvalidScale {
        /// The rejected scale factor.
        scale: f64,
    },
}

/// Failure to manufacture an item for the selected target container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The target board's stackup does not enable this layer.
    #[error("Layer {layer} is not enabled on the target board")]
    LayerNotEnabled {
        /// The rejected layer.
        layer: Layer,
    },

    /// Footprint graphics cannot be placed on this layer.
    #[error("Layer {layer} is not allowed in a footprint")]
    LayerNotAllowed {
        /// The rejected layer.
        layer: Layer,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = SettingsError::InvalidScale { scale: -2.0 };
        assert!(error.to_string().contains("-2"));

        let error = ImportError::LayerNotEnabled {
            layer: Layer::Inner1Copper,
        };
        assert!(error.to_string().contains("In1.Cu"));

        let error = ImportError::LayerNotAllowed {
            layer: Layer::Inner4Copper,
        };
        assert!(error.to_string().contains("footprint"));
    }
}
