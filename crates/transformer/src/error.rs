use graphassert_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Transformer '{transformer}' has an invalid directive definition: {reason}")]
    InvalidDefinition { transformer: String, reason: String },

    #[error("Directive '@{directive}' is not allowed on {location} '{target}'.")]
    InvalidLocation {
        directive: String,
        location: &'static str,
        target: String,
    },

    #[error("Directive '@{directive}' on '{target}' is missing required argument '{argument}'.")]
    MissingArgument {
        directive: String,
        target: String,
        argument: String,
    },

    #[error("Directive '@{directive}' on '{target}' has unknown argument '{argument}'.")]
    UnknownArgument {
        directive: String,
        target: String,
        argument: String,
    },

    #[error("Argument '{argument}' of directive '@{directive}' on '{target}' {reason}.")]
    InvalidArgument {
        directive: String,
        target: String,
        argument: String,
        reason: &'static str,
    },

    #[error("The @{directive} directive cannot be placed on an interface's field. See {interface_name}.{field_name}")]
    InterfaceField {
        directive: String,
        interface_name: String,
        field_name: String,
    },

    #[error("@{directive} directive can only be used on types with @{model} directive. See {type_name}.{field_name}")]
    MissingModel {
        directive: String,
        model: String,
        type_name: String,
        field_name: String,
    },
}

impl TransformError {
    /// Whether the error comes from a misplaced or misconfigured directive,
    /// as opposed to an unparsable document.
    pub fn is_invalid_directive(&self) -> bool {
        !matches!(
            self,
            TransformError::Schema(_) | TransformError::InvalidDefinition { .. }
        )
    }
}
