use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PictureError {
    #[error("Image source has invalid type: {0}")]
    InvalidSource(String),

    #[error("Equal size names to sizes required when using a rendition object: got {names} size names for {sizes} sizes")]
    SizeNameMismatch { names: usize, sizes: usize },

    #[error("The size \"{0}\" has not been defined for this object")]
    UndefinedSize(String),

    #[error("Malformed size entry \"{0}\", expected WIDTH or WIDTHxHEIGHT")]
    MalformedSize(String),

    #[error("Image URL \"{0}\" has no file extension")]
    MissingExtension(String),

    #[error("Invalid picture tag: {0}")]
    TemplateSyntax(String),

    #[error("Variable \"{0}\" does not exist in the template context")]
    UndefinedVariable(String),

    #[error("Invalid value for argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },
}
