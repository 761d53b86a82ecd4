use camino::Utf8PathBuf;
use dicom::core::{Tag, VR};
use dicom::core::value::ConvertValueError;

/// Errors which occur while converting a DICOM dataset to JSON.
#[derive(thiserror::Error, Debug)]
pub enum DicomJsonError {
    /// A decimal string (DS) value could not be repaired into a JSON number.
    #[error("Cannot write DICOM number \"{value}\" to JSON")]
    Format { value: String },

    /// JSON to DICOM conversion is not implemented.
    #[error("Conversion from JSON to a DICOM dataset is not supported")]
    UnsupportedOperation,

    #[error("Value of element {tag} cannot be read as {vr}")]
    InvalidValue {
        tag: Tag,
        vr: VR,
        source: ConvertValueError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors which occur while extracting the metadata of a DICOM file.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Read(#[from] dicom::object::ReadError),

    #[error(transparent)]
    Json(#[from] DicomJsonError),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Path has no file name: \"{0}\"")]
    NoFileStem(Utf8PathBuf),
}
