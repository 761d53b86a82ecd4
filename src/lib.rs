//! Conversion of DICOM metadata to JSON, based on the DICOM JSON Model (PS3.18 Annex F).
//!
//! Keys are DICOM keywords by default instead of tags, and bulk binary data is removed.
mod batch;
mod bulk_filter;
mod config;
mod converter;
mod decimal_string;
mod encoder;
mod error;
mod extractor;
mod run_from_env;
mod settings;
mod tag_classifier;
mod vr_class;

pub use batch::{BatchSummary, list_dicom_files, run_batch};
pub use bulk_filter::strip_bulk_data;
pub use config::get_config;
pub use converter::{DicomJsonConfig, DicomJsonConverter, KeyStyle};
pub use decimal_string::{is_json_number, repair as repair_decimal_string};
pub use encoder::encode_element;
pub use error::{DicomJsonError, ExtractError};
pub use extractor::{extract_file, extract_metadata};
pub use run_from_env::{run_from_env, run_with_settings};
pub use settings::{DEFAULT_OUTPUT_DIR_NAME, OximetaEnvOptions};
pub use tag_classifier::{is_group_length, keyword_of, tag_to_hex};
pub use vr_class::{BULK_VRS, VrClass, is_bulk};
