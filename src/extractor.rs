use crate::bulk_filter::strip_bulk_data;
use crate::converter::DicomJsonConverter;
use crate::error::{DicomJsonError, ExtractError};
use camino::{Utf8Path, Utf8PathBuf};
use dicom::object::InMemDicomObject;
use std::io::Write;

/// Write the metadata of a DICOM dataset, i.e. everything except bulk data, as JSON.
pub fn extract_metadata<W: Write>(
    mut obj: InMemDicomObject,
    sink: W,
    converter: &DicomJsonConverter,
) -> Result<(), DicomJsonError> {
    strip_bulk_data(&mut obj);
    converter.write_json(&obj, sink)
}

/// Extract the metadata of the DICOM file `input` to `<output_dir>/<file stem>.json`.
///
/// Nothing is written if the DICOM file cannot be read or converted.
pub fn extract_file(
    input: &Utf8Path,
    output_dir: &Utf8Path,
    converter: &DicomJsonConverter,
) -> Result<Utf8PathBuf, ExtractError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| ExtractError::NoFileStem(input.to_path_buf()))?;
    let dcm = dicom::object::open_file(input)?;
    let mut json = Vec::new();
    extract_metadata(dcm.into_inner(), &mut json, converter)?;
    let output_path = output_dir.join(format!("{stem}.json"));
    fs_err::write(&output_path, json)?;
    Ok(output_path)
}
