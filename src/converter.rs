use crate::encoder::encode_element;
use crate::error::DicomJsonError;
use crate::tag_classifier::{is_group_length, keyword_of, tag_to_hex};
use dicom::core::DataDictionary;
use dicom::core::header::Header;
use dicom::object::{InMemDicomObject, StandardDataDictionary};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::{Read, Write};

/// How the keys of a JSON object are named.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStyle {
    /// DICOM keyword, e.g. `PatientName`. Not compliant with DICOM JSON.
    #[default]
    Keyword,
    /// Tag as 8 uppercase hexadecimal digits, e.g. `00100010`.
    Hex,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicomJsonConfig {
    pub key_style: KeyStyle,
    /// Indent the JSON written by [DicomJsonConverter::write_json].
    pub pretty_print: bool,
}

/// Converts DICOM datasets to the DICOM JSON Model (PS3.18 Annex F).
///
/// Group length elements are never written. Elements whose tag the dictionary does
/// not resolve to an unambiguous keyword are skipped, regardless of [KeyStyle].
#[derive(Debug, Clone)]
pub struct DicomJsonConverter<D = StandardDataDictionary> {
    dict: D,
    config: DicomJsonConfig,
}

impl DicomJsonConverter {
    pub fn new(config: DicomJsonConfig) -> Self {
        Self::with_dict(StandardDataDictionary, config)
    }
}

impl<D: DataDictionary> DicomJsonConverter<D> {
    pub fn with_dict(dict: D, config: DicomJsonConfig) -> Self {
        Self { dict, config }
    }

    pub fn config(&self) -> &DicomJsonConfig {
        &self.config
    }

    /// Convert a dataset to a JSON object. Keys follow the order of the dataset's elements.
    pub fn to_json_value(&self, obj: &InMemDicomObject) -> Result<Value, DicomJsonError> {
        let mut json = Map::new();
        for elem in obj.iter() {
            let tag = elem.tag();
            if is_group_length(tag) {
                continue;
            }
            let Some(keyword) = keyword_of(&self.dict, tag) else {
                continue;
            };
            let key = match self.config.key_style {
                KeyStyle::Keyword => keyword.to_string(),
                KeyStyle::Hex => tag_to_hex(tag),
            };
            json.insert(key, encode_element(self, elem)?);
        }
        Ok(Value::Object(json))
    }

    /// Write a dataset as JSON to `writer`.
    ///
    /// The whole JSON document is built before anything is written,
    /// so nothing is written if the conversion fails.
    pub fn write_json<W: Write>(
        &self,
        obj: &InMemDicomObject,
        writer: W,
    ) -> Result<(), DicomJsonError> {
        let json = self.to_json_value(obj)?;
        if self.config.pretty_print {
            serde_json::to_writer_pretty(writer, &json)?;
        } else {
            serde_json::to_writer(writer, &json)?;
        }
        Ok(())
    }

    pub fn to_json_string(&self, obj: &InMemDicomObject) -> Result<String, DicomJsonError> {
        let mut buf = Vec::new();
        self.write_json(obj, &mut buf)?;
        String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }

    /// Reading DICOM JSON back into a dataset is not supported.
    pub fn read_json<R: Read>(&self, _reader: R) -> Result<InMemDicomObject, DicomJsonError> {
        Err(DicomJsonError::UnsupportedOperation)
    }
}
