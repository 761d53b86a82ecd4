use camino::Utf8Path;
use dicom::dictionary_std::{tags, uids};
use dicom::object::{FileMetaTableBuilder, InMemDicomObject};
use serde_json::Value;
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

#[allow(dead_code)]
pub(crate) fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing::subscriber::set_global_default(
            tracing_subscriber::FmtSubscriber::builder()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .finish(),
        )
        .unwrap()
    })
}

/// Write a dataset to a DICOM file with explicit VR little endian transfer syntax.
#[allow(dead_code)]
pub(crate) fn write_dicom(obj: InMemDicomObject, path: &Utf8Path) {
    let sop_class_uid = obj
        .element(tags::SOP_CLASS_UID)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let sop_instance_uid = obj
        .element(tags::SOP_INSTANCE_UID)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let meta = FileMetaTableBuilder::new()
        .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
        .media_storage_sop_class_uid(sop_class_uid)
        .media_storage_sop_instance_uid(sop_instance_uid);
    obj.with_meta(meta).unwrap().write_to_file(path).unwrap();
}

/// Keys of a JSON object, in order.
#[allow(dead_code)]
pub(crate) fn keys_of(value: &Value) -> Vec<String> {
    value
        .as_object()
        .expect("value is not a JSON object")
        .keys()
        .cloned()
        .collect()
}
