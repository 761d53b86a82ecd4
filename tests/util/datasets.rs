use dicom::core::value::DataSetSequence;
use dicom::core::{DataElement, PrimitiveValue, Tag, VR};
use dicom::dicom_value;
use dicom::dictionary_std::tags;
use dicom::object::InMemDicomObject;
use serde_json::{Value, json};

pub(crate) const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
#[allow(dead_code)]
pub(crate) const SOP_INSTANCE_UID: &str = "2.25.164452200898186296452633608713549770669";
pub(crate) const REFERENCED_SOP_INSTANCE_UID: &str =
    "2.25.281556350530040985498456895882693555497";

/// A small CT image with pixel data, and a reference to another image which has an icon.
pub(crate) fn ct_image(sop_instance_uid: &str) -> InMemDicomObject {
    let icon = InMemDicomObject::from_element_iter([
        DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(1_u16)),
        DataElement::new(tags::PIXEL_DATA, VR::OB, PrimitiveValue::from(vec![0_u8; 2])),
    ]);
    let referenced_image = InMemDicomObject::from_element_iter([
        DataElement::new(tags::REFERENCED_SOP_CLASS_UID, VR::UI, CT_IMAGE_STORAGE),
        DataElement::new(
            tags::REFERENCED_SOP_INSTANCE_UID,
            VR::UI,
            REFERENCED_SOP_INSTANCE_UID,
        ),
        DataElement::new(
            tags::ICON_IMAGE_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(vec![icon]),
        ),
        DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::from(vec![1_u8, 2, 3, 4]),
        ),
    ]);
    InMemDicomObject::from_element_iter([
        DataElement::new(
            tags::IMAGE_TYPE,
            VR::CS,
            dicom_value!(Strs, ["ORIGINAL", "PRIMARY", "AXIAL"]),
        ),
        DataElement::new(tags::SOP_CLASS_UID, VR::UI, CT_IMAGE_STORAGE),
        DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, sop_instance_uid),
        DataElement::new(tags::MODALITY, VR::CS, "CT"),
        DataElement::new(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(vec![referenced_image]),
        ),
        DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
        DataElement::new(tags::PATIENT_ID, VR::LO, "123ABC"),
        DataElement::new(tags::SLICE_THICKNESS, VR::DS, "+001.50"),
        DataElement::new(
            tags::FRAME_INCREMENT_POINTER,
            VR::AT,
            dicom_value!(Tags, [Tag(0x0018, 0x1063)]),
        ),
        DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(2_u16)),
        DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(2_u16)),
        DataElement::new(
            tags::PIXEL_SPACING,
            VR::DS,
            dicom_value!(Strs, ["0.5", "0.5"]),
        ),
        DataElement::new(tags::PIXEL_DATA, VR::OW, dicom_value!(U16, [1, 2, 3, 4])),
    ])
}

/// The metadata of [ct_image] as JSON with keyword keys.
pub(crate) fn ct_image_json(sop_instance_uid: &str) -> Value {
    json!({
        "ImageType": {"vr": "CS", "Value": ["ORIGINAL", "PRIMARY", "AXIAL"]},
        "SOPClassUID": {"vr": "UI", "Value": [CT_IMAGE_STORAGE]},
        "SOPInstanceUID": {"vr": "UI", "Value": [sop_instance_uid]},
        "Modality": {"vr": "CS", "Value": ["CT"]},
        "ReferencedImageSequence": {
            "vr": "SQ",
            "Value": [{
                "ReferencedSOPClassUID": {"vr": "UI", "Value": [CT_IMAGE_STORAGE]},
                "ReferencedSOPInstanceUID": {"vr": "UI", "Value": [REFERENCED_SOP_INSTANCE_UID]},
                "IconImageSequence": {
                    "vr": "SQ",
                    "Value": [{"Rows": {"vr": "US", "Value": [1]}}]
                }
            }]
        },
        "PatientName": {"vr": "PN", "Value": [{"Alphabetic": "Doe^John"}]},
        "PatientID": {"vr": "LO", "Value": ["123ABC"]},
        "SliceThickness": {"vr": "DS", "Value": [1.5]},
        "FrameIncrementPointer": {"vr": "AT", "Value": ["00181063"]},
        "Rows": {"vr": "US", "Value": [2]},
        "Columns": {"vr": "US", "Value": [2]},
        "PixelSpacing": {"vr": "DS", "Value": [0.5, 0.5]}
    })
}
