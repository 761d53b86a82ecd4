use crate::vr_class::is_bulk;
use dicom::core::header::Header;
use dicom::core::{DataElement, Length, VR};
use dicom::object::InMemDicomObject;

/// Remove elements holding bulk binary data (see [crate::BULK_VRS]) from a dataset,
/// including from the items of its sequences at any depth.
///
/// Sequence elements themselves are always kept. Returns the number of removed elements.
pub fn strip_bulk_data(obj: &mut InMemDicomObject) -> usize {
    let mut sequences = Vec::new();
    let mut bulk = Vec::new();
    for elem in obj.iter() {
        if elem.vr() == VR::SQ {
            sequences.push(elem.tag());
        } else if is_bulk(elem.vr()) {
            bulk.push(elem.tag());
        }
    }

    let mut removed = 0;
    for tag in sequences {
        let Some(elem) = obj.take(tag) else {
            continue;
        };
        let (header, mut value) = elem.into_parts();
        let nested: usize = value
            .items_mut()
            .map(|items| items.iter_mut().map(strip_bulk_data).sum())
            .unwrap_or(0);
        // recorded length stays valid only if nothing below was removed
        let len = if nested == 0 { header.len } else { Length::UNDEFINED };
        obj.put(DataElement::new_with_len(tag, header.vr, len, value));
        removed += nested;
    }

    for tag in bulk {
        if obj.remove_element(tag) {
            tracing::debug!(event = "strip", tag = tag.to_string());
            removed += 1;
        }
    }
    removed
}
