use dicom::core::dictionary::{DataDictionaryEntry, TagRange};
use dicom::core::{DataDictionary, Tag};

/// Group length (gggg,0000) attributes shall not be included in a DICOM JSON Model object.
pub fn is_group_length(tag: Tag) -> bool {
    tag.element() == 0
}

/// Get the keyword of a tag, if the dictionary knows it by an unambiguous keyword.
///
/// Tags which are not in the dictionary, entries without a keyword, and entries
/// that describe a range of tags (e.g. repeating groups `60xx`) all produce `None`.
pub fn keyword_of<D: DataDictionary>(dict: &D, tag: Tag) -> Option<&str> {
    let entry = dict.by_tag(tag)?;
    if !matches!(entry.tag_range(), TagRange::Single(_)) {
        return None;
    }
    let keyword = entry.alias();
    if keyword.trim().is_empty() {
        None
    } else {
        Some(keyword)
    }
}

/// Hexadecimal rendering of a tag, e.g. `00100010` for (0010,0010).
pub fn tag_to_hex(tag: Tag) -> String {
    format!("{:04X}{:04X}", tag.group(), tag.element())
}
