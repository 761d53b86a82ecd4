//! Grouping of value representations by how their values are written to JSON.
use dicom::core::VR;

/// Value representations whose values are large or opaque binary data.
/// Elements of these VRs are removed by [crate::strip_bulk_data].
///
/// OV is bulk data too, but it is not removed, only written without a value.
pub const BULK_VRS: [VR; 6] = [VR::OB, VR::OD, VR::OF, VR::OL, VR::OW, VR::UN];

/// The JSON encoding used for the values of a VR.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VrClass {
    /// PN
    PersonName,
    /// SQ
    Sequence,
    /// OB, OD, OF, OL, OV, OW and UN: never written with a value.
    Binary,
    /// FL
    Float32,
    /// FD
    Float64,
    /// IS, SL
    Int32,
    /// SS
    Int16,
    /// SV
    Int64,
    /// UL
    UInt32,
    /// US
    UInt16,
    /// UV
    UInt64,
    /// DS
    DecimalString,
    /// AT
    AttributeTag,
    /// Everything else is written as strings.
    Text,
}

impl From<VR> for VrClass {
    fn from(vr: VR) -> Self {
        match vr {
            VR::PN => VrClass::PersonName,
            VR::SQ => VrClass::Sequence,
            VR::OB | VR::OD | VR::OF | VR::OL | VR::OV | VR::OW | VR::UN => VrClass::Binary,
            VR::FL => VrClass::Float32,
            VR::FD => VrClass::Float64,
            VR::IS | VR::SL => VrClass::Int32,
            VR::SS => VrClass::Int16,
            VR::SV => VrClass::Int64,
            VR::UL => VrClass::UInt32,
            VR::US => VrClass::UInt16,
            VR::UV => VrClass::UInt64,
            VR::DS => VrClass::DecimalString,
            VR::AT => VrClass::AttributeTag,
            VR::AE
            | VR::AS
            | VR::CS
            | VR::DA
            | VR::DT
            | VR::LO
            | VR::LT
            | VR::SH
            | VR::ST
            | VR::TM
            | VR::UC
            | VR::UI
            | VR::UR
            | VR::UT => VrClass::Text,
        }
    }
}

/// Whether elements of this VR are removed before conversion.
pub fn is_bulk(vr: VR) -> bool {
    BULK_VRS.contains(&vr)
}
