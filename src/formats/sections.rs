//! Section table extraction.

use object::read::pe::{ImageNtHeaders, PeFile};
use object::read::{Object, ObjectSection};
use object::LittleEndian as LE;

use crate::core::section::Section;

/// Raw PE section headers in file order. Values are taken verbatim from
/// `IMAGE_SECTION_HEADER`, so `size_of_raw_data` is the on-disk size even
/// when the virtual size is smaller.
pub fn pe_sections<Pe: ImageNtHeaders>(pe: &PeFile<'_, Pe>) -> Vec<Section> {
    pe.section_table()
        .iter()
        .map(|h| {
            Section::new(
                String::from_utf8_lossy(h.raw_name()),
                u64::from(h.virtual_address.get(LE)),
                u64::from(h.size_of_raw_data.get(LE)),
                u64::from(h.pointer_to_raw_data.get(LE)),
            )
        })
        .collect()
}

/// Sections of a non-PE object. Addresses are rebased to the relative
/// address base; sections without file data get a zero raw size.
pub fn object_sections<'data, O: Object<'data>>(obj: &O) -> Vec<Section> {
    let base = obj.relative_address_base();
    obj.sections()
        .filter_map(|s| {
            let rva = s.address().checked_sub(base)?;
            let (offset, size) = s.file_range().unwrap_or((0, 0));
            let name = s.name().unwrap_or("");
            Some(Section::new(name, rva, size, offset))
        })
        .collect()
}
