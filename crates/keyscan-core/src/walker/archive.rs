//! Zip archive access over in-memory bytes

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::{Result, ScanError};

/// A file member read out of an archive
pub(crate) struct Member {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Whether a unit name ends in `.zip`, ignoring case
///
/// A file named just `.zip` counts.
pub(crate) fn has_zip_extension(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".zip")
}

/// Open `bytes` as a zip archive, or `None` when they are not one
pub(crate) fn open(bytes: &[u8]) -> Option<ZipArchive<Cursor<&[u8]>>> {
    ZipArchive::new(Cursor::new(bytes)).ok()
}

/// Read member `index` fully, skipping directory members
///
/// # Errors
/// Returns an error if the member header or its data cannot be read.
pub(crate) fn read_member(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    index: usize,
    display_path: &str,
) -> Result<Option<Member>> {
    let archive_error = |source: zip::result::ZipError| ScanError::Archive {
        display_path: display_path.to_string(),
        source,
    };

    let mut file = archive.by_index(index).map_err(archive_error)?;
    if file.is_dir() {
        return Ok(None);
    }

    let name = file.name().to_string();
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| archive_error(zip::result::ZipError::Io(e)))?;
    Ok(Some(Member { name, bytes }))
}

/// Last non-empty `/` segment of a member name
pub(crate) fn base_name(member_name: &str) -> &str {
    member_name
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(member_name)
}

/// Number of non-empty `/` segments of a member name
pub(crate) fn segment_count(member_name: &str) -> usize {
    member_name
        .split('/')
        .filter(|segment| !segment.is_empty())
        .count()
}
