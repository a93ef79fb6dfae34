mod tests_report;

use std::io::{Cursor, Write};

/// Build an in-memory zip from `(name, content)` pairs; names ending in `/`
/// become directory members
#[allow(clippy::expect_used)]
pub(super) fn build_zip(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in members {
        if let Some(dir) = name.strip_suffix('/') {
            zip.add_directory(dir, options).expect("Failed to add directory");
        } else {
            zip.start_file(*name, options).expect("Failed to start file");
            zip.write_all(content).expect("Failed to write member");
        }
    }
    zip.finish().expect("Failed to finish zip").into_inner()
}
