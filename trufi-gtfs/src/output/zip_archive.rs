use crate::GtfsBuildError;
use itertools::Itertools;
use std::fs::File;
use std::path::Path;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// archives the regular files of `directory`, flat, into `zip_path`.
pub fn zip_directory(directory: &Path, zip_path: &Path) -> Result<(), GtfsBuildError> {
    let zip_name = zip_path.to_string_lossy().to_string();
    let io_error = |filepath: &Path, e: std::io::Error| GtfsBuildError::IoError {
        filepath: filepath.to_string_lossy().to_string(),
        source: e,
    };
    let zip_error = |e: zip::result::ZipError| GtfsBuildError::ZipError {
        filepath: zip_name.clone(),
        source: e,
    };

    let entries = std::fs::read_dir(directory)
        .map_err(|e| io_error(directory, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| io_error(directory, e))?
        .into_iter()
        .filter(|p| p.is_file())
        .sorted()
        .collect_vec();

    let file = File::create(zip_path).map_err(|e| io_error(zip_path, e))?;
    let mut zip = ZipWriter::new(file);
    for path in entries.iter() {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };
        zip.start_file(name, options).map_err(zip_error)?;
        let mut source = File::open(path).map_err(|e| io_error(path, e))?;
        std::io::copy(&mut source, &mut zip).map_err(|e| io_error(path, e))?;
    }
    zip.finish().map_err(zip_error)?;
    log::info!("archived {} files into {}", entries.len(), zip_path.display());
    Ok(())
}
