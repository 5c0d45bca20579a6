use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use rgb565_header::{HeaderChunks, HeaderLayout};

use crate::error::{ConvertError, Result};
use crate::pipeline::Rgb565Image;

/// Write `image` as a C header at `path`, replacing any existing file.
///
/// Missing parent directories are created first. Returns the number of bytes written.
pub fn write_header(path: &Path, layout: &HeaderLayout, image: &Rgb565Image) -> Result<u64> {
    let write_err = |source: io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let mut written = 0u64;

    let chunks = HeaderChunks::new(layout, image.width, image.height, image.pixels.iter().copied());
    for chunk in chunks {
        writer.write_all(chunk.as_bytes()).map_err(write_err)?;
        written += chunk.len() as u64;
    }

    // Flush explicitly so a late failure is reported instead of dropped
    writer.flush().map_err(write_err)?;
    debug!("Header {} complete, {} values", path.display(), image.pixels.len());

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::scratch_dir;
    use rgb565_header::render_header;

    fn sample_image() -> Rgb565Image {
        Rgb565Image {
            width: 5,
            height: 3,
            pixels: (0..15).map(|i| i * 0x1111).collect(),
        }
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = scratch_dir("emitter-parents");
        let path = dir.join("a").join("b").join("logo.h");
        let layout = HeaderLayout::default();
        let image = sample_image();

        let written = write_header(&path, &layout, &image).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(written, text.len() as u64);
        assert_eq!(text, render_header(&layout, 5, 3, image.pixels.iter().copied()));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = scratch_dir("emitter-overwrite");
        let path = dir.join("logo.h");
        fs::write(&path, "x".repeat(100_000)).unwrap();

        let layout = HeaderLayout::with_prefix("SPLASH", "splash.png");
        write_header(&path, &layout, &sample_image()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("// Generated from splash.png\n#ifndef SPLASH_H\n"));
        assert!(text.contains("    0x0000, 0x1111, 0x2222, 0x3333, 0x4444, 0x5555, 0x6666, 0x7777, 0x8888, 0x9999, 0xAAAA, 0xBBBB, \n"));
        assert!(text.ends_with("    0xCCCC, 0xDDDD, 0xEEEE, \n};\n\n#endif // SPLASH_H\n"));
        assert!(!text.contains("xx"));
    }

    #[test]
    fn test_unwritable_parent_is_write_error() {
        let dir = scratch_dir("emitter-blocked");
        let blocker = dir.join("images");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_header(&blocker.join("logo.h"), &HeaderLayout::default(), &sample_image())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
    }
}
