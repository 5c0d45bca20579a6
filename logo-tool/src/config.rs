use std::path::{Path, PathBuf};

use rgb565_header::{HeaderLayout, MAX_WIDTH};

/// Source image, relative to the project root
pub const DEFAULT_INPUT: &str = "main/images/rapport-pix.png";

/// Generated header, relative to the project root
pub const DEFAULT_OUTPUT: &str = "main/images/rapport_pix_logo.h";

/// Prefix of the guard, macros and array in the generated header
pub const DEFAULT_PREFIX: &str = "RAPPORT_PIX_LOGO";

/// Everything one conversion run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Width of the generated image; the height follows the aspect ratio
    pub width: u32,
    pub layout: HeaderLayout,
}

impl ConvertConfig {
    pub fn new(input: PathBuf, output: PathBuf, width: u32, prefix: &str) -> Self {
        let source_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        let layout = HeaderLayout::with_prefix(prefix, &source_name);

        Self {
            input,
            output,
            width,
            layout,
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_INPUT),
            PathBuf::from(DEFAULT_OUTPUT),
            MAX_WIDTH,
            DEFAULT_PREFIX,
        )
    }
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
