use std::path::Path;

use image::{imageops, imageops::FilterType, ImageError, ImageReader, RgbImage};
use log::{debug, info};
use rgb565_header::{rgb888_to_rgb565, scaled_height};

use crate::config::ConvertConfig;
use crate::emitter;
use crate::error::{ConvertError, Result};

const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Converted pixels in raster order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgb565Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u16>,
}

/// Load the source image and drop any alpha channel
pub fn load_source(path: &Path) -> Result<RgbImage> {
    if !path.exists() {
        return Err(ConvertError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |source: ImageError| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    info!("Original image: {}×{}", img.width(), img.height());
    Ok(img.into_rgb8())
}

/// Scale to `width` pixels wide, keeping the aspect ratio
pub fn resize_to_width(img: &RgbImage, width: u32) -> Result<RgbImage> {
    let height = scaled_height(img.width(), img.height(), width);
    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyOutput { width, height });
    }

    let resized = imageops::resize(img, width, height, RESIZE_FILTER);
    debug!("Resized to: {}×{} ({:?})", resized.width(), resized.height(), RESIZE_FILTER);
    Ok(resized)
}

/// Pack every pixel, row by row, left to right
pub fn to_rgb565(img: &RgbImage) -> Rgb565Image {
    let mut pixels = Vec::with_capacity((img.width() * img.height()) as usize);

    for row in img.rows() {
        for pixel in row {
            let [r, g, b] = pixel.0;
            pixels.push(rgb888_to_rgb565(r, g, b));
        }
    }

    Rgb565Image {
        width: img.width(),
        height: img.height(),
        pixels,
    }
}

/// Run a complete conversion and write the header.
///
/// The output file is only touched once decoding and resizing succeeded.
pub fn run(config: &ConvertConfig) -> Result<Rgb565Image> {
    info!("Reading image: {}", config.input.display());
    let source = load_source(&config.input)?;
    let resized = resize_to_width(&source, config.width)?;
    let image = to_rgb565(&resized);

    let written = emitter::write_header(&config.output, &config.layout, &image)?;
    info!("Wrote {} bytes to {}", written, config.output.display());

    Ok(image)
}
