//! Plain-text PPM (P3) reading and writing.
//!
//! PPM P3 stores RGB triples as whitespace-separated ASCII decimals:
//!
//! ```text
//! P3
//! # width height, then the max channel value
//! 2 1
//! 255
//! 255 0 0
//! 0 255 0
//! ```
//!
//! Only the 8-bit flavor (max value 255) is supported. `#` starts a
//! comment that runs to the end of the line; comments and extra
//! whitespace are accepted anywhere between values.

use crate::error::{IoError, IoResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tilefx_core::{ImageBuffer, Pixel};
use tracing::debug;

/// Reads a P3 PPM file into an [`ImageBuffer`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, the magic number is not
/// `P3`, the max value is not 255, or the pixel data is malformed or
/// truncated.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let text = fs::read_to_string(path.as_ref())?;
    let mut tokens = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace);

    let magic = tokens
        .next()
        .ok_or_else(|| IoError::InvalidFile("missing magic number".into()))?;
    if magic != "P3" {
        return Err(IoError::UnsupportedFormat(format!(
            "expected P3, got {magic}"
        )));
    }
    let width = next_value(&mut tokens, "width")?;
    let height = next_value(&mut tokens, "height")?;
    let max_value = next_value(&mut tokens, "max value")?;
    if max_value != 255 {
        return Err(IoError::UnsupportedBitDepth(format!(
            "max value {max_value}, only 255 is supported"
        )));
    }

    let count = width as usize * height as usize;
    let mut pixels = Vec::with_capacity(count);
    for _ in 0..count {
        let r = next_channel(&mut tokens)?;
        let g = next_channel(&mut tokens)?;
        let b = next_channel(&mut tokens)?;
        pixels.push(Pixel::new(r, g, b));
    }

    let image = ImageBuffer::from_pixels(width, height, pixels)
        .map_err(|e| IoError::InvalidFile(e.to_string()))?;
    debug!(width, height, "read ppm");
    Ok(image)
}

/// Writes an [`ImageBuffer`] as a P3 PPM file, one pixel per line.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;
    for pixel in image.data() {
        writeln!(writer, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
    }
    writer.flush()?;
    debug!(width = image.width(), height = image.height(), "write ppm");
    Ok(())
}

/// Pulls the next token and parses it as a decimal number.
fn next_value<'a, I>(tokens: &mut I, field: &str) -> IoResult<u32>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| IoError::InvalidFile(format!("missing {field}")))?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::Parse(format!("invalid {field}: {token:?}")))
}

/// Pulls the next token as an 8-bit channel value.
fn next_channel<'a, I>(tokens: &mut I) -> IoResult<u8>
where
    I: Iterator<Item = &'a str>,
{
    let value = next_value(tokens, "pixel value")?;
    if value > 255 {
        return Err(IoError::InvalidFile(format!(
            "pixel value {value} exceeds max value 255"
        )));
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_text(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.ppm");

        let mut image = ImageBuffer::new(5, 3).unwrap();
        for y in 0..3 {
            for x in 0..5 {
                image.set_pixel(x, y, Pixel::new((x * 50) as u8, (y * 80) as u8, 7));
            }
        }
        write(&path, &image).unwrap();
        assert_eq!(read(&path).unwrap(), image);
    }

    #[test]
    fn test_exact_output_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exact.ppm");

        let image = ImageBuffer::from_pixels(
            1,
            2,
            vec![Pixel::new(10, 20, 30), Pixel::new(40, 50, 60)],
        )
        .unwrap();
        write(&path, &image).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "P3\n1 2\n255\n10 20 30\n40 50 60\n"
        );
    }

    #[test]
    fn test_read_accepts_comments_and_loose_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = write_text(
            &dir,
            "commented.ppm",
            "P3 # plain ppm\n# generated by hand\n  2   1\n255\n255 0 0   0 255 0\n",
        );
        let image = read(&path).unwrap();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.pixel(0, 0), Pixel::new(255, 0, 0));
        assert_eq!(image.pixel(1, 0), Pixel::new(0, 255, 0));
    }

    #[test]
    fn test_read_rejects_wrong_magic() {
        let dir = TempDir::new().unwrap();
        let path = write_text(&dir, "p6.ppm", "P6\n1 1\n255\n0 0 0\n");
        assert!(matches!(
            read(&path).unwrap_err(),
            IoError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_read_rejects_wide_bit_depth() {
        let dir = TempDir::new().unwrap();
        let path = write_text(&dir, "deep.ppm", "P3\n1 1\n65535\n0 0 0\n");
        assert!(matches!(
            read(&path).unwrap_err(),
            IoError::UnsupportedBitDepth(_)
        ));
    }

    #[test]
    fn test_read_rejects_truncated_data() {
        let dir = TempDir::new().unwrap();
        let path = write_text(&dir, "short.ppm", "P3\n2 2\n255\n1 2 3\n4 5 6\n");
        let err = read(&path).unwrap_err();
        assert!(matches!(err, IoError::InvalidFile(_)));
        assert!(err.to_string().contains("missing pixel value"));
    }

    #[test]
    fn test_read_rejects_non_numeric_token() {
        let dir = TempDir::new().unwrap();
        let path = write_text(&dir, "alpha.ppm", "P3\nwide 1\n255\n0 0 0\n");
        assert!(matches!(read(&path).unwrap_err(), IoError::Parse(_)));
    }

    #[test]
    fn test_read_rejects_channel_above_max() {
        let dir = TempDir::new().unwrap();
        let path = write_text(&dir, "hot.ppm", "P3\n1 1\n255\n300 0 0\n");
        let err = read(&path).unwrap_err();
        assert!(err.to_string().contains("300"));
    }

    #[test]
    fn test_read_rejects_zero_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = write_text(&dir, "empty.ppm", "P3\n0 0\n255\n");
        assert!(matches!(read(&path).unwrap_err(), IoError::InvalidFile(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.ppm");
        assert!(matches!(read(&path).unwrap_err(), IoError::Io(_)));
    }
}
