//! Combined image tag reader
//!
//! Keywords are merged from the XMP packet (`dc:subject`) and, for
//! containers that carry EXIF, the Windows `XPKeywords` field read with
//! `kamadak-exif`. Duplicates are dropped, first occurrence wins.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{Context, In, Tag, Value};

use super::TagReader;
use super::error::TagError;
use super::xmp;

/// `XPKeywords` (0x9C9E), UTF-16LE, `;` separated
const XP_KEYWORDS: Tag = Tag(Context::Tiff, 0x9C9E);

/// Image formats the reader accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Bmp,
    Gif,
    Jpeg,
    Pbm,
    Pgm,
    Ppm,
    Pnm,
    Pcx,
    Png,
    Tiff,
    Dng,
    Svg,
}

impl ImageFormat {
    /// Format for a lower-case extension without the leading dot
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let format = match ext {
            "bmp" => Self::Bmp,
            "gif" => Self::Gif,
            "jpeg" | "jpg" => Self::Jpeg,
            "pbm" => Self::Pbm,
            "pgm" => Self::Pgm,
            "ppm" => Self::Ppm,
            "pnm" => Self::Pnm,
            "pcx" => Self::Pcx,
            "png" => Self::Png,
            "tiff" => Self::Tiff,
            "dng" => Self::Dng,
            "svg" => Self::Svg,
            _ => return None,
        };
        Some(format)
    }

    /// Whether the container can hold an EXIF block
    #[must_use]
    pub const fn carries_exif(self) -> bool {
        matches!(self, Self::Jpeg | Self::Png | Self::Tiff | Self::Dng)
    }

    /// Whether `bytes` start the way a file of this format must
    #[must_use]
    pub fn signature_matches(self, bytes: &[u8]) -> bool {
        match self {
            Self::Bmp => bytes.starts_with(b"BM"),
            Self::Gif => bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a"),
            Self::Jpeg => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
            Self::Pbm | Self::Pgm | Self::Ppm | Self::Pnm => {
                matches!(bytes, [b'P', b'1'..=b'7', ..])
            }
            Self::Pcx => bytes.first() == Some(&0x0A),
            Self::Png => bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
            Self::Tiff | Self::Dng => bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*"),
            Self::Svg => {
                let head = &bytes[..bytes.len().min(4096)];
                head.windows(4).any(|w| w.eq_ignore_ascii_case(b"<svg"))
            }
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bmp => "BMP",
            Self::Gif => "GIF",
            Self::Jpeg => "JPEG",
            Self::Pbm => "PBM",
            Self::Pgm => "PGM",
            Self::Ppm => "PPM",
            Self::Pnm => "PNM",
            Self::Pcx => "PCX",
            Self::Png => "PNG",
            Self::Tiff => "TIFF",
            Self::Dng => "DNG",
            Self::Svg => "SVG",
        };
        f.write_str(name)
    }
}

/// Default [`TagReader`] for on-disk images
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageTagReader;

impl ImageTagReader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TagReader for ImageTagReader {
    fn read_keywords(&self, path: &Path) -> Result<Vec<String>, TagError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let format = ImageFormat::from_extension(&ext).ok_or(TagError::UnsupportedFormat(ext))?;

        let bytes = fs::read(path).map_err(|source| TagError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !format.signature_matches(&bytes) {
            return Err(TagError::Corrupt {
                path: path.to_path_buf(),
                format,
            });
        }

        let mut keywords = Vec::new();
        let mut push_unique = |keyword: String| {
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        };

        xmp::keywords(&bytes).into_iter().for_each(&mut push_unique);

        if format.carries_exif() {
            match exif::Reader::new().read_from_container(&mut Cursor::new(&bytes)) {
                Ok(data) => xp_keywords(&data).into_iter().for_each(&mut push_unique),
                Err(exif::Error::NotFound(_)) => {}
                Err(source) => {
                    return Err(TagError::Exif {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            }
        }

        Ok(keywords)
    }
}

fn xp_keywords(data: &exif::Exif) -> Vec<String> {
    let Some(field) = data.get_field(XP_KEYWORDS, In::PRIMARY) else {
        return Vec::new();
    };
    let Value::Byte(raw) = &field.value else {
        return Vec::new();
    };
    let units: Vec<u16> = raw
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
        .trim_end_matches('\0')
        .split(';')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    const SVG: &str = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1">
 <metadata>
  <x:xmpmeta xmlns:x="adobe:ns:meta/">
   <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description xmlns:dc="http://purl.org/dc/elements/1.1/">
     <dc:subject><rdf:Bag><rdf:li>logo</rdf:li><rdf:li>vector</rdf:li><rdf:li>logo</rdf:li></rdf:Bag></dc:subject>
    </rdf:Description>
   </rdf:RDF>
  </x:xmpmeta>
 </metadata>
</svg>"#;

    /// Little-endian TIFF whose first IFD holds only `XPKeywords`
    fn tiff_with_xp_keywords(keywords: &str) -> Vec<u8> {
        let value: Vec<u8> = keywords
            .encode_utf16()
            .chain([0])
            .flat_map(u16::to_le_bytes)
            .collect();
        let mut bytes = b"II*\0".to_vec();
        bytes.extend_from_slice(&8u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&0x9C9Eu16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&u32::try_from(value.len()).unwrap().to_le_bytes());
        bytes.extend_from_slice(&26u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&value);
        bytes
    }

    #[test]
    fn test_tiff_xp_keywords() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scan.tiff", &tiff_with_xp_keywords("sun; sea;;"));
        let keywords = ImageTagReader::new().read_keywords(&path).unwrap();
        assert_eq!(keywords, vec!["sun", "sea"]);
    }

    #[test]
    fn test_xmp_keywords_come_before_exif() {
        let dir = TempDir::new().unwrap();
        let mut bytes = tiff_with_xp_keywords("sun;sea");
        bytes.extend_from_slice(
            br#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><dc:subject><rdf:Bag><rdf:li>sea</rdf:li><rdf:li>rock</rdf:li></rdf:Bag></dc:subject></x:xmpmeta>"#,
        );
        let path = write(&dir, "scan.dng", &bytes);
        let keywords = ImageTagReader::new().read_keywords(&path).unwrap();
        assert_eq!(keywords, vec!["sea", "rock", "sun"]);
    }

    #[test]
    fn test_tiff_without_fields_has_no_keywords() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.tiff", b"II*\0\x08\0\0\0\0\0\0\0\0\0");
        assert!(ImageTagReader::new().read_keywords(&path).unwrap().is_empty());
    }

    #[test]
    fn test_svg_keywords_deduplicated() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "icon.SVG", SVG.as_bytes());
        let keywords = ImageTagReader::new().read_keywords(&path).unwrap();
        assert_eq!(keywords, vec!["logo", "vector"]);
    }

    #[test]
    fn test_gif_without_metadata_has_no_keywords() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "tiny.gif", b"GIF89a\x01\x00\x01\x00\x00\x00\x00;");
        assert!(ImageTagReader::new().read_keywords(&path).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_signature_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "fake.png", b"definitely not a png");
        let err = ImageTagReader::new().read_keywords(&path).unwrap_err();
        assert!(matches!(err, TagError::Corrupt { format: ImageFormat::Png, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = ImageTagReader::new()
            .read_keywords(&dir.path().join("gone.bmp"))
            .unwrap_err();
        assert!(matches!(err, TagError::Io { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ImageTagReader::new()
            .read_keywords(Path::new("notes.txt"))
            .unwrap_err();
        assert!(matches!(err, TagError::UnsupportedFormat(ref e) if e == "txt"));
    }

    #[test]
    fn test_signatures() {
        assert!(ImageFormat::Pgm.signature_matches(b"P5\n1 1\n255\n\0"));
        assert!(!ImageFormat::Pgm.signature_matches(b"P9"));
        assert!(ImageFormat::Tiff.signature_matches(b"MM\0*\0\0\0\x08"));
        assert!(ImageFormat::from_extension("jpg") == Some(ImageFormat::Jpeg));
        assert!(ImageFormat::Jpeg.carries_exif());
        assert!(!ImageFormat::Svg.carries_exif());
    }
}
