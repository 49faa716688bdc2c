//! Keyword extraction from an embedded XMP packet
//!
//! XMP is stored as plain XML text inside the image container (JPEG APP1,
//! PNG iTXt, GIF application extension, TIFF tag 700, SVG metadata), so the
//! packet is located by scanning the raw bytes rather than by walking each
//! container format.

use std::sync::LazyLock;

use regex::Regex;
use regex::bytes::Regex as BytesRegex;

static PACKET: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(r"(?s)<x:x[am]pmeta\b.*?</x:x[am]pmeta>").expect("packet regex is valid")
});

static SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<dc:subject\b[^>]*>(.*?)</dc:subject>").expect("subject regex is valid")
});

static ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<rdf:li\b[^>]*>(.*?)</rdf:li>").expect("item regex is valid")
});

/// Keywords (`dc:subject` bag entries) of every XMP packet in `bytes`
#[must_use]
pub fn keywords(bytes: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    for packet in PACKET.find_iter(bytes) {
        let text = String::from_utf8_lossy(packet.as_bytes());
        for subject in SUBJECT.captures_iter(&text) {
            for item in ITEM.captures_iter(&subject[1]) {
                let keyword = unescape(item[1].trim());
                if !keyword.is_empty() {
                    out.push(keyword);
                }
            }
        }
    }
    out
}

/// Decode the predefined XML entities and numeric character references
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .map(|hex| u32::from_str_radix(hex, 16))
                .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                .and_then(Result::ok)
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => out.push(c),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}
