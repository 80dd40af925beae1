/// Content types a branding upload may carry. Anything else is rejected,
/// whatever extension the file claims.
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/webp",
    "image/x-icon",
    "image/vnd.microsoft.icon",
    "image/svg+xml",
];

/// Sniff the MIME type from file content. Detection never trusts the
/// client-declared type or the filename.
pub fn sniff_mime_type(content: &[u8]) -> Option<&'static str> {
    if content.len() >= 8 && content[..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
        return Some("image/png");
    }
    if content.len() >= 3 && content[..3] == [0xFF, 0xD8, 0xFF] {
        return Some("image/jpeg");
    }
    if content.len() >= 12 && &content[..4] == b"RIFF" && &content[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if content.len() >= 6 && (&content[..6] == b"GIF87a" || &content[..6] == b"GIF89a") {
        return Some("image/gif");
    }
    if content.len() >= 4 && content[..4] == [0x00, 0x00, 0x01, 0x00] {
        return Some("image/x-icon");
    }
    if content.len() >= 2 && &content[..2] == b"BM" {
        return Some("image/bmp");
    }
    if looks_like_svg(content) {
        return Some("image/svg+xml");
    }
    None
}

pub fn is_allowed_image_type(mime_type: &str) -> bool {
    ALLOWED_IMAGE_MIME_TYPES.contains(&mime_type)
}

// SVG has no magic number; look for an <svg> root in the first kilobyte.
fn looks_like_svg(content: &[u8]) -> bool {
    let head = &content[..content.len().min(1024)];
    let text = String::from_utf8_lossy(head);
    let trimmed = text.trim_start();
    trimmed.starts_with("<svg")
        || ((trimmed.starts_with("<?xml") || trimmed.starts_with("<!DOCTYPE svg"))
            && text.contains("<svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_png() {
        let content = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(sniff_mime_type(&content), Some("image/png"));
    }

    #[test]
    fn test_sniff_jpeg() {
        let content = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(sniff_mime_type(&content), Some("image/jpeg"));
    }

    #[test]
    fn test_sniff_webp() {
        let mut content = Vec::new();
        content.extend_from_slice(b"RIFF");
        content.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        content.extend_from_slice(b"WEBP");
        assert_eq!(sniff_mime_type(&content), Some("image/webp"));
    }

    #[test]
    fn test_sniff_ico() {
        let content = [0x00, 0x00, 0x01, 0x00, 0x01, 0x00];
        assert_eq!(sniff_mime_type(&content), Some("image/x-icon"));
    }

    #[test]
    fn test_sniff_svg() {
        let content = b"<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";
        assert_eq!(sniff_mime_type(content), Some("image/svg+xml"));

        let with_decl = b"<?xml version=\"1.0\"?>\n<svg></svg>";
        assert_eq!(sniff_mime_type(with_decl), Some("image/svg+xml"));
    }

    #[test]
    fn test_sniff_rejects_unknown_content() {
        assert_eq!(sniff_mime_type(b"<html><body>x</body></html>"), None);
        assert_eq!(sniff_mime_type(b"plain text"), None);
        assert_eq!(sniff_mime_type(&[]), None);
    }

    #[test]
    fn test_gif_detected_but_not_allowed() {
        let content = b"GIF89a\x01\x00\x01\x00";
        let mime = sniff_mime_type(content).unwrap();
        assert_eq!(mime, "image/gif");
        assert!(!is_allowed_image_type(mime));
    }

    #[test]
    fn test_allow_list() {
        assert!(is_allowed_image_type("image/png"));
        assert!(is_allowed_image_type("image/vnd.microsoft.icon"));
        assert!(!is_allowed_image_type("image/bmp"));
        assert!(!is_allowed_image_type("text/html"));
    }
}
