//! Tagged box content

/// What a data entry asks to draw in its box
///
/// The tag prefix is stripped; an untagged entry is text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    Text(&'a str),
    Qr(&'a str),
    Code128(&'a str),
    Base64(&'a str),
}

impl<'a> Content<'a> {
    /// Parse a data entry by its leading tag
    ///
    /// Tags are case-sensitive and checked in order; the first match wins,
    /// so `"qr:code128:ABC"` is a QR code of `"code128:ABC"`.
    pub fn parse(entry: &'a str) -> Self {
        if let Some(rest) = entry.strip_prefix("text:") {
            Content::Text(rest)
        } else if let Some(rest) = entry.strip_prefix("qr:") {
            Content::Qr(rest)
        } else if let Some(rest) = entry.strip_prefix("code128:") {
            Content::Code128(rest)
        } else if let Some(rest) = entry.strip_prefix("base64:") {
            Content::Base64(rest)
        } else {
            Content::Text(entry)
        }
    }

    /// Short name of the content kind, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Text(_) => "text",
            Content::Qr(_) => "qr",
            Content::Code128(_) => "code128",
            Content::Base64(_) => "base64",
        }
    }
}
