//! Font handling for PDF documents
//!
//! Two kinds of fonts are supported: the PDF standard Type1 fonts, which
//! every viewer ships and which need no embedding, and TrueType files, which
//! are embedded whole as a CID-keyed Type0 font.

use crate::{PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::BTreeSet;
use std::path::Path;

/// Horizontal metrics shared by every font kind
///
/// All values are in thousandths of an em, the unit PDF width arrays use.
pub trait FontMetrics {
    /// Advance width of a character
    fn char_width(&self, c: char) -> f64;

    /// Distance from baseline to the top of the tallest glyphs
    fn ascender(&self) -> f64;

    /// Distance from baseline to the bottom of descenders (negative)
    fn descender(&self) -> f64;

    /// Calculate text width in points for a given font size
    fn text_width_points(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|c| self.char_width(c)).sum::<f64>() * font_size / 1000.0
    }

    /// Height of one line of text in points
    fn line_height(&self, font_size: f64) -> f64 {
        (self.ascender() - self.descender()) * font_size / 1000.0
    }
}

/// The standard PDF fonts with published metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

// Advance widths for WinAnsi codes 0x20..=0x7E, from the Adobe AFM files.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC_WIDTHS: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_ITALIC_WIDTHS: [u16; 95] = [
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
    333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
    500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
];

const COURIER_WIDTH: u16 = 600;

impl StandardFont {
    /// Look up a standard font by its PostScript name
    pub fn from_name(name: &str) -> Option<Self> {
        let font = match name {
            "Helvetica" => Self::Helvetica,
            "Helvetica-Bold" => Self::HelveticaBold,
            "Helvetica-Oblique" => Self::HelveticaOblique,
            "Helvetica-BoldOblique" => Self::HelveticaBoldOblique,
            "Times-Roman" => Self::TimesRoman,
            "Times-Bold" => Self::TimesBold,
            "Times-Italic" => Self::TimesItalic,
            "Times-BoldItalic" => Self::TimesBoldItalic,
            "Courier" => Self::Courier,
            "Courier-Bold" => Self::CourierBold,
            "Courier-Oblique" => Self::CourierOblique,
            "Courier-BoldOblique" => Self::CourierBoldOblique,
            _ => return None,
        };
        Some(font)
    }

    /// PostScript name written as /BaseFont
    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Self::TimesRoman => "Times-Roman",
            Self::TimesBold => "Times-Bold",
            Self::TimesItalic => "Times-Italic",
            Self::TimesBoldItalic => "Times-BoldItalic",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
            Self::CourierOblique => "Courier-Oblique",
            Self::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    fn ascii_widths(&self) -> Option<&'static [u16; 95]> {
        match self {
            Self::Helvetica | Self::HelveticaOblique => Some(&HELVETICA_WIDTHS),
            Self::HelveticaBold | Self::HelveticaBoldOblique => Some(&HELVETICA_BOLD_WIDTHS),
            Self::TimesRoman => Some(&TIMES_ROMAN_WIDTHS),
            Self::TimesBold => Some(&TIMES_BOLD_WIDTHS),
            Self::TimesItalic => Some(&TIMES_ITALIC_WIDTHS),
            Self::TimesBoldItalic => Some(&TIMES_BOLD_ITALIC_WIDTHS),
            _ => None,
        }
    }

    /// Width used for characters outside printable ASCII
    fn fallback_width(&self) -> u16 {
        match self {
            Self::Helvetica | Self::HelveticaOblique => 556,
            Self::HelveticaBold | Self::HelveticaBoldOblique => 611,
            Self::TimesRoman | Self::TimesBold | Self::TimesItalic | Self::TimesBoldItalic => 500,
            _ => COURIER_WIDTH,
        }
    }

    /// Encode text as a hex string in WinAnsiEncoding
    ///
    /// Characters without a WinAnsi code are replaced by `?`.
    pub fn encode_text_hex(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 2 + 2);
        result.push('<');
        for c in text.chars() {
            let code = win_ansi_code(c).unwrap_or(b'?');
            result.push_str(&format!("{code:02X}"));
        }
        result.push('>');
        result
    }

    /// Font dictionary for this standard font
    pub fn to_dictionary(&self) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.base_font(),
            "Encoding" => "WinAnsiEncoding",
        }
    }
}

impl FontMetrics for StandardFont {
    fn char_width(&self, c: char) -> f64 {
        let width = match self.ascii_widths() {
            Some(widths) if (' '..='~').contains(&c) => widths[c as usize - 0x20],
            Some(_) => self.fallback_width(),
            None => COURIER_WIDTH,
        };
        width as f64
    }

    fn ascender(&self) -> f64 {
        match self {
            Self::TimesRoman | Self::TimesBold | Self::TimesItalic | Self::TimesBoldItalic => 683.0,
            Self::Courier | Self::CourierBold | Self::CourierOblique | Self::CourierBoldOblique => {
                629.0
            }
            _ => 718.0,
        }
    }

    fn descender(&self) -> f64 {
        match self {
            Self::TimesRoman | Self::TimesBold | Self::TimesItalic | Self::TimesBoldItalic => -217.0,
            Self::Courier | Self::CourierBold | Self::CourierOblique | Self::CourierBoldOblique => {
                -157.0
            }
            _ => -207.0,
        }
    }
}

/// Map a character to its WinAnsiEncoding byte
fn win_ansi_code(c: char) -> Option<u8> {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code) {
        return Some(code as u8);
    }
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Font data structure for embedded TrueType fonts
#[derive(Debug, Clone)]
pub struct FontData {
    /// Font name/identifier
    pub name: String,
    /// Raw TTF data
    pub ttf_data: Vec<u8>,
    /// Characters used (for the width array and ToUnicode map)
    pub used_chars: BTreeSet<char>,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
}

/// PDF objects generated for font embedding
pub struct FontObjects {
    /// Type0 font dictionary
    pub type0_font: Dictionary,
    /// CIDFont Type2 dictionary
    pub cid_font: Dictionary,
    /// Font descriptor dictionary
    pub font_descriptor: Dictionary,
    /// Font file stream (TTF data)
    pub font_file_stream: Stream,
    /// ToUnicode CMap stream
    pub tounicode_stream: Stream,
}

impl FontData {
    /// Create font data from TTF bytes
    ///
    /// # Arguments
    /// * `name` - Font identifier, written as the PDF font name
    /// * `ttf_data` - TrueType font file bytes
    pub fn from_ttf(name: &str, ttf_data: &[u8]) -> Result<Self> {
        let face = ttf_parser::Face::parse(ttf_data, 0)
            .map_err(|e| PdfError::FontParseError(format!("{e:?}")))?;

        Ok(Self {
            name: sanitize_font_name(name),
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            ttf_data: ttf_data.to_vec(),
            used_chars: BTreeSet::new(),
        })
    }

    /// Load a TrueType font from a file, naming it after the file stem
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PdfError::FontNotFound(path.display().to_string()),
            _ => PdfError::IoError(e),
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("EmbeddedFont");
        Self::from_ttf(name, &data)
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.ttf_data, 0).ok()
    }

    /// Add characters to the used set
    pub fn add_chars(&mut self, text: &str) {
        self.used_chars.extend(text.chars());
    }

    /// Get font units per em
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Scale a value in font units to thousandths of an em
    fn to_milli_em(&self, units: f64) -> f64 {
        units * 1000.0 / self.units_per_em.max(1) as f64
    }

    /// Encode text as hex glyph IDs for the Identity-H encoding
    ///
    /// Records the characters as used so they appear in the width array.
    pub fn encode_text_hex(&mut self, text: &str) -> String {
        self.add_chars(text);
        let face = self.face();
        let mut result = String::from("<");
        for c in text.chars() {
            let gid = face
                .as_ref()
                .and_then(|f| f.glyph_index(c))
                .map(|g| g.0)
                .unwrap_or(0);
            result.push_str(&format!("{gid:04X}"));
        }
        result.push('>');
        result
    }

    /// Generate all PDF objects needed to embed this font
    pub fn to_pdf_objects(&self) -> FontObjects {
        let font_name = Object::Name(self.name.clone().into_bytes());

        let tounicode_content = self.generate_tounicode_cmap();
        let tounicode_stream = Stream::new(
            dictionary! { "Type" => "CMap" },
            tounicode_content.into_bytes(),
        );

        let font_file_stream = Stream::new(
            dictionary! { "Length1" => self.ttf_data.len() as i64 },
            self.ttf_data.clone(),
        );

        let ascent = self.ascender() as i64;
        let descent = self.descender() as i64;
        let font_descriptor = dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => font_name.clone(),
            "Flags" => 4, // Symbolic font
            "FontBBox" => vec![0.into(), descent.into(), 1000.into(), ascent.into()],
            "ItalicAngle" => 0,
            "Ascent" => ascent,
            "Descent" => descent,
            "CapHeight" => ascent,
            "StemV" => 80,
        };

        let cid_font = dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => font_name.clone(),
            "CIDSystemInfo" => dictionary! {
                "Registry" => Object::string_literal("Adobe"),
                "Ordering" => Object::string_literal("Identity"),
                "Supplement" => 0,
            },
            "W" => self.generate_widths_array(),
            "DW" => 1000,
        };

        let type0_font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => font_name,
            "Encoding" => "Identity-H",
        };

        FontObjects {
            type0_font,
            cid_font,
            font_descriptor,
            font_file_stream,
            tounicode_stream,
        }
    }

    /// Add the font objects to `doc`, returning the Type0 font reference
    pub fn embed(&self, doc: &mut Document) -> ObjectId {
        let objects = self.to_pdf_objects();

        let font_file_id = doc.add_object(objects.font_file_stream);

        let mut font_descriptor = objects.font_descriptor;
        font_descriptor.set("FontFile2", font_file_id);
        let font_descriptor_id = doc.add_object(font_descriptor);

        let mut cid_font = objects.cid_font;
        cid_font.set("FontDescriptor", font_descriptor_id);
        let cid_font_id = doc.add_object(cid_font);

        let tounicode_id = doc.add_object(objects.tounicode_stream);

        let mut type0_font = objects.type0_font;
        type0_font.set("DescendantFonts", vec![Object::Reference(cid_font_id)]);
        type0_font.set("ToUnicode", tounicode_id);
        doc.add_object(type0_font)
    }

    /// Generate /W array for the glyphs in use: [gid1 [w1] gid2 [w2] ...]
    fn generate_widths_array(&self) -> Vec<Object> {
        let mut widths = Vec::new();
        let Some(face) = self.face() else {
            return widths;
        };

        let mut gids: Vec<u16> = self
            .used_chars
            .iter()
            .filter_map(|&c| face.glyph_index(c).map(|g| g.0))
            .collect();
        gids.sort_unstable();
        gids.dedup();

        for gid in gids {
            let advance = face
                .glyph_hor_advance(ttf_parser::GlyphId(gid))
                .map(|a| self.to_milli_em(a as f64))
                .unwrap_or(1000.0);
            widths.push((gid as i64).into());
            widths.push(vec![(advance.round() as i64).into()].into());
        }

        widths
    }

    /// Generate ToUnicode CMap stream content
    fn generate_tounicode_cmap(&self) -> String {
        let mut cmap = String::new();

        cmap.push_str("/CIDInit /ProcSet findresource begin\n");
        cmap.push_str("12 dict begin\n");
        cmap.push_str("begincmap\n");
        cmap.push_str("/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n");
        cmap.push_str("/CMapName /Adobe-Identity-UCS def\n");
        cmap.push_str("/CMapType 2 def\n");
        cmap.push_str("1 begincodespacerange\n");
        cmap.push_str("<0000> <FFFF>\n");
        cmap.push_str("endcodespacerange\n");

        let mapped: Vec<(u16, char)> = match self.face() {
            Some(face) => self
                .used_chars
                .iter()
                .filter(|c| (**c as u32) <= 0xFFFF)
                .filter_map(|&c| face.glyph_index(c).map(|g| (g.0, c)))
                .collect(),
            None => Vec::new(),
        };

        // PDF recommends at most 100 entries per bfchar section
        for chunk in mapped.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
            for (gid, c) in chunk {
                cmap.push_str(&format!("<{gid:04X}> <{:04X}>\n", *c as u32));
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str("endcmap\n");
        cmap.push_str("CMapName currentdict /CMap defineresource pop\n");
        cmap.push_str("end\n");
        cmap.push_str("end\n");

        cmap
    }
}

impl FontMetrics for FontData {
    fn char_width(&self, c: char) -> f64 {
        self.face()
            .and_then(|face| face.glyph_index(c).and_then(|g| face.glyph_hor_advance(g)))
            .map(|a| self.to_milli_em(a as f64))
            .unwrap_or(0.0)
    }

    fn ascender(&self) -> f64 {
        self.to_milli_em(self.ascender as f64)
    }

    fn descender(&self) -> f64 {
        self.to_milli_em(self.descender as f64)
    }

    fn text_width_points(&self, text: &str, font_size: f64) -> f64 {
        // Parse the face once for the whole string
        let Some(face) = self.face() else {
            return 0.0;
        };
        let units: f64 = text
            .chars()
            .filter_map(|c| face.glyph_index(c).and_then(|g| face.glyph_hor_advance(g)))
            .map(|a| a as f64)
            .sum();
        self.to_milli_em(units) * font_size / 1000.0
    }
}

/// PDF names cannot hold whitespace or delimiters
fn sanitize_font_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_graphic() && !"()<>[]{}/%#".contains(*c))
        .collect()
}

/// A font ready for use on a page
#[derive(Debug, Clone)]
pub enum LoadedFont {
    Standard(StandardFont),
    TrueType(FontData),
}

impl LoadedFont {
    /// Resolve a font by standard name, or else by TrueType file path
    pub fn resolve(name: &str) -> Result<Self> {
        if let Some(standard) = StandardFont::from_name(name) {
            return Ok(Self::Standard(standard));
        }
        let path = Path::new(name);
        if !path.is_file() {
            return Err(PdfError::FontNotFound(name.to_string()));
        }
        Ok(Self::TrueType(FontData::from_file(path)?))
    }

    /// Metrics for layout
    pub fn metrics(&self) -> &dyn FontMetrics {
        match self {
            Self::Standard(font) => font as &dyn FontMetrics,
            Self::TrueType(font) => font as &dyn FontMetrics,
        }
    }

    /// Encode text for a Tj operator in this font's encoding
    pub fn encode_text_hex(&mut self, text: &str) -> String {
        match self {
            Self::Standard(font) => font.encode_text_hex(text),
            Self::TrueType(font) => font.encode_text_hex(text),
        }
    }

    /// Write the font into `doc`, returning the object to reference from page resources
    pub fn embed(&self, doc: &mut Document) -> ObjectId {
        match self {
            Self::Standard(font) => doc.add_object(font.to_dictionary()),
            Self::TrueType(font) => font.embed(doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_font_lookup() {
        assert_eq!(
            StandardFont::from_name("Helvetica"),
            Some(StandardFont::Helvetica)
        );
        assert_eq!(
            StandardFont::from_name("Courier-Bold"),
            Some(StandardFont::CourierBold)
        );
        assert_eq!(StandardFont::from_name("helvetica"), None);
        assert_eq!(StandardFont::from_name("Comic Sans"), None);
    }

    #[test]
    fn test_base_font_roundtrips_name() {
        for name in [
            "Helvetica-BoldOblique",
            "Times-Roman",
            "Times-BoldItalic",
            "Courier-Oblique",
        ] {
            let font = StandardFont::from_name(name).unwrap();
            assert_eq!(font.base_font(), name);
        }
    }

    #[test]
    fn test_helvetica_widths() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.char_width(' '), 278.0);
        assert_eq!(font.char_width('H'), 722.0);
        assert_eq!(font.char_width('i'), 222.0);
        assert_eq!(font.char_width('~'), 584.0);
        // "Hello" = 722 + 556 + 222 + 222 + 556
        assert!((font.text_width_points("Hello", 10.0) - 22.78).abs() < 1e-9);
    }

    #[test]
    fn test_courier_is_monospaced() {
        let font = StandardFont::Courier;
        assert_eq!(
            font.text_width_points("iiii", 10.0),
            font.text_width_points("WWWW", 10.0)
        );
        assert_eq!(font.text_width_points("ab", 10.0), 12.0);
    }

    #[test]
    fn test_line_height() {
        let font = StandardFont::Helvetica;
        assert!((font.line_height(10.0) - 9.25).abs() < 1e-9);
    }

    #[test]
    fn test_encode_win_ansi() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.encode_text_hex("Hi"), "<4869>");
        assert_eq!(font.encode_text_hex("é€"), "<E980>");
        // No WinAnsi code for Thai
        assert_eq!(font.encode_text_hex("ก"), "<3F>");
        assert_eq!(font.encode_text_hex(""), "<>");
    }

    #[test]
    fn test_standard_font_dictionary() {
        let dict = StandardFont::TimesRoman.to_dictionary();
        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Type1");
        assert_eq!(
            dict.get(b"BaseFont").unwrap().as_name().unwrap(),
            b"Times-Roman"
        );
        assert_eq!(
            dict.get(b"Encoding").unwrap().as_name().unwrap(),
            b"WinAnsiEncoding"
        );
    }

    #[test]
    fn test_from_ttf_rejects_garbage() {
        let result = FontData::from_ttf("broken", &[0u8; 100]);
        assert!(matches!(result, Err(PdfError::FontParseError(_))));
    }

    #[test]
    fn test_resolve_unknown_font() {
        let result = LoadedFont::resolve("NoSuchFont-Regular");
        assert!(matches!(result, Err(PdfError::FontNotFound(name)) if name == "NoSuchFont-Regular"));
    }

    #[test]
    fn test_resolve_standard_font() {
        let font = LoadedFont::resolve("Courier").unwrap();
        assert!(matches!(font, LoadedFont::Standard(StandardFont::Courier)));
        assert_eq!(font.metrics().char_width('x'), 600.0);
    }

    #[test]
    fn test_sanitize_font_name() {
        assert_eq!(sanitize_font_name("TH Sarabun New"), "THSarabunNew");
        assert_eq!(sanitize_font_name("A(b)/c"), "Abc");
    }
}
