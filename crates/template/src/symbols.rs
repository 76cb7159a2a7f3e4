//! Barcode and QR symbol geometry
//!
//! Symbols are encoded by `barcoders` and `qrcode` and laid out as filled
//! rectangles in top-left page coordinates. Adjacent dark modules on a row
//! are merged into one rectangle.

use crate::{Result, TemplateError};
use barcoders::sym::code128::Code128;
use pdf_core::Rect;
use qrcode::{EcLevel, QrCode};

/// Space kept free below a QR symbol inside its box (0.4 cm)
pub const QR_BOTTOM_MARGIN: f64 = 0.4 / 2.54 * 72.0;

/// Character set B selector understood by `barcoders`
const CODE128_SET_B: char = '\u{0181}';

/// Encode `value` as Code 128 set B modules (1 = bar)
pub fn encode_code128(value: &str) -> Result<Vec<u8>> {
    if value.is_empty() {
        return Err(TemplateError::Barcode(
            "Code 128 value must not be empty".to_string(),
        ));
    }
    let barcode = Code128::new(format!("{CODE128_SET_B}{value}"))
        .map_err(|e| TemplateError::Barcode(format!("Cannot encode '{value}' as Code 128: {e}")))?;
    Ok(barcode.encode())
}

/// Bars of a Code 128 symbol scaled to the width of `area` and spanning its height
pub fn code128_rects(value: &str, area: Rect) -> Result<Vec<Rect>> {
    let modules = encode_code128(value)?;
    let module_width = area.width / modules.len() as f64;

    Ok(dark_runs(&modules, |m| *m == 1)
        .map(|(start, len)| {
            Rect::new(
                area.x + start as f64 * module_width,
                area.y,
                len as f64 * module_width,
                area.height,
            )
        })
        .collect())
}

/// Modules of a QR symbol placed inside `area`
///
/// The square symbol keeps [`QR_BOTTOM_MARGIN`] free below it, sits on that
/// margin and is centred horizontally. Returns no rectangles when the box is
/// too small to hold a symbol.
pub fn qr_rects(value: &str, area: Rect) -> Result<Vec<Rect>> {
    let code = QrCode::with_error_correction_level(value.as_bytes(), EcLevel::M)
        .map_err(|e| TemplateError::Barcode(format!("Cannot encode QR code: {e}")))?;

    let side = area.width.min(area.height - QR_BOTTOM_MARGIN);
    if side <= 0.0 {
        return Ok(Vec::new());
    }

    let width = code.width();
    let module = side / width as f64;
    let left = area.x + (area.width - side) / 2.0;
    let top = area.bottom() - QR_BOTTOM_MARGIN - side;

    let colors = code.to_colors();
    let mut rects = Vec::new();
    for (row, cells) in colors.chunks(width).enumerate() {
        for (start, len) in dark_runs(cells, |c| *c == qrcode::Color::Dark) {
            rects.push(Rect::new(
                left + start as f64 * module,
                top + row as f64 * module,
                len as f64 * module,
                module,
            ));
        }
    }
    Ok(rects)
}

/// `(start, length)` of each run of consecutive dark cells
fn dark_runs<'a, T>(
    cells: &'a [T],
    is_dark: impl Fn(&T) -> bool + 'a,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut index = 0;
    std::iter::from_fn(move || {
        while index < cells.len() && !is_dark(&cells[index]) {
            index += 1;
        }
        if index == cells.len() {
            return None;
        }
        let start = index;
        while index < cells.len() && is_dark(&cells[index]) {
            index += 1;
        }
        Some((start, index - start))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dark_runs() {
        let cells = [0u8, 1, 1, 0, 1, 0, 0, 1, 1, 1];
        let runs: Vec<_> = dark_runs(&cells, |c| *c == 1).collect();
        assert_eq!(runs, vec![(1, 2), (4, 1), (7, 3)]);

        let empty: Vec<_> = dark_runs(&[0u8, 0], |c| *c == 1).collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_encode_code128() {
        let modules = encode_code128("ABC-123").unwrap();
        // Every Code 128 symbol starts with a bar and ends with the stop pattern
        assert_eq!(modules.first(), Some(&1));
        assert_eq!(modules.last(), Some(&1));
    }

    #[test]
    fn test_encode_code128_rejects_empty() {
        assert!(matches!(encode_code128(""), Err(TemplateError::Barcode(_))));
    }

    #[test]
    fn test_encode_code128_rejects_characters_outside_set_b() {
        assert!(matches!(encode_code128("Grüße"), Err(TemplateError::Barcode(_))));
    }

    #[test]
    fn test_code128_fills_box() {
        let area = Rect::new(10.0, 20.0, 200.0, 40.0);
        let rects = code128_rects("LABEL01", area).unwrap();
        assert!(!rects.is_empty());

        let first = rects.first().unwrap();
        let last = rects.last().unwrap();
        assert!((first.x - 10.0).abs() < 1e-9);
        assert!((last.right() - 210.0).abs() < 1e-9);
        assert!(rects.iter().all(|r| r.y == 20.0 && r.height == 40.0));
    }

    #[test]
    fn test_qr_bottom_margin_is_four_millimetres() {
        assert!((QR_BOTTOM_MARGIN - 11.338_582_677).abs() < 1e-6);
    }

    #[test]
    fn test_qr_centred_and_bottom_anchored() {
        // Wide box: the side is limited by the height minus the margin
        let area = Rect::new(0.0, 0.0, 200.0, 100.0);
        let rects = qr_rects("hello", area).unwrap();
        let side = 100.0 - QR_BOTTOM_MARGIN;

        let left = rects.iter().map(|r| r.x).fold(f64::INFINITY, f64::min);
        let right = rects.iter().map(|r| r.right()).fold(0.0, f64::max);
        let top = rects.iter().map(|r| r.y).fold(f64::INFINITY, f64::min);
        let bottom = rects.iter().map(|r| r.bottom()).fold(0.0, f64::max);

        // Finder patterns put dark modules on every edge of the symbol
        assert!((left - (200.0 - side) / 2.0).abs() < 1e-9);
        assert!((right - (200.0 + side) / 2.0).abs() < 1e-9);
        assert!(top.abs() < 1e-9);
        assert!((bottom - (100.0 - QR_BOTTOM_MARGIN)).abs() < 1e-9);
    }

    #[test]
    fn test_qr_narrow_box_uses_width() {
        let area = Rect::new(0.0, 0.0, 50.0, 200.0);
        let rects = qr_rects("hello", area).unwrap();
        let bottom = rects.iter().map(|r| r.bottom()).fold(0.0, f64::max);
        let top = rects.iter().map(|r| r.y).fold(f64::INFINITY, f64::min);
        assert!((bottom - top - 50.0).abs() < 1e-9);
        assert!((bottom - (200.0 - QR_BOTTOM_MARGIN)).abs() < 1e-9);
    }

    #[test]
    fn test_qr_box_too_small() {
        let area = Rect::new(0.0, 0.0, 50.0, 10.0);
        assert!(qr_rects("hello", area).unwrap().is_empty());
    }

    #[test]
    fn test_qr_too_long() {
        let value = "x".repeat(5000);
        let area = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(matches!(qr_rects(&value, area), Err(TemplateError::Barcode(_))));
    }
}
