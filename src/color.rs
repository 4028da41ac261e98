extern crate alloc;
use alloc::format;
use alloc::string::String;

use rgb::RGB;

/// Pure black, dropped from boxes during splits.
pub const BLACK: RGB<u8> = RGB { r: 0, g: 0, b: 0 };

/// Pure white, dropped from boxes during splits.
pub const WHITE: RGB<u8> = RGB {
    r: 255,
    g: 255,
    b: 255,
};

/// Whether a sample is exactly pure black or pure white.
///
/// Only exact per-channel matches count; (1, 0, 0) or (255, 255, 254)
/// pass through untouched.
#[inline(always)]
pub fn is_black_or_white(c: RGB<u8>) -> bool {
    c == BLACK || c == WHITE
}

/// Average two colors channel by channel.
///
/// The mean is computed in widened integers and truncated, so
/// `blend(a, a) == a` holds exactly and `blend(a, b) == blend(b, a)`.
#[inline(always)]
pub fn blend(a: RGB<u8>, b: RGB<u8>) -> RGB<u8> {
    RGB {
        r: ((a.r as u16 + b.r as u16) / 2) as u8,
        g: ((a.g as u16 + b.g as u16) / 2) as u8,
        b: ((a.b as u16 + b.b as u16) / 2) as u8,
    }
}

/// Format a color as an uppercase `#RRGGBB` hex string.
pub fn to_hex(c: RGB<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}
