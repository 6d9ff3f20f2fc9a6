//! Numeric literal scanning.
//!
//! The integer part follows the usual C conventions: `0x`/`0X` introduces
//! hexadecimal, a `0` followed by an octal digit octal, anything else
//! decimal, so `08` is eight. Scanning stops
//! at the first byte that is not a digit of the base. An optional `K`, `M`,
//! `G` or `T` suffix then multiplies by the matching power of 1024.
//! Overflow wraps; malformed input yields a best-effort value.

use crate::cursor::Cursor;

/// Scan a literal starting at an ASCII digit.
pub(crate) fn scan_number(cursor: &mut Cursor<'_>) -> u64 {
    let value = if cursor.current() == b'0'
        && matches!(cursor.peek(), b'x' | b'X')
        && cursor.peek_at(2).is_ascii_hexdigit()
    {
        cursor.advance_n(2);
        scan_digits(cursor, 16)
    } else if cursor.current() == b'0' && matches!(cursor.peek(), b'0'..=b'7') {
        scan_digits(cursor, 8)
    } else {
        scan_digits(cursor, 10)
    };

    match size_multiplier(cursor.current()) {
        Some(multiplier) => {
            cursor.advance();
            value.wrapping_mul(multiplier)
        }
        None => value,
    }
}

fn scan_digits(cursor: &mut Cursor<'_>, radix: u32) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = char::from(cursor.current()).to_digit(radix) {
        value = value.wrapping_mul(u64::from(radix)).wrapping_add(u64::from(digit));
        cursor.advance();
    }
    value
}

/// Multiplier for a size suffix byte.
pub(crate) fn size_multiplier(suffix: u8) -> Option<u64> {
    match suffix {
        b'K' => Some(1 << 10),
        b'M' => Some(1 << 20),
        b'G' => Some(1 << 30),
        b'T' => Some(1 << 40),
        _ => None,
    }
}
