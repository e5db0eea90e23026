//! Render a value back into the three supported bases.
//!
//! Pure string producers with no I/O; indentation and section layout are
//! the caller's concern.

/// Render a value as bare decimal digits.
pub fn render_decimal(value: u64) -> String {
    value.to_string()
}

/// Render a value as `0x` followed by lowercase hexadecimal digits, with
/// no zero padding.
pub fn render_hexadecimal(value: u64) -> String {
    format!("0x{value:x}")
}

/// Render all 64 bits of a value, most significant first, with a space
/// after every nibble and a line break between the upper and lower 32 bits.
pub fn render_binary(value: u64) -> String {
    let mut rendered = String::with_capacity(80);

    for bit in (0..64).rev() {
        rendered.push(if (value >> bit) & 1 == 1 { '1' } else { '0' });
        if bit == 32 {
            rendered.push('\n');
        } else if bit % 4 == 0 && bit != 0 {
            rendered.push(' ');
        }
    }

    rendered
}
