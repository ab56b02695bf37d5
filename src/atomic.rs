/// Trait for atomic elements that can be used as parser tokens
/// This enables generic character classes, error formatting and location calculation
pub trait Atomic: Copy + Clone + PartialEq + std::fmt::Debug + std::fmt::Display {
    /// The newline character/element for this atomic type
    const NEWLINE: Self;

    /// View this token as a Unicode scalar value
    ///
    /// Bytes map to the code point with the same value, so ASCII comparisons
    /// behave identically for byte and text input.
    fn to_char(self) -> char;

    /// Convert a slice of elements to a displayable string for error reporting
    fn slice_to_string(slice: &[Self]) -> String;
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';

    fn to_char(self) -> char {
        char::from(self)
    }

    fn slice_to_string(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Atomic for char {
    const NEWLINE: Self = '\n';

    fn to_char(self) -> char {
        self
    }

    fn slice_to_string(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_char_is_latin1() {
        assert_eq!(b'a'.to_char(), 'a');
        assert_eq!(0xE9u8.to_char(), 'é');
    }

    #[test]
    fn test_slice_to_string() {
        assert_eq!(u8::slice_to_string(b"hello"), "hello");
        assert_eq!(char::slice_to_string(&['h', 'é']), "hé");
        // Invalid UTF-8 is replaced rather than rejected
        assert_eq!(u8::slice_to_string(&[0xFF]), "\u{FFFD}");
    }
}
