//! Scanner for the field-descriptor text grammar.
//!
//! The grammar is exactly the single-type (field) descriptor subset:
//! a primitive code, `L<internal-name>;`, or one leading `[` per array
//! dimension prefixed to either form. No method descriptors, no generic
//! signatures.

use crate::errors::DescriptorSyntaxError;

/// Maximum number of array dimensions a descriptor may carry.
///
/// Dimension counting is iterative with this bound, so pathological
/// bracket runs are a syntax error rather than stack exhaustion.
pub const MAX_ARRAY_DEPTH: usize = 255;

const PRIMITIVE_CODES: &[u8] = b"BCDFIJSZ";

/// Whether `b` is one of the eight single-character primitive codes.
pub(crate) fn is_primitive_code(b: u8) -> bool {
    PRIMITIVE_CODES.contains(&b)
}

/// Scan one field descriptor starting at `offset`.
///
/// Returns the number of bytes the descriptor occupies, or 0 when no
/// valid descriptor starts there (including truncated input, an empty or
/// unterminated `L...;` name, and bracket runs past [`MAX_ARRAY_DEPTH`]).
pub fn scan(text: &str, offset: usize) -> usize {
    let bytes = text.as_bytes();
    if bytes.get(offset) != Some(&b'[') {
        return scan_element(bytes, offset);
    }
    let mut depth = 0usize;
    let mut pos = offset;
    while bytes.get(pos) == Some(&b'[') {
        depth += 1;
        if depth > MAX_ARRAY_DEPTH {
            return 0;
        }
        pos += 1;
    }
    match scan_element(bytes, pos) {
        0 => 0,
        element => (pos - offset) + element,
    }
}

/// Scan a non-array descriptor element: a primitive code or `L...;`.
fn scan_element(bytes: &[u8], offset: usize) -> usize {
    match bytes.get(offset) {
        Some(&b) if is_primitive_code(b) => 1,
        Some(&b'L') => {
            // At least one character strictly between `L` and `;`.
            match bytes[offset + 1..].iter().position(|&c| c == b';') {
                Some(0) | None => 0,
                Some(name_len) => 2 + name_len,
            }
        }
        _ => 0,
    }
}

/// Validate `text` as a complete reference-or-array descriptor.
///
/// The scan must consume the entire, non-empty string, and the result
/// must not be a bare primitive code: primitives are a distinct constant
/// kind and never surface as a top-level descriptor entity here. They
/// remain legal one level down, as the component encoding of an array.
pub fn validate_reference_or_array(text: &str) -> Result<(), DescriptorSyntaxError> {
    let len = scan(text, 0);
    if len == 0 || len == 1 || len != text.len() {
        return Err(DescriptorSyntaxError::new(text));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_primitive_codes() {
        for code in ["B", "C", "D", "F", "I", "J", "S", "Z"] {
            assert_eq!(scan(code, 0), 1, "{code}");
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(scan("V", 0), 0);
        assert_eq!(scan("Q", 0), 0);
        assert_eq!(scan("", 0), 0);
    }

    #[test]
    fn scans_reference_form() {
        assert_eq!(scan("Ljava/lang/String;", 0), 18);
        assert_eq!(scan("LA;", 0), 3);
    }

    #[test]
    fn rejects_degenerate_reference_forms() {
        // Empty name and unterminated form both fail.
        assert_eq!(scan("L;", 0), 0);
        assert_eq!(scan("Ljava/lang/String", 0), 0);
        assert_eq!(scan("L", 0), 0);
    }

    #[test]
    fn scans_array_forms() {
        assert_eq!(scan("[I", 0), 2);
        assert_eq!(scan("[[J", 0), 3);
        assert_eq!(scan("[Ljava/lang/String;", 0), 19);
    }

    #[test]
    fn scan_respects_offset() {
        assert_eq!(scan("ZLjava/lang/String;", 1), 18);
        assert_eq!(scan("[[I", 1), 2);
    }

    #[test]
    fn rejects_bracket_run_without_element() {
        assert_eq!(scan("[", 0), 0);
        assert_eq!(scan("[[", 0), 0);
    }

    #[test]
    fn rejects_absurd_array_depth() {
        let deep = format!("{}I", "[".repeat(MAX_ARRAY_DEPTH + 1));
        assert_eq!(scan(&deep, 0), 0);

        let at_limit = format!("{}I", "[".repeat(MAX_ARRAY_DEPTH));
        assert_eq!(scan(&at_limit, 0), at_limit.len());
    }

    #[test]
    fn validates_reference_or_array_only() {
        assert!(validate_reference_or_array("Ljava/lang/String;").is_ok());
        assert!(validate_reference_or_array("[I").is_ok());
        // Bare primitives are a different constant kind.
        assert!(validate_reference_or_array("I").is_err());
        // Trailing garbage must not be silently dropped.
        assert!(validate_reference_or_array("Ljava/lang/String;I").is_err());
        assert!(validate_reference_or_array("").is_err());
    }
}
