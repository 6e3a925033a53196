//! Dancer token scanner.
//!
//! A dancer token is a fixed 3-character pattern — couple digit, role
//! letter, facing glyph — and may appear anywhere in a line. The scan is
//! left to right and non-overlapping: a match consumes its three columns.

use crate::model::Dancer;

/// Scan one transcript line for dancer tokens.
///
/// Each match yields a dancer at raw position `(column, line_number)`,
/// where the column is the character offset of the token's first
/// character. Returns the dancers in left-to-right order.
pub fn scan_dancers(line: &str, line_number: usize) -> Vec<Dancer> {
    let chars: Vec<char> = line.chars().collect();
    let mut dancers = Vec::new();
    let mut i = 0;
    while i + 3 <= chars.len() {
        match Dancer::decode(
            chars[i],
            chars[i + 1],
            chars[i + 2],
            i as i64,
            line_number as i64,
        ) {
            Some(d) => {
                dancers.push(d);
                i += 3;
            }
            None => i += 1,
        }
    }
    dancers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Facing, Role};

    #[test]
    fn test_scan_single_token_at_offset() {
        let dancers = scan_dancers("   2B<", 5);
        assert_eq!(dancers.len(), 1);
        assert_eq!(dancers[0].x, 3);
        assert_eq!(dancers[0].y, 5);
        assert_eq!(dancers[0].couple, 2);
        assert_eq!(dancers[0].role, Role::Leader);
        assert_eq!(dancers[0].facing, Facing::Left);
    }

    #[test]
    fn test_scan_multiple_tokens_left_to_right() {
        let dancers = scan_dancers("1B^ 1G^   4GV", 0);
        let tokens: Vec<String> = dancers.iter().map(|d| d.token()).collect();
        assert_eq!(tokens, vec!["1B^", "1G^", "4GV"]);
        let columns: Vec<i64> = dancers.iter().map(|d| d.x).collect();
        assert_eq!(columns, vec![0, 4, 10]);
    }

    #[test]
    fn test_scan_ignores_surrounding_text() {
        assert!(scan_dancers("heads square thru 4", 0).is_empty());
        assert!(scan_dancers("", 0).is_empty());
        // Digit out of range, and a facing glyph with no couple/role.
        assert!(scan_dancers("5B^ ^^", 0).is_empty());
    }

    #[test]
    fn test_scan_does_not_overlap_matches() {
        // After consuming "1B^" the scan resumes past the glyph, so the
        // following "2G<" is found at column 3.
        let dancers = scan_dancers("1B^2G<", 0);
        let tokens: Vec<String> = dancers.iter().map(|d| d.token()).collect();
        assert_eq!(tokens, vec!["1B^", "2G<"]);
        assert_eq!(dancers[1].x, 3);
    }
}
