use std::sync::OnceLock;

use regex::Regex;

use crate::multisegment::{Multisegment, Segment};

const SEGMENT_PATTERN: &str = r"\[((?-u:\d)+)[,\s]\s?((?-u:\d)+)\]";
static SEGMENT_RE: OnceLock<Regex> = OnceLock::new();

fn segment_re() -> &'static Regex {
    SEGMENT_RE.get_or_init(|| Regex::new(SEGMENT_PATTERN).expect("segment pattern must compile"))
}

/// Extracts every bracketed pair `[a,b]`, `[a, b]` or `[a b]` from free text.
///
/// Endpoints are runs of ASCII digits; other Unicode decimal digits are not recognised. Anything
/// that does not look like a segment is skipped, as are endpoints too large for `i64`. Every
/// `i64` endpoint is accepted: the search widens them to [`Weight`](crate::perm::Weight).
pub fn multisegment_from_str(s: &str) -> Multisegment {
    segment_re()
        .captures_iter(s)
        .filter_map(|caps| {
            let start = caps[1].parse().ok()?;
            let end = caps[2].parse().ok()?;
            Some(Segment::new(start, end))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::multisegment_from_str;
    use crate::multisegment::Multisegment;

    #[test]
    fn parses_separators() {
        assert_eq!(multisegment_from_str("[1,2]"), Multisegment::from([[1, 2]]));
        assert_eq!(
            multisegment_from_str("[17,255]"),
            Multisegment::from([[17, 255]])
        );
        assert_eq!(
            multisegment_from_str("[1,2] + [4, 6]"),
            Multisegment::from([[1, 2], [4, 6]])
        );
        assert_eq!(
            multisegment_from_str("[1,2],[7,8]"),
            Multisegment::from([[1, 2], [7, 8]])
        );
        assert_eq!(
            multisegment_from_str("[1, 2][3,4]"),
            Multisegment::from([[1, 2], [3, 4]])
        );
        assert_eq!(
            multisegment_from_str("[[1, 2], [2, 2], [3, 3]]"),
            Multisegment::from([[1, 2], [2, 2], [3, 3]])
        );
    }

    #[test]
    fn drops_ill_formed_groups() {
        assert!(multisegment_from_str("[12]").is_empty());
        assert!(multisegment_from_str("1,2]").is_empty());
        assert!(multisegment_from_str("[-1,2]").is_empty());
        assert!(multisegment_from_str("[1,  2]").is_empty());
        assert!(multisegment_from_str("[1,99999999999999999999]").is_empty());
        assert!(multisegment_from_str("[\u{661},\u{662}]").is_empty());
        assert_eq!(
            multisegment_from_str("[\u{661},\u{662}] [1,9223372036854775807]"),
            Multisegment::from([[1, i64::MAX]])
        );
        assert_eq!(
            multisegment_from_str("[1] [2,3] [x,4]"),
            Multisegment::from([[2, 3]])
        );
    }
}
