use regex::Regex;
use std::sync::OnceLock;

/// Trailing annotations an author can attach to a line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers {
    pub locked: bool,
    /// 1-based column from a `:column=N:` marker, saturating at `usize::MAX`
    pub column: Option<usize>,
}

fn marker_regex() -> &'static Regex {
    static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKER_REGEX.get_or_init(|| {
        Regex::new(r":(?:lock|column=(\d+)):\s*$").expect("Invalid marker regex")
    })
}

/// Strip trailing markers from `line`, returning the remaining text and
/// what was found. Markers may be stacked in any order.
pub fn strip_markers(line: &str) -> (&str, Markers) {
    let mut markers = Markers::default();
    let mut rest = line.trim_end();

    while let Some(caps) = marker_regex().captures(rest) {
        let Some(whole) = caps.get(0) else { break };
        match caps.get(1) {
            Some(n) => {
                // The last marker on the line wins if the author repeats it
                if markers.column.is_none() {
                    // Only digits match, so parsing fails on overflow alone
                    markers.column = Some(n.as_str().parse().unwrap_or(usize::MAX));
                }
            }
            None => markers.locked = true,
        }
        rest = rest[..whole.start()].trim_end();
    }

    (rest, markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("print(x)", "print(x)", false, None)]
    #[case("print(x)    :lock:", "print(x)", true, None)]
    #[case("print(x):lock:", "print(x)", true, None)]
    #[case("    if ok:   :lock:  ", "    if ok:", true, None)]
    #[case("x = 1 :column=2:", "x = 1", false, Some(2))]
    #[case("x = 1 :lock: :column=3:", "x = 1", true, Some(3))]
    #[case("x = 1 :column=3: :lock:", "x = 1", true, Some(3))]
    #[case("d = {'a': 1}", "d = {'a': 1}", false, None)]
    #[case(":lock:", "", true, None)]
    #[case("x :column=99999999999999999999:", "x", false, Some(usize::MAX))]
    #[case("x :column=0:", "x", false, Some(0))]
    fn test_strip_markers(
        #[case] line: &str,
        #[case] text: &str,
        #[case] locked: bool,
        #[case] column: Option<usize>,
    ) {
        let (rest, markers) = strip_markers(line);
        assert_eq!(rest, text);
        assert_eq!(markers, Markers { locked, column });
    }

    #[test]
    fn test_marker_must_be_trailing() {
        let (rest, markers) = strip_markers(":lock: x = 1");
        assert_eq!(rest, ":lock: x = 1");
        assert!(!markers.locked);
    }
}
