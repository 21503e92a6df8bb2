/// Remove the whitespace prefix shared by every non-blank line and normalise
/// line endings to `\n`. Whitespace-only lines become empty.
///
/// Tabs and spaces are distinct characters here: `"\tx"` and `"    y"` share no
/// prefix.
pub fn dedent(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();

    let mut common: Option<&str> = None;
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let indent = leading_whitespace(line);
        common = Some(match common {
            None => indent,
            Some(prev) => shared_prefix(prev, indent),
        });
    }
    let cut = common.map_or(0, str::len);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[cut..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(line.len(), |(i, _)| i);
    &line[..end]
}

fn shared_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or(a.len().min(b.len()), |((i, _), _)| i);
    &a[..end]
}
