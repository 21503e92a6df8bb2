/// Indentation unit of a puzzle: how many columns make one level, and how
/// wide a tab stop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentStep(usize);

impl IndentStep {
    /// Steps below one are clamped to one
    pub fn new(step: usize) -> Self {
        Self(step.max(1))
    }

    pub fn width(&self) -> usize {
        self.0
    }

    /// Width of the leading whitespace of `line`, with each tab advancing to
    /// the next multiple of the step
    pub fn measure(&self, line: &str) -> usize {
        let mut columns = 0;
        for c in line.chars() {
            match c {
                '\t' => columns += self.0 - columns % self.0,
                c if c.is_whitespace() => columns += 1,
                _ => break,
            }
        }
        columns
    }

    /// Convert leading indentation to a depth level
    pub fn calculate_depth(&self, line: &str) -> usize {
        self.measure(line) / self.0
    }
}

impl Default for IndentStep {
    fn default() -> Self {
        Self(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_step_calculate_depth_spaces() {
        let step = IndentStep::new(2);

        assert_eq!(step.calculate_depth(""), 0);
        assert_eq!(step.calculate_depth("  "), 1); // 2 spaces = 1 level
        assert_eq!(step.calculate_depth("    "), 2); // 4 spaces = 2 levels
        assert_eq!(step.calculate_depth("   "), 1); // odd widths round down

        let step4 = IndentStep::new(4);
        assert_eq!(step4.calculate_depth("    "), 1);
        assert_eq!(step4.calculate_depth("        "), 2);
    }

    #[test]
    fn test_indent_step_calculate_depth_full_lines() {
        let step = IndentStep::new(4);
        assert_eq!(step.calculate_depth("for x in xs:"), 0);
        assert_eq!(step.calculate_depth("    print(x)"), 1);
        assert_eq!(step.calculate_depth("        return"), 2);
    }

    #[test]
    fn test_tabs_expand_to_step_stops() {
        let step = IndentStep::new(4);
        assert_eq!(step.measure("\tx"), 4);
        assert_eq!(step.measure("\t\tx"), 8);
        // A tab after two spaces only fills to the next stop
        assert_eq!(step.measure("  \tx"), 4);
        assert_eq!(step.measure("\t  x"), 6);

        let step2 = IndentStep::new(2);
        assert_eq!(step2.measure("\tx"), 2);
        assert_eq!(step2.calculate_depth("\t\tx"), 2);
    }

    #[test]
    fn test_mixed_tabs_and_spaces_agree() {
        let step = IndentStep::new(4);
        assert_eq!(step.measure("\treturn"), step.measure("    return"));
    }

    #[test]
    fn test_zero_step_is_clamped() {
        let step = IndentStep::new(0);
        assert_eq!(step.width(), 1);
        assert_eq!(step.calculate_depth("   x"), 3);
    }
}
