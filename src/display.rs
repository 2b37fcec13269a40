use crate::search::Solution;
use std::fmt;
use std::fmt::Display;

const TABLE_PADDING: usize = 4;
/// Used when the terminal width can't be found.
pub const DEFAULT_WIDTH: usize = 90;

/// The solutions of one equation, in the order they were found. Its `Display` shows one
/// `A+B=C` line per solution (and nothing at all if there are none).
#[derive(Debug, Clone, Default)]
pub struct SolutionSet<'e>(pub Vec<Solution<'e>>);

impl<'e> SolutionSet<'e> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Solution<'e>> {
        self.0.iter()
    }

    /// One `A+B=C` line per solution.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.0.iter().map(|solution| solution.to_string())
    }

    /// The letter tables of every solution, laid out side by side when they fit in `width`
    /// columns. Rows of tables are separated by a blank line.
    pub fn tables(&self, width: usize) -> String {
        let tables = self
            .0
            .iter()
            .map(|solution| solution.letter_table())
            .collect::<Vec<_>>();

        let mut rows: Vec<Vec<&str>> = Vec::new();
        let mut row_width = 0;
        for table in &tables {
            let table_width = column_width(table);
            match rows.last_mut() {
                Some(row) if row_width + table_width <= width => {
                    row.push(table.as_str());
                    row_width += table_width;
                }
                _ => {
                    rows.push(vec![table.as_str()]);
                    row_width = table_width;
                }
            }
        }

        rows.iter()
            .map(|row| render_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Like `tables`, sized to the terminal.
    pub fn tables_for_terminal(&self) -> String {
        let width = termsize::get()
            .map(|size| size.cols as usize)
            .unwrap_or(DEFAULT_WIDTH);
        self.tables(width)
    }
}

impl<'e> IntoIterator for SolutionSet<'e> {
    type Item = Solution<'e>;
    type IntoIter = std::vec::IntoIter<Solution<'e>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for SolutionSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A table's widest line, plus the gap before it.
fn column_width(table: &str) -> usize {
    let widest = table.lines().map(|line| line.chars().count()).max();
    widest.unwrap_or(0) + TABLE_PADDING
}

/// Print tables next to each other, each in a column as wide as its widest line.
fn render_row(row: &[&str]) -> String {
    let height = row.iter().map(|table| table.lines().count()).max();
    let mut text = String::new();
    for i in 0..height.unwrap_or(0) {
        let mut line = String::new();
        for table in row {
            let cell = table.lines().nth(i).unwrap_or("");
            let cell_width = column_width(table) - TABLE_PADDING;
            line.push_str(&format!(
                "{:pad$}{:<cell_width$}",
                "",
                cell,
                pad = TABLE_PADDING,
                cell_width = cell_width,
            ));
        }
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

#[test]
fn test_tables() {
    use crate::equation::Equation;
    use crate::search::solve;

    let eq: Equation = "A+B=C".parse().unwrap();
    let solutions = SolutionSet(solve(&eq).take(3).collect());
    assert_eq!(solutions.to_string(), "1+2=3\n2+1=3\n1+3=4\n");

    // Each table is 5 wide, plus padding
    let side_by_side = solutions.tables(DEFAULT_WIDTH);
    assert_eq!(
        side_by_side,
        [
            "    1+2=3    2+1=3    1+3=4",
            "    A = 1    A = 2    A = 1",
            "    B = 2    B = 1    B = 3",
            "    C = 3    C = 3    C = 4",
            "",
        ]
        .join("\n")
    );

    // Two tables take exactly 18 columns
    let two_then_one = solutions.tables(18);
    assert_eq!(
        two_then_one,
        [
            "    1+2=3    2+1=3",
            "    A = 1    A = 2",
            "    B = 2    B = 1",
            "    C = 3    C = 3",
            "",
            "    1+3=4",
            "    A = 1",
            "    B = 3",
            "    C = 4",
            "",
        ]
        .join("\n")
    );

    let stacked = solutions.tables(10);
    assert_eq!(stacked.lines().filter(|line| line.is_empty()).count(), 2);
    assert_eq!(stacked.lines().next(), Some("    1+2=3"));
}

#[test]
fn test_empty_set() {
    let solutions = SolutionSet::default();
    assert_eq!(solutions.to_string(), "");
    assert_eq!(solutions.tables(DEFAULT_WIDTH), "");
}
