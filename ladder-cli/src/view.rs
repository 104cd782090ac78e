//! Plain-text rendering of ladders and result boards.
//!
//! Every participant gets a fixed-width column; the vertical sits in the
//! middle of the column and rungs fill the gap to the next vertical.
//!
//! ```text
//!  pobi honux crong   jk
//!   |-----|     |-----|
//!   |     |-----|     |
//!   꽝   5000    꽝   3000
//! ```

use ladder_core::{Ladder, Outcome, ResultBoard, Roster, RungRow};

/// Narrowest column, so short names still leave room for a visible rung.
const MIN_CELL: usize = 5;

fn cell_width(roster: &Roster, outcomes: &[Outcome]) -> usize {
    roster
        .iter()
        .map(|n| n.as_str().chars().count())
        .chain(outcomes.iter().map(|o| o.as_str().chars().count()))
        .max()
        .unwrap_or(0)
        .max(MIN_CELL)
}

fn render_labels<'a>(labels: impl Iterator<Item = &'a str>, cell: usize) -> String {
    let mut line = String::new();
    for label in labels {
        line.push_str(&format!("{label:^cell$} "));
    }
    line.trim_end().to_string()
}

fn render_row(row: &RungRow, verticals: usize, cell: usize) -> String {
    let column = cell + 1;
    let offset = cell / 2;
    let mut line = vec![' '; verticals * column];
    for v in 0..verticals {
        let at = v * column + offset;
        line[at] = '|';
        if row.has_rung(v) {
            for slot in &mut line[at + 1..at + column] {
                *slot = '-';
            }
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

/// Names header, one line per row, outcomes footer.
pub fn render_ladder(roster: &Roster, ladder: &Ladder, outcomes: &[Outcome]) -> String {
    let cell = cell_width(roster, outcomes);
    let mut lines = Vec::with_capacity(ladder.height() + 2);
    lines.push(render_labels(roster.iter().map(|n| n.as_str()), cell));
    for row in ladder.rows() {
        lines.push(render_row(row, ladder.verticals(), cell));
    }
    lines.push(render_labels(outcomes.iter().map(|o| o.as_str()), cell));
    lines.join("\n")
}

/// One `name : outcome` line per participant, in roster order.
pub fn render_board(board: &ResultBoard) -> String {
    board
        .iter()
        .map(|(name, outcome)| format!("{name} : {outcome}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::make_result_board;

    fn fixture() -> (Roster, Ladder, Vec<Outcome>) {
        let roster = Roster::parse("A,B,C", ',').unwrap();
        let ladder = Ladder::from_rows(vec![
            RungRow::new(vec![true, false]).unwrap(),
            RungRow::new(vec![false, true]).unwrap(),
            RungRow::empty(2),
        ])
        .unwrap();
        let outcomes = Outcome::parse_list("1,2,3", ',', 3).unwrap();
        (roster, ladder, outcomes)
    }

    #[test]
    fn renders_rungs_between_verticals() {
        let (roster, ladder, outcomes) = fixture();
        let text = render_ladder(&roster, &ladder, &outcomes);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "  A     B     C",
                "  |-----|     |",
                "  |     |-----|",
                "  |     |     |",
                "  1     2     3",
            ]
        );
    }

    #[test]
    fn long_labels_widen_columns() {
        let roster = Roster::parse("honux,crongcrong", ',').unwrap();
        let ladder = Ladder::from_rows(vec![RungRow::new(vec![true]).unwrap()]).unwrap();
        let outcomes = Outcome::parse_list("x,y", ',', 2).unwrap();
        let text = render_ladder(&roster, &ladder, &outcomes);
        let row = text.lines().nth(1).unwrap();
        // cell 10, column 11: verticals at 5 and 16
        assert_eq!(row, format!("     |{}|", "-".repeat(10)));
    }

    #[test]
    fn board_lines_follow_roster_order() {
        let (roster, ladder, outcomes) = fixture();
        let board = make_result_board(&ladder, &roster, &outcomes).unwrap();
        // A: 0 -> 1 -> 2, B: 1 -> 0 -> 0, C: 2 -> 2 -> 1
        assert_eq!(render_board(&board), "A : 3\nB : 1\nC : 2");
    }
}
