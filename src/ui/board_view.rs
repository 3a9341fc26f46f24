use crate::game::{Board, Cell};

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Render the board as text, top row first, followed by column numbers.
///
/// Empty cells are shown as `.`, occupied cells as the owner's number. Every
/// cell is padded to the widest label so columns line up for any number of
/// players.
pub fn render_board(board: &Board, player_count: usize) -> String {
    let cell_width = digits(board.width().saturating_sub(1)).max(digits(player_count));
    let pad = |label: String| format!("{label:>cell_width$}");

    let mut lines = Vec::with_capacity(board.height() + 2);
    for row in (0..board.height()).rev() {
        let cells: Vec<String> = (0..board.width())
            .map(|col| match board.get(row, col) {
                Cell::Empty => pad(".".to_string()),
                Cell::Occupied(player) => pad(player.to_string()),
            })
            .collect();
        lines.push(cells.join(" "));
    }

    let footer = (0..board.width())
        .map(|col| pad(col.to_string()))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push("-".repeat(footer.len()));
    lines.push(footer);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
