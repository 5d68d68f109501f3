use std::io::{self, Write};

use minesweep_core::{Board, CellView};

const COLUMN_LABELS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Marked => '!',
        CellView::Mine => '*',
        CellView::Empty => ' ',
        CellView::Count(count) => char::from(b'0' + count),
    }
}

/// Draws the board with lettered columns and 1-based row numbers, followed by a status line
/// with the number of mines not yet marked.
pub fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let size = board.size();

    write!(out, "  ")?;
    for &label in &COLUMN_LABELS[..usize::from(size)] {
        write!(out, "{:>2}", char::from(label))?;
    }
    writeln!(out)?;

    for y in 0..size {
        write!(out, "{:>2}", u16::from(y) + 1)?;
        for x in 0..size {
            write!(out, " {}", glyph(board.cell_view((x, y))))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Mines left: {}", board.mines_left())
}
