use std::collections::HashSet;
use std::io::{self, Write};

use gridmaze::dims::Dims;
use gridmaze::report::{MazeView, Renderer};

/// Draws the maze as box-character art, one text row of walls and one of
/// cells per grid row, top row first.
pub struct AsciiRenderer<W: Write> {
    out: W,
}

impl AsciiRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn cell_glyph(view: &MazeView, route: &HashSet<Dims>, cell: Dims) -> char {
        if cell == view.start {
            'S'
        } else if cell == view.end {
            'T'
        } else if route.contains(&cell) {
            '*'
        } else if view.accessible.contains(&cell) {
            '.'
        } else {
            ' '
        }
    }

    fn wall_row(view: &MazeView, z: i32) -> String {
        let mut line = String::new();
        for x in 0..view.walls.size().0 {
            line.push('+');
            line.push_str(if view.walls.horizontal(Dims(x, z)) {
                "--"
            } else {
                "  "
            });
        }
        line.push('+');
        line
    }

    fn cell_row(view: &MazeView, route: &HashSet<Dims>, z: i32) -> String {
        let mut line = String::new();
        for x in 0..view.walls.size().0 {
            let cell = Dims(x, z);
            line.push(if view.walls.vertical(cell) { '|' } else { ' ' });
            line.push(Self::cell_glyph(view, route, cell));
            line.push(' ');
        }
        line.push(if view.walls.vertical(Dims(view.walls.size().0, z)) {
            '|'
        } else {
            ' '
        });
        line
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, view: &MazeView, route: &[Dims]) -> io::Result<()> {
        let route: HashSet<Dims> = route.iter().copied().collect();

        for z in (0..view.walls.size().1).rev() {
            writeln!(self.out, "{}", Self::wall_row(view, z + 1))?;
            writeln!(self.out, "{}", Self::cell_row(view, &route, z))?;
        }
        writeln!(self.out, "{}", Self::wall_row(view, 0))?;

        Ok(())
    }
}
