//! Character grid for the play area

use super::ansi;

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// SGR color sequence, `None` for the terminal default
    pub color: Option<&'static str>,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', color: None }
    }
}

/// Row-major grid of colored characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Blank grid; negative sizes produce an empty grid
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.contains(x, y)
            .then(|| self.cells[(y * self.width + x) as usize])
    }

    /// Set one cell; out-of-bounds writes are clipped
    pub fn put(&mut self, x: i32, y: i32, ch: char, color: Option<&'static str>) {
        if self.contains(x, y) {
            self.cells[(y * self.width + x) as usize] = Cell { ch, color };
        }
    }

    /// Write `text` starting at (`x`, `y`), clipping at the edges
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, color: Option<&'static str>) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, color);
        }
    }

    /// Horizontal run of `ch`
    pub fn hline(&mut self, x: i32, y: i32, len: i32, ch: char, color: Option<&'static str>) {
        for i in 0..len.max(0) {
            self.put(x + i, y, ch, color);
        }
    }

    /// Plain text of row `y`
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// Serialize row-major, one line per row, emitting color changes only
    pub fn write_to(&self, out: &mut String) {
        for y in 0..self.height {
            let mut current: Option<&'static str> = None;
            for x in 0..self.width {
                let cell = self.cells[(y * self.width + x) as usize];
                if cell.color != current {
                    if current.is_some() {
                        out.push_str(ansi::RESET);
                    }
                    if let Some(color) = cell.color {
                        out.push_str(color);
                    }
                    current = cell.color;
                }
                out.push(cell.ch);
            }
            if current.is_some() {
                out.push_str(ansi::RESET);
            }
            out.push('\n');
        }
    }
}
