//! Framebuffer for terminal rendering.

/// 2D framebuffer of character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![' '; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, ' ');
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn clear(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Write `s` starting at (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch);
            cx += 1;
        }
    }

    /// Cells of row `y`, or an empty slice when out of range.
    pub fn row(&self, y: u16) -> &[char] {
        match self.idx(0, y) {
            Some(start) => &self.cells[start..start + self.width as usize],
            None => &[],
        }
    }

    /// Row `y` as a string without trailing blanks.
    pub fn row_text(&self, y: u16) -> String {
        let s: String = self.row(y).iter().collect();
        s.trim_end_matches(' ').to_string()
    }

    /// All rows joined by `\n`, each right-trimmed.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
