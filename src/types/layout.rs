/// Grid and font sizes for one output figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureLayout {
    pub rows: usize,
    pub cols: usize,
    pub legend_font: u32,
    pub legend_title_font: u32,
    pub tick_font: u32,
    pub subtitle_font: u32,
}

impl FigureLayout {
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}
