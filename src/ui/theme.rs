use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub heap_cell: Color,      // Element still inside the heap
    pub active_cell: Color,    // Parent/children touched by the latest step
    pub finalized_cell: Color, // Element locked into its sorted position
    pub cell_text: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    heap_cell: Color::Rgb(96, 165, 250),
    active_cell: Color::Rgb(239, 68, 68),
    finalized_cell: Color::Rgb(16, 185, 129),
    cell_text: Color::White,
};

/// Background for the cell at `index` given the heap boundary and highlights
pub fn cell_color(index: usize, heap_boundary: usize, active: &[usize]) -> Color {
    if index >= heap_boundary {
        DEFAULT_THEME.finalized_cell
    } else if active.contains(&index) {
        DEFAULT_THEME.active_cell
    } else {
        DEFAULT_THEME.heap_cell
    }
}
