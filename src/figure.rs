//! Gallows figure rendering
//!
//! The figure is a fixed character grid: a scaffold drawn from round start,
//! plus one body segment per wrong guess. Segment choice is a direct lookup
//! by error count; each segment is a fixed list of cells, not computed
//! geometry. The sketch is plain text lines, so any front end can display it.

/// A cell to draw: (row, column, glyph) on the figure grid
pub type Cell = (usize, usize, char);

/// Width of the figure grid in characters
pub const SKETCH_WIDTH: usize = 10;

/// Height of the figure grid in lines
pub const SKETCH_HEIGHT: usize = 8;

/// The gallows scaffold, present from the first render of a round
const SCAFFOLD: [&str; SKETCH_HEIGHT] = [
    "  +-----+ ",
    "  |/      ",
    "  |       ",
    "  |       ",
    "  |       ",
    "  |       ",
    "  |       ",
    "==========",
];

/// One discrete piece of the hanged figure
///
/// Segments appear in a fixed order, one per wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Rope,
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Segment {
    /// All segments, in drawing order
    pub const ALL: [Self; 7] = [
        Self::Rope,
        Self::Head,
        Self::Torso,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// The segment drawn on reaching a given error count (1-7)
    ///
    /// Returns `None` for 0 or anything past the losing threshold.
    #[must_use]
    pub const fn for_error_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::Rope),
            2 => Some(Self::Head),
            3 => Some(Self::Torso),
            4 => Some(Self::LeftArm),
            5 => Some(Self::RightArm),
            6 => Some(Self::LeftLeg),
            7 => Some(Self::RightLeg),
            _ => None,
        }
    }

    /// The fixed cells this segment puts on the grid
    #[must_use]
    pub const fn cells(self) -> &'static [Cell] {
        match self {
            Self::Rope => &[(1, 8, '|')],
            Self::Head => &[(2, 8, 'O')],
            Self::Torso => &[(3, 8, '|'), (4, 8, '|')],
            Self::LeftArm => &[(3, 7, '/')],
            Self::RightArm => &[(3, 9, '\\')],
            Self::LeftLeg => &[(5, 7, '/')],
            Self::RightLeg => &[(5, 9, '\\')],
        }
    }
}

/// Render the gallows with all segments for the given error count
///
/// Error counts past 7 draw the same complete figure as 7.
///
/// # Examples
/// ```
/// use pendu::figure::sketch;
///
/// let empty = sketch(0);
/// assert!(empty.iter().all(|line| !line.contains('O')));
///
/// let hanged = sketch(7);
/// assert!(hanged.iter().any(|line| line.contains('O')));
/// ```
#[must_use]
pub fn sketch(error_count: u8) -> Vec<String> {
    let mut grid: Vec<Vec<char>> = SCAFFOLD.iter().map(|line| line.chars().collect()).collect();

    for count in 1..=error_count.min(7) {
        // for_error_count covers 1..=7 by construction
        if let Some(segment) = Segment::for_error_count(count) {
            for &(row, col, glyph) in segment.cells() {
                grid[row][col] = glyph;
            }
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}
