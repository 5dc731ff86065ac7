#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub origin: Position,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(origin: Position, width: u32, height: u32) -> Bounds {
        Bounds {
            origin,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }

    pub fn right(&self) -> i32 {
        self.origin.x + self.width as i32
    }

    pub fn top(&self) -> i32 {
        self.origin.y
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y + self.height as i32
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
