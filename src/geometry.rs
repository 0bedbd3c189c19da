use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn neighbor(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<[i32; 2]> for GridPos {
    fn from(pair: [i32; 2]) -> Self {
        Self {
            row: pair[0],
            col: pair[1],
        }
    }
}

impl From<GridPos> for [i32; 2] {
    fn from(pos: GridPos) -> Self {
        [pos.row, pos.col]
    }
}

/// Cardinal directions in turn order. Rotation and relative-direction
/// resolution both index into this one cycle.
pub const DIRECTION_CYCLE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDirection {
    Front,
    Left,
    Right,
}

impl Direction {
    fn cycle_index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn turned_left(self) -> Self {
        DIRECTION_CYCLE[(self.cycle_index() + 3) % 4]
    }

    pub fn turned_right(self) -> Self {
        DIRECTION_CYCLE[(self.cycle_index() + 1) % 4]
    }

    pub fn resolve(self, relative: RelativeDirection) -> Self {
        match relative {
            RelativeDirection::Front => self,
            RelativeDirection::Left => self.turned_left(),
            RelativeDirection::Right => self.turned_right(),
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        }
    }
}

pub fn squared_distance(a: GridPos, b: GridPos) -> i64 {
    let dr = (a.row - b.row) as i64;
    let dc = (a.col - b.col) as i64;
    dr * dr + dc * dc
}
