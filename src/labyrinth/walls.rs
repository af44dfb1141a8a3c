use serde::Serialize;

use crate::labyrinth::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Open,
    Closed,
}

/// Ensemble des 4 murs d'une cellule. Tous fermés au départ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Walls {
    pub north: Wall,
    pub east: Wall,
    pub south: Wall,
    pub west: Wall,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            north: Wall::Closed,
            east: Wall::Closed,
            south: Wall::Closed,
            west: Wall::Closed,
        }
    }
}

impl Walls {
    pub fn get(&self, side: Direction) -> Wall {
        match side {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, side: Direction, wall: Wall) {
        let slot = match side {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        };
        *slot = wall;
    }

    pub fn is_open(&self, side: Direction) -> bool {
        self.get(side) == Wall::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fully_closed() {
        let walls = Walls::default();
        for side in Direction::SCAN_ORDER {
            assert_eq!(walls.get(side), Wall::Closed);
        }
    }

    #[test]
    fn test_set_touches_a_single_side() {
        let mut walls = Walls::default();
        walls.set(Direction::East, Wall::Open);
        assert!(walls.is_open(Direction::East));
        assert!(!walls.is_open(Direction::West));
        assert!(!walls.is_open(Direction::North));
        assert!(!walls.is_open(Direction::South));
    }
}
