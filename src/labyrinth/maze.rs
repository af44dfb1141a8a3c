use std::collections::VecDeque;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::direction::Direction;
use crate::labyrinth::map::{Dimensions, MazeMap};
use crate::labyrinth::walls::Walls;

/// Un labyrinthe terminé: la carte des murs, l'entrée et la sortie.
///
/// Immuable une fois construit: régénérer construit un nouveau `Maze`, on ne
/// modifie jamais celui-ci.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    map: MazeMap,
    entrance: Cell,
    exit: Cell,
}

impl Maze {
    /// Assemble un labyrinthe et ouvre les murs extérieurs de l'entrée
    /// (en haut) et de la sortie (en bas).
    ///
    /// Panique si `entrance` n'est pas sur la première ligne ou `exit` sur la dernière.
    pub fn from_parts(mut map: MazeMap, entrance: Cell, exit: Cell) -> Self {
        let dims = map.dimensions();
        assert!(
            entrance.row == 0 && entrance.col < dims.cols(),
            "entrance {} must be on the first row",
            entrance
        );
        assert!(
            exit.row == dims.rows() - 1 && exit.col < dims.cols(),
            "exit {} must be on the last row",
            exit
        );
        map.open_wall(entrance, Direction::North);
        map.open_wall(exit, Direction::South);
        Self { map, entrance, exit }
    }

    pub fn map(&self) -> &MazeMap {
        &self.map
    }

    pub fn dimensions(&self) -> Dimensions {
        self.map.dimensions()
    }

    pub fn entrance(&self) -> Cell {
        self.entrance
    }

    pub fn exit(&self) -> Cell {
        self.exit
    }

    pub fn walls(&self, cell: Cell) -> &Walls {
        self.map.walls(cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.dimensions().contains(cell)
    }

    pub fn is_open_between(&self, a: Cell, b: Cell) -> bool {
        self.map.is_open_between(a, b)
    }

    /// Nombre de cellules atteignables depuis `start` en passant par les murs ouverts.
    pub fn reachable_from(&self, start: Cell) -> usize {
        let dims = self.dimensions();
        let mut seen = vec![false; dims.cell_count()];
        let mut queue = VecDeque::from([start]);
        seen[start.row * dims.cols() + start.col] = true;
        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            for next in self.map.open_neighbors(cell) {
                let index = next.row * dims.cols() + next.col;
                if !seen[index] {
                    seen[index] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    /// Vrai si les murs ouverts forment un arbre couvrant de la grille.
    pub fn is_perfect(&self) -> bool {
        let cells = self.dimensions().cell_count();
        self.map.internal_open_count() == cells - 1 && self.reachable_from(self.entrance) == cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labyrinth::fixtures::serpentine;

    #[test]
    fn test_from_parts_opens_boundaries() {
        let maze = serpentine(10, 10, 1, 1);
        assert!(maze.walls(maze.entrance()).is_open(Direction::North));
        assert!(maze.walls(maze.exit()).is_open(Direction::South));
    }

    #[test]
    fn test_serpentine_is_perfect() {
        let maze = serpentine(10, 12, 1, 1);
        assert_eq!(maze.reachable_from(maze.exit()), 120);
        assert!(maze.is_perfect());
    }

    #[test]
    fn test_closed_grid_is_not_perfect() {
        let map = MazeMap::new(Dimensions::new(10, 10).unwrap());
        let maze = Maze::from_parts(map, Cell::new(0, 3), Cell::new(9, 3));
        assert_eq!(maze.reachable_from(maze.entrance()), 1);
        assert!(!maze.is_perfect());
    }

    #[test]
    #[should_panic]
    fn test_entrance_off_first_row_is_fatal() {
        let map = MazeMap::new(Dimensions::new(10, 10).unwrap());
        Maze::from_parts(map, Cell::new(1, 3), Cell::new(9, 3));
    }
}
