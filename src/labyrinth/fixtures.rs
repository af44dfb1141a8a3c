//! Labyrinthes construits à la main pour les tests.

use crate::labyrinth::cell::Cell;
use crate::labyrinth::direction::Direction;
use crate::labyrinth::map::{Dimensions, MazeMap};
use crate::labyrinth::maze::Maze;

/// Ouvre les murs entre chaque paire de cellules consécutives de `cells`.
pub fn carve(map: &mut MazeMap, cells: &[Cell]) {
    for pair in cells.windows(2) {
        let dir = pair[0]
            .direction_to(pair[1])
            .unwrap_or_else(|| panic!("{} and {} are not adjacent", pair[0], pair[1]));
        map.open_wall(pair[0], dir);
    }
}

/// Labyrinthe "serpent": chaque ligne est un couloir, reliée à la suivante
/// alternativement par la droite et par la gauche. C'est un arbre couvrant.
pub fn serpentine(rows: usize, cols: usize, entrance_col: usize, exit_col: usize) -> Maze {
    let dims = Dimensions::new(rows, cols).unwrap();
    let mut map = MazeMap::new(dims);
    for row in 0..rows {
        for col in 0..cols - 1 {
            map.open_wall(Cell::new(row, col), Direction::East);
        }
        if row + 1 < rows {
            let col = if row % 2 == 0 { cols - 1 } else { 0 };
            map.open_wall(Cell::new(row, col), Direction::South);
        }
    }
    Maze::from_parts(map, Cell::new(0, entrance_col), Cell::new(rows - 1, exit_col))
}

/// 10x10 dont l'entrée est (0,5) et la sortie (9,5), avec un couloir
/// vertical ouvert tout le long de la colonne 5 et un couloir horizontal
/// sur la ligne 2 dont le mur entre (2,7) et (2,8) reste fermé.
pub fn column_corridor() -> Maze {
    let dims = Dimensions::new(10, 10).unwrap();
    let mut map = MazeMap::new(dims);
    let column: Vec<Cell> = (0..10).map(|row| Cell::new(row, 5)).collect();
    carve(&mut map, &column);
    carve(&mut map, &[Cell::new(2, 5), Cell::new(2, 6), Cell::new(2, 7)]);
    carve(&mut map, &[Cell::new(2, 8), Cell::new(2, 9)]);
    Maze::from_parts(map, Cell::new(0, 5), Cell::new(9, 5))
}

/// 10x10 dont l'entrée est (0,3) et la sortie (9,5): la colonne 3 descend
/// jusqu'à la dernière ligne, ouverte d'un bord à l'autre.
pub fn bottom_row_corridor() -> Maze {
    let dims = Dimensions::new(10, 10).unwrap();
    let mut map = MazeMap::new(dims);
    let column: Vec<Cell> = (0..10).map(|row| Cell::new(row, 3)).collect();
    carve(&mut map, &column);
    let last_row: Vec<Cell> = (0..10).map(|col| Cell::new(9, col)).collect();
    carve(&mut map, &last_row);
    Maze::from_parts(map, Cell::new(0, 3), Cell::new(9, 5))
}
