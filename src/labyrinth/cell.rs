use std::fmt;

use serde::Serialize;

use crate::labyrinth::direction::Direction;

/// Représente une cellule du labyrinthe par sa position (ligne, colonne).
///
/// Deux cellules sont égales si et seulement si leurs lignes et colonnes
/// sont égales. Les murs ne sont pas stockés ici, voir `MazeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cellule voisine dans `direction`, sans tenir compte des dimensions.
    ///
    /// Renvoie `None` uniquement si on sort par le haut ou par la gauche;
    /// la borne basse/droite est vérifiée par `MazeMap::neighbor`.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Cell { row, col })
    }

    /// Direction qui mène de `self` à `other` si les deux sont 4-adjacentes.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::SCAN_ORDER
            .into_iter()
            .find(|&dir| self.step(dir) == Some(other))
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        self.direction_to(other).is_some()
    }

    /// Direction et nombre de pas pour aller en ligne droite jusqu'à `other`.
    ///
    /// `None` si les deux cellules ne partagent ni ligne ni colonne, ou si
    /// elles sont identiques.
    pub fn straight_line_to(self, other: Cell) -> Option<(Direction, usize)> {
        if self == other {
            return None;
        }
        if self.row == other.row {
            let dir = if other.col > self.col { Direction::East } else { Direction::West };
            Some((dir, self.col.abs_diff(other.col)))
        } else if self.col == other.col {
            let dir = if other.row > self.row { Direction::South } else { Direction::North };
            Some((dir, self.row.abs_diff(other.row)))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
