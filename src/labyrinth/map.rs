use serde::Serialize;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::direction::Direction;
use crate::labyrinth::error::{LabyError, Result};
use crate::labyrinth::walls::{Wall, Walls};

/// Plus petit côté accepté (lignes ou colonnes).
pub const MIN_SIDE: usize = 10;
/// Plus grand côté accepté (lignes ou colonnes).
pub const MAX_SIDE: usize = 100;

/// Dimensions d'un labyrinthe, fixées pour toute sa durée de vie.
///
/// Seul `Dimensions::new` en construit: posséder une valeur garantit que
/// les deux côtés sont dans `[MIN_SIDE, MAX_SIDE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&rows) {
            return Err(LabyError::InvalidRows(rows));
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&cols) {
            return Err(LabyError::InvalidCols(cols));
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Toutes les cellules, ligne par ligne.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }
}

/// Carte des murs du labyrinthe: un `Walls` par cellule, stocké ligne par ligne.
///
/// Chaque mur intérieur est partagé par deux cellules; `open_wall` met
/// toujours les deux côtés à jour ensemble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeMap {
    dimensions: Dimensions,
    grid: Vec<Walls>,
}

impl MazeMap {
    /// Crée une carte dont tous les murs sont fermés.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            grid: vec![Walls::default(); dimensions.cell_count()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            self.dimensions.contains(cell),
            "cell {} outside of a {}x{} maze",
            cell,
            self.dimensions.rows,
            self.dimensions.cols
        );
        cell.row * self.dimensions.cols + cell.col
    }

    /// Récupère les murs d'une cellule en lecture seule.
    ///
    /// Panique si `cell` est hors de la grille.
    pub fn walls(&self, cell: Cell) -> &Walls {
        &self.grid[self.index(cell)]
    }

    /// Cellule adjacente dans `direction`, ou `None` si on sort de la grille.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction)
            .filter(|next| self.dimensions.contains(*next))
    }

    /// Voisins dans la grille, dans l'ordre `Direction::SCAN_ORDER`.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        Direction::SCAN_ORDER
            .into_iter()
            .filter_map(move |dir| self.neighbor(cell, dir).map(|next| (dir, next)))
    }

    /// Ouvre le mur `side` de `cell`, et le mur opposé du voisin s'il existe.
    ///
    /// Sur le bord de la grille seul le mur extérieur de `cell` est ouvert.
    /// Renvoie le voisin dont le mur a été ouvert.
    pub fn open_wall(&mut self, cell: Cell, side: Direction) -> Option<Cell> {
        let index = self.index(cell);
        self.grid[index].set(side, Wall::Open);
        let neighbor = self.neighbor(cell, side)?;
        let neighbor_index = self.index(neighbor);
        self.grid[neighbor_index].set(side.opposite(), Wall::Open);
        Some(neighbor)
    }

    pub fn is_open(&self, cell: Cell, side: Direction) -> bool {
        self.walls(cell).is_open(side)
    }

    /// Vrai si `a` et `b` sont 4-adjacentes et qu'aucun mur fermé ne les sépare.
    pub fn is_open_between(&self, a: Cell, b: Cell) -> bool {
        if !self.dimensions.contains(a) || !self.dimensions.contains(b) {
            return false;
        }
        match a.direction_to(b) {
            Some(dir) => self.is_open(a, dir),
            None => false,
        }
    }

    /// Voisins accessibles depuis `cell` (mur ouvert entre les deux).
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.neighbors(cell)
            .filter(move |&(dir, _)| self.is_open(cell, dir))
            .map(|(_, next)| next)
    }

    /// Nombre de murs intérieurs ouverts (chaque mur partagé compté une fois).
    pub fn internal_open_count(&self) -> usize {
        self.dimensions
            .cells()
            .map(|cell| {
                let walls = self.walls(cell);
                let east = cell.col + 1 < self.dimensions.cols && walls.is_open(Direction::East);
                let south = cell.row + 1 < self.dimensions.rows && walls.is_open(Direction::South);
                usize::from(east) + usize::from(south)
            })
            .sum()
    }
}
