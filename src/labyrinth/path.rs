use serde::Serialize;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::maze::Maze;

/// Chemin parcouru: positions successives, la première étant l'entrée.
///
/// Un `Path` n'est jamais modifié sur place. Chaque transition acceptée
/// construit une nouvelle valeur dont `version` vaut un de plus; une copie
/// plus ancienne garde l'état qu'on lui a donné.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Path {
    cells: Vec<Cell>,
    version: u64,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells, version: 0 }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Nouveau chemin avec `cell` ajoutée à la fin.
    pub fn pushed(&self, cell: Cell) -> Path {
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(cell);
        Path {
            cells,
            version: self.version + 1,
        }
    }

    /// Nouveau chemin sans la dernière cellule.
    pub fn popped(&self) -> Path {
        let end = self.cells.len().saturating_sub(1);
        Path {
            cells: self.cells[..end].to_vec(),
            version: self.version + 1,
        }
    }

    /// Vrai si le chemin part de l'entrée et que chaque pas traverse un mur ouvert.
    pub fn is_valid_in(&self, maze: &Maze) -> bool {
        match self.first() {
            None => true,
            Some(first) if first != maze.entrance() => false,
            Some(_) => self
                .cells
                .windows(2)
                .all(|pair| maze.is_open_between(pair[0], pair[1])),
        }
    }
}
