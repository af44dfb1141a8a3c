//! Résolution par parcours en profondeur aléatoire.
//!
//! Même forme que le générateur, mais on ne casse aucun mur: on ne passe
//! que par les ouvertures existantes. Ce n'est pas un plus court chemin;
//! dans un labyrinthe parfait il n'existe de toute façon qu'un seul chemin
//! simple de l'entrée à la sortie, les impasses explorées étant retirées de
//! la pile au retour.

use std::iter::FusedIterator;

use log::{debug, trace};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::events::{Highlight, MazeEvent, Renderer};
use crate::labyrinth::maze::Maze;
use crate::labyrinth::path::Path;

/// Une unité de travail du solveur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStep {
    /// Avancée de `from` vers la cellule voisine `to`, jamais visitée.
    Advance { from: Cell, to: Cell },
    /// Impasse: on quitte `from` pour revenir sur `to`, le nouveau sommet de pile.
    Backtrack { from: Cell, to: Cell },
    /// La sortie est atteinte; la pile restante est la solution.
    Arrived(Path),
    /// Plus rien à explorer et la sortie n'a pas été atteinte.
    ///
    /// Impossible sur un labyrinthe généré, seulement sur un labyrinthe
    /// construit à la main dont la sortie est murée.
    Exhausted,
}

/// Itérateur pas à pas sur la résolution d'un labyrinthe.
///
/// Fini et à usage unique: après `Arrived` ou `Exhausted` il ne renvoie plus
/// rien. Le rythme de l'animation est l'affaire de l'appelant: le solveur
/// n'attend jamais.
pub struct Solver<'a, R> {
    maze: &'a Maze,
    rng: &'a mut R,
    visited: Vec<bool>,
    stack: Vec<Cell>,
    steps: usize,
    finished: bool,
}

impl<'a, R: Rng> Solver<'a, R> {
    pub fn new(maze: &'a Maze, rng: &'a mut R) -> Self {
        let mut visited = vec![false; maze.dimensions().cell_count()];
        let entrance = maze.entrance();
        visited[entrance.row * maze.dimensions().cols() + entrance.col] = true;
        Self {
            maze,
            rng,
            visited,
            stack: vec![entrance],
            steps: 0,
            finished: false,
        }
    }

    /// Nombre de pas (avancées et retours) déjà effectués.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.maze.dimensions().cols() + cell.col
    }
}

impl<R: Rng> Iterator for Solver<'_, R> {
    type Item = SolveStep;

    fn next(&mut self) -> Option<SolveStep> {
        if self.finished {
            return None;
        }
        let current = *self.stack.last()?;

        if current == self.maze.exit() {
            self.finished = true;
            debug!(
                "maze solved in {} steps, path of {} cells",
                self.steps,
                self.stack.len()
            );
            return Some(SolveStep::Arrived(Path::from_cells(self.stack.clone())));
        }

        let candidates: Vec<Cell> = self
            .maze
            .map()
            .open_neighbors(current)
            .filter(|&next| !self.visited[self.index(next)])
            .collect();

        self.steps += 1;
        match candidates.choose(&mut *self.rng) {
            Some(&next) => {
                let index = self.index(next);
                self.visited[index] = true;
                self.stack.push(next);
                trace!("advance {} -> {}", current, next);
                Some(SolveStep::Advance { from: current, to: next })
            }
            None => {
                self.stack.pop();
                match self.stack.last() {
                    Some(&top) => {
                        trace!("backtrack {} -> {}", current, top);
                        Some(SolveStep::Backtrack { from: current, to: top })
                    }
                    None => {
                        self.finished = true;
                        debug!("solver exhausted after {} steps", self.steps);
                        Some(SolveStep::Exhausted)
                    }
                }
            }
        }
    }
}

impl<R: Rng> FusedIterator for Solver<'_, R> {}

/// Décrit un pas du solveur au renderer.
///
/// Une avancée marque la cellule quittée comme visitée et la nouvelle comme
/// courante; un retour efface l'impasse et rend la cellule précédente
/// courante.
pub fn render_step<V: Renderer + ?Sized>(step: &SolveStep, renderer: &mut V) {
    match *step {
        SolveStep::Advance { from, to } => {
            renderer.render(&MazeEvent::highlight(from, Highlight::Visited));
            renderer.render(&MazeEvent::highlight(to, Highlight::Current));
        }
        SolveStep::Backtrack { from, to } => {
            renderer.render(&MazeEvent::highlight(from, Highlight::Cleared));
            renderer.render(&MazeEvent::highlight(to, Highlight::Current));
        }
        SolveStep::Arrived(_) | SolveStep::Exhausted => {}
    }
}

/// Résout le labyrinthe d'une traite.
///
/// `None` seulement si la sortie est inatteignable, ce qu'un labyrinthe
/// généré exclut.
pub fn solve<R: Rng>(maze: &Maze, rng: &mut R) -> Option<Path> {
    solve_with(maze, rng, &mut ())
}

/// Résout le labyrinthe en décrivant chaque pas au `renderer`.
///
/// # Arguments
///
/// * `maze` - Le labyrinthe à résoudre.
/// * `rng` - Source d'aléa pour départager les voisins ouverts.
/// * `renderer` - Reçoit les couleurs `Current`, `Visited` et `Cleared` de chaque pas.
///
/// # Retour
///
/// Le chemin de l'entrée à la sortie, ou `None` si la sortie est murée.
pub fn solve_with<R: Rng, V: Renderer + ?Sized>(
    maze: &Maze,
    rng: &mut R,
    renderer: &mut V,
) -> Option<Path> {
    for step in Solver::new(maze, rng) {
        render_step(&step, renderer);
        match step {
            SolveStep::Arrived(path) => return Some(path),
            SolveStep::Exhausted => return None,
            SolveStep::Advance { .. } | SolveStep::Backtrack { .. } => {}
        }
    }
    None
}
