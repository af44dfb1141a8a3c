//! Session: le labyrinthe courant et le chemin tracé, possédés ensemble.
//!
//! Une seule opération à la fois (génération, résolution ou clic), chacune
//! prenant `&mut self`: aucun verrou n'est nécessaire.

use std::time::Duration;

use log::info;
use rand::Rng;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::error::{LabyError, Result};
use crate::labyrinth::events::{Highlight, MazeEvent, Renderer, Telemetry};
use crate::labyrinth::generator::generate_with;
use crate::labyrinth::map::Dimensions;
use crate::labyrinth::maze::Maze;
use crate::labyrinth::path::Path;
use crate::labyrinth::solver::{render_step, SolveStep, Solver};
use crate::labyrinth::tracker::{ClickOutcome, DragOutcome, PathTracker};

/// Délai maximal entre deux pas d'animation du solveur, en millisecondes.
pub const MAX_STEP_DELAY_MS: u64 = 200;

/// Délai entre deux pas d'animation, validé dans `[0, MAX_STEP_DELAY_MS]` ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepDelay(Duration);

impl StepDelay {
    pub fn new(millis: u64) -> Result<Self> {
        if millis > MAX_STEP_DELAY_MS {
            return Err(LabyError::InvalidDelay(millis));
        }
        Ok(Self(Duration::from_millis(millis)))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

pub struct Session<R, V> {
    rng: R,
    renderer: V,
    maze: Maze,
    tracker: PathTracker,
    solution: Option<Path>,
    generation: u64,
}

impl<R: Rng, V: Renderer> Session<R, V> {
    /// Démarre une session: prévient la télémétrie puis génère le premier labyrinthe.
    ///
    /// # Arguments
    ///
    /// * `dimensions` - Taille du premier labyrinthe.
    /// * `rng` - Source d'aléa de la session, partagée par générateur et solveur.
    /// * `renderer` - Reçoit tous les événements de la session.
    /// * `telemetry` - Prévenue une seule fois, ici.
    ///
    /// # Retour
    ///
    /// Une `Session` avec un labyrinthe neuf, un tracé vide et aucune solution.
    pub fn new<T: Telemetry + ?Sized>(
        dimensions: Dimensions,
        mut rng: R,
        mut renderer: V,
        telemetry: &mut T,
    ) -> Self {
        telemetry.session_started();
        let maze = generate_with(dimensions, &mut rng, &mut renderer);
        info!(
            "maze #1 generated ({}x{})",
            dimensions.rows(),
            dimensions.cols()
        );
        Self {
            rng,
            renderer,
            maze,
            tracker: PathTracker::new(),
            solution: None,
            generation: 1,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn traced_path(&self) -> &Path {
        self.tracker.path()
    }

    pub fn is_completed(&self) -> bool {
        self.tracker.is_completed()
    }

    /// Numéro du labyrinthe courant, 1 pour le premier.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut V {
        &mut self.renderer
    }

    /// Remplace entièrement le labyrinthe, le tracé et la solution.
    pub fn generate(&mut self, dimensions: Dimensions) -> &Maze {
        self.maze = generate_with(dimensions, &mut self.rng, &mut self.renderer);
        self.tracker.reset();
        self.solution = None;
        self.generation += 1;
        info!(
            "maze #{} generated ({}x{})",
            self.generation,
            dimensions.rows(),
            dimensions.cols()
        );
        &self.maze
    }

    /// Nouveau labyrinthe aux mêmes dimensions.
    pub fn regenerate(&mut self) -> &Maze {
        let dimensions = self.maze.dimensions();
        self.generate(dimensions)
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn solution(&self) -> Option<&Path> {
        self.solution.as_ref()
    }

    /// Résout le labyrinthe courant d'une traite.
    pub fn solve(&mut self) -> Option<&Path> {
        self.solve_paced(|_| {})
    }

    /// Résout le labyrinthe en appelant `pace` après chaque pas.
    ///
    /// C'est dans `pace` que l'appelant attend son délai d'animation. Une fois
    /// le labyrinthe résolu, les appels suivants renvoient le chemin enregistré
    /// sans rejouer aucun pas.
    pub fn solve_paced<F: FnMut(&SolveStep)>(&mut self, mut pace: F) -> Option<&Path> {
        if self.solution.is_none() {
            for step in Solver::new(&self.maze, &mut self.rng) {
                render_step(&step, &mut self.renderer);
                pace(&step);
                match step {
                    SolveStep::Arrived(path) => {
                        info!("maze #{} solved, {} cells", self.generation, path.len());
                        self.solution = Some(path);
                        break;
                    }
                    SolveStep::Exhausted => break,
                    SolveStep::Advance { .. } | SolveStep::Backtrack { .. } => {}
                }
            }
        }
        self.solution.as_ref()
    }

    pub fn click(&mut self, cell: Cell) -> ClickOutcome {
        let outcome = self.tracker.apply_click(&self.maze, cell);
        self.render_click(outcome);
        outcome
    }

    pub fn drag(&mut self, from: Cell, to: Cell) -> DragOutcome {
        let outcome = self.tracker.apply_drag(&self.maze, from, to);
        if let DragOutcome::Applied(clicks) = &outcome {
            for &click in clicks {
                self.render_click(click);
            }
        }
        outcome
    }

    /// Efface le tracé sans régénérer le labyrinthe.
    pub fn reset_trace(&mut self) {
        for &cell in self.tracker.path().cells() {
            self.renderer.render(&MazeEvent::highlight(cell, Highlight::Cleared));
        }
        self.tracker.reset();
    }

    fn render_click(&mut self, outcome: ClickOutcome) {
        match outcome {
            ClickOutcome::Appended(cell) | ClickOutcome::Completed(cell) => {
                self.renderer.render(&MazeEvent::highlight(cell, Highlight::Visited));
            }
            ClickOutcome::Undone(cell) => {
                self.renderer.render(&MazeEvent::highlight(cell, Highlight::Cleared));
            }
            ClickOutcome::Ignored | ClickOutcome::Rejected(_) => {}
        }
    }
}
