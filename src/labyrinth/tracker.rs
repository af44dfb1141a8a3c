//! Suivi du chemin tracé à la main par l'utilisateur.
//!
//! Chaque clic (ou glissé) est validé contre les murs du labyrinthe avant
//! d'être accepté. Un refus est une valeur de retour ordinaire et laisse le
//! chemin tracé intact.

use log::info;
use serde::Serialize;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::maze::Maze;
use crate::labyrinth::path::Path;

/// Pourquoi une interaction a été refusée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    /// Le chemin est vide et la cellule n'est pas l'entrée.
    NotEntrance,
    /// La cellule fait déjà partie du chemin (et n'en est pas la dernière).
    AlreadyTraced,
    /// La cellule n'est pas voisine de la dernière cellule tracée.
    NotAdjacent,
    /// Un mur fermé sépare la cellule de la dernière cellule tracée.
    WallClosed,
    OutOfBounds,
    /// Glissé qui ne suit ni une ligne ni une colonne.
    NotStraight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClickOutcome {
    Appended(Cell),
    /// Clic sur la dernière cellule: elle est retirée.
    Undone(Cell),
    /// La sortie vient d'être ajoutée au chemin.
    Completed(Cell),
    /// Le labyrinthe est déjà terminé, rien ne change jusqu'au prochain `reset`.
    Ignored,
    Rejected(Rejection),
}

impl ClickOutcome {
    /// Vrai si le chemin a changé.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            ClickOutcome::Appended(_) | ClickOutcome::Undone(_) | ClickOutcome::Completed(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragOutcome {
    /// Tous les murs du segment sont ouverts; résultat de chaque clic, dans l'ordre.
    Applied(Vec<ClickOutcome>),
    Ignored,
    /// Refusé en bloc: aucun clic n'a été appliqué.
    Rejected(Rejection),
}

impl DragOutcome {
    pub fn completed(&self) -> bool {
        match self {
            DragOutcome::Applied(clicks) => clicks
                .iter()
                .any(|click| matches!(click, ClickOutcome::Completed(_))),
            DragOutcome::Ignored | DragOutcome::Rejected(_) => false,
        }
    }
}

/// État du tracé: le chemin courant et le drapeau de fin.
#[derive(Debug, Clone, Default)]
pub struct PathTracker {
    path: Path,
    completed: bool,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Applique un clic sur `cell`.
    ///
    /// Les règles sont vérifiées dans un ordre fixe: chemin vide (entrée
    /// seulement), retrait de la dernière cellule, arrivée sur la sortie,
    /// cellule déjà tracée, puis voisinage à travers un mur ouvert.
    ///
    /// # Arguments
    ///
    /// * `maze` - Le labyrinthe contre lequel valider le clic.
    /// * `cell` - La cellule cliquée.
    ///
    /// # Retour
    ///
    /// Le résultat du clic. Le nouvel état se lit ensuite avec `path()` et
    /// `is_completed()`.
    pub fn apply_click(&mut self, maze: &Maze, cell: Cell) -> ClickOutcome {
        if self.completed {
            return ClickOutcome::Ignored;
        }
        if !maze.contains(cell) {
            return ClickOutcome::Rejected(Rejection::OutOfBounds);
        }

        let last = match self.path.last() {
            None if cell == maze.entrance() => {
                self.path = self.path.pushed(cell);
                return ClickOutcome::Appended(cell);
            }
            None => return ClickOutcome::Rejected(Rejection::NotEntrance),
            Some(last) => last,
        };

        if cell == last {
            self.path = self.path.popped();
            return ClickOutcome::Undone(cell);
        }
        if cell == maze.exit() && maze.is_open_between(last, cell) {
            self.path = self.path.pushed(cell);
            self.completed = true;
            info!("maze completed by hand in {} cells", self.path.len());
            return ClickOutcome::Completed(cell);
        }
        if self.path.contains(cell) {
            return ClickOutcome::Rejected(Rejection::AlreadyTraced);
        }
        if !last.is_adjacent(cell) {
            return ClickOutcome::Rejected(Rejection::NotAdjacent);
        }
        if !maze.is_open_between(last, cell) {
            return ClickOutcome::Rejected(Rejection::WallClosed);
        }
        self.path = self.path.pushed(cell);
        ClickOutcome::Appended(cell)
    }

    /// Applique un glissé en ligne droite de `from` jusqu'à `to`.
    ///
    /// Tous les murs du segment sont vérifiés d'abord: un seul mur fermé
    /// refuse le glissé en entier. Sinon chaque cellule après `from`, jusqu'à
    /// `to` inclus, passe par `apply_click`, si bien qu'un retrait ou une
    /// arrivée peut survenir au milieu. `from == to` équivaut à un clic.
    ///
    /// # Arguments
    ///
    /// * `maze` - Le labyrinthe contre lequel valider le glissé.
    /// * `from` - Cellule où le glissé commence, non rejouée.
    /// * `to` - Dernière cellule du glissé.
    ///
    /// # Retour
    ///
    /// `Applied` avec le résultat de chaque clic dans l'ordre, `Ignored` si
    /// le labyrinthe est déjà terminé, ou `Rejected` sans aucun changement.
    pub fn apply_drag(&mut self, maze: &Maze, from: Cell, to: Cell) -> DragOutcome {
        if self.completed {
            return DragOutcome::Ignored;
        }
        if !maze.contains(from) || !maze.contains(to) {
            return DragOutcome::Rejected(Rejection::OutOfBounds);
        }
        if from == to {
            return DragOutcome::Applied(vec![self.apply_click(maze, to)]);
        }
        let Some((direction, steps)) = from.straight_line_to(to) else {
            return DragOutcome::Rejected(Rejection::NotStraight);
        };

        let mut cells = Vec::with_capacity(steps);
        let mut current = from;
        for _ in 0..steps {
            let Some(next) = maze.map().neighbor(current, direction) else {
                return DragOutcome::Rejected(Rejection::OutOfBounds);
            };
            if !maze.map().is_open(current, direction) {
                return DragOutcome::Rejected(Rejection::WallClosed);
            }
            cells.push(next);
            current = next;
        }

        DragOutcome::Applied(
            cells
                .into_iter()
                .map(|cell| self.apply_click(maze, cell))
                .collect(),
        )
    }

    /// Efface le chemin et le drapeau de fin, sans toucher au labyrinthe.
    pub fn reset(&mut self) {
        self.path = Path::empty();
        self.completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::labyrinth::fixtures::{bottom_row_corridor, column_corridor};
    use crate::labyrinth::generator::generate_maze;

    fn traced(maze: &Maze, cells: &[(usize, usize)]) -> PathTracker {
        let mut tracker = PathTracker::new();
        for &(row, col) in cells {
            assert!(tracker.apply_click(maze, Cell::new(row, col)).is_accepted());
        }
        tracker
    }

    #[test]
    fn test_click_adjacency_and_undo() {
        let maze = column_corridor();
        let mut tracker = PathTracker::new();

        assert_eq!(
            tracker.apply_click(&maze, Cell::new(0, 5)),
            ClickOutcome::Appended(Cell::new(0, 5))
        );
        assert_eq!(tracker.path().len(), 1);

        assert_eq!(
            tracker.apply_click(&maze, Cell::new(5, 5)),
            ClickOutcome::Rejected(Rejection::NotAdjacent)
        );
        assert_eq!(tracker.path().len(), 1);

        assert_eq!(
            tracker.apply_click(&maze, Cell::new(0, 5)),
            ClickOutcome::Undone(Cell::new(0, 5))
        );
        assert_eq!(tracker.path().len(), 0);
    }

    #[test]
    fn test_first_click_must_be_entrance() {
        let maze = column_corridor();
        let mut tracker = PathTracker::new();
        assert_eq!(
            tracker.apply_click(&maze, Cell::new(1, 5)),
            ClickOutcome::Rejected(Rejection::NotEntrance)
        );
        assert!(tracker.path().is_empty());
        assert_eq!(tracker.path().version(), 0);
    }

    #[test]
    fn test_closed_wall_and_already_traced() {
        let maze = column_corridor();
        let mut tracker = traced(&maze, &[(0, 5), (1, 5), (2, 5), (2, 6)]);
        let before = tracker.path().clone();

        assert_eq!(
            tracker.apply_click(&maze, Cell::new(2, 5)),
            ClickOutcome::Rejected(Rejection::AlreadyTraced)
        );
        assert_eq!(
            tracker.apply_click(&maze, Cell::new(1, 6)),
            ClickOutcome::Rejected(Rejection::WallClosed)
        );
        assert_eq!(
            tracker.apply_click(&maze, Cell::new(42, 6)),
            ClickOutcome::Rejected(Rejection::OutOfBounds)
        );
        assert_eq!(tracker.path(), &before);
    }

    #[test]
    fn test_drag_with_closed_segment_is_atomic() {
        let maze = column_corridor();
        let mut tracker = traced(&maze, &[(0, 5), (1, 5), (2, 5)]);
        let before = tracker.path().clone();

        // (2,5) -> (2,8): le troisième segment, (2,7)|(2,8), est fermé
        let outcome = tracker.apply_drag(&maze, Cell::new(2, 5), Cell::new(2, 8));
        assert_eq!(outcome, DragOutcome::Rejected(Rejection::WallClosed));
        assert_eq!(tracker.path(), &before);
        assert_eq!(tracker.path().version(), before.version());
    }

    #[test]
    fn test_drag_along_open_corridor() {
        let maze = column_corridor();
        let mut tracker = traced(&maze, &[(0, 5), (1, 5), (2, 5)]);
        let outcome = tracker.apply_drag(&maze, Cell::new(2, 5), Cell::new(2, 7));
        assert_eq!(
            outcome,
            DragOutcome::Applied(vec![
                ClickOutcome::Appended(Cell::new(2, 6)),
                ClickOutcome::Appended(Cell::new(2, 7)),
            ])
        );
        assert_eq!(tracker.path().last(), Some(Cell::new(2, 7)));
        assert!(tracker.path().is_valid_in(&maze));

        // repasser sur des cellules tracées ne retire rien: seule la dernière peut l'être
        let back = tracker.apply_drag(&maze, Cell::new(2, 7), Cell::new(2, 5));
        assert_eq!(
            back,
            DragOutcome::Applied(vec![
                ClickOutcome::Rejected(Rejection::AlreadyTraced),
                ClickOutcome::Rejected(Rejection::AlreadyTraced),
            ])
        );
        assert_eq!(tracker.path().len(), 5);
    }

    #[test]
    fn test_drag_must_be_straight() {
        let maze = column_corridor();
        let mut tracker = traced(&maze, &[(0, 5)]);
        assert_eq!(
            tracker.apply_drag(&maze, Cell::new(0, 5), Cell::new(2, 6)),
            DragOutcome::Rejected(Rejection::NotStraight)
        );
        assert_eq!(
            tracker.apply_drag(&maze, Cell::new(0, 5), Cell::new(0, 5)),
            DragOutcome::Applied(vec![ClickOutcome::Undone(Cell::new(0, 5))])
        );
    }

    #[test]
    fn test_completion_fires_once_until_reset() {
        let maze = column_corridor();
        let mut tracker = traced(&maze, &[(0, 5)]);

        let outcome = tracker.apply_drag(&maze, Cell::new(0, 5), Cell::new(9, 5));
        assert!(outcome.completed());
        assert!(tracker.is_completed());
        assert_eq!(tracker.path().len(), 10);

        let mut completions = 0;
        for row in (0..10).rev() {
            let click = tracker.apply_click(&maze, Cell::new(row, 5));
            assert_eq!(click, ClickOutcome::Ignored);
            if matches!(click, ClickOutcome::Completed(_)) {
                completions += 1;
            }
        }
        assert_eq!(completions, 0);
        assert_eq!(
            tracker.apply_drag(&maze, Cell::new(9, 5), Cell::new(0, 5)),
            DragOutcome::Ignored
        );
        assert_eq!(tracker.path().len(), 10);

        tracker.reset();
        assert!(!tracker.is_completed());
        assert!(tracker.path().is_empty());
        assert!(tracker.apply_click(&maze, Cell::new(0, 5)).is_accepted());
    }

    #[test]
    fn test_drag_ending_on_exit_completes() {
        let maze = column_corridor();
        let mut tracker = traced(&maze, &[(0, 5), (1, 5), (2, 5), (3, 5), (4, 5), (5, 5), (6, 5)]);
        let outcome = tracker.apply_drag(&maze, Cell::new(6, 5), Cell::new(9, 5));
        assert_eq!(
            outcome,
            DragOutcome::Applied(vec![
                ClickOutcome::Appended(Cell::new(7, 5)),
                ClickOutcome::Appended(Cell::new(8, 5)),
                ClickOutcome::Completed(Cell::new(9, 5)),
            ])
        );
    }

    #[test]
    fn test_drag_through_exit_ignores_the_rest() {
        let maze = bottom_row_corridor();
        let column: Vec<(usize, usize)> = (0..10).map(|row| (row, 3)).collect();
        let mut tracker = traced(&maze, &column);

        let outcome = tracker.apply_drag(&maze, Cell::new(9, 3), Cell::new(9, 8));
        assert_eq!(
            outcome,
            DragOutcome::Applied(vec![
                ClickOutcome::Appended(Cell::new(9, 4)),
                ClickOutcome::Completed(Cell::new(9, 5)),
                ClickOutcome::Ignored,
                ClickOutcome::Ignored,
                ClickOutcome::Ignored,
            ])
        );
        assert!(tracker.is_completed());
        assert_eq!(tracker.path().last(), Some(Cell::new(9, 5)));
        assert_eq!(tracker.path().len(), 12);
    }

    #[test]
    fn test_drag_back_undoes_cell_by_cell() {
        let maze = column_corridor();
        let mut tracker = traced(&maze, &[(0, 5), (1, 5), (2, 5), (2, 6)]);

        let outcome = tracker.apply_drag(&maze, Cell::new(2, 7), Cell::new(2, 5));
        assert_eq!(
            outcome,
            DragOutcome::Applied(vec![
                ClickOutcome::Undone(Cell::new(2, 6)),
                ClickOutcome::Undone(Cell::new(2, 5)),
            ])
        );
        assert_eq!(tracker.path().cells(), &[Cell::new(0, 5), Cell::new(1, 5)]);
        assert_eq!(tracker.path().version(), 6);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_tracked_path_never_crosses_a_wall(
            seed: u64,
            clicks in proptest::collection::vec((0usize..12, 0usize..12), 1..200),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = generate_maze(10, 10, &mut rng);
            let mut tracker = PathTracker::new();
            tracker.apply_click(&maze, maze.entrance());
            for (row, col) in clicks {
                tracker.apply_click(&maze, Cell::new(row, col));
                prop_assert!(tracker.path().is_valid_in(&maze));
            }
        }
    }
}
