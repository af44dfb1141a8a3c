//! Génération d'un labyrinthe parfait par backtracking en profondeur.
//!
//! On part de l'entrée, on avance toujours vers un voisin non visité tiré au
//! hasard en cassant le mur entre les deux, et on recule quand il n'y en a
//! plus. La génération s'arrête quand la pile est vide: chaque cellule a été
//! atteinte une seule fois, par une arête de l'arbre.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::direction::Direction;
use crate::labyrinth::events::{Highlight, MazeEvent, Renderer};
use crate::labyrinth::map::{Dimensions, MazeMap};
use crate::labyrinth::maze::Maze;

/// Génère un labyrinthe sans émettre d'événements.
pub fn generate<R: Rng>(dimensions: Dimensions, rng: &mut R) -> Maze {
    generate_with(dimensions, rng, &mut ())
}

/// Génère un labyrinthe à partir de dimensions brutes.
///
/// Panique si `rows` ou `cols` sort de `[10, 100]`: c'est à l'appelant de
/// valider les entrées avant d'appeler le moteur.
pub fn generate_maze<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Maze {
    let dimensions = match Dimensions::new(rows, cols) {
        Ok(dimensions) => dimensions,
        Err(e) => panic!("precondition violated: {}", e),
    };
    generate(dimensions, rng)
}

/// Génère un labyrinthe et décrit chaque mur ouvert au `renderer`.
///
/// # Arguments
///
/// * `dimensions` - Taille de la grille, déjà validée.
/// * `rng` - Source d'aléa; une même graine donne le même labyrinthe.
/// * `renderer` - Reçoit `GridCreated`, puis un `WallOpened` par mur cassé
///   dans l'ordre du creusement, puis l'ouverture et le marqueur de l'entrée,
///   puis ceux de la sortie.
///
/// # Retour
///
/// Un `Maze` parfait, entrée sur la première ligne et sortie sur la dernière.
pub fn generate_with<R: Rng, V: Renderer + ?Sized>(
    dimensions: Dimensions,
    rng: &mut R,
    renderer: &mut V,
) -> Maze {
    let mut map = MazeMap::new(dimensions);
    renderer.render(&MazeEvent::GridCreated {
        rows: dimensions.rows(),
        cols: dimensions.cols(),
    });
    let entrance = Cell::new(0, random_inner_col(dimensions, rng));

    let mut visited = vec![false; dimensions.cell_count()];
    let index = |cell: Cell| cell.row * dimensions.cols() + cell.col;
    visited[index(entrance)] = true;
    let mut stack = vec![entrance];
    let mut carved = 0;

    while let Some(&current) = stack.last() {
        let candidates: Vec<(Direction, Cell)> = map
            .neighbors(current)
            .filter(|&(_, next)| !visited[index(next)])
            .collect();

        match candidates.choose(rng) {
            None => {
                stack.pop();
            }
            Some(&(side, next)) => {
                map.open_wall(current, side);
                renderer.render(&MazeEvent::WallOpened {
                    cell: current,
                    side,
                    neighbor: Some(next),
                });
                visited[index(next)] = true;
                stack.push(next);
                carved += 1;
            }
        }
    }

    let exit = Cell::new(dimensions.rows() - 1, random_inner_col(dimensions, rng));
    let maze = Maze::from_parts(map, entrance, exit);

    renderer.render(&MazeEvent::WallOpened {
        cell: entrance,
        side: Direction::North,
        neighbor: None,
    });
    renderer.render(&MazeEvent::highlight(entrance, Highlight::EntranceMarker));
    renderer.render(&MazeEvent::WallOpened {
        cell: exit,
        side: Direction::South,
        neighbor: None,
    });
    renderer.render(&MazeEvent::highlight(exit, Highlight::ExitMarker));

    debug!(
        "generated {}x{} maze: {} walls opened, entrance {}, exit {}",
        dimensions.rows(),
        dimensions.cols(),
        carved,
        entrance,
        exit
    );
    debug_assert!(maze.is_perfect());
    maze
}

/// Colonne tirée uniformément dans `[1, cols - 2]`, pour ne jamais ouvrir un coin.
fn random_inner_col<R: Rng>(dimensions: Dimensions, rng: &mut R) -> usize {
    rng.random_range(1..dimensions.cols() - 1)
}
