/*!
 * # Module de visualisation ASCII du labyrinthe
 *
 * Convertit un `Maze` en texte, ligne par ligne, avec éventuellement un
 * chemin superposé. Utilisé par le binaire pour afficher le labyrinthe
 * généré, la solution ou le tracé en cours.
 */

use crate::labyrinth::cell::Cell;
use crate::labyrinth::direction::Direction;
use crate::labyrinth::maze::Maze;
use crate::labyrinth::path::Path;

/// Génère une représentation ASCII du labyrinthe.
///
/// Chaque cellule occupe trois caractères entre deux piliers `+`. Un mur
/// fermé est dessiné `---` ou `|`, un mur ouvert par des espaces, ce qui
/// laisse un trou au-dessus de l'entrée et sous la sortie.
///
/// # Arguments
///
/// * `maze` - Le labyrinthe à dessiner.
/// * `overlay` - Chemin à marquer d'une `*` (solution ou tracé), si présent.
///
/// # Retour
///
/// Une `String` terminée par un saut de ligne. `E` marque l'entrée et `X` la
/// sortie, prioritaires sur le chemin.
pub fn render_ascii(maze: &Maze, overlay: Option<&Path>) -> String {
    let dims = maze.dimensions();
    let mut out = String::with_capacity((dims.rows() * 2 + 1) * (dims.cols() * 4 + 2));

    for row in 0..dims.rows() {
        push_horizontal(&mut out, maze, row, Direction::North);
        for col in 0..dims.cols() {
            let cell = Cell::new(row, col);
            let walls = maze.walls(cell);
            out.push(if walls.is_open(Direction::West) { ' ' } else { '|' });
            out.push(' ');
            out.push(marker(maze, overlay, cell));
            out.push(' ');
        }
        let last = Cell::new(row, dims.cols() - 1);
        out.push(if maze.walls(last).is_open(Direction::East) { ' ' } else { '|' });
        out.push('\n');
    }
    push_horizontal(&mut out, maze, dims.rows() - 1, Direction::South);
    out
}

fn push_horizontal(out: &mut String, maze: &Maze, row: usize, side: Direction) {
    for col in 0..maze.dimensions().cols() {
        out.push('+');
        if maze.walls(Cell::new(row, col)).is_open(side) {
            out.push_str("   ");
        } else {
            out.push_str("---");
        }
    }
    out.push_str("+\n");
}

fn marker(maze: &Maze, overlay: Option<&Path>, cell: Cell) -> char {
    if cell == maze.entrance() {
        'E'
    } else if cell == maze.exit() {
        'X'
    } else if overlay.is_some_and(|path| path.contains(cell)) {
        '*'
    } else {
        ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labyrinth::fixtures::{column_corridor, serpentine};

    #[test]
    fn test_render_shape() {
        let maze = serpentine(10, 12, 3, 4);
        let text = render_ascii(&maze, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert!(lines.iter().all(|line| line.chars().count() == 12 * 4 + 1));
    }

    #[test]
    fn test_render_entrance_and_exit_gaps() {
        let maze = serpentine(10, 10, 3, 0);
        let text = render_ascii(&maze, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(&lines[0][12..16], "+   ");
        assert_eq!(&lines[0][0..4], "+---");
        assert_eq!(&lines[1][12..16], "  E ");
        assert_eq!(&lines[20][0..4], "+   ");
        assert_eq!(&lines[19][0..4], "| X ");
    }

    #[test]
    fn test_render_overlay() {
        let maze = column_corridor();
        let path = Path::from_cells((0..10).map(|row| Cell::new(row, 5)).collect());
        let text = render_ascii(&maze, Some(&path));
        let stars = text.chars().filter(|&c| c == '*').count();
        // l'entrée et la sortie gardent leurs propres marqueurs
        assert_eq!(stars, 8);
        assert!(!render_ascii(&maze, None).contains('*'));
    }
}
