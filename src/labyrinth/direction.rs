use serde::Serialize;

/// Les quatre côtés d'une cellule.
///
/// `North` est le haut de la grille (ligne 0), `South` le bas (ligne `rows - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    #[serde(rename = "top")]
    North,
    #[serde(rename = "right")]
    East,
    #[serde(rename = "bottom")]
    South,
    #[serde(rename = "left")]
    West,
}

impl Direction {
    /// Ordre dans lequel on examine les voisins: haut, droite, gauche, bas.
    ///
    /// Générateur et solveur parcourent les voisins dans cet ordre: une même
    /// graine rejoue exactement la même partie.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::South,
    ];

    /// Fait demi tour (par ex. North -> South)
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Décalage (ligne, colonne) d'un pas dans cette direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::SCAN_ORDER {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_offsets_cancel() {
        for dir in Direction::SCAN_ORDER {
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }
}
