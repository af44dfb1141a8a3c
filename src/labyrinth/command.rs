//! Commandes texte du mode interactif, une par ligne sur l'entrée standard.
//!
//! ```text
//! click <row> <col>
//! drag <row> <col> <row> <col>
//! reset | solve | show | quit
//! new [<rows> <cols>]
//! ```

use std::str::FromStr;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::error::LabyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(Cell),
    Drag { from: Cell, to: Cell },
    /// Efface le tracé.
    Reset,
    Solve,
    /// Nouveau labyrinthe, aux dimensions données ou aux mêmes dimensions.
    New(Option<(usize, usize)>),
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = LabyError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(LabyError::InvalidCommand("empty line".to_string()));
        };
        let args = words
            .map(|w| {
                w.parse::<usize>()
                    .map_err(|_| LabyError::InvalidCommand(format!("`{}` is not a number", w)))
            })
            .collect::<Result<Vec<usize>, _>>()?;

        let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("click", &[row, col]) => Command::Click(Cell::new(row, col)),
            ("drag", &[r1, c1, r2, c2]) => Command::Drag {
                from: Cell::new(r1, c1),
                to: Cell::new(r2, c2),
            },
            ("reset", []) => Command::Reset,
            ("solve", []) => Command::Solve,
            ("new", []) => Command::New(None),
            ("new", &[rows, cols]) => Command::New(Some((rows, cols))),
            ("show", []) => Command::Show,
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(LabyError::InvalidCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}
