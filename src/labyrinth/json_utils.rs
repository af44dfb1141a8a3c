use std::io::Write;

use log::warn;

use crate::labyrinth::events::{MazeEvent, Renderer};

/// Sérialise un événement en objet JSON, sur une ligne.
pub fn event_to_json(event: &MazeEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

/// Renderer écrivant un objet JSON par ligne (JSON Lines).
///
/// Une écriture ratée est journalisée et l'événement perdu: le rendu
/// n'interrompt jamais une génération ou une résolution en cours.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, event: &MazeEvent) {
        let line = match event_to_json(event) {
            Ok(line) => line,
            Err(e) => {
                warn!("could not serialize {:?}: {}", event, e);
                return;
            }
        };
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("could not write maze event: {}", e);
        }
    }
}
