//! Événements émis par le moteur vers les collaborateurs externes.
//!
//! Le moteur ne dessine rien lui-même: il décrit chaque changement visible
//! (mur ouvert, couleur de cellule) sous forme de `MazeEvent`, et un
//! `Renderer` en fait ce qu'il veut.

use log::info;
use serde::Serialize;

use crate::labyrinth::cell::Cell;
use crate::labyrinth::direction::Direction;

/// Intention de couleur pour une cellule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Highlight {
    Current,
    Visited,
    EntranceMarker,
    ExitMarker,
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum MazeEvent {
    /// Nouvelle grille, tous murs fermés. Envoyé avant tout autre événement
    /// d'une génération, pour que le renderer puisse repartir de zéro.
    GridCreated { rows: usize, cols: usize },
    /// Le mur `side` de `cell` a été ouvert; `neighbor` est `None` pour une
    /// ouverture sur l'extérieur (entrée ou sortie).
    WallOpened {
        cell: Cell,
        side: Direction,
        neighbor: Option<Cell>,
    },
    Highlight {
        cell: Cell,
        color: Highlight,
    },
}

impl MazeEvent {
    pub fn highlight(cell: Cell, color: Highlight) -> Self {
        MazeEvent::Highlight { cell, color }
    }
}

/// Consommateur des événements de mur et de couleur.
pub trait Renderer {
    fn render(&mut self, event: &MazeEvent);
}

/// Ignore tout.
impl Renderer for () {
    fn render(&mut self, _event: &MazeEvent) {}
}

/// Enregistre les événements dans l'ordre.
impl Renderer for Vec<MazeEvent> {
    fn render(&mut self, event: &MazeEvent) {
        self.push(*event);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, event: &MazeEvent) {
        (**self).render(event);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, event: &MazeEvent) {
        (**self).render(event);
    }
}

/// Prévenu une seule fois, au démarrage d'une session.
pub trait Telemetry {
    fn session_started(&mut self);
}

impl Telemetry for () {
    fn session_started(&mut self) {}
}

/// Télémétrie qui se contente d'une ligne de log.
#[derive(Debug, Default)]
pub struct LogTelemetry;

impl Telemetry for LogTelemetry {
    fn session_started(&mut self) {
        info!("maze session started");
    }
}
