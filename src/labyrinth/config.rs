use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::labyrinth::error::Result;
use crate::labyrinth::map::Dimensions;
use crate::labyrinth::session::StepDelay;

/// Paramètres d'une session, lus depuis un fichier JSON puis surchargés
/// par la ligne de commande.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default = "default_side")]
    pub rows: usize,
    #[serde(default = "default_side")]
    pub cols: usize,
    #[serde(default)]
    pub step_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_side() -> usize {
    10
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: default_side(),
            cols: default_side(),
            step_delay_ms: 0,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Un fichier absent donne la configuration par défaut.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SessionConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Vérifie les bornes avant tout appel au moteur.
    pub fn validate(&self) -> Result<(Dimensions, StepDelay)> {
        let dimensions = Dimensions::new(self.rows, self.cols)?;
        let delay = StepDelay::new(self.step_delay_ms)?;
        Ok((dimensions, delay))
    }
}
