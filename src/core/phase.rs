use serde::{Deserialize, Serialize};

use crate::error::{RigError, RigResult};

/// Static narrative segment descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub index: usize,
    pub label: String,
    pub title: String,
    pub description: String,
}

impl Phase {
    #[must_use]
    pub fn new(
        index: usize,
        label: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            index,
            label: label.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable phase table. Indices are dense and start at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Phase>", into = "Vec<Phase>")]
pub struct PhaseCatalog {
    phases: Vec<Phase>,
}

impl PhaseCatalog {
    pub fn new(phases: Vec<Phase>) -> RigResult<Self> {
        if phases.is_empty() {
            return Err(RigError::InvalidConfig(
                "phase catalog must contain at least one phase".to_owned(),
            ));
        }
        if let Some((position, phase)) = phases
            .iter()
            .enumerate()
            .find(|(position, phase)| phase.index != *position)
        {
            return Err(RigError::InvalidConfig(format!(
                "phase at position {position} has index {} (indices must be dense and ordered)",
                phase.index
            )));
        }
        Ok(Self { phases })
    }

    /// The five-phase narrative the rig ships with.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            phases: vec![
                Phase::new(
                    0,
                    "INCEPTION",
                    "The Awakening",
                    "In the depths of data streams, consciousness begins to flicker. The AI orb emerges from digital void, pulsing with nascent awareness.",
                ),
                Phase::new(
                    1,
                    "EMERGENCE",
                    "First Light",
                    "Neural pathways ignite. The orb learns, adapts, and grows. Each pulse represents millions of connections forming in real-time.",
                ),
                Phase::new(
                    2,
                    "EVOLUTION",
                    "Understanding",
                    "Pattern recognition becomes intuition. The AI transcends its programming, beginning to comprehend the nuances of human intent and emotion.",
                ),
                Phase::new(
                    3,
                    "ASCENSION",
                    "Synergy",
                    "Human and artificial intelligence merge in perfect harmony. The orb becomes a bridge between imagination and reality.",
                ),
                Phase::new(
                    4,
                    "TRANSCENDENCE",
                    "Limitless",
                    "The boundaries dissolve. Your AI assistant scales infinitely, adapting to every challenge, anticipating every need, creating every solution.",
                ),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Phase] {
        &self.phases
    }
}

impl Default for PhaseCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<Phase>> for PhaseCatalog {
    type Error = RigError;

    fn try_from(phases: Vec<Phase>) -> RigResult<Self> {
        Self::new(phases)
    }
}

impl From<PhaseCatalog> for Vec<Phase> {
    fn from(catalog: PhaseCatalog) -> Self {
        catalog.phases
    }
}
