//! The board: every flask in play plus the last pour's highlight.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::snapshot::{BoardSnapshot, FlaskView};
use crate::core::{Chemical, ContainerError, Flask, FlaskId, GameConfig, Pour, PourRecord, StateError};

/// Ordered collection of flasks numbered `1..=N`.
///
/// The board exclusively owns its flasks. Completeness is always read from
/// the flasks themselves; the only extra state kept here is which pour was
/// applied last (for highlighting) and how many pours have been applied.
/// Deserialized boards are checked against the same limits as `from_flasks`.
///
/// ## Usage
///
/// ```
/// use flask_sort::board::Board;
/// use flask_sort::core::{Chemical, FlaskId, GameConfig};
///
/// let mut board = Board::new(4, &GameConfig::default());
/// board.fill(FlaskId::new(1), Chemical::new("AA")).unwrap();
///
/// assert_eq!(board.flask_count(), 4);
/// assert_eq!(board.flask(FlaskId::new(1)).map(|f| f.size()), Some(1));
/// assert!(board.flask(FlaskId::new(5)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Slot `i` holds flask `i + 1`.
    flasks: Vec<Flask>,

    /// Last applied pour, highlighted for display. Re-set by every pour.
    selection: Option<Pour>,

    /// Pours applied so far.
    moves: u32,
}

impl Board {
    /// Create a board of `flask_count` empty flasks sized by `config`.
    ///
    /// Panics if `flask_count` is zero or does not fit a `FlaskId`.
    #[must_use]
    pub fn new(flask_count: usize, config: &GameConfig) -> Self {
        assert!(flask_count > 0, "Board must have at least 1 flask");
        assert!(flask_count <= MAX_FLASKS, "Too many flasks");

        Self::from_flasks((0..flask_count).map(|_| Flask::from_config(config)).collect())
    }

    /// Create a board from pre-filled flasks. Flask `i + 1` is `flasks[i]`.
    ///
    /// Panics if `flasks` is empty or too long to number with a `FlaskId`.
    #[must_use]
    pub fn from_flasks(flasks: Vec<Flask>) -> Self {
        assert!(!flasks.is_empty(), "Board must have at least 1 flask");
        assert!(flasks.len() <= MAX_FLASKS, "Too many flasks");

        Self {
            flasks,
            selection: None,
            moves: 0,
        }
    }

    /// Number of flasks, `N`.
    #[must_use]
    pub fn flask_count(&self) -> usize {
        self.flasks.len()
    }

    /// Check whether `id` names a flask on this board.
    #[must_use]
    pub fn contains(&self, id: FlaskId) -> bool {
        id.in_range(self.flasks.len())
    }

    /// Get a flask by number.
    #[must_use]
    pub fn flask(&self, id: FlaskId) -> Option<&Flask> {
        if self.contains(id) {
            self.flasks.get(id.index())
        } else {
            None
        }
    }

    fn flask_mut(&mut self, id: FlaskId) -> Option<&mut Flask> {
        if self.contains(id) {
            self.flasks.get_mut(id.index())
        } else {
            None
        }
    }

    /// Iterate over `(FlaskId, &Flask)` pairs in board order.
    pub fn flasks(&self) -> impl Iterator<Item = (FlaskId, &Flask)> {
        self.flasks
            .iter()
            .enumerate()
            .map(|(i, f)| (FlaskId::from_index(i), f))
    }

    /// Push a unit onto a flask during setup.
    ///
    /// Returns `Err(ContainerError::Full)` if the flask is full. Panics if
    /// `id` is not on the board.
    pub fn fill(&mut self, id: FlaskId, unit: Chemical) -> Result<(), ContainerError> {
        let count = self.flasks.len();
        match self.flask_mut(id) {
            Some(flask) => flask.push(unit),
            None => panic!("Flask {id} is not on a board of {count} flasks"),
        }
    }

    /// Number of flasks that are currently complete.
    #[must_use]
    pub fn complete_flask_count(&self) -> usize {
        self.flasks.iter().filter(|f| f.is_complete()).count()
    }

    /// Total units across all flasks.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.flasks.iter().map(Flask::size).sum()
    }

    // === Selection ===

    /// Pour currently highlighted, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Pour> {
        self.selection
    }

    #[must_use]
    pub fn is_pour_source(&self, id: FlaskId) -> bool {
        self.selection.is_some_and(|p| p.source == id)
    }

    #[must_use]
    pub fn is_pour_target(&self, id: FlaskId) -> bool {
        self.selection.is_some_and(|p| p.target == id)
    }

    // === Pours ===

    /// Number of pours applied so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Move the top unit of `pour.source` onto `pour.target`.
    ///
    /// Callers must have validated the pour. Nothing is changed if either
    /// step would fail: the source is checked non-empty and the target
    /// non-full before anything is popped.
    pub fn transfer(&mut self, pour: Pour) -> Result<PourRecord, ContainerError> {
        let source_ready = self.flask(pour.source).is_some_and(|f| !f.is_empty());
        if !source_ready {
            return Err(ContainerError::Empty);
        }
        let target_ready = self.flask(pour.target).is_some_and(|f| !f.is_full());
        if !target_ready {
            return Err(ContainerError::Full);
        }

        let unit = self
            .flask_mut(pour.source)
            .ok_or(ContainerError::Empty)?
            .pop()?;
        self.flask_mut(pour.target)
            .ok_or(ContainerError::Full)?
            .push(unit.clone())?;

        self.moves += 1;
        self.selection = Some(pour);

        let record = PourRecord::new(pour, unit, self.moves);
        debug!(pour = %pour, chemical = %record.chemical, moves = self.moves, "applied pour");
        Ok(record)
    }

    /// Build a read-only view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let flasks = self
            .flasks()
            .map(|(id, flask)| FlaskView {
                id,
                items: flask.items().to_vec(),
                capacity: flask.capacity(),
                is_complete: flask.is_complete(),
                is_pour_source: self.is_pour_source(id),
                is_pour_target: self.is_pour_target(id),
            })
            .collect();

        BoardSnapshot {
            flasks,
            moves: self.moves,
        }
    }
}

/// Largest board a `FlaskId` can number.
const MAX_FLASKS: usize = u16::MAX as usize;

/// Unchecked wire form of a `Board`. Each flask checks itself.
#[derive(Deserialize)]
struct RawBoard {
    flasks: Vec<Flask>,
    selection: Option<Pour>,
    moves: u32,
}

impl TryFrom<RawBoard> for Board {
    type Error = StateError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let count = raw.flasks.len();
        if count == 0 {
            return Err(StateError::NoFlasks);
        }
        if count > MAX_FLASKS {
            return Err(StateError::TooManyFlasks(count));
        }
        if let Some(pour) = raw.selection {
            if !pour.source.in_range(count) || !pour.target.in_range(count) {
                return Err(StateError::SelectionOutOfRange(pour));
            }
        }

        Ok(Self {
            flasks: raw.flasks,
            selection: raw.selection,
            moves: raw.moves,
        })
    }
}
