//! Layout loader: token stream to filled board.
//!
//! Chemical tokens are staged in a `StagingBuffer`; each directive dequeues
//! `count` of them, oldest first, onto the named flask. Chemicals therefore
//! land in flasks in exactly the order they appear in the stream.
//!
//! Layout files are trusted. A directive asking for more units than are
//! staged pushes what is there and moves on; the flask is left under-filled.

use tracing::{debug, info, warn};

use super::token::{LayoutHeader, LayoutToken};
use crate::board::Board;
use crate::core::{Chemical, ContainerError, FlaskId, GameConfig, LayoutError, StagingBuffer};

/// A loaded puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// The filled board, no pours applied.
    pub board: Board,

    /// Number of flasks, `N`.
    pub total_flasks: usize,

    /// Number of chemical types, `K`.
    pub total_chemical_types: usize,

    /// Chemicals still staged after the last directive, oldest first.
    pub unassigned: Vec<Chemical>,
}

/// Incremental layout loader.
///
/// ## Usage
///
/// ```
/// use flask_sort::core::{Chemical, FlaskId, GameConfig};
/// use flask_sort::layout::LayoutLoader;
///
/// let mut loader = LayoutLoader::new(GameConfig::default()).unwrap();
/// for token in ["2 1", "AA", "BB", "AA", "2 1"] {
///     loader.feed(token).unwrap();
/// }
///
/// // One chemical is still waiting for a directive
/// assert_eq!(loader.staging().size(), 1);
///
/// let layout = loader.finish().unwrap();
/// let flask = layout.board.flask(FlaskId::new(1)).unwrap();
/// assert_eq!(flask.items(), &[Chemical::new("AA"), Chemical::new("BB")]);
/// assert_eq!(layout.unassigned, vec![Chemical::new("AA")]);
/// ```
#[derive(Clone, Debug)]
pub struct LayoutLoader {
    config: GameConfig,
    header: Option<LayoutHeader>,
    board: Option<Board>,
    staging: StagingBuffer,
}

impl LayoutLoader {
    /// Create a loader. The staging buffer holds as many units as a flask.
    pub fn new(config: GameConfig) -> Result<Self, LayoutError> {
        config.validate()?;

        Ok(Self {
            config,
            header: None,
            board: None,
            staging: StagingBuffer::new(config.flask_capacity),
        })
    }

    /// Header, once it has been fed.
    #[must_use]
    pub fn header(&self) -> Option<LayoutHeader> {
        self.header
    }

    /// Board being filled, once the header has been fed.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Chemicals staged but not yet distributed.
    #[must_use]
    pub fn staging(&self) -> &StagingBuffer {
        &self.staging
    }

    /// Feed one token. The first non-blank token is the header.
    pub fn feed(&mut self, token: &str) -> Result<(), LayoutError> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(());
        }

        let Some(board) = self.board.as_mut() else {
            let header = LayoutHeader::parse(token)?;
            debug!(
                flasks = header.total_flasks,
                chemical_types = header.total_chemical_types,
                "read layout header"
            );
            self.board = Some(Board::new(header.total_flasks, &self.config));
            self.header = Some(header);
            return Ok(());
        };

        match LayoutToken::parse(token)? {
            LayoutToken::Chemical(chemical) => {
                debug!(chemical = %chemical, staged = self.staging.size(), "staging chemical");
                self.staging.enqueue(chemical);
            }
            LayoutToken::Directive { count, flask } => {
                let id = FlaskId::new(flask);
                if !board.contains(id) {
                    return Err(LayoutError::UnknownFlask {
                        token: token.to_string(),
                        flask,
                        flask_count: board.flask_count(),
                    });
                }

                let mut pushed = 0;
                while pushed < count {
                    let Some(chemical) = self.staging.dequeue() else {
                        break;
                    };
                    board.fill(id, chemical).map_err(|err| match err {
                        ContainerError::Full | ContainerError::Empty => LayoutError::Overflow {
                            token: token.to_string(),
                            flask: id,
                        },
                    })?;
                    pushed += 1;
                }

                if pushed < count {
                    warn!(
                        flask = %id,
                        requested = count,
                        pushed,
                        "directive asked for more chemicals than were staged"
                    );
                } else {
                    debug!(flask = %id, count, "distributed chemicals");
                }
            }
        }

        Ok(())
    }

    /// Finish loading and hand back the board.
    pub fn finish(mut self) -> Result<Layout, LayoutError> {
        let (Some(header), Some(board)) = (self.header, self.board.take()) else {
            return Err(LayoutError::malformed("layout is empty, missing header"));
        };

        let unassigned = self.staging.drain();
        if !unassigned.is_empty() {
            warn!(count = unassigned.len(), "chemicals left in staging buffer after loading");
        }

        info!(
            flasks = header.total_flasks,
            chemical_types = header.total_chemical_types,
            units = board.unit_count(),
            "layout loaded"
        );

        Ok(Layout {
            board,
            total_flasks: header.total_flasks,
            total_chemical_types: header.total_chemical_types,
            unassigned,
        })
    }
}

/// Load a layout from a token sequence. The first token is the header.
pub fn load_layout<I, S>(tokens: I, config: &GameConfig) -> Result<Layout, LayoutError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut loader = LayoutLoader::new(*config)?;
    for token in tokens {
        loader.feed(token.as_ref())?;
    }
    loader.finish()
}

/// Load a layout from file text, one token per line.
///
/// ```
/// use flask_sort::core::GameConfig;
/// use flask_sort::layout::parse_layout;
///
/// let text = "2 1\nAA\nAA\nAA\n31\n";
/// let layout = parse_layout(text, &GameConfig::default()).unwrap();
///
/// assert_eq!(layout.total_flasks, 2);
/// assert_eq!(layout.board.complete_flask_count(), 1);
/// ```
pub fn parse_layout(text: &str, config: &GameConfig) -> Result<Layout, LayoutError> {
    load_layout(text.lines(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chem(code: &str) -> Chemical {
        Chemical::new(code)
    }

    fn load(tokens: &[&str]) -> Result<Layout, LayoutError> {
        load_layout(tokens.iter().copied(), &GameConfig::default())
    }

    #[test]
    fn test_fifo_distribution() {
        let layout = load(&["4 2", "AA", "BB", "AA", "2 1"]).unwrap();

        assert_eq!(layout.total_flasks, 4);
        assert_eq!(layout.total_chemical_types, 2);
        assert_eq!(
            layout.board.flask(FlaskId::new(1)).unwrap().items(),
            &[chem("AA"), chem("BB")]
        );
        assert_eq!(layout.unassigned, vec![chem("AA")]);
    }

    #[test]
    fn test_multiple_flasks() {
        let layout = load(&[
            "3 2", "AA", "BB", "AA", "BB", "41", "BB", "AA", "22", "AA", "13",
        ])
        .unwrap();

        let items = |n| layout.board.flask(FlaskId::new(n)).unwrap().items().to_vec();
        assert_eq!(items(1), vec![chem("AA"), chem("BB"), chem("AA"), chem("BB")]);
        assert_eq!(items(2), vec![chem("BB"), chem("AA")]);
        assert_eq!(items(3), vec![chem("AA")]);
        assert!(layout.unassigned.is_empty());
    }

    #[test]
    fn test_under_filled_directive_is_lenient() {
        let layout = load(&["2 1", "AA", "31"]).unwrap();

        assert_eq!(layout.board.flask(FlaskId::new(1)).unwrap().items(), &[chem("AA")]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let layout = parse_layout("\n2 1\n\nAA\n  \n11\n", &GameConfig::default()).unwrap();

        assert_eq!(layout.board.unit_count(), 1);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(load(&[]), Err(LayoutError::Malformed(_))));
        assert!(matches!(load(&["AA", "BB"]), Err(LayoutError::Malformed(_))));
    }

    #[test]
    fn test_unknown_flask() {
        let err = load(&["2 1", "AA", "13"]).unwrap_err();

        assert_eq!(
            err,
            LayoutError::UnknownFlask {
                token: "13".into(),
                flask: 3,
                flask_count: 2,
            }
        );
    }

    #[test]
    fn test_overflow() {
        let err = load(&[
            "1 1", "AA", "AA", "AA", "AA", "41", "AA", "11",
        ])
        .unwrap_err();

        assert!(matches!(err, LayoutError::Overflow { flask, .. } if flask == FlaskId::new(1)));
    }

    #[test]
    fn test_invalid_config() {
        let config = GameConfig::new(2, 3);
        assert!(matches!(
            LayoutLoader::new(config),
            Err(LayoutError::Config(_))
        ));
    }

    #[test]
    fn test_loader_exposes_progress() {
        let mut loader = LayoutLoader::new(GameConfig::default()).unwrap();
        assert!(loader.board().is_none());

        loader.feed("2 1").unwrap();
        loader.feed("CC").unwrap();
        assert_eq!(loader.board().map(Board::flask_count), Some(2));
        assert_eq!(loader.staging().peek(), Some(&chem("CC")));

        loader.feed("12").unwrap();
        assert!(loader.staging().is_empty());
        assert_eq!(loader.header().map(|h| h.total_chemical_types), Some(1));
    }
}
