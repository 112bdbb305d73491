use crate::anchors::anchored_row;
use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::movegen::MoveGen;
use crate::scorer::Scorer;
use crate::tiles::Rack;
use crate::{Direction, Move, Position};
#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, trace};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::cmp::Ordering;

/// Order moves by score. Equal scores prefer the move that comes first on the
/// board, so the best move does not depend on search order.
fn by_rank(a: &Move, b: &Move) -> Ordering {
    a.score
        .cmp(&b.score)
        .then_with(|| b.position.cmp(&a.position))
        .then_with(|| b.direction.cmp(&a.direction))
        .then_with(|| b.word.cmp(&a.word))
}

/// Finds the plays for a rack on a board.
///
/// The solver only reads the dictionary and the board; it can be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    scorer: Scorer,
}

impl<'a> Solver<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Solver<'a> {
        Solver {
            dictionary,
            scorer: Scorer::default(),
        }
    }

    /// Use `scorer` to score the plays.
    #[must_use]
    pub fn with_scorer(self, scorer: Scorer) -> Solver<'a> {
        Solver { scorer, ..self }
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.dictionary
    }

    pub fn scorer(&self) -> Scorer {
        self.scorer
    }

    /// Return all plays from left to right on `board`.
    pub fn horizontal_plays(&self, rack: &Rack, board: &Board) -> Vec<Move> {
        self.row_plays(&MoveGen::new(self.dictionary, *rack), board)
    }

    #[cfg_attr(feature = "flame_it", flame)]
    fn row_plays(&self, movegen: &MoveGen, board: &Board) -> Vec<Move> {
        let plays_in_row = |r: usize| -> Vec<Move> {
            let row = anchored_row(board, r, self.dictionary);
            movegen
                .row_plays(&row)
                .into_iter()
                .map(|(c, word)| {
                    let position = Position::new(r, c);
                    let score =
                        self.scorer
                            .score_unchecked(board, position, Direction::Across, &word);
                    Move::new(score, position, Direction::Across, word)
                })
                .collect()
        };
        #[cfg(feature = "rayon")]
        let plays = (0..board.rows()).into_par_iter().flat_map(plays_in_row).collect();
        #[cfg(not(feature = "rayon"))]
        let plays = (0..board.rows()).flat_map(plays_in_row).collect();
        plays
    }

    /// Return all plays in both directions.
    ///
    /// Plays from top to bottom are found as horizontal plays on the transposed board.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Dictionary, Solver, Error};
    /// let dictionary = Dictionary::from_words(&["rust", "rest"]);
    /// let solver = Solver::new(&dictionary);
    /// let plays = solver.all_plays(&"rusta".parse()?, &Board::default());
    /// // "RUST" across and down, each with one of its 4 letters on the start square
    /// assert_eq!(plays.len(), 8);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn all_plays(&self, rack: &Rack, board: &Board) -> Vec<Move> {
        // one prefix cache for both directions
        let movegen = MoveGen::new(self.dictionary, *rack);
        let mut plays = self.row_plays(&movegen, board);
        let across = plays.len();
        let transposed = board.transpose();
        plays.extend(
            self.row_plays(&movegen, &transposed)
                .into_iter()
                .map(Move::transposed),
        );
        trace!(
            "rack {}: {} plays across, {} down",
            rack,
            across,
            plays.len() - across
        );
        plays
    }

    /// Return the highest scoring play, or `None` if there is no legal play.
    /// Of plays with the same score, the one closest to the top left corner wins.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Dictionary, Solver, Error};
    /// let dictionary = Dictionary::from_words(&["cab", "ab"]);
    /// let solver = Solver::new(&dictionary);
    /// let best = solver.best_play(&"abc".parse()?, &Board::default()).unwrap();
    /// assert_eq!(best.to_string(), "CAB at (6, 8) down: 14");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn best_play(&self, rack: &Rack, board: &Board) -> Option<Move> {
        let best = self.all_plays(rack, board).into_iter().max_by(by_rank);
        match &best {
            Some(play) => debug!("best play for rack {}: {}", rack, play),
            None => debug!("no play for rack {}", rack),
        }
        best
    }

    /// Return the `n` highest scoring plays, best first.
    pub fn top_plays(&self, rack: &Rack, board: &Board, n: usize) -> Vec<Move> {
        let mut plays = self.all_plays(rack, board);
        plays.sort_by(|a, b| by_rank(b, a));
        plays.truncate(n);
        plays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Grid, Square};

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &[
        "rust", "rusts", "rat", "rats", "tar", "tars", "star", "art", "arts", "at", "as", "ta",
        "us", "ut", "sat", "tsar", "cab", "ab", "ba", "bar", "car", "cart", "scar",
    ];

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(WORDS)
    }

    fn sorted(plays: &[Move]) -> Vec<String> {
        let mut plays: Vec<String> = plays.iter().map(Move::to_string).collect();
        plays.sort();
        plays
    }

    /// Check that all words formed by `play` are in the dictionary.
    fn check_legal(dictionary: &Dictionary, board: &Board, play: &Move) {
        assert!(dictionary.contains(&play.word), "{}", play);
        let used = board.tiles_used(play).unwrap();
        assert!(!used.is_empty(), "{} places no tiles", play);
        let after = board.apply(play);
        // the word is not part of a longer word
        let first = play.position;
        let last = first.step(play.direction, play.word.len() - 1);
        let whole = after.cross_word_at(first, play.direction);
        assert!(whole.prefix.is_empty(), "{} extends {}", play, whole);
        assert_eq!(after.cross_word_at(last, play.direction).suffix.len(), 0);
        for pos in play.positions().filter(|&p| !board.is_occupied(p)) {
            let cross = after.cross_word_at(pos, play.direction.perpendicular());
            let tile = after.square(pos).tile().unwrap();
            if !cross.is_empty() {
                assert!(dictionary.contains(&cross.with(tile)), "{}: {}", play, cross);
            }
        }
    }

    #[test]
    fn test_start_play() -> Result<()> {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        let board = Board::new(Grid::from_strings(&["..*.."])?);
        let best = solver.best_play(&"cab".parse()?, &board).unwrap();
        assert_eq!(best.to_string(), "CAB at (0, 0) across: 14");
        Ok(())
    }

    #[test]
    fn test_wildcard() -> Result<()> {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        let board = Board::new(Grid::from_strings(&["..*.."])?);
        let best = solver.best_play(&"ca*".parse()?, &board).unwrap();
        assert_eq!(best.word.to_string(), "CAb");
        assert_eq!(best.score, 8);
        Ok(())
    }

    #[test]
    fn test_no_anchor() -> Result<()> {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        let board = Board::new(Grid::empty(5, 5));
        assert_eq!(solver.best_play(&"rusta".parse()?, &board), None);
        assert!(solver.all_plays(&"rusta".parse()?, &board).is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_rack() {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        assert_eq!(solver.best_play(&Rack::new(), &Board::default()), None);
    }

    #[test]
    fn test_deterministic() -> Result<()> {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        let board = Board::default();
        let rack = "rstua".parse()?;
        let best = solver.best_play(&rack, &board);
        assert!(best.is_some());
        for _ in 0..3 {
            assert_eq!(solver.best_play(&rack, &board), best);
        }
        assert_eq!(
            sorted(&solver.all_plays(&rack, &board)),
            sorted(&solver.all_plays(&rack, &board))
        );
        Ok(())
    }

    #[test]
    fn test_legal_plays() -> Result<()> {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        let mut board = Board::default();
        for rack in &["rusta", "tsar*", "bacr", "trsta"] {
            let rack: Rack = rack.parse()?;
            let plays = solver.all_plays(&rack, &board);
            for play in &plays {
                check_legal(&dictionary, &board, play);
                let used = board.tiles_used(play)?;
                assert!(rack.without(&used).is_some(), "{} not from {}", play, rack);
            }
            if let Some(best) = solver.best_play(&rack, &board) {
                assert!(plays.iter().all(|play| play.score <= best.score));
                board = board.apply(&best);
            }
        }
        assert!(board.tiles().count() > 4);
        Ok(())
    }

    #[test]
    fn test_apply_round_trip() -> Result<()> {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        let board = Board::default();
        let rack = "rusta".parse()?;
        let best = solver.best_play(&rack, &board).unwrap();
        let played = board.apply(&best);
        for pos in best.positions() {
            assert!(played.is_occupied(pos));
        }
        let again = solver.all_plays(&rack, &played);
        assert!(!again
            .iter()
            .any(|play| play.position == best.position && play.direction == best.direction
                && play.word == best.word));
        Ok(())
    }

    #[test]
    fn test_transposition_symmetry() -> Result<()> {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        let board = Board::default().with_state_from_strings(&[
            "|||||||||||||||||",
            "|...............|",
            "|...............|",
            "|...............|",
            "|...............|",
            "|...............|",
            "|...............|",
            "|......S........|",
            "|.....CART......|",
            "|......T........|",
            "|...............|",
            "|...............|",
            "|...............|",
            "|...............|",
            "|...............|",
            "|...............|",
            "|||||||||||||||||",
        ])?;
        let rack: Rack = "tsa*".parse()?;
        let plays = solver.all_plays(&rack, &board);
        assert!(!plays.is_empty());
        let transposed: Vec<Move> = solver
            .all_plays(&rack, &board.transpose())
            .into_iter()
            .map(Move::transposed)
            .collect();
        assert_eq!(sorted(&plays), sorted(&transposed));
        Ok(())
    }

    #[test]
    fn test_top_plays() -> Result<()> {
        let dictionary = test_dictionary();
        let solver = Solver::new(&dictionary);
        let board = Board::default();
        let rack = "rusta".parse()?;
        let top = solver.top_plays(&rack, &board, 5);
        assert_eq!(top.len(), 5);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(Some(&top[0]), solver.best_play(&rack, &board).as_ref());
        Ok(())
    }

    #[test]
    fn test_with_scorer() -> Result<()> {
        let dictionary = test_dictionary();
        let board = Board::new(Grid::from_strings(&["..*.."])?);
        let solver = Solver::new(&dictionary).with_scorer(Scorer::new().with_bingo(3, 50));
        let best = solver.best_play(&"cab".parse()?, &board).unwrap();
        assert_eq!(best.score, 64);
        assert_eq!(board.apply(&best).square(Position::new(0, 4)), Square::Empty);
        Ok(())
    }
}
