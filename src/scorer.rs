use crate::board::Board;
use crate::{Direction, Error, Move, Position, Word};

/// Calculates the points for a word placed on a board.
///
/// Bonus squares only count for the tiles that are placed by the play. Every
/// new tile that touches tiles in the perpendicular direction also scores the
/// cross word it forms.
/// An optional bingo bonus rewards plays that use many tiles; it is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    /// (tiles, bonus): `bonus` points for plays that place at least `tiles` tiles
    bingo: Option<(usize, u32)>,
}

impl Scorer {
    pub fn new() -> Scorer {
        Scorer::default()
    }

    /// Add `bonus` points to plays that place `tiles` or more tiles.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Direction, Position, Scorer, Error};
    /// let scorer = Scorer::new().with_bingo(3, 50);
    /// let board = Board::default();
    /// let points = scorer.score(&board, Position::new(8, 8), Direction::Across, &"CAB".parse()?)?;
    /// assert_eq!(points, 14 + 50);
    /// # Ok::<(), Error>(())
    /// ```
    #[must_use]
    pub fn with_bingo(self, tiles: usize, bonus: u32) -> Scorer {
        Scorer {
            bingo: Some((tiles, bonus)),
        }
    }

    /// Calculates the score of `word` placed at `position` in `direction`, cross words included.
    ///
    /// ## Errors
    /// - If the word does not fit on the board.
    /// - If it would replace a different tile on the board.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Direction, Position, Scorer, Error};
    /// let board = Board::default();
    /// let points = Scorer::new().score(&board, Position::new(8, 8), Direction::Across, &"CAB".parse()?)?;
    /// assert_eq!(points, 14);
    /// # Ok::<(), Error>(())
    /// ```
    /// The `C` is on the start square, which counts as a double word square:
    /// `2 x (3 + 1 + 3) = 14`.
    pub fn score(
        &self,
        board: &Board,
        position: Position,
        direction: Direction,
        word: &Word,
    ) -> Result<u32, Error> {
        let play = Move::new(0, position, direction, word.clone());
        board.tiles_used(&play)?;
        Ok(self.score_unchecked(board, position, direction, word))
    }

    /// Score a play that is known to fit on the board.
    pub(crate) fn score_unchecked(
        &self,
        board: &Board,
        position: Position,
        direction: Direction,
        word: &Word,
    ) -> u32 {
        self.word_points(board, position, direction, word, true)
    }

    fn word_points(
        &self,
        board: &Board,
        start: Position,
        direction: Direction,
        word: &Word,
        include_cross_words: bool,
    ) -> u32 {
        let mut word_multiplier = 1;
        let mut word_points = 0;
        let mut total_points = 0;
        let mut tiles_placed = 0;
        for (n, tile) in word.iter().enumerate() {
            let pos = start.step(direction, n);
            let mut letter_points = tile.points();
            if !board.is_occupied(pos) {
                tiles_placed += 1;
                let cell = board.cell(pos);
                letter_points *= cell.letter_multiplier();
                word_multiplier *= cell.word_multiplier();
                if include_cross_words {
                    let cross = board.cross_word_at(pos, direction.perpendicular());
                    if !cross.is_empty() {
                        total_points += self.word_points(
                            board,
                            cross.start,
                            cross.direction,
                            &cross.with(*tile),
                            false,
                        );
                    }
                }
            }
            word_points += letter_points;
        }
        total_points += word_points * word_multiplier;
        match self.bingo {
            Some((tiles, bonus)) if include_cross_words && tiles_placed >= tiles => {
                total_points += bonus;
            }
            _ => {}
        }
        total_points
    }
}
