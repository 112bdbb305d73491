use crate::grid::{Cell, Grid, Layout};
use crate::{Direction, Error, Move, Position, Square, Tile, Word};
use std::convert::TryFrom;
use std::fmt;

/// Display the board state, one line per row.
/// Border squares show as "|", empty squares as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

impl From<Layout> for Board {
    fn from(layout: Layout) -> Self {
        Self::new(Grid::from(layout))
    }
}

/// The contents of the four squares around a position.
/// Squares off the board are `Border`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub north: Square,
    pub south: Square,
    pub east: Square,
    pub west: Square,
}

impl Neighbors {
    pub fn any_letter(&self) -> bool {
        [self.north, self.south, self.east, self.west]
            .iter()
            .any(Square::is_letter)
    }
}

/// The letters around a square along one direction: the word that a tile on that
/// square would form or extend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossWord {
    /// First square of the word; the square under test if `prefix` is empty
    pub start: Position,
    pub direction: Direction,
    /// letters before the square
    pub prefix: Word,
    /// letters after the square
    pub suffix: Word,
}

impl CrossWord {
    /// True if no letters touch the square in this direction.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Return the complete word with `tile` on the square under test.
    pub fn with(&self, tile: Tile) -> Word {
        self.prefix
            .iter()
            .copied()
            .chain(std::iter::once(tile))
            .chain(self.suffix.iter().copied())
            .collect()
    }
}

/// Shows the square under test as "."
impl fmt::Display for CrossWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.prefix, self.suffix)
    }
}

/// The state of a board: the tiles that were played, and the bonus grid.
/// * A grid of squares that are empty, hold a tile, or are not part of the board,
/// * the bonus [`Grid`](crate::Grid) of the same shape.
///
/// Rows and columns are indexed from the top left corner of the grid, border included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    squares: Vec<Vec<Square>>,
}

impl Board {
    /// Create a new empty board with the bonus layout of `grid`.
    ///
    /// ## Examples
    ///```
    /// use wordplay_solver::{Board, Grid, Layout};
    ///
    /// let board = Board::new(Grid::from(Layout::WordsWithFriends));
    /// assert!(board.is_empty());
    ///```
    #[must_use]
    pub fn new(grid: Grid) -> Board {
        let squares = grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_border() {
                            Square::Border
                        } else {
                            Square::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        Board { grid, squares }
    }

    /// Parse the board state from a list of strings, one per row of the grid.
    ///
    /// Uppercase letters are regular tiles, lowercase letters are blanks played as
    /// that letter. Empty squares are "." or " ". Border squares must be "|", "." or " ".
    /// ## Errors
    /// If the list of strings has wrong dimensions, or a character does not fit its square.
    ///
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Grid, Error};
    /// let grid = Grid::from_strings(&[".....", "..*..", "....."])?;
    /// let board = Board::new(grid).with_state_from_strings(&[
    ///     ".....",
    ///     ".CaB.",
    ///     ".....",
    /// ])?;
    /// assert!(!board.is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Set board state from list of strings
    /// ## Errors
    /// See [`with_state_from_strings`](Board::with_state_from_strings).
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        if rows.len() != self.rows() {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut squares = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != self.cols() {
                return Err(Error::InvalidRowLength {
                    row: r,
                    len,
                    expected: self.cols(),
                });
            }
            let parsed = row
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    let border = self.grid[r][c].is_border();
                    match ch {
                        '|' | '.' | ' ' if border => Ok(Square::Border),
                        '.' | ' ' => Ok(Square::Empty),
                        _ if border => Err(Error::InvalidSquare { row: r, col: c, ch }),
                        _ => Tile::try_from(ch)
                            .map(Square::Letter)
                            .map_err(|_| Error::InvalidSquare { row: r, col: c, ch }),
                    }
                })
                .collect::<Result<Vec<_>, Error>>()?;
            squares.push(parsed);
        }
        self.squares = squares;
        Ok(())
    }

    /// Number of rows, border included
    pub fn rows(&self) -> usize {
        self.squares.len()
    }

    /// Number of columns, border included
    pub fn cols(&self) -> usize {
        self.squares.first().map_or(0, Vec::len)
    }

    /// Return the bonus grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the squares of row `r`
    pub fn row(&self, r: usize) -> &[Square] {
        &self.squares[r]
    }

    /// Return the square at `pos`. Squares off the board are `Border`.
    pub fn square(&self, pos: Position) -> Square {
        self.squares
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(Square::Border)
    }

    /// Return the bonus cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid.cell(pos)
    }

    /// Check if the square at `pos` holds a tile.
    ///
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Direction, Error, Move, Position};
    /// let board = Board::default();
    /// let play = Move::new(0, Position::new(8, 8), Direction::Across, "RUST".parse()?);
    /// let board = board.apply(&play);
    /// assert!(board.is_occupied(Position::new(8, 11)));
    /// assert!(!board.is_occupied(Position::new(8, 12)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.square(pos).is_letter()
    }

    /// Check if `pos` is an empty start square.
    pub fn is_start(&self, pos: Position) -> bool {
        self.cell(pos).is_start() && self.square(pos) == Square::Empty
    }

    /// True if no tile has been played yet.
    pub fn is_empty(&self) -> bool {
        !self.squares.iter().flatten().any(Square::is_letter)
    }

    /// Iterate over the tiles on the board.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.squares.iter().flatten().filter_map(Square::tile)
    }

    /// The squares north, south, east and west of `pos`.
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        let at = |p: Option<Position>| p.map_or(Square::Border, |p| self.square(p));
        Neighbors {
            north: at(pos.back(Direction::Down)),
            south: at(Some(pos.step(Direction::Down, 1))),
            east: at(Some(pos.step(Direction::Across, 1))),
            west: at(pos.back(Direction::Across)),
        }
    }

    /// Return the board with rows and columns swapped, bonus grid included.
    /// Vertical plays on a board are horizontal plays on its transpose.
    pub fn transpose(&self) -> Board {
        let squares = (0..self.cols())
            .map(|c| self.squares.iter().map(|row| row[c]).collect())
            .collect();
        Board {
            grid: self.grid.transpose(),
            squares,
        }
    }

    /// Returns the letters before and after `pos` along `direction`, up to the
    /// first square that has no letter.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Direction, Grid, Position, Error};
    /// let board = Board::new(Grid::empty(5, 1)).with_state_from_strings(&["C", "A", ".", "T", "."])?;
    /// let cross = board.cross_word_at(Position::new(2, 0), Direction::Down);
    /// assert_eq!(cross.start, Position::new(0, 0));
    /// assert_eq!(cross.to_string(), "CA.T");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn cross_word_at(&self, pos: Position, direction: Direction) -> CrossWord {
        let mut start = pos;
        let mut prefix = Vec::new();
        while let Some(prev) = start.back(direction) {
            match self.square(prev) {
                Square::Letter(tile) => {
                    prefix.push(tile);
                    start = prev;
                }
                _ => break,
            }
        }
        let mut suffix = Word::new();
        let mut next = pos.step(direction, 1);
        while let Square::Letter(tile) = self.square(next) {
            suffix.push(tile);
            next = next.step(direction, 1);
        }
        CrossWord {
            start,
            direction,
            prefix: prefix.into_iter().rev().collect(),
            suffix,
        }
    }

    /// Returns the tiles that `play` takes from the rack, in the order of use.
    /// Letters of the word that are already on the board are not included.
    /// ## Errors
    /// - If the word does not fit on the board, or crosses a border square.
    /// - If a square already holds a different letter.
    pub fn tiles_used(&self, play: &Move) -> Result<Word, Error> {
        let mut used = Word::new();
        for (pos, tile) in play.positions().zip(play.word.iter()) {
            match self.square(pos) {
                Square::Letter(existing) if existing.label() == tile.label() => {}
                Square::Letter(_) => {
                    return Err(Error::TileReplaceError {
                        row: pos.row,
                        col: pos.col,
                    })
                }
                Square::Border => {
                    return Err(Error::TilePlacementError {
                        row: play.position.row,
                        col: play.position.col,
                        direction: play.direction,
                        len: play.word.len(),
                    })
                }
                Square::Empty | Square::Anchor(_) => used.push(*tile),
            }
        }
        Ok(used)
    }

    /// Play `play` and return the new board.
    /// A square that already holds the same letter is kept as it is.
    /// ## Errors
    /// See [`tiles_used`](Board::tiles_used).
    pub fn try_apply(&self, play: &Move) -> Result<Board, Error> {
        self.tiles_used(play)?;
        let mut board = self.clone();
        for (pos, tile) in play.positions().zip(play.word.iter()) {
            let square = &mut board.squares[pos.row][pos.col];
            if !square.is_letter() {
                *square = Square::Letter(*tile);
            }
        }
        Ok(board)
    }

    /// Play `play` and return the new board.
    ///
    /// # Panics
    /// If the move does not fit on the board or conflicts with tiles on it.
    /// Moves found by the [`Solver`](crate::Solver) for this board always fit;
    /// use [`try_apply`](Board::try_apply) for moves from other sources.
    pub fn apply(&self, play: &Move) -> Board {
        match self.try_apply(play) {
            Ok(board) => board,
            Err(err) => panic!("illegal move {}: {:?}", play, err),
        }
    }

    /// Get the board state as a list of strings, one per row.
    pub fn to_strings(&self) -> Vec<String> {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Letter(tile) => tile.to_string(),
                        Square::Border => String::from("|"),
                        Square::Empty | Square::Anchor(_) => String::from("."),
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        "|||||||",
        "|..C..|",
        "|.HAT.|",
        "|..B..|",
        "|.....|",
        "|||||||",
    ];

    fn test_grid() -> Grid {
        Grid::from_strings(&[
            "|||||||", "|3...3|", "|.:.:.|", "|..*..|", "|.;.2.|", "|||||||",
        ])
        .unwrap()
    }

    fn test_board() -> Result<Board> {
        Board::new(test_grid()).with_state_from_strings(TEST_STATE)
    }

    #[test]
    fn test_state() -> Result<()> {
        let board = test_board()?;
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        assert!(board.is_occupied(Position::new(1, 3)));
        assert!(!board.is_occupied(Position::new(1, 2)));
        assert_eq!(board.square(Position::new(0, 3)), Square::Border);
        assert_eq!(board.square(Position::new(10, 10)), Square::Border);
        assert_eq!(board.to_strings(), TEST_STATE);
        assert_eq!(board.tiles().count(), 5);
        Ok(())
    }

    #[test]
    fn test_neighbors() -> Result<()> {
        let board = test_board()?;
        let n = board.neighbors(Position::new(2, 1));
        assert_eq!(n.east, Square::Letter(Tile::try_from('H')?));
        assert_eq!(n.west, Square::Border);
        assert_eq!(n.north, Square::Empty);
        assert!(n.any_letter());
        assert!(!board.neighbors(Position::new(4, 1)).any_letter());
        let corner = board.neighbors(Position::new(0, 0));
        assert_eq!(corner.north, Square::Border);
        assert_eq!(corner.west, Square::Border);
        Ok(())
    }

    #[test]
    fn test_transpose() -> Result<()> {
        let board = test_board()?;
        let t = board.transpose();
        assert_eq!(t.rows(), 7);
        assert_eq!(t.cols(), 6);
        assert_eq!(t.to_strings()[3], "|CAB.|");
        assert_eq!(t.cell(Position::new(3, 3)), board.cell(Position::new(3, 3)));
        assert_eq!(t.cell(Position::new(4, 2)), board.cell(Position::new(2, 4)));
        assert_eq!(t.transpose(), board);
        Ok(())
    }

    #[test]
    fn test_cross_word() -> Result<()> {
        let board = test_board()?;
        let cross = board.cross_word_at(Position::new(4, 3), Direction::Down);
        assert_eq!(cross.start, Position::new(1, 3));
        assert_eq!(cross.to_string(), "CAB.");
        assert_eq!(cross.with(Tile::try_from('s')?).to_string(), "CABs");
        let cross = board.cross_word_at(Position::new(2, 5), Direction::Across);
        assert_eq!(cross.start, Position::new(2, 2));
        assert_eq!(cross.to_string(), "HAT.");
        let lonely = board.cross_word_at(Position::new(4, 1), Direction::Across);
        assert!(lonely.is_empty());
        assert_eq!(lonely.start, Position::new(4, 1));
        Ok(())
    }

    #[test]
    fn test_apply() -> Result<()> {
        let board = test_board()?;
        let play = Move::new(0, Position::new(4, 1), Direction::Across, "TeN".parse()?);
        let played = board.apply(&play);
        assert_eq!(played.to_strings()[4], "|TeN..|");
        // the original board is unchanged
        assert_eq!(board.to_strings()[4], "|.....|");
        Ok(())
    }

    #[test]
    fn test_apply_over_same_letter() -> Result<()> {
        let board = test_board()?;
        let play = Move::new(0, Position::new(1, 3), Direction::Down, "CABS".parse()?);
        let used = board.tiles_used(&play)?;
        assert_eq!(used.to_string(), "S");
        let played = board.try_apply(&play)?;
        assert_eq!(played.square(Position::new(4, 3)), Square::Letter(Tile::try_from('S')?));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "TileReplaceError { row: 2, col: 3 }")]
    fn test_tile_replace_error() {
        let board = test_board().unwrap();
        let play = Move::new(0, Position::new(2, 2), Direction::Across, "HOT".parse().unwrap());
        board.try_apply(&play).unwrap();
    }

    #[test]
    #[should_panic(
        expected = "TilePlacementError { row: 4, col: 3, direction: Across, len: 4 }"
    )]
    fn test_tile_placement_error() {
        let board = test_board().unwrap();
        let play = Move::new(0, Position::new(4, 3), Direction::Across, "RUST".parse().unwrap());
        board.try_apply(&play).unwrap();
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn test_apply_conflict_panics() {
        let board = test_board().unwrap();
        let play = Move::new(0, Position::new(1, 3), Direction::Down, "COB".parse().unwrap());
        board.apply(&play);
    }

    #[test]
    fn test_invalid_state() {
        let board = Board::new(test_grid());
        assert!(matches!(
            board.clone().with_state_from_strings(&["|||||||"]),
            Err(Error::InvalidRowCount(1))
        ));
        let mut state = TEST_STATE.to_vec();
        state[0] = "||X||||";
        assert!(matches!(
            board.clone().with_state_from_strings(&state[..]),
            Err(Error::InvalidSquare { row: 0, col: 2, ch: 'X' })
        ));
        state[0] = "|||||||";
        state[4] = "|.#...|";
        assert!(matches!(
            board.with_state_from_strings(&state[..]),
            Err(Error::InvalidSquare { row: 4, col: 2, ch: '#' })
        ));
    }

    #[test]
    fn test_start() {
        let board = Board::new(test_grid());
        assert!(board.is_start(Position::new(3, 3)));
        assert!(!board.is_start(Position::new(3, 2)));
        assert!(board.is_empty());
    }
}
