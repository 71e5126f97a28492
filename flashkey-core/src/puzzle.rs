//! Sliding 8-puzzle board.
//!
//! The board is a 3x3 grid holding tiles 1..=8 and a blank (0). Shuffling
//! performs a bounded random walk of valid moves from the solved layout, so
//! every shuffled board is reachable from (and can reach) the solved state.

use rand::Rng;

/// Grid side length.
pub const SIDE: usize = 3;
/// Total cell count.
pub const CELLS: usize = SIDE * SIDE;
/// Random-walk length used by [`Board::shuffle`].
pub const SHUFFLE_STEPS: usize = 100;

/// The winning layout.
pub const SOLVED: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// A puzzle board plus its move counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [u8; CELLS],
    blank: usize,
    moves: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl Board {
    /// The solved board.
    #[must_use]
    pub const fn solved() -> Self {
        Self {
            cells: SOLVED,
            blank: CELLS - 1,
            moves: 0,
        }
    }

    /// A freshly shuffled board.
    #[must_use]
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut board = Self::solved();
        board.shuffle(rng);
        board
    }

    #[must_use]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells == SOLVED
    }

    /// Indices adjacent to the blank cell.
    fn slidable(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(4);
        if self.blank >= SIDE {
            indices.push(self.blank - SIDE);
        }
        if self.blank < CELLS - SIDE {
            indices.push(self.blank + SIDE);
        }
        if self.blank % SIDE != 0 {
            indices.push(self.blank - 1);
        }
        if self.blank % SIDE != SIDE - 1 {
            indices.push(self.blank + 1);
        }
        indices
    }

    /// Whether the tile at `index` sits next to the blank.
    #[must_use]
    pub fn can_slide(&self, index: usize) -> bool {
        if index >= CELLS {
            return false;
        }
        let same_row = index / SIDE == self.blank / SIDE;
        let row_neighbor = same_row && index.abs_diff(self.blank) == 1;
        let column_neighbor = index.abs_diff(self.blank) == SIDE;
        row_neighbor || column_neighbor
    }

    /// Slide the tile at `index` into the blank. Returns `true` when a move
    /// was made.
    pub fn slide(&mut self, index: usize) -> bool {
        if !self.can_slide(index) {
            return false;
        }
        self.cells.swap(index, self.blank);
        self.blank = index;
        self.moves += 1;
        true
    }

    /// Re-randomize the board and reset the move counter.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cells = SOLVED;
        self.blank = CELLS - 1;
        for _ in 0..SHUFFLE_STEPS {
            let neighbors = self.slidable();
            let pick = neighbors[rng.gen_range(0..neighbors.len())];
            self.cells.swap(pick, self.blank);
            self.blank = pick;
        }
        self.moves = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Inversion count over the tiles, blank excluded. For a 3-wide board a
    /// layout is reachable from the solved state iff this count is even.
    fn inversions(cells: &[u8; CELLS]) -> usize {
        let tiles: Vec<u8> = cells.iter().copied().filter(|&t| t != 0).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn starts_solved() {
        let board = Board::solved();
        assert!(board.is_solved());
        assert_eq!(board.moves(), 0);
    }

    #[test]
    fn only_neighbors_of_the_blank_move() {
        let mut board = Board::solved();
        // Blank is bottom-right (index 8); 5 and 7 are its neighbors.
        assert!(!board.slide(0));
        assert!(!board.slide(4));
        assert!(board.slide(7));
        assert_eq!(board.moves(), 1);
        assert!(!board.is_solved());
    }

    #[test]
    fn sliding_back_restores_the_board() {
        let mut board = Board::solved();
        assert!(board.slide(5));
        assert!(board.slide(8));
        // Blank returned to the corner by the inverse pair of moves.
        assert!(board.is_solved());
        assert_eq!(board.moves(), 2);
    }

    #[test]
    fn shuffled_boards_are_permutations() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let board = Board::shuffled(&mut rng);
            let mut seen = board.cells.to_vec();
            seen.sort_unstable();
            assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
            assert_eq!(board.moves(), 0);
        }
    }

    #[test]
    fn shuffled_boards_stay_solvable() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let board = Board::shuffled(&mut rng);
            assert_eq!(
                inversions(board.cells()) % 2,
                0,
                "shuffle must preserve solvability: {:?}",
                board.cells()
            );
        }
    }

    #[test]
    fn blank_tracks_the_zero_cell() {
        let mut rng = SmallRng::seed_from_u64(3);
        let board = Board::shuffled(&mut rng);
        assert_eq!(board.cells()[board.blank], 0);
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let mut board = Board::solved();
        assert!(!board.slide(CELLS));
    }
}
