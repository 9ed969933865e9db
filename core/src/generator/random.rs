use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Generation strategy that keeps rebuilding from an empty grid until every
/// selected word is placed, then fills the remaining cells from the chosen
/// alphabet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomPuzzleGenerator {
    seed: u64,
    fill: FillAlphabet,
}

impl RandomPuzzleGenerator {
    pub fn new(seed: u64, fill: FillAlphabet) -> Self {
        Self { seed, fill }
    }
}

impl PuzzleGenerator for RandomPuzzleGenerator {
    fn generate(self, config: PuzzleConfig, pool: &[String]) -> Result<Puzzle> {
        validate(config, pool)?;

        let mut rng = SmallRng::seed_from_u64(self.seed);

        // shuffle-and-take, no replacement
        let mut candidates: Vec<&str> = pool.iter().map(String::as_str).collect();
        candidates.shuffle(&mut rng);
        candidates.truncate(config.word_count);

        for _ in 0..MAX_GRID_RETRIES {
            let Some((cells, placements)) = try_place_all(&mut rng, config, &candidates)
            else {
                continue;
            };
            let grid = fill_empty_cells(&mut rng, self.fill, &cells, &placements);
            return Ok(Puzzle::new(grid, placements));
        }

        Err(PuzzleError::GenerationExhausted)
    }
}

fn validate(config: PuzzleConfig, pool: &[String]) -> Result<()> {
    if config.word_count == 0 || config.word_count > pool.len() {
        return Err(PuzzleError::InvalidConfig);
    }
    let max_len = config.max_word_len();
    for word in pool {
        let len = word.chars().count();
        if len < 2 || len > max_len {
            return Err(PuzzleError::InvalidConfig);
        }
    }
    Ok(())
}

type DraftGrid = Array2<Option<char>>;

/// One full placement pass; `None` when any word runs out of attempts.
fn try_place_all(
    rng: &mut impl Rng,
    config: PuzzleConfig,
    words: &[&str],
) -> Option<(DraftGrid, Vec<WordPlacement>)> {
    let mut cells = DraftGrid::default((config.rows, config.cols).to_nd_index());
    let mut placements = Vec::with_capacity(words.len());

    for &word in words {
        let placement = place_word(rng, config, &mut cells, word)?;
        placements.push(placement);
    }

    Some((cells, placements))
}

fn place_word(
    rng: &mut impl Rng,
    config: PuzzleConfig,
    cells: &mut DraftGrid,
    word: &str,
) -> Option<WordPlacement> {
    let board = (config.rows, config.cols);
    let mut placement = WordPlacement::new(word, (0, 0), Orientation::Horizontal);

    for _ in 0..MAX_WORD_ATTEMPTS {
        placement.orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        placement.start = (
            rng.random_range(0..config.rows),
            rng.random_range(0..config.cols),
        );

        if !placement.fits(board) || !buffer_is_clear(cells, board, &placement) {
            continue;
        }

        for (pos, ch) in placement.letters() {
            cells[pos.to_nd_index()] = Some(ch);
        }
        return Some(placement);
    }

    None
}

/// The word's span plus a one-cell margin must be entirely empty; placed
/// words never touch, not even diagonally.
fn buffer_is_clear(cells: &DraftGrid, (rows, cols): Coord2, placement: &WordPlacement) -> bool {
    let span = placement.cells();
    let (end_row, end_col) = *span.last().expect("placed words are never empty");

    let r0 = placement.start.0.saturating_sub(1);
    let c0 = placement.start.1.saturating_sub(1);
    let r1 = (end_row + 1).min(rows - 1);
    let c1 = (end_col + 1).min(cols - 1);

    for row in r0..=r1 {
        for col in c0..=c1 {
            if cells[(row, col).to_nd_index()].is_some() {
                return false;
            }
        }
    }
    true
}

fn fill_empty_cells(
    rng: &mut impl Rng,
    alphabet: FillAlphabet,
    cells: &DraftGrid,
    placements: &[WordPlacement],
) -> LetterGrid {
    let mut grid = refill(rng, alphabet, cells);
    for _ in 1..MAX_FILL_PASSES {
        if stray_occurrence(&grid, placements).is_none() {
            return grid;
        }
        grid = refill(rng, alphabet, cells);
    }

    if let Some(word) = stray_occurrence(&grid, placements) {
        log::warn!(
            "Filler kept a stray copy of {:?} after {} passes",
            word,
            MAX_FILL_PASSES
        );
    }
    grid
}

fn refill(rng: &mut impl Rng, alphabet: FillAlphabet, cells: &DraftGrid) -> LetterGrid {
    LetterGrid::from_cells(cells.map(|&cell| cell.unwrap_or_else(|| alphabet.sample(rng))))
}

/// A target word readable somewhere other than its own placement.
fn stray_occurrence<'a>(grid: &LetterGrid, placements: &'a [WordPlacement]) -> Option<&'a str> {
    let (rows, cols) = grid.size();
    let mut lines = Vec::with_capacity(rows as usize + cols as usize);
    lines.extend((0..rows).map(|row| grid.row_string(row)));
    lines.extend((0..cols).map(|col| grid.col_string(col)));

    for placement in placements {
        let expected = placements
            .iter()
            .filter(|other| other.word == placement.word)
            .count();
        let seen: usize = lines
            .iter()
            .map(|line| line.matches(placement.word.as_str()).count())
            .sum();
        if seen > expected {
            return Some(&placement.word);
        }
    }
    None
}
