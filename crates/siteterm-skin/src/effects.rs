//! Digital rain: columns of glyphs falling behind the dark theme.
//!
//! The effect is a grid of columns, each with a drop row. Every tick draws
//! one random glyph at each drop and moves the drop down a row. Drops that
//! have left the bottom occasionally restart at the top, which staggers the
//! columns over time.

/// Glyphs the rain is drawn from.
pub const RAIN_GLYPHS: &str =
    "01010100110101ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789$+-*/=%\"'&_(),.;:?!\\|{}<>[]^~";

/// Chance per tick that a drop past the bottom restarts.
const RESET_CHANCE: f64 = 0.025;

/// One glyph to draw this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainCell {
    pub column: u16,
    pub row: u16,
    pub glyph: char,
}

/// Rain state for a grid of `columns` x `rows` cells.
#[derive(Debug, Clone)]
pub struct RainEffect {
    glyphs: Vec<char>,
    drops: Vec<u16>,
    rows: u16,
    rng: fastrand::Rng,
    enabled: bool,
}

impl RainEffect {
    pub fn new(columns: u16, rows: u16, seed: u64) -> Self {
        let mut effect = Self {
            glyphs: RAIN_GLYPHS.chars().collect(),
            drops: Vec::new(),
            rows,
            rng: fastrand::Rng::with_seed(seed),
            enabled: true,
        };
        effect.resize(columns, rows);
        effect
    }

    /// Disabled rain never produces cells (reduced-motion preference).
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Adapt to a new grid size; every drop restarts at row 1.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.rows = rows;
        self.drops = vec![1; usize::from(columns)];
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Current drop row of each column.
    pub fn drops(&self) -> &[u16] {
        &self.drops
    }

    /// Advance one frame and return the glyphs to draw.
    ///
    /// Cells below the grid are still reported; hosts clip them.
    pub fn tick(&mut self) -> Vec<RainCell> {
        if !self.enabled {
            return Vec::new();
        }
        let mut cells = Vec::with_capacity(self.drops.len());
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let glyph = self.glyphs[self.rng.usize(..self.glyphs.len())];
            cells.push(RainCell {
                column: column as u16,
                row: *drop,
                glyph,
            });
            if *drop > self.rows && self.rng.f64() < RESET_CHANCE {
                *drop = 0;
            }
            *drop = drop.saturating_add(1);
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_every_drop_at_one() {
        let rain = RainEffect::new(8, 10, 7);
        assert_eq!(rain.columns(), 8);
        assert!(rain.drops().iter().all(|d| *d == 1));
    }

    #[test]
    fn tick_draws_one_cell_per_column() {
        let mut rain = RainEffect::new(5, 10, 1);
        let cells = rain.tick();
        assert_eq!(cells.len(), 5);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(usize::from(cell.column), i);
            assert_eq!(cell.row, 1);
            assert!(RAIN_GLYPHS.contains(cell.glyph));
        }
        assert!(rain.drops().iter().all(|d| *d == 2));
    }

    #[test]
    fn drops_inside_grid_never_reset() {
        let mut rain = RainEffect::new(4, 50, 3);
        for _ in 0..50 {
            rain.tick();
        }
        assert!(rain.drops().iter().all(|d| *d == 51));
    }

    #[test]
    fn drops_past_bottom_eventually_reset() {
        let mut rain = RainEffect::new(16, 2, 99);
        let mut reset_seen = false;
        for _ in 0..2000 {
            rain.tick();
            if rain.drops().iter().any(|d| *d == 1) {
                reset_seen = true;
                break;
            }
        }
        assert!(reset_seen);
    }

    #[test]
    fn resize_restarts_drops() {
        let mut rain = RainEffect::new(3, 10, 5);
        rain.tick();
        rain.tick();
        rain.resize(6, 20);
        assert_eq!(rain.columns(), 6);
        assert!(rain.drops().iter().all(|d| *d == 1));
    }

    #[test]
    fn disabled_rain_draws_nothing() {
        let mut rain = RainEffect::new(3, 10, 5);
        rain.set_enabled(false);
        assert!(!rain.is_enabled());
        assert!(rain.tick().is_empty());
        assert!(rain.drops().iter().all(|d| *d == 1));
    }

    #[test]
    fn same_seed_same_rain() {
        let mut a = RainEffect::new(10, 3, 42);
        let mut b = RainEffect::new(10, 3, 42);
        for _ in 0..100 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
