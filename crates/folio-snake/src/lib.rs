//! Snake Game Engine
//!
//! A fixed-tick simulation on a 20x20 grid. The engine knows nothing about
//! timers or rendering technology: the owner calls [`SnakeGame::tick`] once
//! per period and reads the grid back with [`SnakeGame::render_rows`].
//!
//! Direction changes apply immediately and may reverse the snake into its own
//! body. Food is placed anywhere on the grid, including on the snake.

use std::collections::VecDeque;

use log::{debug, info};
use rand::Rng;
use rand_core::RngCore;

// ============================================================================
// Constants
// ============================================================================

/// Cells per side of the square board
pub const GRID_SIZE: i32 = 20;

/// Where a fresh snake starts
pub const START_CELL: Cell = Cell::new(10, 10);

/// Where the first food item sits
pub const START_FOOD: Cell = Cell::new(15, 15);

const SNAKE_GLYPH: char = '#';
const FOOD_GLYPH: char = '*';
const EMPTY_GLYPH: char = '.';

// ============================================================================
// Grid Types
// ============================================================================

/// A grid cell. Coordinates may be negative only transiently, while checking
/// a candidate head against the walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Heading of the snake; `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Lifecycle of one game. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over
    Idle,
    /// The snake moved without eating
    Moved,
    /// The snake ate and grew by one cell
    Ate,
    /// The head left the board
    HitWall,
    /// The head ran into the body
    HitSelf,
}

// ============================================================================
// Snake Game
// ============================================================================

/// State of one snake game, created fresh each time the mode is entered
#[derive(Debug, Clone)]
pub struct SnakeGame {
    /// Head first; never holds duplicates
    body: VecDeque<Cell>,
    food: Cell,
    direction: Direction,
    score: u32,
    status: Status,
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGame {
    /// A one-cell snake at the centre heading up
    pub fn new() -> Self {
        Self::with_state([START_CELL], START_FOOD, Direction::Up)
    }

    /// Start from an explicit body (head first), food cell and heading
    pub fn with_state<I>(body: I, food: Cell, direction: Direction) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self {
            body: body.into_iter().collect(),
            food,
            direction,
            score: 0,
            status: Status::Running,
        }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status == Status::Running
    }

    /// Change heading right away. Reversing into the body is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance one step
    pub fn tick<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.is_alive() {
            return TickOutcome::Idle;
        }
        let Some(head) = self.head() else {
            return TickOutcome::Idle;
        };

        let next = head.offset(self.direction);
        if !next.in_bounds() {
            return self.game_over(TickOutcome::HitWall);
        }
        if self.body.contains(&next) {
            return self.game_over(TickOutcome::HitSelf);
        }

        self.body.push_front(next);
        if next == self.food {
            self.score += 1;
            self.food = Cell::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
            debug!(
                "snake: ate at ({}, {}), score {}, food now ({}, {})",
                next.x, next.y, self.score, self.food.x, self.food.y
            );
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }

    fn game_over(&mut self, outcome: TickOutcome) -> TickOutcome {
        self.status = Status::GameOver;
        info!("snake: game over ({:?}), final score {}", outcome, self.score);
        outcome
    }

    /// The board as text, one string per row, top row first
    pub fn render_rows(&self) -> Vec<String> {
        (0..GRID_SIZE)
            .map(|y| {
                (0..GRID_SIZE)
                    .map(|x| {
                        let cell = Cell::new(x, y);
                        if self.body.contains(&cell) {
                            SNAKE_GLYPH
                        } else if cell == self.food {
                            FOOD_GLYPH
                        } else {
                            EMPTY_GLYPH
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Score banner shown above the board
    pub fn status_line(&self) -> String {
        match self.status {
            Status::Running => format!("Score: {} | Press ESC to exit", self.score),
            Status::GameOver => format!("Game Over! Final Score: {}", self.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn body_of(game: &SnakeGame) -> Vec<Cell> {
        game.body().iter().copied().collect()
    }

    #[test]
    fn test_new_game_defaults() {
        let game = SnakeGame::new();
        assert_eq!(body_of(&game), [Cell::new(10, 10)]);
        assert_eq!(game.food(), Cell::new(15, 15));
        assert_eq!(game.direction(), Direction::Up);
        assert_eq!(game.score(), 0);
        assert!(game.is_alive());
    }

    #[test]
    fn test_tick_moves_without_growth() {
        let mut rng = StepRng::new(0, 0);
        let mut game = SnakeGame::new();
        assert_eq!(game.tick(&mut rng), TickOutcome::Moved);
        assert_eq!(body_of(&game), [Cell::new(10, 9)]);
        assert!(game.is_alive());
    }

    #[test]
    fn test_wall_collision_keeps_body() {
        let mut rng = StepRng::new(0, 0);
        let mut game = SnakeGame::with_state([Cell::new(0, 10)], START_FOOD, Direction::Left);
        assert_eq!(game.tick(&mut rng), TickOutcome::HitWall);
        assert_eq!(body_of(&game), [Cell::new(0, 10)]);
        assert!(!game.is_alive());
        assert_eq!(game.status(), Status::GameOver);
    }

    #[test]
    fn test_far_walls() {
        let mut rng = StepRng::new(0, 0);
        let mut game = SnakeGame::with_state([Cell::new(19, 19)], START_FOOD, Direction::Down);
        assert_eq!(game.tick(&mut rng), TickOutcome::HitWall);
        let mut game = SnakeGame::with_state([Cell::new(19, 19)], START_FOOD, Direction::Right);
        assert_eq!(game.tick(&mut rng), TickOutcome::HitWall);
    }

    #[test]
    fn test_dead_game_ignores_ticks() {
        let mut rng = StepRng::new(0, 0);
        let mut game = SnakeGame::with_state([Cell::new(10, 0)], START_FOOD, Direction::Up);
        game.tick(&mut rng);
        assert_eq!(game.tick(&mut rng), TickOutcome::Idle);
        assert_eq!(body_of(&game), [Cell::new(10, 0)]);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut rng = StepRng::new(0, 0);
        let mut game = SnakeGame::with_state(
            [Cell::new(5, 5), Cell::new(5, 6)],
            Cell::new(5, 4),
            Direction::Up,
        );
        assert_eq!(game.tick(&mut rng), TickOutcome::Ate);
        assert_eq!(game.score(), 1);
        assert_eq!(body_of(&game), [Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)]);
        // A zero source always yields the corner
        assert_eq!(game.food(), Cell::new(0, 0));
    }

    #[test]
    fn test_food_can_land_on_body() {
        // Snake occupies the corner the zero source picks
        let mut rng = StepRng::new(0, 0);
        let mut game = SnakeGame::with_state([Cell::new(0, 1)], Cell::new(0, 0), Direction::Up);
        assert_eq!(game.tick(&mut rng), TickOutcome::Ate);
        assert_eq!(game.food(), Cell::new(0, 0));
        assert!(game.body().contains(&game.food()));
    }

    #[test]
    fn test_food_stays_on_board() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut game = SnakeGame::with_state([Cell::new(3, 3)], Cell::new(3, 2), Direction::Up);
            game.tick(&mut rng);
            assert!(game.food().in_bounds());
        }
    }

    #[test]
    fn test_reversal_bites_body() {
        let mut rng = StepRng::new(0, 0);
        let mut game = SnakeGame::with_state(
            [Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)],
            START_FOOD,
            Direction::Up,
        );
        game.set_direction(Direction::Down);
        assert_eq!(game.tick(&mut rng), TickOutcome::HitSelf);
        assert!(!game.is_alive());
        assert_eq!(game.body().len(), 3);
    }

    #[test]
    fn test_render_rows() {
        let game = SnakeGame::new();
        let rows = game.render_rows();
        assert_eq!(rows.len(), 20);
        assert!(rows.iter().all(|row| row.chars().count() == 20));
        assert_eq!(rows[10].chars().nth(10), Some('#'));
        assert_eq!(rows[15].chars().nth(15), Some('*'));
        assert_eq!(rows[0], ".".repeat(20));
    }

    #[test]
    fn test_status_line() {
        let mut rng = StepRng::new(0, 0);
        let mut game = SnakeGame::with_state([Cell::new(10, 0)], START_FOOD, Direction::Up);
        assert_eq!(game.status_line(), "Score: 0 | Press ESC to exit");
        game.tick(&mut rng);
        assert_eq!(game.status_line(), "Game Over! Final Score: 0");
    }
}
