use std::fmt;

use log::{debug, info, warn};
use rand::Rng;

use super::block::Block;

/// Amount of time between two ticks of the game.
pub const MILLIS_BETWEEN_FRAMES: u64 = 150;

/// Width of the board.
pub const WIDTH: i32 = 400;
/// Height of the board.
pub const HEIGHT: i32 = 400;

/// Size of every snake block.
pub const SNAKE_SIZE: (i32, i32) = (20, 20);
/// Distance the head moves each tick.
pub const SNAKE_SPEED: i32 = 20;
/// Where the head of a new snake starts (80% of the board).
pub const SNAKE_POSITION: (i32, i32) = (WIDTH * 4 / 5, HEIGHT * 4 / 5);

/// Size of the snack.
pub const SNACK_SIZE: (i32, i32) = (20, 20);
/// Where the first snack of a round is placed (20% of the board).
pub const SNACK_POSITION: (i32, i32) = (WIDTH / 5, HEIGHT / 5);

/// Number of random spots tried before a snack is allowed to land on the snake.
pub const MAX_SNACK_ATTEMPTS: usize = 64;

type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    EmptySnake,
    LengthMismatch { blocks: usize, length: usize },
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::EmptySnake => write!(f, "snake needs at least one block"),
            SnakeError::LengthMismatch { blocks, length } => {
                write!(f, "snake has {blocks} blocks but its length is {length}")
            }
        }
    }
}

impl std::error::Error for SnakeError {}

/// Compass direction the snake travels in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit step in screen coordinates, where y grows downwards.
    #[must_use]
    pub fn value(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Directional input handed to [`GameState::timestep`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Left,
    Right,
    Up,
    Down,
}

impl KeyPress {
    pub const VARIANTS: &'static [KeyPress] = &[Self::Left, Self::Right, Self::Up, Self::Down];

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            KeyPress::Left => Direction::West,
            KeyPress::Right => Direction::East,
            KeyPress::Up => Direction::North,
            KeyPress::Down => Direction::South,
        }
    }

    /// Parses `left`, `right`, `up` or `down`. Anything else means no key was pressed.
    #[must_use]
    pub fn from_token(token: &str) -> Option<KeyPress> {
        match token.trim().to_ascii_lowercase().as_str() {
            "left" => Some(KeyPress::Left),
            "right" => Some(KeyPress::Right),
            "up" => Some(KeyPress::Up),
            "down" => Some(KeyPress::Down),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Defeat,
}

/// Snapshot of a round. Every tick produces a new snapshot instead of changing this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    snake_blocks: Vec<Block>,
    snack_block: Block,
    snake_length: usize,
    direction: Direction,
    status: Status,
}

impl GameState {
    /// Builds an ongoing snapshot from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::EmptySnake`] if there are no snake blocks and
    /// [`SnakeError::LengthMismatch`] if `snake_length` disagrees with them.
    pub fn new(
        snake_blocks: Vec<Block>,
        snack_block: Block,
        snake_length: usize,
        direction: Direction,
    ) -> Result<Self> {
        if snake_blocks.is_empty() {
            return Err(SnakeError::EmptySnake);
        }
        if snake_blocks.len() != snake_length {
            return Err(SnakeError::LengthMismatch {
                blocks: snake_blocks.len(),
                length: snake_length,
            });
        }
        Ok(Self {
            snake_blocks,
            snack_block,
            snake_length,
            direction,
            status: Status::Ongoing,
        })
    }

    /// Starting snapshot of every round: one block heading north and the snack up and to the left.
    #[must_use]
    pub fn new_round() -> Self {
        Self {
            snake_blocks: vec![Block::new(SNAKE_POSITION, SNAKE_SIZE)],
            snack_block: Block::new(SNACK_POSITION, SNACK_SIZE),
            snake_length: 1,
            direction: Direction::North,
            status: Status::Ongoing,
        }
    }

    #[must_use]
    pub fn snake_blocks(&self) -> &[Block] {
        &self.snake_blocks
    }

    /// # Panics
    ///
    /// Panics if the snake is empty, which construction rules out.
    #[must_use]
    pub fn head(&self) -> Block {
        self.snake_blocks[0]
    }

    #[must_use]
    pub fn snack_block(&self) -> Block {
        self.snack_block
    }

    #[must_use]
    pub fn snake_length(&self) -> usize {
        self.snake_length
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == Status::Defeat
    }

    /// Advances the round by one tick, spawning snacks with the thread rng.
    ///
    /// # Panics
    ///
    /// Panics if the snake is empty.
    #[must_use]
    pub fn timestep(&self, key_press: Option<KeyPress>) -> GameState {
        self.timestep_with_rng(key_press, &mut rand::thread_rng())
    }

    /// Advances the round by one tick.
    ///
    /// A key press turns the snake before it moves, otherwise it keeps its direction.
    /// Turning straight back is allowed and usually ends the round.
    ///
    /// # Panics
    ///
    /// Panics if the snake is empty.
    #[must_use]
    pub fn timestep_with_rng<R: Rng + ?Sized>(
        &self,
        key_press: Option<KeyPress>,
        rng: &mut R,
    ) -> GameState {
        assert!(
            !self.snake_blocks.is_empty(),
            "Crash and burn. Snake had no blocks"
        );
        if self.is_over() {
            debug!("Tried to advance a round that is already over");
            return self.clone();
        }

        let direction = key_press.map_or(self.direction, KeyPress::direction);
        let (x, y) = self.snake_blocks[0].position;
        let (dx, dy) = direction.value();
        let new_head = Block::new((x + dx * SNAKE_SPEED, y + dy * SNAKE_SPEED), SNAKE_SIZE);

        let mut snake_blocks = Vec::with_capacity(self.snake_blocks.len() + 1);
        snake_blocks.push(new_head);
        snake_blocks.extend_from_slice(&self.snake_blocks);

        let mut status = self.status;
        if !new_head.on_board() {
            debug!("Snake left the board at {:?}", new_head.position);
            status = Status::Defeat;
        }
        // the tail is skipped because it moves out of the way this tick
        let neck_to_before_tail = &snake_blocks[1..snake_blocks.len() - 1];
        if neck_to_before_tail.iter().any(|b| new_head.collides_with(b)) {
            debug!("Snake ran into itself at {:?}", new_head.position);
            status = Status::Defeat;
        }

        let mut snack_block = self.snack_block;
        let mut snake_length = self.snake_length;
        if new_head.collides_with(&self.snack_block) {
            snack_block = spawn_snack(&snake_blocks, rng);
            snake_length += 1;
            debug!(
                "Snack eaten. Length is now {snake_length}, next snack at {:?}",
                snack_block.position
            );
        } else {
            snake_blocks.pop();
        }

        if status == Status::Defeat {
            info!("Round over. Total length: {snake_length}");
        }

        GameState {
            snake_blocks,
            snack_block,
            snake_length,
            direction,
            status,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_round()
    }
}

/// Picks a random spot fully on the board, retrying while it lands on the snake.
fn spawn_snack<R: Rng + ?Sized>(snake_blocks: &[Block], rng: &mut R) -> Block {
    let mut candidate = random_snack(rng);
    for _ in 1..MAX_SNACK_ATTEMPTS {
        if !snake_blocks.iter().any(|b| candidate.collides_with(b)) {
            return candidate;
        }
        candidate = random_snack(rng);
    }
    if snake_blocks.iter().any(|b| candidate.collides_with(b)) {
        warn!(
            "No free spot found for the snack after {MAX_SNACK_ATTEMPTS} tries. Placing it under the snake"
        );
    }
    candidate
}

fn random_snack<R: Rng + ?Sized>(rng: &mut R) -> Block {
    let (w, h) = SNACK_SIZE;
    let x = rng.gen_range(w / 2..=WIDTH - w / 2);
    let y = rng.gen_range(h / 2..=HEIGHT - h / 2);
    Block::new((x, y), SNACK_SIZE)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn block(x: i32, y: i32) -> Block {
        Block::new((x, y), SNAKE_SIZE)
    }

    fn far_snack() -> Block {
        Block::new((30, 370), SNACK_SIZE)
    }

    fn state(blocks: Vec<Block>, snack: Block, direction: Direction) -> GameState {
        let length = blocks.len();
        GameState::new(blocks, snack, length, direction).unwrap()
    }

    #[test]
    fn test_new_round() {
        let state = GameState::new_round();
        assert_eq!(state.snake_blocks(), &[block(320, 320)]);
        assert_eq!(state.snack_block(), Block::new((80, 80), SNACK_SIZE));
        assert_eq!(state.snake_length(), 1);
        assert_eq!(state.direction(), Direction::North);
        assert_eq!(state.status(), Status::Ongoing);
    }

    #[test]
    fn test_new_rejects_bad_parts() {
        assert_eq!(
            GameState::new(vec![], far_snack(), 0, Direction::North),
            Err(SnakeError::EmptySnake)
        );
        assert_eq!(
            GameState::new(vec![block(100, 100)], far_snack(), 2, Direction::North),
            Err(SnakeError::LengthMismatch {
                blocks: 1,
                length: 2
            })
        );
    }

    #[test]
    fn test_turn_right_from_start() {
        let start = state(vec![block(320, 320)], Block::new((80, 80), SNACK_SIZE), Direction::North);
        let next = start.timestep(Some(KeyPress::Right));
        assert_eq!(next.head().position, (340, 320));
        assert_eq!(next.direction(), Direction::East);
        assert_eq!(next.status(), Status::Ongoing);
        assert_eq!(next.snake_blocks().len(), 1);
        assert_eq!(next.snake_length(), 1);
    }

    #[test]
    fn test_no_input_keeps_direction_and_length() {
        let start = state(
            vec![block(200, 200), block(200, 220), block(200, 240)],
            far_snack(),
            Direction::North,
        );
        let next = start.timestep(None);
        assert_eq!(next.direction(), Direction::North);
        assert_eq!(next.head().position, (200, 200 - SNAKE_SPEED));
        assert_eq!(
            next.snake_blocks(),
            &[block(200, 180), block(200, 200), block(200, 220)]
        );
        assert_eq!(next.snake_length(), 3);
        assert_eq!(next.status(), Status::Ongoing);
    }

    #[test]
    fn test_every_key_moves_one_step() {
        for key_press in KeyPress::VARIANTS {
            let start = state(vec![block(200, 200)], far_snack(), Direction::North);
            let next = start.timestep(Some(*key_press));
            let (dx, dy) = key_press.direction().value();
            assert_eq!(
                next.head().position,
                (200 + dx * SNAKE_SPEED, 200 + dy * SNAKE_SPEED)
            );
            assert_eq!(next.direction(), key_press.direction());
        }
    }

    #[test]
    fn test_timestep_leaves_old_snapshot_alone() {
        let start = GameState::new_round();
        let copy = start.clone();
        let _next = start.timestep(Some(KeyPress::Left));
        assert_eq!(start, copy);
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = state(
            vec![block(200, 200), block(220, 200)],
            Block::new((180, 200), SNACK_SIZE),
            Direction::West,
        );
        let next = start.timestep_with_rng(None, &mut rng);
        assert_eq!(next.snake_length(), 3);
        assert_eq!(
            next.snake_blocks(),
            &[block(180, 200), block(200, 200), block(220, 200)]
        );
        assert_eq!(next.status(), Status::Ongoing);
        assert_ne!(next.snack_block(), start.snack_block());
    }

    #[test]
    fn test_partial_overlap_with_snack_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = state(
            vec![block(200, 200)],
            Block::new((185, 193), SNACK_SIZE),
            Direction::West,
        );
        let next = start.timestep_with_rng(None, &mut rng);
        assert_eq!(next.snake_length(), 2);
    }

    #[test]
    fn test_respawned_snack_is_on_board_and_off_snake() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let start = state(
                vec![block(200, 200), block(220, 200), block(240, 200)],
                Block::new((180, 200), SNACK_SIZE),
                Direction::West,
            );
            let next = start.timestep_with_rng(None, &mut rng);
            let snack = next.snack_block();
            assert!(snack.on_board());
            assert!(next
                .snake_blocks()
                .iter()
                .all(|b| !b.collides_with(&snack)));
        }
    }

    #[test]
    fn test_leaving_board_is_defeat() {
        let start = state(vec![block(10, 10)], far_snack(), Direction::West);
        let next = start.timestep(None);
        assert_eq!(next.head().position, (-10, 10));
        assert!(!next.head().on_board());
        assert_eq!(next.status(), Status::Defeat);
        assert!(next.is_over());
    }

    #[test]
    fn test_reversing_into_neck_is_defeat() {
        let start = state(
            vec![block(200, 200), block(200, 220), block(200, 240)],
            far_snack(),
            Direction::North,
        );
        let next = start.timestep(Some(KeyPress::Down));
        assert_eq!(next.direction(), Direction::South);
        assert_eq!(next.status(), Status::Defeat);
    }

    #[test]
    fn test_two_block_snake_can_reverse_onto_its_tail() {
        let start = state(
            vec![block(200, 200), block(200, 220)],
            far_snack(),
            Direction::North,
        );
        let next = start.timestep(Some(KeyPress::Down));
        assert_eq!(next.status(), Status::Ongoing);
    }

    #[test]
    fn test_chasing_the_tail_is_allowed() {
        // square loop, head about to step where the tail is now
        let start = state(
            vec![block(200, 200), block(220, 200), block(220, 220), block(200, 220)],
            far_snack(),
            Direction::West,
        );
        let next = start.timestep(Some(KeyPress::Down));
        assert_eq!(next.head().position, (200, 220));
        assert_eq!(next.status(), Status::Ongoing);
    }

    #[test]
    fn test_tail_ignored_even_when_eating() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = state(
            vec![block(200, 200), block(220, 200), block(220, 220), block(200, 220)],
            Block::new((200, 220), SNACK_SIZE),
            Direction::West,
        );
        let next = start.timestep_with_rng(Some(KeyPress::Down), &mut rng);
        assert_eq!(next.status(), Status::Ongoing);
        assert_eq!(next.snake_length(), 5);
    }

    #[test]
    fn test_running_into_body_is_defeat() {
        let start = state(
            vec![
                block(200, 200),
                block(220, 200),
                block(220, 220),
                block(200, 220),
                block(180, 220),
            ],
            far_snack(),
            Direction::West,
        );
        let next = start.timestep(Some(KeyPress::Down));
        assert_eq!(next.status(), Status::Defeat);
    }

    #[test]
    fn test_defeat_is_terminal() {
        let start = state(vec![block(10, 10)], far_snack(), Direction::West);
        let lost = start.timestep(None);
        assert!(lost.is_over());
        let again = lost.timestep(Some(KeyPress::Right));
        assert_eq!(again, lost);
    }

    #[test]
    fn test_key_tokens() {
        assert_eq!(KeyPress::from_token("left"), Some(KeyPress::Left));
        assert_eq!(KeyPress::from_token("Right"), Some(KeyPress::Right));
        assert_eq!(KeyPress::from_token(" up "), Some(KeyPress::Up));
        assert_eq!(KeyPress::from_token("DOWN"), Some(KeyPress::Down));
        assert_eq!(KeyPress::from_token("space"), None);
        assert_eq!(KeyPress::from_token(""), None);
    }

    #[test]
    fn test_unknown_token_keeps_direction() {
        let start = state(vec![block(200, 200)], far_snack(), Direction::East);
        let next = start.timestep(KeyPress::from_token("jump"));
        assert_eq!(next.direction(), Direction::East);
        assert_eq!(next.head().position, (220, 200));
    }
}
