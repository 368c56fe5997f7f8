//! Game orchestration: both boards, decker counters, strategy hand-off and
//! the turn interface used by a surrounding session layer.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::{Cell, GameError, ShotOutcome};
use crate::config::{DEFAULT_SHIPS, MAX_BOARD_SIZE};
use crate::field::Field;
use crate::geometry::{to_index, Point};
use crate::position::format_position;
use crate::strategy::{random_unknown_point, HuntStrategy, SearchStrategy, StrategyKind};

/// Options for starting a game.
#[derive(Debug, Clone)]
pub struct GameOptions {
    /// Board edge length, at most [`MAX_BOARD_SIZE`].
    pub size: usize,
    /// Ship inventory as an ordered sequence of lengths; `None` uses the
    /// classic fleet.
    pub ships: Option<Vec<usize>>,
    /// Precomputed own field; must hold exactly size² cells. No further
    /// validation is performed.
    pub field: Option<Vec<Cell>>,
    /// Render shot positions with column numbers instead of grid letters.
    pub numeric: bool,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            size: MAX_BOARD_SIZE,
            ships: None,
            field: None,
            numeric: false,
            seed: None,
        }
    }
}

/// Which queue `do_shot` draws from while no ship is being hunted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveStrategy {
    FourDecker,
    ThreeDecker,
    TwoDecker,
    Fallback,
}

/// One side of a game: the player's own board, the inferred enemy board,
/// and the targeting state machine.
#[derive(Debug)]
pub struct Game {
    size: usize,
    numeric: bool,
    field: Field,
    enemy_field: Field,
    ships_count: usize,
    enemy_ships_count: usize,
    last_shot: Option<Point>,
    four_decker_count: usize,
    three_decker_count: usize,
    two_decker_count: usize,
    one_decker_count: usize,
    four_decker_search: SearchStrategy,
    three_decker_search: SearchStrategy,
    two_decker_search: SearchStrategy,
    active: ActiveStrategy,
    hunt: Option<HuntStrategy>,
    rng: SmallRng,
}

impl Game {
    /// Start a new game. Configuration problems (oversized board, ship
    /// longer than the board, wrong field length, inventory that cannot be
    /// placed) are reported here and never mid-game.
    pub fn new(options: GameOptions) -> Result<Self, GameError> {
        let GameOptions {
            size,
            ships,
            field,
            numeric,
            seed,
        } = options;

        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::Config("board size must be between 1 and 10"));
        }
        let ships = ships.unwrap_or_else(|| DEFAULT_SHIPS.to_vec());
        if ships.iter().any(|&length| length == 0 || length > size) {
            return Err(GameError::Config("ship length exceeds board size"));
        }

        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        let own_field = match field {
            Some(cells) => Field::from_cells(size, cells)?,
            None => Field::generate(size, &ships, &mut rng)?,
        };
        debug!("own field:\n{}", own_field);

        let count_of = |length: usize| ships.iter().filter(|&&l| l == length).count();
        let ships_count = ships.len();

        let mut game = Game {
            size,
            numeric,
            enemy_field: Field::empty(size),
            field: own_field,
            ships_count,
            enemy_ships_count: ships_count,
            last_shot: None,
            four_decker_count: count_of(4),
            three_decker_count: count_of(3),
            two_decker_count: count_of(2),
            one_decker_count: count_of(1),
            four_decker_search: SearchStrategy::new(size, 4, &mut rng),
            three_decker_search: SearchStrategy::new(size, 3, &mut rng),
            two_decker_search: SearchStrategy::new(size, 2, &mut rng),
            active: ActiveStrategy::Fallback,
            hunt: None,
            rng,
        };
        game.select_strategy();
        Ok(game)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn ships_count(&self) -> usize {
        self.ships_count
    }

    pub fn enemy_ships_count(&self) -> usize {
        self.enemy_ships_count
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn enemy_field(&self) -> &Field {
        &self.enemy_field
    }

    /// Textual dump of the own board for logs.
    pub fn render_field(&self) -> String {
        self.field.to_string()
    }

    /// Textual dump of the inferred enemy board for logs.
    pub fn render_enemy_field(&self) -> String {
        self.enemy_field.to_string()
    }

    /// Which targeting behavior `do_shot` draws from once no ship is being
    /// hunted.
    pub fn strategy_kind(&self) -> StrategyKind {
        match self.active {
            ActiveStrategy::FourDecker => StrategyKind::Search {
                region_size: self.four_decker_search.region_size(),
            },
            ActiveStrategy::ThreeDecker => StrategyKind::Search {
                region_size: self.three_decker_search.region_size(),
            },
            ActiveStrategy::TwoDecker => StrategyKind::Search {
                region_size: self.two_decker_search.region_size(),
            },
            ActiveStrategy::Fallback => StrategyKind::Random,
        }
    }

    /// Override the remaining enemy decker counters and re-select the
    /// active strategy, e.g. when resuming a game from known state.
    pub fn set_remaining_deckers(&mut self, four: usize, three: usize, two: usize, one: usize) {
        self.four_decker_count = four;
        self.three_decker_count = three;
        self.two_decker_count = two;
        self.one_decker_count = one;
        self.select_strategy();
    }

    /// Pick the next target and record it as the pending shot. The returned
    /// string is the external position form handed to the opponent.
    pub fn do_shot(&mut self) -> Result<String, GameError> {
        let point = self.next_target()?;
        debug!("shooting at ({}, {})", point.x, point.y);
        self.last_shot = Some(point);
        Ok(format_position(point, self.numeric))
    }

    /// External form of the pending shot, for "say again" requests.
    pub fn repeat_last_shot(&self) -> Option<String> {
        self.last_shot
            .map(|point| format_position(point, self.numeric))
    }

    pub fn reset_last_shot(&mut self) {
        self.last_shot = None;
    }

    /// Resolve an incoming shot against the own board. The own live-ship
    /// counter drops only on the fresh kill, so repeated shots on a dead
    /// ship keep reporting `Kill` without double counting.
    pub fn handle_enemy_shot(&mut self, position: Point) -> Result<ShotOutcome, GameError> {
        let index = to_index(self.size, position)?;
        let was_intact = self.field.at(index) == Cell::Ship;
        let outcome = self.field.shot(position)?;
        if was_intact && outcome == ShotOutcome::Kill {
            self.ships_count = self.ships_count.saturating_sub(1);
            info!("lost a ship, {} remaining", self.ships_count);
        }
        Ok(outcome)
    }

    /// Fold the opponent's reply to our pending shot into the inferred
    /// board and the strategy state. A no-op when no shot is pending.
    pub fn handle_enemy_reply(&mut self, outcome: ShotOutcome) {
        let Some(position) = self.last_shot else {
            return;
        };
        let Ok(index) = to_index(self.size, position) else {
            return;
        };

        match outcome {
            ShotOutcome::Miss => self.enemy_field.set(index, Cell::Miss),
            ShotOutcome::Hit | ShotOutcome::Kill => {
                self.enemy_field.set(index, Cell::Ship);
                self.hunt
                    .get_or_insert_with(HuntStrategy::new)
                    .add_ship_point(position);

                if outcome == ShotOutcome::Kill {
                    self.enemy_ships_count = self.enemy_ships_count.saturating_sub(1);
                    if let Some(hunt) = self.hunt.take() {
                        self.mark_perimeter_known(&hunt);
                        self.reduce_decker_count(hunt.ship_len());
                    }
                    self.select_strategy();
                    info!("enemy ship sunk, {} remaining", self.enemy_ships_count);
                }
            }
        }
    }

    pub fn is_victory(&self) -> bool {
        self.enemy_ships_count < 1
    }

    pub fn is_defeat(&self) -> bool {
        self.ships_count < 1
    }

    pub fn is_end_game(&self) -> bool {
        self.is_victory() || self.is_defeat()
    }

    fn next_target(&mut self) -> Result<Point, GameError> {
        // A wounded ship takes priority over pattern search. Off-board
        // candidates and already-known cells are dropped, not errors.
        if let Some(hunt) = self.hunt.as_mut() {
            while let Some(point) = hunt.shoot_point() {
                match to_index(self.size, point) {
                    Ok(index) if self.enemy_field.at(index) == Cell::Empty => return Ok(point),
                    _ => continue,
                }
            }
        }

        loop {
            let popped = match self.active {
                ActiveStrategy::FourDecker => self.four_decker_search.shoot_point(),
                ActiveStrategy::ThreeDecker => self.three_decker_search.shoot_point(),
                ActiveStrategy::TwoDecker => self.two_decker_search.shoot_point(),
                ActiveStrategy::Fallback => {
                    return random_unknown_point(&self.enemy_field, &mut self.rng)
                        .ok_or(GameError::StrategyExhausted);
                }
            };
            match popped {
                Some(point) => {
                    let index = to_index(self.size, point)?;
                    if self.enemy_field.at(index) == Cell::Empty {
                        return Ok(point);
                    }
                }
                // Pattern spent before every decker of this class was
                // confirmed sunk; continue with the next smaller pattern.
                None => self.demote_strategy(),
            }
        }
    }

    /// Priority order after a kill: four-deckers, then three, then two,
    /// then the random fallback for the one-deckers.
    fn select_strategy(&mut self) {
        self.active = if self.four_decker_count > 0 {
            ActiveStrategy::FourDecker
        } else if self.three_decker_count > 0 {
            ActiveStrategy::ThreeDecker
        } else if self.two_decker_count > 0 {
            ActiveStrategy::TwoDecker
        } else {
            ActiveStrategy::Fallback
        };
    }

    fn demote_strategy(&mut self) {
        self.active = match self.active {
            ActiveStrategy::FourDecker if self.three_decker_count > 0 => {
                ActiveStrategy::ThreeDecker
            }
            ActiveStrategy::FourDecker | ActiveStrategy::ThreeDecker
                if self.two_decker_count > 0 =>
            {
                ActiveStrategy::TwoDecker
            }
            _ => ActiveStrategy::Fallback,
        };
    }

    /// A destroyed ship's surroundings cannot hold another ship, so the
    /// whole perimeter becomes known water in the inferred board.
    fn mark_perimeter_known(&mut self, hunt: &HuntStrategy) {
        for point in hunt.nearby_ship_points() {
            let Ok(index) = to_index(self.size, point) else {
                continue;
            };
            if self.enemy_field.at(index) == Cell::Empty {
                self.enemy_field.set(index, Cell::Miss);
            }
        }
    }

    fn reduce_decker_count(&mut self, deckers: usize) {
        match deckers {
            4 => self.four_decker_count = self.four_decker_count.saturating_sub(1),
            3 => self.three_decker_count = self.three_decker_count.saturating_sub(1),
            2 => self.two_decker_count = self.two_decker_count.saturating_sub(1),
            1 => self.one_decker_count = self.one_decker_count.saturating_sub(1),
            _ => {}
        }
    }
}
