pub const MAX_BOARD_SIZE: usize = 10;

/// Classic fleet: one four-decker, two three-deckers, three two-deckers and
/// four one-deckers.
pub const DEFAULT_SHIPS: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Random placement gives up after this many failed attempts per ship and
/// reports a configuration error instead of looping forever.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
