//! The small random queries served next to the message store: a quote of the day,
//! a random float and some dice.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MsgError, Result};

/// number of sides used when a request doesn't name one
pub const DEFAULT_SIDES: u32 = 6;

/// the most dice (or rolls of one die) a single request may ask for
pub const MAX_ROLLS: u32 = 10_000;

const QUOTES: [&str; 2] = ["Take it easy", "Salvation lies within"];

/// returns one of the two quotes, each with equal probability
pub fn quote_of_the_day() -> String {
    let heads = rand::thread_rng().gen_bool(0.5);
    String::from(if heads { QUOTES[0] } else { QUOTES[1] })
}

/// returns a uniformly distributed float in `[0, 1)`
pub fn random() -> f64 {
    rand::thread_rng().gen()
}

/// rolls three six sided dice
pub fn roll_three_dice() -> Vec<u32> {
    let die = RandomDie { num_sides: DEFAULT_SIDES };
    die.roll(3)
}

/// rolls `num_dice` dice with `num_sides` sides each (six when `None`)
///
/// # Errors
/// returns [`MsgError::InvalidArgument`] if `num_sides` is zero or `num_dice` is above
/// [`MAX_ROLLS`]
pub fn roll_dice(num_dice: u32, num_sides: Option<u32>) -> Result<Vec<u32>> {
    let die = RandomDie::new(num_sides)?;
    check_rolls("num_dice", num_dice)?;
    Ok(die.roll(num_dice))
}

fn check_rolls(name: &str, count: u32) -> Result<()> {
    if count > MAX_ROLLS {
        return Err(MsgError::InvalidArgument(format!(
            "{} must be at most {}, got {}",
            name, MAX_ROLLS, count
        )));
    }
    Ok(())
}

/// A die with a fixed number of sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomDie {
    num_sides: u32,
}

impl RandomDie {
    /// creates a die with `num_sides` sides, six when `None`
    ///
    /// # Errors
    /// returns [`MsgError::InvalidArgument`] if `num_sides` is zero
    pub fn new(num_sides: Option<u32>) -> Result<Self> {
        match num_sides.unwrap_or(DEFAULT_SIDES) {
            0 => Err(MsgError::InvalidArgument(String::from(
                "a die needs at least one side",
            ))),
            num_sides => Ok(RandomDie { num_sides }),
        }
    }

    /// the number of sides on this die
    pub fn num_sides(&self) -> u32 {
        self.num_sides
    }

    /// a single roll in `1..=num_sides`
    pub fn roll_once(&self) -> u32 {
        rand::thread_rng().gen_range(1..=self.num_sides)
    }

    /// `num_rolls` independent rolls. Callers taking `num_rolls` from a request should go
    /// through [`roll_dice`] or [`RandomDie::report`], which cap it at [`MAX_ROLLS`]
    pub fn roll(&self, num_rolls: u32) -> Vec<u32> {
        let mut rng = rand::thread_rng();
        (0..num_rolls)
            .map(|_| rng.gen_range(1..=self.num_sides))
            .collect()
    }

    /// rolls the die once plus `num_rolls` more times and packs everything into a [`DieRoll`]
    ///
    /// # Errors
    /// returns [`MsgError::InvalidArgument`] if `num_rolls` is above [`MAX_ROLLS`]
    pub fn report(&self, num_rolls: u32) -> Result<DieRoll> {
        check_rolls("num_rolls", num_rolls)?;
        Ok(DieRoll {
            num_sides: self.num_sides,
            roll_once: self.roll_once(),
            rolls: self.roll(num_rolls),
        })
    }
}

/// Plain data view of a [`RandomDie`] after it was rolled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    /// sides of the die
    pub num_sides: u32,
    /// result of a single roll
    pub roll_once: u32,
    /// results of the requested number of rolls
    pub rolls: Vec<u32>,
}
