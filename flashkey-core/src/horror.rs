//! Scripted flashlight-and-monster horror sequence.
//!
//! The game always ends badly: once the monster reaches you the sequence is
//! forced through a caught scene into the ending, from which it can be
//! replayed. The flashlight slows the monster down but drains the battery.

use rand::Rng;

const FULL_BATTERY: i32 = 100;
const FULL_DISTANCE: i32 = 100;
const BATTERY_DRAIN_PER_TICK: i32 = 2;
const APPROACH_CHANCE: f64 = 0.3;
const APPROACH_LIT: i32 = 1;
const APPROACH_DARK: i32 = 3;
const DARKNESS_LIT: u8 = 30;
const DARKNESS_DARK: u8 = 60;
/// Seconds the caught scene stays on screen before the ending.
pub const CAUGHT_SECONDS: u8 = 3;

/// Stage of the scripted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorrorPhase {
    Intro,
    Stalking,
    Caught,
    Ending,
}

/// How close the monster sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threat {
    Quiet,
    Footsteps,
    Approaching,
    Imminent,
}

impl Threat {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Quiet => "Silence...",
            Self::Footsteps => "You hear footsteps...",
            Self::Approaching => "It is getting closer!",
            Self::Imminent => "IT IS RIGHT HERE!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorrorGame {
    phase: HorrorPhase,
    battery: i32,
    flashlight_on: bool,
    monster_distance: i32,
    darkness: u8,
    caught_for: u8,
}

impl Default for HorrorGame {
    fn default() -> Self {
        Self::new()
    }
}

impl HorrorGame {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: HorrorPhase::Intro,
            battery: FULL_BATTERY,
            flashlight_on: false,
            monster_distance: FULL_DISTANCE,
            darkness: DARKNESS_DARK,
            caught_for: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> HorrorPhase {
        self.phase
    }

    #[must_use]
    pub fn battery(&self) -> i32 {
        self.battery
    }

    #[must_use]
    pub fn flashlight_on(&self) -> bool {
        self.flashlight_on
    }

    /// Danger readout, 0 (safe) to 100 (caught).
    #[must_use]
    pub fn danger(&self) -> i32 {
        FULL_DISTANCE - self.monster_distance
    }

    /// Ambient darkness level in percent, used as an overlay opacity.
    #[must_use]
    pub fn darkness(&self) -> u8 {
        self.darkness
    }

    #[must_use]
    pub fn threat(&self) -> Threat {
        match self.monster_distance {
            d if d > 70 => Threat::Quiet,
            d if d > 40 => Threat::Footsteps,
            d if d > 20 => Threat::Approaching,
            _ => Threat::Imminent,
        }
    }

    /// Start (or restart) the sequence from a fresh state.
    pub fn start(&mut self) {
        *self = Self::new();
        self.phase = HorrorPhase::Stalking;
    }

    /// Toggle the flashlight. Ignored with a dead battery.
    pub fn toggle_flashlight(&mut self) {
        if self.phase != HorrorPhase::Stalking || self.battery <= 0 {
            return;
        }
        self.flashlight_on = !self.flashlight_on;
        self.darkness = if self.flashlight_on {
            DARKNESS_LIT
        } else {
            DARKNESS_DARK
        };
    }

    /// One second of the sequence.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        match self.phase {
            HorrorPhase::Stalking => self.tick_stalking(rng),
            HorrorPhase::Caught => {
                self.caught_for += 1;
                if self.caught_for >= CAUGHT_SECONDS {
                    self.phase = HorrorPhase::Ending;
                }
            }
            HorrorPhase::Intro | HorrorPhase::Ending => {}
        }
    }

    fn tick_stalking(&mut self, rng: &mut impl Rng) {
        if self.flashlight_on {
            self.battery = (self.battery - BATTERY_DRAIN_PER_TICK).max(0);
            if self.battery == 0 {
                self.flashlight_on = false;
                self.darkness = DARKNESS_DARK;
            }
        }

        if rng.gen_bool(APPROACH_CHANCE) {
            let step = if self.flashlight_on {
                APPROACH_LIT
            } else {
                APPROACH_DARK
            };
            self.monster_distance = (self.monster_distance - step).max(0);
            if self.monster_distance == 0 {
                self.phase = HorrorPhase::Caught;
                self.caught_for = 0;
            }
        }
    }
}
