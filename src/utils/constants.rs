pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_TEMP: f64 = 216.65; // K

pub const HP_TO_WATTS: f64 = 745.7;
pub const MS_TO_KMH: f64 = 3.6;

// Powerplant
pub const DIMINISHING_RETURNS_THRESHOLD_HP: f64 = 1000.0;
pub const DIMINISHING_RETURNS_PENALTY: f64 = 0.25;

// Equilibrium scan band
pub const MIN_SCAN_SPEED: f64 = 50.0; // m/s
pub const MAX_SCAN_SPEED: f64 = 350.0; // m/s
pub const SCAN_STEP: f64 = 1.0; // m/s
pub const SCAN_THRUST_FLOOR: f64 = 1.0; // m/s
pub const RESULT_THRUST_FLOOR: f64 = 30.0; // m/s
pub const SPEED_GOVERNOR_ONSET: f64 = 0.9;
pub const SPEED_GOVERNOR_GAIN: f64 = 0.5;

// Compressibility
pub const COMPRESSIBILITY_ONSET_KMH: f64 = 400.0;
pub const COMPRESSIBILITY_SCALE_KMH: f64 = 200.0;
pub const COMPRESSIBILITY_COEFFICIENT: f64 = 0.012;

// Climb and ceiling
pub const CLIMB_SPEED: f64 = 80.0; // m/s
pub const MIN_RATE_OF_CLIMB: f64 = 0.5; // m/s
pub const CEILING_SCAN_MAX: f64 = 15000.0; // m
pub const CEILING_SCAN_STEP: f64 = 250.0; // m
pub const UNPRESSURIZED_CEILING: f64 = 10000.0; // m
pub const NO_OXYGEN_CEILING: f64 = 5000.0; // m

// Turn
pub const TURN_SPEED_FACTOR: f64 = 0.8;
pub const MIN_TURN_TIME: f64 = 12.0; // s
pub const MAX_TURN_TIME: f64 = 60.0; // s
pub const MIN_LOAD_FACTOR_TERM: f64 = 0.01;
