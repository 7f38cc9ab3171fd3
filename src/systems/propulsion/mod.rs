mod powerplant;

pub use powerplant::{
    altitude_limited_power, apply_diminishing_returns, engine_power_at, multi_altitude_power,
    naturally_aspirated_power, nearest_altitude, single_altitude_power,
};
