use crate::components::AirProperties;
use crate::utils::{
    AIR_GAS_CONSTANT, GRAVITY, ISA_LAPSE_RATE, ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP,
    ISA_TROPOPAUSE_TEMP,
};

/// ISA air properties at a geometric altitude (m).
///
/// Negative altitudes are treated as sea level. Temperature follows the
/// tropospheric lapse rate down to the tropopause temperature and stays there;
/// pressure uses the barometric formula for that temperature.
pub fn air_properties_at(altitude: f64) -> AirProperties {
    let h = altitude.max(0.0);
    let temperature = (ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * h).max(ISA_TROPOPAUSE_TEMP);
    let exponent = GRAVITY / (-ISA_LAPSE_RATE * AIR_GAS_CONSTANT);
    let pressure = ISA_SEA_LEVEL_PRESSURE * (temperature / ISA_SEA_LEVEL_TEMP).powf(exponent);
    let density = pressure / (AIR_GAS_CONSTANT * temperature);

    AirProperties {
        temperature,
        pressure,
        density,
    }
}

/// `rho(altitude) / rho(reference_altitude)`.
pub fn density_ratio(altitude: f64, reference_altitude: f64) -> f64 {
    air_properties_at(altitude).density / air_properties_at(reference_altitude).density
}
