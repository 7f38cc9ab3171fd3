use serde::{Deserialize, Serialize};

/// Airframe category. Selects the category-specific drag terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftCategory {
    Fighter,
    CloseAirSupport,
    Bomber,
    Seaplane,
    Airship,
    #[serde(other)]
    General,
}

impl Default for AircraftCategory {
    fn default() -> Self {
        AircraftCategory::General
    }
}

/// Hard limits an airframe type imposes on the reported performance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceLimits {
    /// Maximum speed (km/h).
    pub max_speed: f64,
    /// Maximum range (km).
    pub max_range: f64,
    /// Maximum ceiling (m).
    pub max_ceiling: f64,
    /// Structural load factor limit (g).
    #[serde(default = "default_g_limit")]
    pub g_limit: f64,
}

fn default_g_limit() -> f64 {
    6.0
}

impl Default for PerformanceLimits {
    fn default() -> Self {
        Self {
            max_speed: 800.0,
            max_range: 5000.0,
            max_ceiling: 15000.0,
            g_limit: default_g_limit(),
        }
    }
}

/// Modifiers a selected component contributes to the design.
///
/// Every field is optional in catalog data; a missing multiplicative field is
/// 1.0 and a missing additive field is 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub drag_mod: f64,
    pub power_mod: f64,
    pub range_mod: f64,
    pub ceiling_mod: f64,
    pub speed_mod: f64,
    pub maneuverability_mod: f64,
    /// Added to the zero-lift drag coefficient.
    pub cd_0_delta: f64,
    /// Added to the maximum lift coefficient.
    pub cl_max_delta: f64,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            drag_mod: 1.0,
            power_mod: 1.0,
            range_mod: 1.0,
            ceiling_mod: 1.0,
            speed_mod: 1.0,
            maneuverability_mod: 1.0,
            cd_0_delta: 0.0,
            cl_max_delta: 0.0,
        }
    }
}

impl Modifiers {
    /// The combined effect of `quantity` identical components: multiplicative
    /// fields raised to the power, additive fields multiplied.
    pub fn scaled(&self, quantity: f64) -> Self {
        Self {
            drag_mod: self.drag_mod.powf(quantity),
            power_mod: self.power_mod.powf(quantity),
            range_mod: self.range_mod.powf(quantity),
            ceiling_mod: self.ceiling_mod.powf(quantity),
            speed_mod: self.speed_mod.powf(quantity),
            maneuverability_mod: self.maneuverability_mod.powf(quantity),
            cd_0_delta: self.cd_0_delta * quantity,
            cl_max_delta: self.cl_max_delta * quantity,
        }
    }
}

/// Aerodynamic description of a design, accumulated from every selected component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AerodynamicProfile {
    /// Reference wing area (m²).
    pub wing_area: f64,
    /// Maximum lift coefficient.
    pub cl_max: f64,
    /// Zero-lift drag coefficient.
    pub cd_0: f64,
    pub aspect_ratio: f64,
    /// Oswald span efficiency factor.
    pub oswald_efficiency: f64,
    pub drag_mod: f64,
    pub power_mod: f64,
    pub range_mod: f64,
    pub ceiling_mod: f64,
    pub speed_mod: f64,
    pub maneuverability_mod: f64,
    pub category: AircraftCategory,
    pub limits: PerformanceLimits,
}

impl AerodynamicProfile {
    /// Creates a profile with neutral modifiers.
    pub fn new(
        category: AircraftCategory,
        wing_area: f64,
        cl_max: f64,
        cd_0: f64,
        aspect_ratio: f64,
        oswald_efficiency: f64,
        limits: PerformanceLimits,
    ) -> Self {
        Self {
            wing_area,
            cl_max,
            cd_0,
            aspect_ratio,
            oswald_efficiency,
            drag_mod: 1.0,
            power_mod: 1.0,
            range_mod: 1.0,
            ceiling_mod: 1.0,
            speed_mod: 1.0,
            maneuverability_mod: 1.0,
            category,
            limits,
        }
    }

    /// Folds one component's modifiers into the profile.
    pub fn apply(&mut self, modifiers: &Modifiers) {
        self.drag_mod *= modifiers.drag_mod;
        self.power_mod *= modifiers.power_mod;
        self.range_mod *= modifiers.range_mod;
        self.ceiling_mod *= modifiers.ceiling_mod;
        self.speed_mod *= modifiers.speed_mod;
        self.maneuverability_mod *= modifiers.maneuverability_mod;
        self.cd_0 += modifiers.cd_0_delta;
        self.cl_max += modifiers.cl_max_delta;
    }

    /// `π · AR · e`, the induced-drag denominator.
    pub fn induced_drag_factor(&self) -> f64 {
        std::f64::consts::PI * self.aspect_ratio * self.oswald_efficiency
    }

    /// A light single-engine fighter used as the reference design.
    pub fn light_fighter() -> Self {
        Self::new(
            AircraftCategory::Fighter,
            18.0,
            1.4,
            0.025,
            6.0,
            0.8,
            PerformanceLimits {
                max_speed: 750.0,
                max_range: 2000.0,
                max_ceiling: 12000.0,
                g_limit: 8.0,
            },
        )
    }
}
