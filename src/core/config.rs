//! Engine configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other. Every subsystem reads the same
//! config value, so distances measured in one place agree with distances
//! measured in another.

/// Tuning constants for the pursuit engine
///
/// Defaults reproduce the classic game balance. Changing them changes how
/// hard a game is, not whether it is correct.
#[derive(Debug, Clone)]
pub struct GameConfig {
    // === GEOMETRY ===
    /// Sphere radius used for every great-circle distance (meters)
    ///
    /// An equatorial approximation of Earth. All movement, vision and
    /// trigger distances are measured against this same sphere.
    pub earth_radius_m: f64,

    // === PURSUIT ===
    /// How far a zombie can see (meters)
    ///
    /// A zombie chases the nearest located player inside this range and
    /// wanders when nobody is inside it.
    pub zombie_vision_m: f64,

    /// Contact distance for triggers (meters)
    ///
    /// A player strictly closer than this to the destination wins the game;
    /// strictly closer than this to a zombie loses it.
    pub trigger_distance_m: f64,

    /// Longest stretch of real time a single advance will simulate (seconds)
    ///
    /// Bounds how far the world moves while a game sits idle, so zombies
    /// never teleport across town between sessions.
    pub max_advance_interval_secs: f64,

    // === POPULATION ===
    /// Fewest zombies a game starts with, regardless of covered area
    pub min_zombies: usize,

    /// Largest number of zombies placed as a single cluster
    ///
    /// Must be at least 1.
    pub max_cluster_size: usize,

    /// How far a cluster's members may scatter from its center (meters)
    pub max_cluster_radius_m: f64,

    /// Width of the uniform jitter applied to each generated zombie's speed
    ///
    /// At 0.2, individual speeds land within ±10% of the game's average.
    /// Must stay below 2.0 or jitter could produce non-positive speeds.
    pub zombie_speed_variance: f64,

    /// Average speed of generated zombies when a game does not override it
    /// (meters per second)
    ///
    /// A shambling 3 mph.
    pub default_zombie_speed: f64,

    /// Zombies per square kilometer when a game does not override it
    pub default_zombie_density: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: 6_378_100.0,

            // Pursuit ranges (vision well above trigger contact)
            zombie_vision_m: 200.0,
            trigger_distance_m: 10.0,
            max_advance_interval_secs: 600.0,

            // Population shape
            min_zombies: 20,
            max_cluster_size: 4,
            max_cluster_radius_m: 30.0,
            zombie_speed_variance: 0.2,
            default_zombie_speed: 3.0 * 0.447,
            default_zombie_density: 20.0,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.earth_radius_m <= 0.0 {
            return Err(format!(
                "earth_radius_m ({}) must be positive",
                self.earth_radius_m
            ));
        }

        if self.trigger_distance_m <= 0.0 || self.zombie_vision_m <= 0.0 {
            return Err("Trigger and vision distances must be positive".into());
        }

        // A zombie that can eat farther than it can see never chases
        if self.zombie_vision_m < self.trigger_distance_m {
            return Err(format!(
                "zombie_vision_m ({}) should be >= trigger_distance_m ({})",
                self.zombie_vision_m, self.trigger_distance_m
            ));
        }

        if self.max_advance_interval_secs <= 0.0 {
            return Err(format!(
                "max_advance_interval_secs ({}) must be positive",
                self.max_advance_interval_secs
            ));
        }

        if self.max_cluster_size == 0 {
            return Err("max_cluster_size must be at least 1".into());
        }

        if self.max_cluster_radius_m < 0.0 {
            return Err(format!(
                "max_cluster_radius_m ({}) must not be negative",
                self.max_cluster_radius_m
            ));
        }

        // Jitter of 2.0 or more could hand out a zero or negative speed
        if !(0.0..2.0).contains(&self.zombie_speed_variance) {
            return Err(format!(
                "zombie_speed_variance ({}) must be within [0, 2)",
                self.zombie_speed_variance
            ));
        }

        if self.default_zombie_speed <= 0.0 || self.default_zombie_density <= 0.0 {
            return Err("Default speed and density must be positive".into());
        }

        Ok(())
    }
}
