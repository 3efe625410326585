use validator::{Validate, ValidationError};

/// Sign of the nearest-neighbor exchange constant `J`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupling {
    /// `J = +1`, aligned neighbors favored.
    Ferromagnetic,
    /// `J = -1`, opposed neighbors favored.
    Antiferromagnetic,
}

impl Coupling {
    #[inline]
    pub fn j(self) -> i64 {
        match self {
            Self::Ferromagnetic => 1,
            Self::Antiferromagnetic => -1,
        }
    }
}

impl TryFrom<&str> for Coupling {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "ferro" | "ferromagnetic" | "1" | "+1" => Ok(Self::Ferromagnetic),
            "antiferro" | "antiferromagnetic" | "-1" => Ok(Self::Antiferromagnetic),
            _ => Err(format!(
                "unknown coupling '{s}', expected 'ferro' (+1) or 'antiferro' (-1)"
            )),
        }
    }
}

/// Deterministic starting configuration of the spin array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitPattern {
    /// Every spin +1.
    #[default]
    AllUp,
    /// Alternating planes along `i`.
    Layered,
    /// Alternating over all three axes.
    Checkerboard,
    /// Alternating over `j` and `k`, constant along `i`.
    Columnar,
}

impl TryFrom<&str> for InitPattern {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "up" | "all-up" => Ok(Self::AllUp),
            "layered" => Ok(Self::Layered),
            "checkerboard" => Ok(Self::Checkerboard),
            "columnar" => Ok(Self::Columnar),
            _ => Err(format!(
                "unknown init pattern '{s}', expected 'all-up', 'layered', 'checkerboard', or 'columnar'"
            )),
        }
    }
}

fn validate_sim_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    // At L = 1 every neighbor is the site itself and the local flip cost no
    // longer matches the energy functional.
    if cfg.side < 2 {
        return Err(ValidationError::new("side must be >= 2"));
    }
    if u32::try_from(cfg.side.saturating_mul(cfg.side).saturating_mul(cfg.side)).is_err() {
        return Err(ValidationError::new("side**3 must fit in a u32 site index"));
    }
    if cfg.n_steps < 1 {
        return Err(ValidationError::new("n_steps must be >= 1"));
    }
    if !(cfg.temperature.is_finite() && cfg.temperature > 0.0) {
        return Err(ValidationError::new(
            "temperature must be finite and > 0",
        ));
    }
    Ok(())
}

/// Static parameters of one Metropolis run.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_sim_config"))]
pub struct SimConfig {
    /// Sites per axis `L` (at least 2); the lattice holds `L³` spins.
    pub side: usize,
    pub temperature: f64,
    pub coupling: Coupling,
    pub seed: u64,
    /// Single-spin-flip proposals to attempt.
    pub n_steps: u64,
    pub init: InitPattern,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            side: 4,
            temperature: 0.01,
            coupling: Coupling::Antiferromagnetic,
            seed: 1000,
            n_steps: 1_000_000,
            init: InitPattern::AllUp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_lattice() {
        for side in [0, 1] {
            let cfg = SimConfig {
                side,
                ..SimConfig::default()
            };
            assert!(cfg.validate().is_err(), "accepted side = {side}");
        }
        let cfg = SimConfig {
            side: 2,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_steps() {
        let cfg = SimConfig {
            n_steps: 0,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_temperature() {
        for temperature in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = SimConfig {
                temperature,
                ..SimConfig::default()
            };
            assert!(cfg.validate().is_err(), "accepted T = {temperature}");
        }
    }

    #[test]
    fn test_rejects_oversized_lattice() {
        let cfg = SimConfig {
            side: 1 << 11,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Coupling::try_from("ferro"), Ok(Coupling::Ferromagnetic));
        assert_eq!(Coupling::try_from("-1"), Ok(Coupling::Antiferromagnetic));
        assert!(Coupling::try_from("ising").is_err());
        assert_eq!(Coupling::Ferromagnetic.j(), 1);
        assert_eq!(Coupling::Antiferromagnetic.j(), -1);

        assert_eq!(InitPattern::try_from("all-up"), Ok(InitPattern::AllUp));
        assert_eq!(
            InitPattern::try_from("checkerboard"),
            Ok(InitPattern::Checkerboard)
        );
        assert_eq!(InitPattern::try_from("columnar"), Ok(InitPattern::Columnar));
        assert!(InitPattern::try_from("random").is_err());
    }
}
