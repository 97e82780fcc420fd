use super::constants::{MAX_SPLASHES, MAX_SPLASHES_LIMIT, MOBILE_BREAKPOINT_PX};
use thiserror::Error;

/// Runtime knobs for a mounted splash engine.
#[derive(Clone, Debug, PartialEq)]
pub struct SplashParams {
    /// Live splash limit; overrides must lie in `1..=MAX_SPLASHES_LIMIT`.
    pub max_splashes: usize,
    pub mobile_breakpoint: f32,
    /// Fixed RNG seed; `None` seeds from the platform entropy source.
    pub seed: Option<u64>,
}

impl Default for SplashParams {
    fn default() -> Self {
        Self {
            max_splashes: MAX_SPLASHES,
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("unknown splash parameter `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

impl SplashParams {
    /// Apply one `key = value` override, as read from the canvas `data-*`
    /// attributes (`maxSplashes`, `mobileBreakpoint`, `seed`).
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ParamsError> {
        let invalid = || ParamsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "maxSplashes" => {
                let n: usize = value.parse().map_err(|_| invalid())?;
                if n == 0 || n > MAX_SPLASHES_LIMIT {
                    return Err(invalid());
                }
                self.max_splashes = n;
            }
            "mobileBreakpoint" => {
                let bp: f32 = value.parse().map_err(|_| invalid())?;
                if !bp.is_finite() || bp < 0.0 {
                    return Err(invalid());
                }
                self.mobile_breakpoint = bp;
            }
            "seed" => {
                self.seed = Some(value.parse().map_err(|_| invalid())?);
            }
            _ => return Err(ParamsError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply every override, keeping the valid ones and returning the rest
    /// as errors for the caller to report.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> (Self, Vec<ParamsError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let errors = overrides
            .into_iter()
            .filter_map(|(k, v)| self.apply(k, v).err())
            .collect();
        (self, errors)
    }
}
