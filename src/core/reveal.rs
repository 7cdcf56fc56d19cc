//! Staggered word reveal for the hero headline
//!
//! A `RevealSequence` is built once from a fixed word list and a
//! `RevealConfig`. Word `i` starts its entrance `i * step_delay` seconds after
//! mount, so words always appear in order. The sequence never replays.

use super::spring::Spring;

/// Headline words, in reveal order
pub const HEADLINE_WORDS: [&str; 5] = ["Supercharge", "your", "e-learning", "content", "creation."];

/// Invalid animation parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevealConfigError {
    #[error("step delay must be a positive number of seconds, got {0}")]
    InvalidStep(f64),
    #[error("spring stiffness must be positive, got {0}")]
    InvalidStiffness(f64),
    #[error("spring damping must not be negative, got {0}")]
    InvalidDamping(f64),
    #[error("spring mass must be positive, got {0}")]
    InvalidMass(f64),
    #[error("reveal offset must be a finite number of pixels, got {0}")]
    InvalidOffset(f64),
}

/// Timing and easing parameters of the reveal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    step_delay: f64,
    stiffness: f64,
    damping: f64,
    mass: f64,
    offset_px: f64,
}

impl RevealConfig {
    pub const DEFAULT_STEP_DELAY: f64 = 0.12;
    pub const DEFAULT_STIFFNESS: f64 = 260.0;
    pub const DEFAULT_DAMPING: f64 = 24.0;
    pub const DEFAULT_MASS: f64 = 1.0;
    pub const DEFAULT_OFFSET_PX: f64 = 20.0;

    /// Validated configuration with unit mass and the default offset
    pub fn new(step_delay: f64, stiffness: f64, damping: f64) -> Result<Self, RevealConfigError> {
        Self::default().with_timing(step_delay, stiffness, damping)
    }

    fn with_timing(
        mut self,
        step_delay: f64,
        stiffness: f64,
        damping: f64,
    ) -> Result<Self, RevealConfigError> {
        if !step_delay.is_finite() || step_delay <= 0.0 {
            return Err(RevealConfigError::InvalidStep(step_delay));
        }
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(RevealConfigError::InvalidStiffness(stiffness));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(RevealConfigError::InvalidDamping(damping));
        }
        self.step_delay = step_delay;
        self.stiffness = stiffness;
        self.damping = damping;
        Ok(self)
    }

    pub fn with_mass(mut self, mass: f64) -> Result<Self, RevealConfigError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(RevealConfigError::InvalidMass(mass));
        }
        self.mass = mass;
        Ok(self)
    }

    /// Vertical distance each word travels, in pixels
    pub fn with_offset(mut self, offset_px: f64) -> Result<Self, RevealConfigError> {
        if !offset_px.is_finite() {
            return Err(RevealConfigError::InvalidOffset(offset_px));
        }
        self.offset_px = offset_px;
        Ok(self)
    }

    pub fn step_delay(&self) -> f64 {
        self.step_delay
    }

    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    pub fn spring(&self) -> Spring {
        Spring::new(self.stiffness, self.damping, self.mass)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            step_delay: Self::DEFAULT_STEP_DELAY,
            stiffness: Self::DEFAULT_STIFFNESS,
            damping: Self::DEFAULT_DAMPING,
            mass: Self::DEFAULT_MASS,
            offset_px: Self::DEFAULT_OFFSET_PX,
        }
    }
}

/// One word of the headline with its start delay
#[derive(Clone, Debug, PartialEq)]
pub struct RevealToken {
    pub index: usize,
    pub text: String,
    /// Seconds after mount at which this word starts moving
    pub delay: f64,
    /// The first word is set in a heavier weight
    pub emphasized: bool,
}

/// Ordered words with their staggered start times
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSequence {
    tokens: Vec<RevealToken>,
    config: RevealConfig,
}

impl RevealSequence {
    pub fn new<I, S>(words: I, config: RevealConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| RevealToken {
                index,
                text: word.into(),
                delay: index as f64 * config.step_delay,
                emphasized: index == 0,
            })
            .collect();

        Self { tokens, config }
    }

    /// The hero headline with the default timing
    pub fn headline() -> Self {
        Self::new(HEADLINE_WORDS, RevealConfig::default())
    }

    pub fn tokens(&self) -> &[RevealToken] {
        &self.tokens
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Start delay of word `index`, or `None` past the end
    pub fn delay_for(&self, index: usize) -> Option<f64> {
        self.tokens.get(index).map(|token| token.delay)
    }

    /// Plain text of the whole headline for screen readers
    pub fn accessible_text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Seconds from mount until the last word has settled
    pub fn total_duration(&self) -> f64 {
        match self.tokens.last() {
            Some(last) => last.delay + self.config.spring().settle_duration(),
            None => 0.0,
        }
    }
}
