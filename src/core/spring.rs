//! Spring easing for entrance animations
//!
//! Models a damped harmonic oscillator released from rest one unit away from
//! its target. `progress(t)` goes from 0 to 1 (possibly overshooting), and the
//! whole curve can be exported as a CSS `linear()` easing function so the
//! animation runs without any script.

/// Displacement below which the spring counts as settled
pub const REST_DELTA: f64 = 0.005;

/// Upper bound for the settle time, reached by undamped springs
pub const MAX_SETTLE_SECS: f64 = 10.0;

/// Sampling step used when searching for the settle time
const SETTLE_STEP_SECS: f64 = 1.0 / 120.0;

/// Physical spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Undamped angular frequency, in rad/s
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Below 1 the spring overshoots, 1 is critical, above 1 it creeps
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Remaining distance to the target at time `t` (seconds), starting at 1
    pub fn displacement(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }

        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = zeta * w0;
            (-decay * t).exp() * ((wd * t).cos() + (decay / wd) * (wd * t).sin())
        } else {
            let spread = w0 * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * w0 + spread;
            let r2 = -zeta * w0 - spread;
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Animation progress at time `t`, 0 at rest position, 1 at target
    pub fn progress(&self, t: f64) -> f64 {
        1.0 - self.displacement(t)
    }

    /// Time after which the displacement stays within [`REST_DELTA`]
    pub fn settle_duration(&self) -> f64 {
        let steps = (MAX_SETTLE_SECS / SETTLE_STEP_SECS).round() as usize;
        let mut last_moving = 0;

        for step in 0..=steps {
            let t = step as f64 * SETTLE_STEP_SECS;
            if self.displacement(t).abs() > REST_DELTA {
                last_moving = step;
            }
        }

        ((last_moving + 1) as f64 * SETTLE_STEP_SECS).min(MAX_SETTLE_SECS)
    }

    /// CSS `linear()` easing sampled over [`Spring::settle_duration`]
    ///
    /// The first point is always `0` and the last always `1`, so the element
    /// ends exactly at its resting state.
    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let duration = self.settle_duration();
        let last = samples - 1;

        let points: Vec<String> = (0..samples)
            .map(|i| {
                if i == 0 {
                    "0".to_string()
                } else if i == last {
                    "1".to_string()
                } else {
                    let t = duration * i as f64 / last as f64;
                    format_point(self.progress(t))
                }
            })
            .collect();

        format!("linear({})", points.join(", "))
    }
}

fn format_point(value: f64) -> String {
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
