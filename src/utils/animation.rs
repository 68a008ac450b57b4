use std::fmt::{ Display, Formatter };
use std::str::FromStr;

use crate::error::AnimationError;

pub const PALETTE: [&str; 4] = ["#13FFAA", "#1E67C6", "#CE84CF", "#DD335C"];

/// First palette entry, used wherever an animation could not start.
pub const FALLBACK_ACCENT: Rgb = Rgb::new(0x13, 0xFF, 0xAA);

pub const COLOR_CYCLE_MS: f64 = 10_000.0;
pub const TITLE_SWEEP_MS: f64 = 10_000.0;
pub const BORDER_SWEEP_MS: f64 = 20_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnimationError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub trait Interpolate: Clone {
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Rgb {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| (a as f64).interpolate(&(b as f64), t).round().clamp(0.0, 255.0) as u8;
        Self::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.42, 0, 0.58, 1)
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let curve = |p1: f64, p2: f64, t: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    // x(t) is monotonic for control points inside [0, 1], so bisection converges.
    let (mut lo, mut hi) = (0.0, 1.0);
    let mut t = x;
    for _ in 0..40 {
        let estimate = curve(x1, x2, t);
        if (estimate - x).abs() < 1e-7 {
            break;
        }
        if estimate < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    curve(y1, y2, t)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Restart from the first keyframe every cycle.
    Loop,
    /// Alternate forwards and backwards.
    Mirror,
}

/// Anything that yields a value for a point in time.
pub trait Animated {
    type Value: Clone + 'static;

    fn sample(&self, elapsed_ms: f64) -> Self::Value;
}

/// Evenly spaced over one cycle; easing applies per segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes<T> {
    frames: Vec<T>,
    duration_ms: f64,
    easing: Easing,
    repeat: Repeat,
}

impl<T: Interpolate> Keyframes<T> {
    pub fn new(
        frames: Vec<T>,
        duration_ms: f64,
        easing: Easing,
        repeat: Repeat
    ) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::EmptyKeyframes);
        }
        if !(duration_ms > 0.0) || !duration_ms.is_finite() {
            return Err(AnimationError::InvalidDuration(duration_ms));
        }
        Ok(Self { frames, duration_ms, easing, repeat })
    }

    /// Linear position inside one cycle, in `[0, 1]`.
    pub fn cycle_position(&self, elapsed_ms: f64) -> f64 {
        let elapsed = elapsed_ms.max(0.0);
        let cycle = (elapsed / self.duration_ms).floor();
        let within = elapsed / self.duration_ms - cycle;

        match self.repeat {
            Repeat::Loop => within,
            Repeat::Mirror if cycle % 2.0 == 1.0 => 1.0 - within,
            Repeat::Mirror => within,
        }
    }
}

impl<T: Interpolate + 'static> Animated for Keyframes<T> {
    type Value = T;

    fn sample(&self, elapsed_ms: f64) -> T {
        let last = self.frames.len() - 1;
        if last == 0 {
            return self.frames[0].clone();
        }

        let scaled = self.cycle_position(elapsed_ms) * last as f64;
        let index = (scaled.floor() as usize).min(last - 1);
        let local = self.easing.apply(scaled - index as f64);
        self.frames[index].interpolate(&self.frames[index + 1], local)
    }
}

pub fn parse_palette(palette: &[&str]) -> Result<Vec<Rgb>, AnimationError> {
    palette.iter().map(|color| color.parse()).collect()
}

/// The accent color every section borders and glows with.
pub fn color_cycle() -> Result<Keyframes<Rgb>, AnimationError> {
    Keyframes::new(parse_palette(&PALETTE)?, COLOR_CYCLE_MS, Easing::EaseInOut, Repeat::Mirror)
}

/// Background position (percent) of the gradient headings.
pub fn title_sweep() -> Result<Keyframes<f64>, AnimationError> {
    Keyframes::new(vec![0.0, 100.0], TITLE_SWEEP_MS, Easing::Linear, Repeat::Mirror)
}

/// Background position (percent) of the contact card's border.
pub fn border_sweep() -> Result<Keyframes<f64>, AnimationError> {
    Keyframes::new(vec![0.0, 100.0, 0.0], BORDER_SWEEP_MS, Easing::Linear, Repeat::Loop)
}

pub fn palette_gradient() -> String {
    format!("linear-gradient(90deg, {})", PALETTE.join(", "))
}

pub fn gradient_text_style(position: f64) -> String {
    format!(
        "background-image: {}; -webkit-background-clip: text; background-clip: text; color: transparent; background-size: 400% 100%; background-position: {:.2}% 50%;",
        palette_gradient(),
        position
    )
}

pub fn glow_style(accent: Rgb) -> String {
    format!(
        "border-color: {accent}; border-width: 1px; border-style: solid; box-shadow: 0px 4px 24px {accent};"
    )
}
