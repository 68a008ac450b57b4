use dioxus::prelude::*;

pub const STAR_COUNT: usize = 160;
const STAR_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Percent of the container width.
    pub left: f64,
    /// Percent of the container height.
    pub top: f64,
    pub size: f64,
    pub delay_ms: u32,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {}ms;",
            self.left,
            self.top,
            self.size,
            self.size,
            self.delay_ms
        )
    }
}

/// Same layout on every render so the sky does not reshuffle on toggles.
pub fn star_positions(count: usize) -> Vec<Star> {
    let mut state = STAR_SEED;
    let mut next = move || {
        // xorshift64*
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        (state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11) as f64 / (1u64 << 53) as f64
    };

    (0..count)
        .map(|_| Star {
            left: next() * 100.0,
            top: next() * 100.0,
            size: 1.0 + next() * 1.5,
            delay_ms: (next() * 4000.0) as u32,
        })
        .collect()
}

#[component]
pub fn Starfield() -> Element {
    let stars = use_hook(|| star_positions(STAR_COUNT));

    rsx! {
        div { class: "absolute inset-0 z-0 pointer-events-none overflow-hidden",
            for (index, star) in stars.iter().enumerate() {
                span {
                    key: "{index}",
                    class: "star absolute rounded-full bg-white",
                    style: star.style(),
                }
            }
        }
    }
}
