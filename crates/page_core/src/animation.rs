//! Skill-bar reveal transition.

use std::time::Duration;

pub const BAR_TRANSITION: Duration = Duration::from_millis(1000);
pub const BAR_STAGGER: Duration = Duration::from_millis(100);

fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Current width fraction of the bar at `index`. `since_reveal` is `None`
/// until the reveal latch is set.
pub fn bar_fraction(level: u8, index: usize, since_reveal: Option<Duration>) -> f32 {
    let target = f32::from(level.min(100)) / 100.0;
    let Some(elapsed) = since_reveal else {
        return 0.0;
    };

    let delay = BAR_STAGGER * index as u32;
    let Some(running) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    if running >= BAR_TRANSITION {
        return target;
    }

    target * ease_out(running.as_secs_f32() / BAR_TRANSITION.as_secs_f32())
}

/// Whether every one of `bars` has reached its target width.
pub fn transition_settled(bars: usize, since_reveal: Option<Duration>) -> bool {
    match since_reveal {
        None => true,
        Some(elapsed) => {
            let last_delay = BAR_STAGGER * bars.saturating_sub(1) as u32;
            elapsed >= last_delay + BAR_TRANSITION
        }
    }
}
