//! Entrance animation timelines.
//!
//! An entrance animation is a one-shot transition from a start [`Pose`] to the
//! rest pose, played once when a page loads. Timelines are fixed data: the
//! page shell ([`SHELL`]) and the titled section ([`SECTION`]) each declare
//! their transitions as constants, and every transition in a timeline starts
//! at mount.
//!
//! ## Rendering
//!
//! Timelines are compiled to CSS by [`stylesheet`]: one `@keyframes` rule and
//! one `.anim-*` class per transition. Markup opts a region into a transition
//! by adding [`Transition::class`]. The fill mode is `both`, so a region shows
//! its start pose during any delay and keeps the rest pose afterwards.
//!
//! Markup never depends on animation state. Content is in the document from
//! the first byte; the stylesheet only changes how it is presented. When
//! animations are disabled (or the visitor prefers reduced motion) the rules
//! are simply absent and everything renders at rest.
//!
//! ## Sampling
//!
//! [`Transition::sample`] and [`Mount`] evaluate a timeline at an arbitrary
//! elapsed time with the same cubic-bezier curves the browser uses. Each page
//! load is a fresh [`Mount`] that starts at zero.

use crate::config::AnimationConfig;
use std::fmt::Write;

/// Visual state of an animated region.
///
/// Offsets are CSS pixels. [`Pose::REST`] is the resting state every
/// transition ends in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Fully transparent, otherwise at rest.
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    fn lerp(from: Pose, to: Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(from.opacity, to.opacity),
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            scale: mix(from.scale, to.scale),
        }
    }
}

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// CSS `ease-in-out`, used when a transition names no curve.
    EaseInOut,
    EaseOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOut => "ease-out",
        }
    }

    /// Control points `(x1, y1, x2, y2)` of the equivalent `cubic-bezier()`.
    fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
        }
    }

    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, progress: f64) -> f64 {
        let progress = progress.clamp(0.0, 1.0);
        if progress == 0.0 || progress == 1.0 {
            return progress;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let bezier = |p1: f64, p2: f64, s: f64| {
            let inv = 1.0 - s;
            3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
        };
        // x(s) is monotonic for CSS curves, so bisection converges.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..48 {
            let mid = (lo + hi) / 2.0;
            if bezier(x1, x2, mid) < progress {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bezier(y1, y2, (lo + hi) / 2.0)
    }
}

/// One region's entrance: start pose → [`Pose::REST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Region name, used for the keyframes and class names.
    pub name: &'static str,
    pub from: Pose,
    /// Seconds.
    pub duration: f64,
    /// Seconds after mount before the transition starts.
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    /// Class that attaches this transition to an element.
    pub fn class(&self) -> String {
        format!("anim-{}", self.name)
    }

    fn keyframes_name(&self) -> String {
        format!("folio-{}", self.name)
    }

    /// Seconds after mount at which the region is at rest.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// Pose of the region `elapsed` seconds after mount.
    pub fn sample(&self, elapsed: f64) -> Pose {
        if elapsed <= self.delay {
            return self.from;
        }
        if elapsed >= self.end() {
            return Pose::REST;
        }
        let progress = (elapsed - self.delay) / self.duration;
        Pose::lerp(self.from, Pose::REST, self.easing.apply(progress))
    }

    /// CSS declarations for a pose, limited to the properties this
    /// transition animates.
    fn declarations(&self, pose: Pose) -> String {
        let from = self.from;
        let mut out = String::new();
        if from.opacity != Pose::REST.opacity {
            let _ = write!(out, "opacity: {}; ", pose.opacity);
        }
        let mut transforms = Vec::new();
        if from.x != Pose::REST.x {
            transforms.push(format!("translateX({}px)", pose.x));
        }
        if from.y != Pose::REST.y {
            transforms.push(format!("translateY({}px)", pose.y));
        }
        if from.scale != Pose::REST.scale {
            transforms.push(format!("scale({})", pose.scale));
        }
        if !transforms.is_empty() {
            let _ = write!(out, "transform: {}; ", transforms.join(" "));
        }
        out.trim_end().to_string()
    }

    /// `@keyframes` rule plus the class that plays it.
    pub fn css(&self) -> String {
        format!(
            "@keyframes {name} {{\n    from {{ {from} }}\n    to {{ {to} }}\n}}\n\
             .{class} {{ animation: {name} {duration}s {easing} {delay}s both; }}\n",
            name = self.keyframes_name(),
            from = self.declarations(self.from),
            to = self.declarations(Pose::REST),
            class = self.class(),
            duration = self.duration,
            easing = self.easing.css(),
            delay = self.delay,
        )
    }
}

/// A named set of transitions that all start at mount.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    pub name: &'static str,
    pub transitions: &'static [Transition],
}

impl Timeline {
    /// Seconds after mount at which every region is at rest.
    pub fn settle_time(&self) -> f64 {
        self.transitions
            .iter()
            .map(Transition::end)
            .fold(0.0, f64::max)
    }

    pub fn get(&self, name: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.name == name)
    }
}

// ============================================================================
// Timelines
// ============================================================================

pub const SHELL_BACKDROP: Transition = Transition {
    name: "shell-backdrop",
    from: Pose::HIDDEN,
    duration: 0.5,
    delay: 0.0,
    easing: Easing::EaseInOut,
};

pub const SHELL_FRAME: Transition = Transition {
    name: "shell-frame",
    from: Pose {
        opacity: 0.0,
        y: -30.0,
        ..Pose::REST
    },
    duration: 0.7,
    delay: 0.0,
    easing: Easing::EaseOut,
};

pub const SHELL_WRAPPER: Transition = Transition {
    name: "shell-wrapper",
    from: Pose {
        opacity: 0.0,
        scale: 0.95,
        ..Pose::REST
    },
    duration: 0.8,
    delay: 0.0,
    easing: Easing::EaseOut,
};

pub const SHELL_HEADER: Transition = Transition {
    name: "shell-header",
    from: Pose {
        opacity: 0.0,
        y: -20.0,
        ..Pose::REST
    },
    duration: 0.6,
    delay: 0.0,
    easing: Easing::EaseOut,
};

pub const SHELL_MAIN: Transition = Transition {
    name: "shell-main",
    from: Pose::HIDDEN,
    duration: 0.9,
    delay: 0.0,
    easing: Easing::EaseOut,
};

pub const SHELL_FOOTER: Transition = Transition {
    name: "shell-footer",
    from: Pose {
        opacity: 0.0,
        y: 20.0,
        ..Pose::REST
    },
    duration: 0.6,
    delay: 0.0,
    easing: Easing::EaseOut,
};

/// Page shell: background, frame, content wrapper, header, main, footer.
pub const SHELL: Timeline = Timeline {
    name: "Page shell",
    transitions: &[
        SHELL_BACKDROP,
        SHELL_FRAME,
        SHELL_WRAPPER,
        SHELL_HEADER,
        SHELL_MAIN,
        SHELL_FOOTER,
    ],
};

pub const SECTION_BLOCK: Transition = Transition {
    name: "section",
    from: Pose {
        opacity: 0.0,
        y: 50.0,
        ..Pose::REST
    },
    duration: 0.6,
    delay: 0.0,
    easing: Easing::EaseOut,
};

pub const SECTION_HEADING: Transition = Transition {
    name: "section-heading",
    from: Pose {
        opacity: 0.0,
        x: -20.0,
        ..Pose::REST
    },
    duration: 0.5,
    delay: 0.2,
    easing: Easing::EaseInOut,
};

pub const SECTION_BODY: Transition = Transition {
    name: "section-body",
    from: Pose::HIDDEN,
    duration: 0.8,
    delay: 0.4,
    easing: Easing::EaseInOut,
};

/// Titled section: block slides up, heading slides in, body fades in.
pub const SECTION: Timeline = Timeline {
    name: "Section",
    transitions: &[SECTION_BLOCK, SECTION_HEADING, SECTION_BODY],
};

pub const TIMELINES: &[Timeline] = &[SHELL, SECTION];

// ============================================================================
// Mount lifecycle
// ============================================================================

/// Lifecycle of a mounted timeline. There is no branch back: a mount only
/// moves forward, and a new page load creates a new [`Mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Animating,
    Rested,
}

/// A timeline played from a page load.
#[derive(Debug, Clone, Copy)]
pub struct Mount {
    timeline: Timeline,
}

impl Mount {
    pub fn new(timeline: Timeline) -> Self {
        Self { timeline }
    }

    pub fn phase(&self, elapsed: f64) -> Phase {
        if elapsed >= self.timeline.settle_time() {
            Phase::Rested
        } else {
            Phase::Animating
        }
    }

    /// Every region's pose at `elapsed`, in timeline order.
    pub fn poses(&self, elapsed: f64) -> Vec<(&'static str, Pose)> {
        self.timeline
            .transitions
            .iter()
            .map(|t| (t.name, t.sample(elapsed)))
            .collect()
    }
}

/// Compile all timelines into CSS according to the animation settings.
///
/// Disabled animations produce an empty string; with `respect_reduced_motion`
/// the rules only apply under `prefers-reduced-motion: no-preference`.
pub fn stylesheet(config: &AnimationConfig) -> String {
    if !config.enabled {
        return String::new();
    }
    let rules: String = TIMELINES
        .iter()
        .flat_map(|timeline| timeline.transitions.iter())
        .map(Transition::css)
        .collect();
    if config.respect_reduced_motion {
        let indented: String = rules
            .lines()
            .map(|line| format!("    {line}\n"))
            .collect();
        format!("@media (prefers-reduced-motion: no-preference) {{\n{indented}}}\n")
    } else {
        rules
    }
}
