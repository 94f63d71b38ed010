//! Enter transitions expressed as data. Components pick a [`Motion`] record
//! and let CSS interpolate between its poses; nothing here runs a timeline.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub y_px: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y_px: 0.0,
        scale: 1.0,
    };

    pub fn css(&self) -> String {
        format!(
            "opacity:{};transform:translateY({}px) scale({});",
            self.opacity, self.y_px, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    EaseOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::EaseOut => "ease-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub ease: Ease,
    pub from: Pose,
    pub to: Pose,
}

impl Motion {
    /// Full inline style for one side of the transition. Rendering `from`
    /// first and swapping to `to` after mount is what makes the element
    /// animate in.
    pub fn style(&self, entered: bool) -> String {
        let pose = if entered { self.to } else { self.from };
        let e = self.ease.css();
        format!(
            "{}transition:opacity {dur}ms {e} {delay}ms,transform {dur}ms {e} {delay}ms;",
            pose.css(),
            dur = self.duration_ms,
            delay = self.delay_ms,
        )
    }
}

/// Fade-slide used by every page body.
pub const PAGE_ENTER: Motion = Motion {
    duration_ms: 400,
    delay_ms: 0,
    ease: Ease::EaseOut,
    from: Pose {
        opacity: 0.0,
        y_px: 12.0,
        scale: 1.0,
    },
    to: Pose::REST,
};

/// Same fade-slide, slightly behind, for the second column of split pages.
pub const PAGE_ENTER_DELAYED: Motion = Motion {
    duration_ms: 500,
    delay_ms: 50,
    ease: Ease::EaseOut,
    from: Pose {
        opacity: 0.0,
        y_px: 12.0,
        scale: 1.0,
    },
    to: Pose::REST,
};

/// Replayed whenever the project preview swaps images.
pub const PREVIEW_ENTER: Motion = Motion {
    duration_ms: 350,
    delay_ms: 0,
    ease: Ease::EaseOut,
    from: Pose {
        opacity: 0.0,
        y_px: 8.0,
        scale: 0.98,
    },
    to: Pose::REST,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_starts_at_from_pose() {
        let s = PAGE_ENTER.style(false);
        assert!(s.contains("opacity:0"));
        assert!(s.contains("translateY(12px)"));
    }

    #[test]
    fn style_settles_at_rest() {
        let s = PAGE_ENTER.style(true);
        assert!(s.contains("opacity:1"));
        assert!(s.contains("translateY(0px) scale(1)"));
    }

    #[test]
    fn transition_carries_duration_ease_and_delay() {
        let s = PAGE_ENTER_DELAYED.style(true);
        assert!(s.contains("500ms ease-out 50ms"));
    }

    #[test]
    fn preview_enter_scales_up_from_slightly_shrunk() {
        assert_eq!(PREVIEW_ENTER.from.scale, 0.98);
        assert_eq!(PREVIEW_ENTER.to, Pose::REST);
    }
}
