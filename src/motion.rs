//! Scroll, pointer and reveal effects as plain computations.
//!
//! The browser glue lives in `app::reveal` and the page components; everything
//! here is deterministic so it can be tested without a DOM.

use std::{collections::HashSet, time::Duration};

use crate::content::Skill;

pub const BACKGROUND_PARALLAX: f64 = 0.5;
pub const HERO_PARALLAX: f64 = 0.2;

/// Share of an element that must be visible before it counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport by 50px at the bottom edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const SKILL_STAGGER: Duration = Duration::from_millis(200);

const TILT_DIVISOR: f64 = 15.0;
const TILT_PERSPECTIVE_PX: u32 = 1000;
const TILT_LIFT_PX: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub background: f64,
    pub hero: f64,
}

impl Parallax {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            background: scroll_y * BACKGROUND_PARALLAX,
            hero: scroll_y * HERO_PARALLAX,
        }
    }
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Card rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`/`y` are relative to the card's top-left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / TILT_DIVISOR,
            rotate_y: (center_x - x) / TILT_DIVISOR,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) translateZ({TILT_LIFT_PX}px)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn neutral_transform() -> String {
        format!("perspective({TILT_PERSPECTIVE_PX}px) rotateX(0) rotateY(0) translateZ(0)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RevealKey {
    Skills,
    Experience(String),
    Project(String),
    Contact,
}

impl RevealKey {
    const EXPERIENCE: &'static str = "experience:";
    const PROJECT: &'static str = "project:";

    /// Value stored in the element's `data-reveal` attribute.
    pub fn attr(&self) -> String {
        match self {
            RevealKey::Skills => "skills".to_string(),
            RevealKey::Contact => "contact".to_string(),
            RevealKey::Experience(k) => format!("{}{k}", Self::EXPERIENCE),
            RevealKey::Project(k) => format!("{}{k}", Self::PROJECT),
        }
    }

    pub fn from_attr(attr: &str) -> Option<Self> {
        match attr {
            "skills" => Some(RevealKey::Skills),
            "contact" => Some(RevealKey::Contact),
            _ => {
                if let Some(k) = attr.strip_prefix(Self::EXPERIENCE) {
                    Some(RevealKey::Experience(k.to_string()))
                } else {
                    attr.strip_prefix(Self::PROJECT)
                        .map(|k| RevealKey::Project(k.to_string()))
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Already visible; nothing to do.
    Unchanged,
    Revealed,
    /// The skills section came into view; start the bar animations.
    RevealedSkills,
}

/// Elements that have entered the viewport. Reveals are permanent.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<RevealKey>,
}

impl RevealTracker {
    pub fn is_revealed(&self, key: &RevealKey) -> bool {
        self.revealed.contains(key)
    }

    pub fn reveal(&mut self, key: RevealKey) -> Reveal {
        let is_skills = key == RevealKey::Skills;
        if !self.revealed.insert(key) {
            Reveal::Unchanged
        } else if is_skills {
            Reveal::RevealedSkills
        } else {
            Reveal::Revealed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarAnimation {
    pub index: usize,
    pub delay: Duration,
    pub width: u8,
}

/// One animation per skill, each starting [`SKILL_STAGGER`] after the previous.
pub fn skill_bar_schedule(skills: &[Skill]) -> Vec<BarAnimation> {
    skills
        .iter()
        .enumerate()
        .map(|(index, skill)| BarAnimation {
            index,
            delay: SKILL_STAGGER * index as u32,
            width: skill.width_percent(),
        })
        .collect()
}
