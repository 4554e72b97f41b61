//! Experience bucket matching.
//!
//! `Loose` compares the text before the first space of a selected label
//! ("5+" for "5+ years") as a substring of the candidate's experience string.
//! `Range` parses both sides into years and checks containment.

use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Options offered by the experience facet.
pub const EXPERIENCE_LEVELS: [&str; 4] = ["1-2 years", "3-5 years", "5+ years", "7+ years"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceMatch {
    #[default]
    Loose,
    Range,
}

impl FromStr for ExperienceMatch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loose" => Ok(ExperienceMatch::Loose),
            "range" => Ok(ExperienceMatch::Range),
            other => Err(anyhow!(
                "unknown experience match mode '{other}' (expected 'loose' or 'range')"
            )),
        }
    }
}

/// Inclusive year range; `max == None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearsRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl YearsRange {
    /// "1-2 years" → 1..=2, "5+ years" → 5.., "3 years" → 3..=3.
    pub fn parse(label: &str) -> Option<Self> {
        let token = label.split_whitespace().next()?;
        if let Some(min) = token.strip_suffix('+') {
            return Some(Self {
                min: min.parse().ok()?,
                max: None,
            });
        }
        if let Some((lo, hi)) = token.split_once('-') {
            let min: u32 = lo.parse().ok()?;
            let max: u32 = hi.parse().ok()?;
            if max < min {
                return None;
            }
            return Some(Self {
                min,
                max: Some(max),
            });
        }
        let exact: u32 = token.parse().ok()?;
        Some(Self {
            min: exact,
            max: Some(exact),
        })
    }

    pub fn contains(&self, years: u32) -> bool {
        years >= self.min && self.max.map_or(true, |max| years <= max)
    }
}

/// Leading integer of a free-text experience string ("6+ years" → 6).
pub fn leading_years(experience: &str) -> Option<u32> {
    let digits: String = experience
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn loose_token(label: &str) -> &str {
    label.split(' ').next().unwrap_or(label)
}

/// Whether a single selected label matches a candidate's experience string.
pub fn label_matches(label: &str, experience: &str, mode: ExperienceMatch) -> bool {
    match mode {
        ExperienceMatch::Loose => experience.contains(loose_token(label)),
        ExperienceMatch::Range => match (YearsRange::parse(label), leading_years(experience)) {
            (Some(range), Some(years)) => range.contains(years),
            _ => false,
        },
    }
}
