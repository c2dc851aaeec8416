//! Rajju porutham: the five-group compatibility check between two
//! birth nakshatras.
//!
//! Each nakshatra belongs to one body part (head, neck, stomach, thigh,
//! foot). Partners in different groups agree; partners in the same group
//! do not.

use crate::vedic::nakshatra::Nakshatra;
use serde::{Serialize, Serializer};
use std::fmt;

/// Points awarded when the groups differ.
pub const RAJJU_POINTS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RajjuGroup {
    Sira,
    Kantha,
    Udara,
    Vooru,
    Paada,
}

static RAJJU_GROUPS: [(RajjuGroup, &str, &[Nakshatra]); 5] = [
    (
        RajjuGroup::Sira,
        "Sira - Head",
        &[Nakshatra::Mrigashira, Nakshatra::Chitra, Nakshatra::Dhanishta],
    ),
    (
        RajjuGroup::Kantha,
        "Kantha - Neck",
        &[
            Nakshatra::Rohini,
            Nakshatra::Ardra,
            Nakshatra::Hasta,
            Nakshatra::Swati,
            Nakshatra::Shravana,
            Nakshatra::Shatabhisha,
        ],
    ),
    (
        RajjuGroup::Udara,
        "Udara - Stomach",
        &[
            Nakshatra::Krittika,
            Nakshatra::Punarvasu,
            Nakshatra::UttaraPhalguni,
            Nakshatra::Vishakha,
            Nakshatra::UttaraAshadha,
            Nakshatra::PurvaBhadrapada,
        ],
    ),
    (
        RajjuGroup::Vooru,
        "Vooru - Thigh",
        &[
            Nakshatra::Bharani,
            Nakshatra::Pushya,
            Nakshatra::PurvaPhalguni,
            Nakshatra::Anuradha,
            Nakshatra::PurvaAshadha,
            Nakshatra::UttaraBhadrapada,
        ],
    ),
    (
        RajjuGroup::Paada,
        "Paada - Foot",
        &[
            Nakshatra::Ashwini,
            Nakshatra::Ashlesha,
            Nakshatra::Magha,
            Nakshatra::Jyeshtha,
            Nakshatra::Mula,
            Nakshatra::Revati,
        ],
    ),
];

impl RajjuGroup {
    pub fn all() -> impl Iterator<Item = RajjuGroup> {
        RAJJU_GROUPS.iter().map(|(group, _, _)| *group)
    }

    /// Label such as `"Sira - Head"`.
    pub fn label(self) -> &'static str {
        RAJJU_GROUPS[self as usize].1
    }

    pub fn members(self) -> &'static [Nakshatra] {
        RAJJU_GROUPS[self as usize].2
    }

    pub fn of(nakshatra: Nakshatra) -> RajjuGroup {
        RAJJU_GROUPS
            .iter()
            .find(|(_, _, members)| members.contains(&nakshatra))
            .map(|(group, _, _)| *group)
            // The five groups partition all 27 mansions.
            .unwrap_or(RajjuGroup::Paada)
    }

    /// Group of a nakshatra given by name; `None` when the name is unknown.
    pub fn of_name(name: &str) -> Option<RajjuGroup> {
        Nakshatra::from_name(name).map(RajjuGroup::of)
    }
}

impl fmt::Display for RajjuGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RajjuGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RajjuOutcome {
    Success {
        boy_group: RajjuGroup,
        girl_group: RajjuGroup,
    },
    NoAgreement {
        common_group: RajjuGroup,
    },
    InvalidNakshatra,
}

impl RajjuOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RajjuOutcome::Success { .. } => "Success!",
            RajjuOutcome::NoAgreement { .. } => "No Agreement",
            RajjuOutcome::InvalidNakshatra => "Invalid Nakshatra Provided",
        }
    }

    /// `None` when either nakshatra was not recognised.
    pub fn points(&self) -> Option<u8> {
        match self {
            RajjuOutcome::Success { .. } => Some(RAJJU_POINTS),
            RajjuOutcome::NoAgreement { .. } => Some(0),
            RajjuOutcome::InvalidNakshatra => None,
        }
    }
}

/// Compare the rajju groups of two nakshatras given by name.
///
/// Names are matched exactly against the canonical table and its aliases;
/// an unknown name on either side yields [`RajjuOutcome::InvalidNakshatra`].
pub fn rajju_match(boy_nakshatra: &str, girl_nakshatra: &str) -> RajjuOutcome {
    let boy = RajjuGroup::of_name(boy_nakshatra);
    let girl = RajjuGroup::of_name(girl_nakshatra);
    log::debug!(
        "Rajju lookup: {} -> {:?}, {} -> {:?}",
        boy_nakshatra,
        boy,
        girl_nakshatra,
        girl
    );
    match (boy, girl) {
        (Some(boy_group), Some(girl_group)) if boy_group == girl_group => {
            RajjuOutcome::NoAgreement {
                common_group: boy_group,
            }
        }
        (Some(boy_group), Some(girl_group)) => RajjuOutcome::Success {
            boy_group,
            girl_group,
        },
        _ => RajjuOutcome::InvalidNakshatra,
    }
}
