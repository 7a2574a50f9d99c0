use serde::Serialize;
use thiserror::Error;

use crate::model::entity::{Days, Destination, Headcount, PackageKind, TicketTier, TravelerProfile};
use crate::model::facility::FacilityKind;

pub type Code = u32;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid city selection: {0:?}")]
    UnknownDestination(String),
    #[error("Invalid package type: {0:?}")]
    UnknownPackage(String),
    #[error("Invalid duration choice: {0:?}")]
    UnknownDuration(String),
    #[error("Invalid number of family members: {0:?}")]
    InvalidTravelerCount(String),
    #[error("Invalid ticket type: {0:?}")]
    UnknownTicketTier(String),
    #[error("Invalid facility choice: {0:?}")]
    UnknownFacility(String),
}

impl SelectionError {
    /// Whether the run must stop. Only facility codes may be retried.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SelectionError::UnknownFacility(_))
    }
}

fn parse_code(raw: &str) -> Option<Code> {
    raw.trim().parse().ok()
}

/// Picks from a 1-based menu over `options`.
fn pick<'a, T>(raw: &str, options: &'a [T]) -> Option<&'a T> {
    let code = parse_code(raw)?;
    let index = usize::try_from(code).ok()?.checked_sub(1)?;
    options.get(index)
}

pub fn select_destination(raw: &str, catalogue: &[String]) -> Result<Destination, SelectionError> {
    pick(raw, catalogue)
        .map(|name| Destination(name.clone()))
        .ok_or_else(|| SelectionError::UnknownDestination(raw.trim().to_string()))
}

pub fn select_duration(raw: &str, options: &[Days]) -> Result<Days, SelectionError> {
    pick(raw, options)
        .copied()
        .ok_or_else(|| SelectionError::UnknownDuration(raw.trim().to_string()))
}

pub fn select_traveler_count(raw: &str) -> Result<Headcount, SelectionError> {
    raw.trim()
        .parse()
        .map_err(|_| SelectionError::InvalidTravelerCount(raw.trim().to_string()))
}

impl PackageKind {
    pub fn from_code(raw: &str) -> Result<PackageKind, SelectionError> {
        match parse_code(raw) {
            Some(1) => Ok(PackageKind::Family),
            Some(2) => Ok(PackageKind::Solo),
            _ => Err(SelectionError::UnknownPackage(raw.trim().to_string())),
        }
    }
}

impl TicketTier {
    pub fn from_code(raw: &str) -> Result<TicketTier, SelectionError> {
        match parse_code(raw) {
            Some(1) => Ok(TicketTier::Business),
            Some(2) => Ok(TicketTier::Economy),
            Some(3) => Ok(TicketTier::ClassA),
            _ => Err(SelectionError::UnknownTicketTier(raw.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityChoice {
    Finish,
    Select(FacilityKind),
}

impl FacilityChoice {
    pub fn from_code(raw: &str) -> Result<FacilityChoice, SelectionError> {
        match parse_code(raw) {
            Some(0) => Ok(FacilityChoice::Finish),
            Some(1) => Ok(FacilityChoice::Select(FacilityKind::VipRoom)),
            Some(2) => Ok(FacilityChoice::Select(FacilityKind::RegularRoom)),
            Some(3) => Ok(FacilityChoice::Select(FacilityKind::Meals)),
            Some(4) => Ok(FacilityChoice::Select(FacilityKind::Guide)),
            _ => Err(SelectionError::UnknownFacility(raw.trim().to_string())),
        }
    }
}

/// Everything the billing core needs, already validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    pub traveler: TravelerProfile,
    pub destination: Destination,
    pub package: PackageKind,
    pub days: Days,
    pub tiers: Vec<TicketTier>,
    pub facilities: Vec<FacilityKind>,
}

impl TripRequest {
    /// One traveler per tier choice.
    pub fn traveler_count(&self) -> Headcount {
        self.tiers.len()
    }
}
