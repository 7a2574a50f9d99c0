use std::ops::Add;

use log::warn;
use serde::Serialize;

use crate::model::entity::{Days, Headcount, Money};
use crate::model::facility::{FacilityKind, FacilityLineItem};
use crate::selection::{FacilityChoice, SelectionError};

const VIP_ROOM_FEE: u32 = 200;
const REGULAR_ROOM_FEE: u32 = 100;
const MEALS_PER_PERSON_DAY: u32 = 50;
const GUIDE_PER_DAY: u32 = 100;

/// Trip facts that per-day and per-person facilities are priced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacilityContext {
    pub days: Days,
    pub travelers: Headcount,
}

impl FacilityKind {
    pub fn contribution(self, context: &FacilityContext) -> Money {
        let days = Money::from(context.days);
        match self {
            FacilityKind::VipRoom => Money::from(VIP_ROOM_FEE),
            FacilityKind::RegularRoom => Money::from(REGULAR_ROOM_FEE),
            FacilityKind::Meals => Money::from(MEALS_PER_PERSON_DAY) * days * Money::from(context.travelers),
            FacilityKind::Guide => Money::from(GUIDE_PER_DAY) * days,
        }
    }
}

impl FacilityLineItem {
    pub fn create(kind: FacilityKind, context: &FacilityContext) -> FacilityLineItem {
        FacilityLineItem { kind, contribution: kind.contribution(context) }
    }
}

/// New running total after one more selection.
pub fn accumulate(prior: Money, kind: FacilityKind, context: &FacilityContext) -> Money {
    prior + kind.contribution(context)
}

#[derive(Debug, Clone, PartialEq)]
pub enum FacilityStep {
    Added(FacilityLineItem),
    Rejected(SelectionError),
    Finished,
}

/// Selected facilities in selection order, with their running subtotal.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FacilityTally {
    items: Vec<FacilityLineItem>,
    subtotal: Money,
}

impl FacilityTally {
    pub fn new() -> FacilityTally {
        FacilityTally::default()
    }

    pub fn from_kinds(kinds: &[FacilityKind], context: &FacilityContext) -> FacilityTally {
        kinds.iter().fold(FacilityTally::new(), |tally, kind| tally.select(*kind, context))
    }

    pub fn items(&self) -> &[FacilityLineItem] {
        &self.items
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn kinds(&self) -> Vec<FacilityKind> {
        self.items.iter().map(FacilityLineItem::kind).collect()
    }

    pub fn select(self, kind: FacilityKind, context: &FacilityContext) -> FacilityTally {
        self + FacilityLineItem::create(kind, context)
    }

    /// Applies one raw menu code. Unknown codes leave the tally untouched.
    pub fn step(self, raw: &str, context: &FacilityContext) -> (FacilityTally, FacilityStep) {
        match FacilityChoice::from_code(raw) {
            Ok(FacilityChoice::Finish) => (self, FacilityStep::Finished),
            Ok(FacilityChoice::Select(kind)) => {
                let item = FacilityLineItem::create(kind, context);
                (self + item.clone(), FacilityStep::Added(item))
            }
            Err(err) => {
                warn!("rejected facility code: {}", err);
                (self, FacilityStep::Rejected(err))
            }
        }
    }
}

impl Add<FacilityLineItem> for FacilityTally {
    type Output = Self;

    fn add(self, rhs: FacilityLineItem) -> Self::Output {
        let mut items = self.items;
        let subtotal = self.subtotal + rhs.contribution;
        items.push(rhs);
        FacilityTally { items, subtotal }
    }
}

impl Add for FacilityTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        rhs.items.into_iter().fold(self, |tally, item| tally + item)
    }
}
