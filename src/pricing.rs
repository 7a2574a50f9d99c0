use log::debug;

use crate::model::entity::{Days, Money, TicketTier};
use crate::model::booking::{TravelerBooking, GroupBooking};

/// Per-day rate and flat fee of a ticket tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRate {
    pub per_day: u32,
    pub fixed_fee: u32,
}

impl TicketTier {
    pub fn rate(self) -> TierRate {
        match self {
            TicketTier::Business => TierRate { per_day: 500, fixed_fee: 1000 },
            TicketTier::Economy => TierRate { per_day: 300, fixed_fee: 500 },
            TicketTier::ClassA => TierRate { per_day: 700, fixed_fee: 1500 },
        }
    }
}

/// `days * per_day + fixed_fee` for the given tier.
pub fn price(tier: TicketTier, days: Days) -> Money {
    let rate = tier.rate();
    Money::from(days) * Money::from(rate.per_day) + Money::from(rate.fixed_fee)
}

impl TravelerBooking {
    pub fn create(tier: TicketTier, days: Days) -> TravelerBooking {
        let cost = price(tier, days);
        debug!("priced {} ticket for {} days at {}", tier, days, cost);
        TravelerBooking { tier, days, cost }
    }
}

impl GroupBooking {
    /// Prices one booking per tier choice, keeping traveler order.
    pub fn create(tiers: &[TicketTier], days: Days) -> GroupBooking {
        tiers.iter().map(|tier| TravelerBooking::create(*tier, days)).collect()
    }

    pub fn ticket_subtotal(&self) -> Money {
        self.bookings.iter().map(|booking| booking.cost).sum()
    }

    /// Bookings paired with their 1-based traveler number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &TravelerBooking)> {
        self.bookings.iter().enumerate().map(|(index, booking)| (index + 1, booking))
    }
}
