use itertools::Itertools;
use log::{debug, info};
use serde::Serialize;

use crate::accumulator::{FacilityContext, FacilityTally};
use crate::model::booking::{GroupBooking, TravelerBooking};
use crate::model::entity::{Money, PackageKind};
use crate::model::facility::{FacilityKind, FacilityLineItem};
use crate::selection::TripRequest;

impl PackageKind {
    /// Fraction of the ticket subtotal taken off the bill.
    pub fn discount_rate(self) -> Money {
        match self {
            PackageKind::Family => Money::new(10, 2),
            PackageKind::Solo => Money::ZERO,
        }
    }
}

/// A priced trip. Totals are derived on demand and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBill {
    bookings: GroupBooking,
    facilities: FacilityTally,
    package: PackageKind,
}

impl GroupBill {
    pub fn bookings(&self) -> &GroupBooking {
        &self.bookings
    }

    pub fn facilities(&self) -> &FacilityTally {
        &self.facilities
    }

    pub fn package(&self) -> PackageKind {
        self.package
    }

    pub fn ticket_subtotal(&self) -> Money {
        self.bookings.ticket_subtotal()
    }

    pub fn facility_subtotal(&self) -> Money {
        self.facilities.subtotal()
    }

    pub fn total_before_discount(&self) -> Money {
        self.ticket_subtotal() + self.facility_subtotal()
    }

    /// Taken from ticket costs only; facilities are never discounted.
    pub fn discount(&self) -> Money {
        self.ticket_subtotal() * self.package.discount_rate()
    }

    pub fn final_total(&self) -> Money {
        self.total_before_discount() - self.discount()
    }

    pub fn is_discounted(&self) -> bool {
        self.package == PackageKind::Family
    }

    /// How many times each facility was picked, in first-selection order.
    pub fn facility_counts(&self) -> Vec<(FacilityKind, usize)> {
        let counts = self.facilities.items().iter().map(FacilityLineItem::kind).counts();
        self.facilities
            .items()
            .iter()
            .map(FacilityLineItem::kind)
            .unique()
            .map(|kind| (kind, counts[&kind]))
            .collect()
    }

    pub fn summary(&self) -> BillSummary<'_> {
        BillSummary {
            package: self.package,
            bookings: self.bookings.bookings(),
            facilities: self.facilities.items(),
            ticket_subtotal: self.ticket_subtotal(),
            facility_subtotal: self.facility_subtotal(),
            total_before_discount: self.total_before_discount(),
            discount: self.discount(),
            final_total: self.final_total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillSummary<'a> {
    pub package: PackageKind,
    pub bookings: &'a [TravelerBooking],
    pub facilities: &'a [FacilityLineItem],
    pub ticket_subtotal: Money,
    pub facility_subtotal: Money,
    pub total_before_discount: Money,
    pub discount: Money,
    pub final_total: Money,
}

pub struct BillingEngine;

impl BillingEngine {
    pub fn compute(bookings: GroupBooking, facilities: FacilityTally, package: PackageKind) -> GroupBill {
        let bill = GroupBill { bookings, facilities, package };
        debug!(
            "computed {} bill: tickets {} + facilities {} - discount {}",
            bill.package,
            bill.ticket_subtotal(),
            bill.facility_subtotal(),
            bill.discount()
        );
        bill
    }

    /// Prices every traveler and facility of a request and bills them.
    pub fn quote(request: &TripRequest) -> GroupBill {
        let context = FacilityContext { days: request.days, travelers: request.traveler_count() };
        let bookings = GroupBooking::create(&request.tiers, request.days);
        let facilities = FacilityTally::from_kinds(&request.facilities, &context);
        let bill = BillingEngine::compute(bookings, facilities, request.package);
        info!(
            "quoted {} trip to {} for {} travelers: {}",
            request.package,
            request.destination,
            request.traveler_count(),
            bill.final_total()
        );
        bill
    }
}
