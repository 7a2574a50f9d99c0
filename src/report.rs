use std::fmt;

use itertools::Itertools;
use rust_decimal::RoundingStrategy;

use crate::billing::GroupBill;
use crate::model::entity::{Destination, Money, TravelerProfile};

/// Two decimals, rounded half away from zero.
pub fn format_amount(value: Money) -> String {
    format!("{:.2}", value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Itemised bill ready to print.
pub struct Receipt<'a> {
    pub bill: &'a GroupBill,
    pub traveler: &'a TravelerProfile,
    pub destination: &'a Destination,
    pub currency: &'a str,
}

impl Receipt<'_> {
    fn money(&self, value: Money) -> String {
        format!("{} {}", self.currency, format_amount(value))
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Traveler's Name: {}", self.traveler.name)?;
        writeln!(f, "Traveler's Age: {}", self.traveler.age)?;
        writeln!(f, "Traveler's CNIC: {}", self.traveler.national_id)?;

        writeln!(f)?;
        writeln!(f, "Detailed Breakdown ({} package):", self.bill.package())?;
        for (number, booking) in self.bill.bookings().numbered() {
            writeln!(f, "Traveler {}: {}", number, booking.tier())?;
            writeln!(f, "  Destination: {}", self.destination)?;
            writeln!(f, "  Duration: {} days", booking.days())?;
            writeln!(f, "  Ticket Cost: {}", self.money(booking.cost()))?;
        }

        writeln!(f)?;
        writeln!(f, "Additional Facilities:")?;
        if self.bill.facilities().items().is_empty() {
            writeln!(f, "- none")?;
        }
        for item in self.bill.facilities().items() {
            writeln!(f, "- {} ({})", item.kind(), self.money(item.contribution()))?;
        }
        let counts = self.bill.facility_counts();
        if counts.iter().any(|(_, count)| *count > 1) {
            let summary = counts.iter().map(|(kind, count)| format!("{} x{}", kind, count)).join(", ");
            writeln!(f, "  ({})", summary)?;
        }

        writeln!(f)?;
        writeln!(f, "Tickets Subtotal: {}", self.money(self.bill.ticket_subtotal()))?;
        writeln!(f, "Facilities Subtotal: {}", self.money(self.bill.facility_subtotal()))?;
        if self.bill.is_discounted() {
            writeln!(f, "Total Amount before Discount: {}", self.money(self.bill.total_before_discount()))?;
            writeln!(f, "Discounted Amount: {}", self.money(self.bill.discount()))?;
            write!(f, "Total Bill after Discount: {}", self.money(self.bill.final_total()))
        } else {
            write!(f, "Total Cost: {}", self.money(self.bill.final_total()))
        }
    }
}
