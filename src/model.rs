pub mod entity {
    use std::fmt;

    use rust_decimal::Decimal;
    use serde::Serialize;

    pub type Days = u32;
    pub type Headcount = usize;
    pub type Money = Decimal;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(transparent)]
    pub struct Destination(pub String);

    impl fmt::Display for Destination {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum PackageKind {
        Family,
        Solo,
    }

    impl fmt::Display for PackageKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Family => write!(f, "Family"),
                Self::Solo => write!(f, "Solo"),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum TicketTier {
        Business,
        Economy,
        ClassA,
    }

    impl TicketTier {
        pub const ALL: [TicketTier; 3] = [TicketTier::Business, TicketTier::Economy, TicketTier::ClassA];
    }

    impl fmt::Display for TicketTier {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Business => write!(f, "Business Class"),
                Self::Economy => write!(f, "Economy Class"),
                Self::ClassA => write!(f, "Class A"),
            }
        }
    }

    /// Identity of the person filling in the bill. Shown on the receipt only.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
    pub struct TravelerProfile {
        pub name: String,
        pub age: u32,
        pub national_id: String,
    }
}


pub mod booking {
    use serde::Serialize;
    use super::entity::{Days, Money, TicketTier};

    /// One traveler's ticket. The cost is fixed when the booking is priced.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct TravelerBooking {
        pub(crate) tier: TicketTier,
        pub(crate) days: Days,
        pub(crate) cost: Money,
    }

    impl TravelerBooking {
        pub fn tier(&self) -> TicketTier {
            self.tier
        }
        pub fn days(&self) -> Days {
            self.days
        }
        pub fn cost(&self) -> Money {
            self.cost
        }
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize)]
    #[serde(transparent)]
    pub struct GroupBooking {
        pub(crate) bookings: Vec<TravelerBooking>,
    }

    impl GroupBooking {
        pub fn bookings(&self) -> &[TravelerBooking] {
            &self.bookings
        }
        pub fn len(&self) -> usize {
            self.bookings.len()
        }
        pub fn is_empty(&self) -> bool {
            self.bookings.is_empty()
        }
    }

    impl FromIterator<TravelerBooking> for GroupBooking {
        fn from_iter<I: IntoIterator<Item = TravelerBooking>>(iter: I) -> Self {
            GroupBooking { bookings: iter.into_iter().collect() }
        }
    }
}

pub mod facility {
    use std::fmt;

    use serde::Serialize;
    use super::entity::Money;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum FacilityKind {
        VipRoom,
        RegularRoom,
        Meals,
        Guide,
    }

    impl fmt::Display for FacilityKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::VipRoom => write!(f, "VIP rooms"),
                Self::RegularRoom => write!(f, "Regular rooms"),
                Self::Meals => write!(f, "Meals"),
                Self::Guide => write!(f, "Guide"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct FacilityLineItem {
        pub(crate) kind: FacilityKind,
        pub(crate) contribution: Money,
    }

    impl FacilityLineItem {
        pub fn kind(&self) -> FacilityKind {
            self.kind
        }
        pub fn contribution(&self) -> Money {
            self.contribution
        }
    }
}
