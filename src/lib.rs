pub mod model;
pub mod selection;
pub mod pricing;
pub mod accumulator;
pub mod billing;
pub mod config;
pub mod report;
pub mod session;

pub use accumulator::{FacilityContext, FacilityStep, FacilityTally};
pub use billing::{BillSummary, BillingEngine, GroupBill};
pub use config::{BillingConfig, ConfigError};
pub use model::booking::{GroupBooking, TravelerBooking};
pub use model::entity::{Days, Destination, Headcount, Money, PackageKind, TicketTier, TravelerProfile};
pub use model::facility::{FacilityKind, FacilityLineItem};
pub use pricing::price;
pub use report::Receipt;
pub use selection::{SelectionError, TripRequest};
pub use session::{Session, SessionError};
