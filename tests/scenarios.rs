use std::io::Cursor;

use travel_expense::{
    BillingConfig, BillingEngine, Destination, FacilityContext, FacilityKind, FacilityTally,
    GroupBooking, Money, PackageKind, Receipt, Session, TicketTier, TravelerProfile, TripRequest,
};

fn request(package: PackageKind, days: u32, tiers: Vec<TicketTier>, facilities: Vec<FacilityKind>) -> TripRequest {
    TripRequest {
        traveler: TravelerProfile::default(),
        destination: Destination("sawat".into()),
        package,
        days,
        tiers,
        facilities,
    }
}

#[test]
fn solo_business_five_days() {
    let bill = BillingEngine::quote(&request(PackageKind::Solo, 5, vec![TicketTier::Business], vec![]));
    assert_eq!(bill.bookings().bookings()[0].cost(), Money::from(3500));
    assert_eq!(bill.discount(), Money::ZERO);
    assert_eq!(bill.final_total(), Money::from(3500));
}

#[test]
fn family_of_two_with_guide() {
    let bill = BillingEngine::quote(&request(
        PackageKind::Family,
        10,
        vec![TicketTier::Economy, TicketTier::ClassA],
        vec![FacilityKind::Guide],
    ));
    let costs: Vec<Money> = bill.bookings().bookings().iter().map(|b| b.cost()).collect();
    assert_eq!(costs, vec![Money::from(3500), Money::from(8500)]);
    assert_eq!(bill.ticket_subtotal(), Money::from(12_000));
    assert_eq!(bill.facility_subtotal(), Money::from(1000));
    assert_eq!(bill.total_before_discount(), Money::from(13_000));
    assert_eq!(bill.discount(), Money::from(1200));
    assert_eq!(bill.final_total(), Money::from(11_800));
}

#[test]
fn meals_for_three_over_twenty_days() {
    let context = FacilityContext { days: 20, travelers: 3 };
    let tally = FacilityTally::from_kinds(&[FacilityKind::Meals], &context);
    assert_eq!(tally.items()[0].contribution(), Money::from(3000));
}

#[test]
fn engine_accepts_prebuilt_parts() {
    let context = FacilityContext { days: 30, travelers: 1 };
    let bill = BillingEngine::compute(
        GroupBooking::create(&[TicketTier::ClassA], 30),
        FacilityTally::from_kinds(&[FacilityKind::RegularRoom, FacilityKind::Meals], &context),
        PackageKind::Solo,
    );
    assert_eq!(bill.ticket_subtotal(), Money::from(22_500));
    assert_eq!(bill.facility_subtotal(), Money::from(1600));
    assert_eq!(bill.final_total(), Money::from(24_100));
}

#[test]
fn scripted_family_session_end_to_end() {
    let config = BillingConfig::default();
    let script = "Sara Khan\n41\n35202-0000000-2\n2\n1\n2\n2\n2\n3\n9\n4\n0\n";
    let mut session = Session::new(&config, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let request = session.run().unwrap();
    let prompts = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(prompts.matches("Invalid choice!").count(), 1);

    let bill = BillingEngine::quote(&request);
    let receipt = Receipt {
        bill: &bill,
        traveler: &request.traveler,
        destination: &request.destination,
        currency: &config.currency,
    }
    .to_string();
    assert!(receipt.contains("Traveler's Name: Sara Khan"));
    assert!(receipt.contains("Destination: kashmir"));
    assert!(receipt.contains("Total Amount before Discount: RS 13000.00"));
    assert!(receipt.ends_with("Total Bill after Discount: RS 11800.00"));
}

#[test]
fn summary_serialises_amounts_as_strings() {
    let bill = BillingEngine::quote(&request(PackageKind::Solo, 5, vec![TicketTier::Business], vec![]));
    let json = serde_json::to_value(bill.summary()).unwrap();
    assert_eq!(json["package"], "Solo");
    let final_total: Money = json["final_total"].as_str().unwrap().parse().unwrap();
    assert_eq!(final_total, Money::from(3500));
    assert_eq!(json["bookings"][0]["tier"], "Business");
    assert_eq!(json["facilities"].as_array().map(Vec::len), Some(0));
}
