use std::io::{self, BufRead, Write};

use log::{debug, warn};
use thiserror::Error;

use crate::accumulator::{FacilityContext, FacilityStep, FacilityTally};
use crate::config::BillingConfig;
use crate::model::entity::{Days, Destination, Headcount, PackageKind, TicketTier, TravelerProfile};
use crate::model::facility::FacilityKind;
use crate::report::format_amount;
use crate::selection::{self, SelectionError, TripRequest};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input closed while reading {0}")]
    InputClosed(&'static str),
}

/// Prompts a traveler through every menu and collects a [`TripRequest`].
///
/// Invalid destination, package, duration, headcount or ticket input ends the
/// session with an error. Invalid facility codes are reported and asked again.
pub struct Session<'c, R, W> {
    config: &'c BillingConfig,
    input: R,
    output: W,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(config: &'c BillingConfig, input: R, output: W) -> Self {
        Session { config, input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<TripRequest, SessionError> {
        writeln!(self.output, "Welcome to the Travel Expense Tracker")?;
        let traveler = self.read_traveler()?;
        let destination = self.select_destination()?;
        let package = self.select_package()?;
        let days = self.select_duration()?;
        let travelers = self.select_traveler_count(package)?;
        let tiers = (0..travelers)
            .map(|index| self.select_ticket(index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let facilities = self.select_facilities(&FacilityContext { days, travelers })?;
        Ok(TripRequest { traveler, destination, package, days, tiers, facilities })
    }

    fn prompt(&mut self, label: &'static str, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed(label));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn read_traveler(&mut self) -> Result<TravelerProfile, SessionError> {
        let name = self.prompt("name", "Enter traveler's name: ")?;
        let raw_age = self.prompt("age", "Enter traveler's age: ")?;
        // Age is informational; unparsable input is recorded as zero.
        let age = raw_age.trim().parse().unwrap_or_default();
        let national_id = self.prompt("CNIC", "Enter traveler's CNIC Number: ")?;
        Ok(TravelerProfile { name, age, national_id })
    }

    fn select_destination(&mut self) -> Result<Destination, SessionError> {
        writeln!(self.output, "Available Cities:")?;
        for (number, name) in self.config.destinations.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, name)?;
        }
        let raw = self.prompt("destination", "Enter the number corresponding to the city: ")?;
        Ok(selection::select_destination(&raw, &self.config.destinations)?)
    }

    fn select_package(&mut self) -> Result<PackageKind, SessionError> {
        writeln!(self.output, "Select package type:")?;
        writeln!(self.output, "1. Family Package (10% discount)")?;
        writeln!(self.output, "2. Solo Package (no discount)")?;
        let raw = self.prompt("package type", "Enter your choice: ")?;
        Ok(PackageKind::from_code(&raw)?)
    }

    fn select_duration(&mut self) -> Result<Days, SessionError> {
        writeln!(self.output, "Select package duration:")?;
        for (number, days) in self.config.duration_options.iter().enumerate() {
            writeln!(self.output, "{}. {} days", number + 1, days)?;
        }
        let raw = self.prompt("duration", "Enter your choice: ")?;
        Ok(selection::select_duration(&raw, &self.config.duration_options)?)
    }

    fn select_traveler_count(&mut self, package: PackageKind) -> Result<Headcount, SessionError> {
        match package {
            PackageKind::Solo => Ok(1),
            PackageKind::Family => {
                let raw = self.prompt("family members", "Enter number of family members: ")?;
                Ok(selection::select_traveler_count(&raw)?)
            }
        }
    }

    fn select_ticket(&mut self, number: usize) -> Result<TicketTier, SessionError> {
        writeln!(self.output, "Select ticket type for family member {}:", number)?;
        for (code, tier) in TicketTier::ALL.iter().enumerate() {
            let rate = tier.rate();
            writeln!(
                self.output,
                "{}. {} ({} {} per day + {} {} fixed)",
                code + 1,
                tier,
                self.config.currency,
                rate.per_day,
                self.config.currency,
                rate.fixed_fee
            )?;
        }
        let raw = self.prompt("ticket type", "Enter your choice: ")?;
        Ok(TicketTier::from_code(&raw)?)
    }

    /// Loops until `0`. Closing the input also ends the selection.
    fn select_facilities(&mut self, context: &FacilityContext) -> Result<Vec<FacilityKind>, SessionError> {
        let currency = self.config.currency.clone();
        let mut tally = FacilityTally::new();
        loop {
            writeln!(self.output, "Additional facilities:")?;
            writeln!(self.output, "1. VIP rooms ({} 200)", currency)?;
            writeln!(self.output, "2. Regular rooms ({} 100)", currency)?;
            writeln!(self.output, "3. Meals ({} 50 per day per person)", currency)?;
            writeln!(self.output, "4. Guide ({} 100 per day)", currency)?;
            let raw = match self.prompt("facilities", "Enter choice (0 to finish): ") {
                Ok(raw) => raw,
                Err(SessionError::InputClosed(_)) => {
                    warn!("input closed during facility selection, finishing");
                    break;
                }
                Err(err) => return Err(err),
            };
            let (next, step) = tally.step(&raw, context);
            tally = next;
            match step {
                FacilityStep::Finished => break,
                FacilityStep::Added(item) => {
                    debug!("added {} for {}", item.kind(), item.contribution());
                    writeln!(self.output, "Facilities so far: {} {}", currency, format_amount(tally.subtotal()))?;
                }
                FacilityStep::Rejected(_) => writeln!(self.output, "Invalid choice!")?,
            }
        }
        Ok(tally.kinds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Result<TripRequest, SessionError>, String) {
        let config = BillingConfig::default();
        let mut session = Session::new(&config, Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = session.run();
        let output = String::from_utf8(session.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn solo_run_skips_headcount_prompt() {
        let (result, output) = run_script("Ali\n30\n12345\n2\n2\n1\n1\n0\n");
        let request = result.unwrap();
        assert_eq!(request.destination, Destination("kashmir".into()));
        assert_eq!(request.package, PackageKind::Solo);
        assert_eq!(request.days, 5);
        assert_eq!(request.tiers, vec![TicketTier::Business]);
        assert!(request.facilities.is_empty());
        assert!(!output.contains("family members:"));
    }

    #[test]
    fn family_run_collects_each_ticket() {
        let (result, _) = run_script("Sara\n41\n999\n3\n1\n2\n2\n2\n3\n4\n0\n");
        let request = result.unwrap();
        assert_eq!(request.package, PackageKind::Family);
        assert_eq!(request.days, 10);
        assert_eq!(request.tiers, vec![TicketTier::Economy, TicketTier::ClassA]);
        assert_eq!(request.facilities, vec![FacilityKind::Guide]);
        assert_eq!(request.traveler.age, 41);
    }

    #[test]
    fn invalid_facility_code_is_retried() {
        let (result, output) = run_script("Ali\n30\n1\n1\n2\n1\n1\n9\n1\n1\n0\n");
        let request = result.unwrap();
        assert_eq!(request.facilities, vec![FacilityKind::VipRoom, FacilityKind::VipRoom]);
        assert_eq!(output.matches("Invalid choice!").count(), 1);
        assert!(output.contains("Facilities so far: RS 400.00"));
    }

    #[test]
    fn invalid_destination_is_fatal() {
        let (result, _) = run_script("Ali\n30\n1\n7\n");
        match result {
            Err(SessionError::Selection(err)) => {
                assert_eq!(err, SelectionError::UnknownDestination("7".into()));
                assert!(err.is_fatal());
            }
            other => panic!("expected selection error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_ticket_is_fatal() {
        let (result, _) = run_script("Ali\n30\n1\n1\n1\n3\n2\n1\n5\n");
        assert!(matches!(
            result,
            Err(SessionError::Selection(SelectionError::UnknownTicketTier(_)))
        ));
    }

    #[test]
    fn zero_family_members_is_allowed() {
        let (result, _) = run_script("Ali\n30\n1\n4\n1\n4\n0\n4\n0\n");
        let request = result.unwrap();
        assert!(request.tiers.is_empty());
        assert_eq!(request.days, 30);
        assert_eq!(request.facilities, vec![FacilityKind::Guide]);
    }

    #[test]
    fn closed_input_before_tickets_is_an_error() {
        let (result, _) = run_script("Ali\n30\n1\n1\n");
        assert!(matches!(result, Err(SessionError::InputClosed("package type"))));
    }

    #[test]
    fn closed_input_during_facilities_finishes() {
        let (result, _) = run_script("Ali\n30\n1\n1\n2\n1\n1\n3\n");
        assert_eq!(result.unwrap().facilities, vec![FacilityKind::Meals]);
    }
}
