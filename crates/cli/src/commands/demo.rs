//! haven demo command
//!
//! Scripted walkthrough of a small relief operation: opens camps, fills
//! them past capacity, moves supplies around (including a denial), and
//! prints the final report.

use clap::Args;
use tracing::info;

use haven_domain::{HealthStatus, ReliefRegistry};
use journal::OperationJournal;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,
}

impl DemoCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let mut registry = ReliefRegistry::new();
        let mut journal = OperationJournal::default();

        info!("Opening camps...");
        let north = registry.open_camp(2)?;
        journal.record_camp_opened(north, 2);
        let river = registry.open_camp(3)?;
        journal.record_camp_opened(river, 3);
        info!("   camp {} (capacity 2), camp {} (capacity 3)", north, river);

        info!("Registering victims...");
        let arrivals = [
            ("Asha Verma", "Kharun", HealthStatus::Normal),
            ("Binod Rai", "Kharun", HealthStatus::Critical),
            ("Chitra Joshi", "Motipur", HealthStatus::Normal),
            ("Dev Malik", "Motipur", HealthStatus::Normal),
            ("Esha Pillai", "Sonapur", HealthStatus::Critical),
            // One more than the camps can hold, to show the denial path
            ("Farid Khan", "Sonapur", HealthStatus::Normal),
        ];
        for (name, place, health) in arrivals {
            match registry.register_victim(name, place, health) {
                Ok(admission) => {
                    journal.record_admission(&admission, health);
                    info!("   {} -> camp {}", name, admission.camp);
                }
                Err(err) => {
                    journal.record_admission_denied(&err);
                    info!("   {} -> denied: {}", name, err);
                }
            }
        }

        info!("Receiving supplies...");
        registry.receive_supplies(10, 5);
        journal.record_supplies_received(10, 5);
        info!("   10 medicine, 5 food");

        info!("Dispatching supplies...");
        if let Err(err) = registry.dispatch_supplies(north, 12, 0) {
            journal.record_dispatch_denied(north, &err);
            info!("   camp {} -> denied: {}", north, err);
        }
        registry.dispatch_supplies(north, 4, 2)?;
        journal.record_dispatch(north, 4, 2);
        if let Some(camp) = registry.camp(north) {
            info!(
                "   camp {} ({}/{}) received 4 medicine, 2 food",
                north,
                camp.occupancy(),
                camp.capacity()
            );
        }

        let report = registry.report();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            info!("Report");
            info!("   camps: {}", report.total_camps);
            info!("   victims registered: {}", report.total_victims);
            if let Some(busiest) = &report.busiest_camp {
                info!(
                    "   highest occupancy: camp {} ({}/{})",
                    busiest.camp, busiest.occupancy, busiest.capacity
                );
            }
            info!("   medicine: {}, food: {}", report.medicine, report.food);
        }

        let stats = journal.stats();
        info!(
            "Journal: {} entries, {} denials",
            stats.total_entries, stats.denial_count
        );

        Ok(())
    }
}
