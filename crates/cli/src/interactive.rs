//! Interactive session mode
//!
//! The command-line stand-in for the original form front end: one
//! long-lived registry per session, driven by slash commands. All state
//! dies with the session.

use std::io::{self, Write};

use console::style;
use dialoguer::{Input, Select};

use haven_domain::{CampId, HealthStatus, ReliefError, ReliefRegistry};
use journal::OperationJournal;

/// Interactive console session owning the registry state
pub struct InteractiveSession {
    registry: ReliefRegistry,
    journal: OperationJournal,
}

impl InteractiveSession {
    pub fn new() -> Self {
        Self {
            registry: ReliefRegistry::new(),
            journal: OperationJournal::default(),
        }
    }

    /// Run the session loop
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Haven Relief Console");
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            print!("haven > ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(should_exit) if should_exit => break,
                Ok(_) => continue,
                Err(e) => {
                    println!("{} {}", style("error:").red().bold(), e);
                    continue;
                }
            }
        }

        Ok(())
    }

    /// Dispatch one command line; returns true when the session should end
    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => self.print_help(),
            "/camp" => self.handle_camp(&parts[1..]),
            "/victim" => self.handle_victim(&parts[1..])?,
            "/supplies" => self.handle_supplies(&parts[1..]),
            "/report" => self.print_report(&parts[1..]),
            "/journal" => self.handle_journal(&parts[1..]),
            _ => {
                println!("Unknown command: {} (try /help)", cmd);
            }
        }

        Ok(false)
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  /camp add <capacity>              - Open a new camp");
        println!("  /camp list                        - List camps and occupancy");
        println!("  /victim add                       - Register a victim (prompts)");
        println!("  /victim list                      - List registered victims");
        println!("  /supplies add <medicine> <food>   - Receive supplies into the pool");
        println!("  /supplies send <camp> <med> <food> - Dispatch supplies to a camp");
        println!("  /supplies show                    - Show the current pool");
        println!("  /report [json]                    - Operation report");
        println!("  /journal [export]                 - Recent operations (or JSON)");
        println!("  /quit                             - Exit");
    }

    fn handle_camp(&mut self, args: &[&str]) {
        match args {
            ["add", capacity] => {
                let capacity = match parse_number::<u32>("capacity", capacity) {
                    Ok(capacity) => capacity,
                    Err(e) => return self.show_error(&e),
                };
                match self.registry.open_camp(capacity) {
                    Ok(id) => {
                        self.journal.record_camp_opened(id, capacity);
                        println!(
                            "{} Camp {} opened with capacity {}",
                            style("✓").green(),
                            id,
                            capacity
                        );
                    }
                    Err(e) => self.show_error(&e),
                }
            }
            ["list"] => {
                if self.registry.camp_count() == 0 {
                    println!("No camps opened yet");
                    return;
                }
                for camp in self.registry.camps() {
                    println!("Camp {}: {}/{}", camp.id(), camp.occupancy(), camp.capacity());
                }
            }
            _ => println!("Usage: /camp add <capacity> | /camp list"),
        }
    }

    fn handle_victim(&mut self, args: &[&str]) -> anyhow::Result<()> {
        match args {
            ["add"] => {
                let name: String = Input::new()
                    .with_prompt("Name")
                    .allow_empty(true)
                    .interact_text()?;
                let place: String = Input::new()
                    .with_prompt("Place of origin")
                    .allow_empty(true)
                    .interact_text()?;
                let statuses = HealthStatus::all();
                let picked = Select::new()
                    .with_prompt("Health status")
                    .items(statuses)
                    .default(1)
                    .interact()?;
                let health = statuses[picked];

                match self.registry.register_victim(name, place, health) {
                    Ok(admission) => {
                        self.journal.record_admission(&admission, health);
                        println!(
                            "{} Victim {} registered in camp {}",
                            style("✓").green(),
                            admission.victim,
                            admission.camp
                        );
                    }
                    Err(e) => {
                        self.journal.record_admission_denied(&e);
                        self.show_error(&e);
                    }
                }
            }
            ["list"] => {
                if self.registry.victim_count() == 0 {
                    println!("No victims registered yet");
                    return Ok(());
                }
                for victim in self.registry.victims() {
                    println!(
                        "ID: {}, Name: {}, Place: {}, Camp: {}, Health: {}",
                        victim.id(),
                        victim.name(),
                        victim.place(),
                        victim.camp(),
                        victim.health()
                    );
                }
            }
            _ => println!("Usage: /victim add | /victim list"),
        }
        Ok(())
    }

    fn handle_supplies(&mut self, args: &[&str]) {
        match args {
            ["add", medicine, food] => {
                let (medicine, food) = match (
                    parse_number::<u64>("medicine", medicine),
                    parse_number::<u64>("food", food),
                ) {
                    (Ok(m), Ok(f)) => (m, f),
                    (Err(e), _) | (_, Err(e)) => return self.show_error(&e),
                };
                self.registry.receive_supplies(medicine, food);
                self.journal.record_supplies_received(medicine, food);
                println!(
                    "{} Received {} medicine, {} food",
                    style("✓").green(),
                    medicine,
                    food
                );
            }
            ["send", camp, medicine, food] => {
                let (camp, medicine, food) = match (
                    parse_number::<u32>("camp id", camp),
                    parse_number::<u64>("medicine", medicine),
                    parse_number::<u64>("food", food),
                ) {
                    (Ok(c), Ok(m), Ok(f)) => (CampId::new(c), m, f),
                    (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                        return self.show_error(&e)
                    }
                };
                match self.registry.dispatch_supplies(camp, medicine, food) {
                    Ok(()) => {
                        self.journal.record_dispatch(camp, medicine, food);
                        println!(
                            "{} Dispatched to camp {}: {} medicine, {} food",
                            style("✓").green(),
                            camp,
                            medicine,
                            food
                        );
                    }
                    Err(e) => {
                        self.journal.record_dispatch_denied(camp, &e);
                        self.show_error(&e);
                    }
                }
            }
            ["show"] => {
                let supplies = self.registry.supplies();
                println!("Medicine available: {}", supplies.medicine());
                println!("Food available: {}", supplies.food());
            }
            _ => println!(
                "Usage: /supplies add <medicine> <food> | /supplies send <camp> <medicine> <food> | /supplies show"
            ),
        }
    }

    fn handle_journal(&self, args: &[&str]) {
        match args {
            ["export"] => println!("{}", self.journal.export_json()),
            [] => {
                let stats = self.journal.stats();
                if stats.total_entries == 0 {
                    println!("Nothing journaled yet");
                    return;
                }
                for entry in self.journal.recent(20) {
                    let marker = if entry.success {
                        style("✓").green()
                    } else {
                        style("✗").red()
                    };
                    match entry.camp {
                        Some(camp) => println!(
                            "{} {:?} camp {} - {}",
                            marker, entry.kind, camp, entry.detail
                        ),
                        None => println!("{} {:?} - {}", marker, entry.kind, entry.detail),
                    }
                }
                println!(
                    "{} entries, {} denials",
                    stats.total_entries, stats.denial_count
                );
            }
            _ => println!("Usage: /journal [export]"),
        }
    }

    fn print_report(&self, args: &[&str]) {
        let report = self.registry.report();
        if args == ["json"] {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => println!("{} {}", style("✗").red().bold(), e),
            }
            return;
        }
        println!("{}", style("========== RELIEF OPERATION REPORT ==========").bold());
        println!("Total camps: {}", report.total_camps);
        println!("Total victims registered: {}", report.total_victims);
        match &report.busiest_camp {
            Some(busiest) => println!(
                "Camp with highest occupancy: camp {} ({}/{})",
                busiest.camp, busiest.occupancy, busiest.capacity
            ),
            None => println!("Camp with highest occupancy: no camps opened yet"),
        }
        println!("Medicine available: {}", report.medicine);
        println!("Food packets available: {}", report.food);
    }

    fn show_error(&self, error: &ReliefError) {
        println!("{} {}", style("✗").red().bold(), error);
    }
}

impl Default for InteractiveSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a numeric form field, mapping failure to `InvalidInput`
fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ReliefError> {
    raw.parse().map_err(|_| ReliefError::InvalidInput {
        reason: format!("{} must be a whole number, got '{}'", field, raw),
    })
}
