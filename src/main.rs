/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{error, info};
use std::io;
use std::thread::Builder;

/* Custom libraries */
use look_elevator::cli::Cli;
use look_elevator::config;
use look_elevator::elevator::StatusReport;
use look_elevator::simulation::{self, Simulation};
use look_elevator::unwrap_or_exit;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration, command-line values win over the file
    let cli = Cli::parse();
    let mut config = unwrap_or_exit!(
        config::load_config(cli.config.as_deref()),
        "Failed to load configuration"
    );
    cli.apply(&mut config);
    unwrap_or_exit!(config.validate(), "Invalid configuration");

    info!(
        "Simulating {} floors at {}s per floor, passenger frequency {}",
        config.elevator.n_floors, config.elevator.speed, config.simulation.passenger_frequency
    );

    // Initialize channels
    let (status_tx, status_rx) = cbc::unbounded::<StatusReport>();
    let (_terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the status printer
    let json = config.output.json;
    let status_printer_thread = Builder::new().name("status_printer".into());
    let status_printer = unwrap_or_exit!(
        status_printer_thread.spawn(move || {
            if let Err(e) = simulation::printer::print_reports(status_rx, json, io::stdout().lock()) {
                error!("Status printer stopped: {}", e);
            }
        }),
        "Failed to start status printer"
    );

    // Run the simulation on this thread until it is told to stop
    let simulation = unwrap_or_exit!(
        Simulation::new(&config, status_tx),
        "Failed to start simulation"
    );
    simulation.run(terminate_rx);

    if status_printer.join().is_err() {
        error!("Status printer panicked");
    }
}
