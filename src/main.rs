//! Demo entry point: assign 100 students to 10 rooms with a parallel
//! Monte Carlo search and print the best assignment found.

use std::process;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

use roomfit::mc::{McConfig, McRunner};
use roomfit::problem::{Incompatibility, Problem, Room};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of worker threads.
    #[arg(default_value_t = 4)]
    threads: usize,
}

// Embedded demo instance: 10 rooms of capacity 10, 100 students,
// every third adjacent pair incompatible.
const NUM_ROOMS: usize = 10;
const ROOM_CAPACITY: usize = 10;
const NUM_STUDENTS: usize = 100;
const ITERATIONS_PER_WORKER: usize = 100_000;

fn demo_problem() -> Problem {
    let rooms = vec![Room { capacity: ROOM_CAPACITY }; NUM_ROOMS];
    let incompatibilities = (0..NUM_STUDENTS.saturating_sub(1))
        .step_by(3)
        .map(|i| Incompatibility {
            student1: i,
            student2: i + 1,
        })
        .collect();
    Problem::new(rooms, NUM_STUDENTS, incompatibilities)
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let problem = demo_problem();
    let config = McConfig::default()
        .with_num_workers(cli.threads)
        .with_iterations_per_worker(ITERATIONS_PER_WORKER);

    if let Err(e) = config.validate().and_then(|_| problem.validate()) {
        error!("invalid configuration: {e}");
        process::exit(1);
    }

    info!(
        threads = config.num_workers,
        students = problem.num_students,
        rooms = problem.num_rooms(),
        iterations_per_worker = config.iterations_per_worker,
        "starting search"
    );

    let start = Instant::now();
    let result = McRunner::run(&problem, &config);
    let elapsed_ms = start.elapsed().as_millis();

    let Some(best) = result.best else {
        error!("search produced no candidate solutions");
        process::exit(1);
    };

    println!("\nBest Room Assignment per Student:");
    for (student, room) in best.assignment.iter().enumerate() {
        println!("Student {student}: Room {room}");
    }
    println!("Best fitness found: {}", best.fitness);
    println!("Total Time taken (ms): {elapsed_ms}");
    println!("Thread Count used: {}", config.num_workers);
}
