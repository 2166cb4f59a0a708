//! Interactive flight-route finder.
//!
//! Reads a whitespace-delimited route file (`from to cost` per line), asks
//! for the per-airport surcharge and the two endpoints, and prints the
//! minimum total cost with the full airport path.

use skyroute::{FlightNetwork, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

fn prompt(question: &str) -> io::Result<String> {
    print!("{} ", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let file_name = prompt("Flight data file name?")?;

    let surcharge: u64 = loop {
        match prompt("Cost of using one airport?")?.parse() {
            Ok(value) => break value,
            Err(_) => println!("Please enter a nonnegative integer."),
        }
    };

    let endpoints = prompt("Airports traveling between?")?;
    let mut names = endpoints.split_whitespace();
    let (Some(source), Some(destination)) = (names.next(), names.next()) else {
        eprintln!("Expected two airport names.");
        std::process::exit(2);
    };

    let reader = BufReader::new(File::open(&file_name)?);
    let network = FlightNetwork::from_reader(reader, surcharge)?;

    let route = network.route(source, destination)?;
    match route.cost {
        Some(cost) => {
            println!("Min cost from {} to {} is {}", source, destination, cost);
            println!("{}", route.path.join(" --> "));
        }
        None => println!("{} is unreachable from {}", destination, source),
    }

    Ok(())
}
