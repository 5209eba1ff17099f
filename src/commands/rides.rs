//! Ride history command (`tmuber rides`)

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::print_json;
use crate::error::Result;
use crate::sample;

/// A row in the ride history table
#[derive(Tabled)]
struct RideRow {
    #[tabled(rename = "Id")]
    id: u32,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Fare")]
    fare: String,
    #[tabled(rename = "Driver")]
    driver: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

/// List the sample ride history
pub fn cmd_rides(json: bool) -> Result<()> {
    let rides = sample::rides();

    if json {
        return print_json(&rides);
    }

    let rows: Vec<RideRow> = rides
        .iter()
        .map(|ride| RideRow {
            id: ride.id,
            from: ride.from.clone(),
            to: ride.to.clone(),
            date: ride.date.clone(),
            fare: format!("${:.2}", ride.fare),
            driver: ride.driver.clone(),
            rating: format!("{:.1}", ride.rating),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    Ok(())
}
