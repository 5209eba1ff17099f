//! Dashboard stats command (`tmuber stats`)

use owo_colors::OwoColorize;

use crate::commands::print_json;
use crate::error::Result;
use crate::sample;
use crate::types::ServiceStatus;

/// Print the fixed dashboard numbers and service health
pub fn cmd_stats(json: bool) -> Result<()> {
    let stats = sample::stats();

    if json {
        return print_json(&serde_json::json!({
            "stats": stats,
            "services": sample::core_services(),
            "performance": sample::performance_metrics()
                .into_iter()
                .collect::<std::collections::BTreeMap<_, _>>(),
        }));
    }

    println!("{}", "Dashboard".bold());
    println!("  Total rides:       {}", stats.total_rides);
    println!("  Active users:      {}", stats.active_users);
    println!("  Open tickets:      {}", stats.open_tickets);
    println!("  Avg response time: {}", stats.avg_response_time);
    println!("  Satisfaction:      {:.1}/5", stats.satisfaction);

    println!("\n{}", "Core Services".bold());
    for service in sample::core_services() {
        let status = match service.status {
            ServiceStatus::Operational => service.status.to_string().green().to_string(),
            ServiceStatus::Delayed => service.status.to_string().yellow().to_string(),
        };
        println!(
            "  {:<22} {} ({} uptime)",
            service.name, status, service.uptime
        );
    }

    println!("\n{}", "Performance".bold());
    for (name, value) in sample::performance_metrics() {
        println!("  {name:<22} {value}");
    }

    Ok(())
}
