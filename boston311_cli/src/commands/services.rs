use anyhow::Result;
use boston311_api::types::{Service, Services};
use boston311_api::Client;
use clap::Args;

use crate::output::{print_groups, print_services, OutputFormat};

#[derive(Args)]
pub struct ServicesArgs {
    /// Only show services in this group (case-insensitive, e.g. "Street Cleaning")
    #[arg(long)]
    pub group: Option<String>,
}

pub fn run(args: &ServicesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let services = client.list_services()?;

    let selected: Vec<Service> = match &args.group {
        Some(group) => services
            .iter()
            .filter(|s| s.group.eq_ignore_ascii_case(group.trim()))
            .cloned()
            .collect(),
        None => services.iter().cloned().collect(),
    };

    eprintln!(
        "{} of {} services ({} groups)",
        selected.len(),
        services.len(),
        services.list_groups().len()
    );

    print_services(&selected, format)
}

pub fn run_groups(client: &Client, format: &OutputFormat) -> Result<()> {
    let services = client.list_services()?;
    let groups = count_by_group(&services);
    eprintln!("{} groups", groups.len());
    print_groups(&groups, format)
}

/// Group names in first-seen order with the number of services in each.
fn count_by_group(services: &Services) -> Vec<(String, usize)> {
    services
        .list_groups()
        .into_iter()
        .map(|group| {
            let count = services.iter().filter(|s| s.group == group).count();
            (group, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_services_per_group() {
        let json = include_str!("../../../boston311_api/tests/fixtures/services.json");
        let services: Services = serde_json::from_str(json).unwrap();
        let groups = count_by_group(&services);
        assert_eq!(
            groups,
            vec![
                ("Street Cleaning".to_string(), 2),
                ("Highway Maintenance".to_string(), 2),
            ]
        );
    }
}
