use anyhow::Result;
use boston311_api::types::{Service, ServiceRequest};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ServiceRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Group")]
    #[serde(rename = "Group")]
    group: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    service_type: String,
    #[tabled(rename = "Metadata")]
    #[serde(rename = "Metadata")]
    metadata: bool,
}

#[derive(Tabled, Serialize)]
struct RequestRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Requested")]
    #[serde(rename = "Requested")]
    requested: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Service")]
    #[serde(rename = "Service")]
    service: String,
    #[tabled(rename = "Address")]
    #[serde(rename = "Address")]
    address: String,
    #[tabled(rename = "Notes")]
    #[serde(rename = "Notes")]
    notes: String,
}

#[derive(Tabled, Serialize)]
struct GroupRow {
    #[tabled(rename = "Group")]
    #[serde(rename = "Group")]
    group: String,
    #[tabled(rename = "Services")]
    #[serde(rename = "Services")]
    services: usize,
}

// -- Row builders --

fn build_service_rows(services: &[Service]) -> Vec<ServiceRow> {
    services
        .iter()
        .map(|s| ServiceRow {
            code: s.service_code.clone(),
            name: s.service_name.clone(),
            group: s.group.clone(),
            service_type: s.service_type.clone(),
            metadata: s.metadata,
        })
        .collect()
}

fn build_request_rows(requests: &[ServiceRequest]) -> Vec<RequestRow> {
    requests
        .iter()
        .map(|r| RequestRow {
            id: r.service_request_id.clone(),
            requested: r.requested_datetime.format("%Y-%m-%d %H:%M").to_string(),
            status: r.status.to_string(),
            service: r.service_name.clone(),
            address: r.address.clone(),
            notes: r.status_notes.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_group_rows(groups: &[(String, usize)]) -> Vec<GroupRow> {
    groups
        .iter()
        .map(|(group, services)| GroupRow {
            group: group.clone(),
            services: *services,
        })
        .collect()
}

// -- Generic printers --

fn print_table<R: Tabled>(rows: Vec<R>) {
    println!("{}", Table::new(rows));
}

fn print_markdown<R: Tabled>(rows: Vec<R>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

fn print_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Markdown => print_markdown(rows),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

// -- Entity output --

/// JSON output emits the full entities; the other formats print summary rows.
pub fn print_services(services: &[Service], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&services);
            Ok(())
        }
        _ => print_rows(build_service_rows(services), format),
    }
}

pub fn print_requests(requests: &[ServiceRequest], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&requests);
            Ok(())
        }
        _ => print_rows(build_request_rows(requests), format),
    }
}

pub fn print_groups(groups: &[(String, usize)], format: &OutputFormat) -> Result<()> {
    print_rows(build_group_rows(groups), format)
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
