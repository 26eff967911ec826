use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use boston311_api::types::{Service, ServiceRequest, ServiceRequests, Services, Status};
use chrono::{FixedOffset, TimeZone};

fn service(code: &str, name: &str, group: &str) -> Service {
    Service {
        version: 1,
        description: None,
        group: group.to_string(),
        metadata: false,
        service_code: code.to_string(),
        service_name: name.to_string(),
        service_type: "realtime".to_string(),
    }
}

fn request(id: &str, status: Status) -> ServiceRequest {
    ServiceRequest {
        version: 1,
        address: "1 City Hall Sq, Boston".to_string(),
        address_id: None,
        zipcode: None,
        description: None,
        lat: 42.3601,
        long: -71.0589,
        media_url: None,
        requested_datetime: FixedOffset::west_opt(4 * 3600)
            .unwrap()
            .with_ymd_and_hms(2021, 8, 11, 10, 0, 0)
            .unwrap(),
        service_code: "4f389210e75084437f0001ce".to_string(),
        service_name: "Dead Animal Pick-up".to_string(),
        service_request_id: id.to_string(),
        status,
        updated_datetime: None,
        status_notes: None,
        agency_responsible: None,
        service_notice: None,
        expected_datetime: None,
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_services() -> Services {
    Services::new(vec![
        service("A1", "Pothole Repair", "Highway Maintenance"),
        service("B2", "Graffiti Removal", "Street Cleaning"),
        service("C3", "Pothole Repair", "Highway Maintenance"),
        service("D4", "Dead Animal Pick-up", "Street Cleaning"),
    ])
}

// -- Service identity --

#[test]
fn services_with_same_code_are_equal() {
    let a = service("A1", "Pothole Repair", "Highway Maintenance");
    let mut b = service("A1", "Something Else", "Other");
    b.metadata = true;
    b.version = 7;
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn services_with_different_code_are_not_equal() {
    let a = service("A1", "Pothole Repair", "Highway Maintenance");
    let b = service("A2", "Pothole Repair", "Highway Maintenance");
    assert_ne!(a, b);
}

#[test]
fn service_set_dedups_by_code() {
    let set: HashSet<Service> = sample_services()
        .into_iter()
        .chain([service("A1", "Renamed", "Other")])
        .collect();
    assert_eq!(set.len(), 4);
}

#[test]
fn service_display_names_code() {
    let s = service("A1", "Pothole Repair", "Highway Maintenance");
    assert_eq!(s.to_string(), "Pothole Repair [A1]");
}

// -- Services lookups --

#[test]
fn services_len_and_index() {
    let services = sample_services();
    assert_eq!(services.len(), 4);
    assert!(!services.is_empty());
    assert_eq!(services[1].service_code, "B2");
    assert_eq!(services.get(3).map(|s| s.service_code.as_str()), Some("D4"));
    assert!(services.get(4).is_none());
}

#[test]
fn list_service_names_collapses_duplicates() {
    let names = sample_services().list_service_names();
    assert_eq!(
        names,
        ["Pothole Repair", "Graffiti Removal", "Dead Animal Pick-up"]
    );
}

#[test]
fn list_groups_is_unique() {
    let groups = sample_services().list_groups();
    assert_eq!(groups, ["Highway Maintenance", "Street Cleaning"]);
}

#[test]
fn get_service_code_first_match_wins() {
    let services = sample_services();
    assert_eq!(services.get_service_code("Pothole Repair"), Some("A1"));
    assert_eq!(services.get_service_code("Dead Animal Pick-up"), Some("D4"));
}

#[test]
fn get_service_code_absent() {
    assert_eq!(sample_services().get_service_code("X"), None);
}

#[test]
fn get_service_name_by_code() {
    let services = sample_services();
    assert_eq!(services.get_service_name("B2"), Some("Graffiti Removal"));
    assert_eq!(services.get_service_name("ZZ"), None);
}

#[test]
fn empty_services() {
    let services = Services::default();
    assert!(services.is_empty());
    assert!(services.list_service_names().is_empty());
    assert_eq!(services.get_service_code("Pothole Repair"), None);
}

// -- ServiceRequest identity --

#[test]
fn requests_with_same_id_are_equal() {
    let a = request("101003914012", Status::Open);
    let mut b = request("101003914012", Status::Closed);
    b.address = "335 Gallivan Blvd, 1, Dorchester".to_string();
    b.lat = 0.0;
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn requests_with_different_id_are_not_equal() {
    assert_ne!(
        request("101003914012", Status::Open),
        request("101003914013", Status::Open)
    );
}

#[test]
fn request_display() {
    let r = request("101003914012", Status::Open);
    assert_eq!(
        r.to_string(),
        "#101003914012 Dead Animal Pick-up (open) @ 1 City Hall Sq, Boston"
    );
}

// -- ServiceRequests --

#[test]
fn service_requests_keep_duplicates_in_order() {
    let requests = ServiceRequests::new(vec![
        request("1", Status::Open),
        request("2", Status::Closed),
        request("1", Status::Closed),
    ]);
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].status, Status::Open);
    assert_eq!(requests[2].status, Status::Closed);
    assert_eq!(requests.get(1).map(|r| r.service_request_id.as_str()), Some("2"));
    assert!(requests.get(3).is_none());
}
