//! Service types: the catalog of requestable complaint and work-order kinds.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::default_version;

/// Opaque identifier of a service type (e.g. "4f389210e75084437f0001ce").
pub type ServiceCode = String;

/// One requestable service type returned by `services.json`.
///
/// Identity is the `service_code`: two services with the same code are equal
/// and hash alike even when every other field differs.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Service {
    #[serde(default = "default_version")]
    pub version: i64,

    pub description: Option<String>,

    /// Category the service is listed under.
    pub group: String,

    /// Whether requests of this type carry supplemental attributes.
    pub metadata: bool,

    pub service_code: ServiceCode,

    pub service_name: String,

    /// Request-type classifier (e.g. "realtime").
    #[serde(rename = "type")]
    pub service_type: String,
}

impl PartialEq for Service {
    fn eq(&self, other: &Self) -> bool {
        self.service_code == other.service_code
    }
}

impl Eq for Service {}

impl Hash for Service {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.service_code.hash(state);
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.service_name, self.service_code)
    }
}

/// Services in the order the API returned them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Services(Vec<Service>);

impl Services {
    pub fn new(services: Vec<Service>) -> Self {
        Self(services)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Service> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Service> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Service] {
        &self.0
    }

    /// Unique service names, in the order each name first appears.
    pub fn list_service_names(&self) -> Vec<String> {
        unique(self.0.iter().map(|s| s.service_name.as_str()))
    }

    /// Unique group names, in the order each group first appears.
    pub fn list_groups(&self) -> Vec<String> {
        unique(self.0.iter().map(|s| s.group.as_str()))
    }

    /// Code of the first service whose name matches exactly.
    pub fn get_service_code(&self, service_name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|s| s.service_name == service_name)
            .map(|s| s.service_code.as_str())
    }

    /// Name of the first service whose code matches exactly.
    pub fn get_service_name(&self, service_code: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|s| s.service_code == service_code)
            .map(|s| s.service_name.as_str())
    }
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

impl Index<usize> for Services {
    type Output = Service;

    fn index(&self, index: usize) -> &Service {
        &self.0[index]
    }
}

impl From<Vec<Service>> for Services {
    fn from(services: Vec<Service>) -> Self {
        Self(services)
    }
}

impl IntoIterator for Services {
    type Item = Service;
    type IntoIter = std::vec::IntoIter<Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Services {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
