use crate::ticket::Ticket;
use std::fmt;
use std::fmt::Formatter;

/// The origin/destination pair a report is computed for.
///
/// Names are compared exactly: case-sensitive, no trimming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub origin_name: String,
    pub destination_name: String,
}

impl Route {
    pub fn new(origin_name: impl Into<String>, destination_name: impl Into<String>) -> Self {
        Route {
            origin_name: origin_name.into(),
            destination_name: destination_name.into(),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        *ticket.origin_name == *self.origin_name && *ticket.destination_name == *self.destination_name
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin_name, self.destination_name)
    }
}
