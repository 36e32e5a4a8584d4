use crate::error::StatsError;
use crate::time::{self, Minutes};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

pub type CarrierCode = Arc<str>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub carrier: CarrierCode,
    pub origin: Arc<str>,
    pub origin_name: Arc<str>,
    pub destination: Arc<str>,
    pub destination_name: Arc<str>,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    #[serde(default)]
    pub stops: u32,
    pub price: i64,
}

impl Ticket {
    pub fn duration(&self) -> Result<Minutes, StatsError> {
        time::duration(
            &self.departure_date,
            &self.departure_time,
            &self.arrival_date,
            &self.arrival_time,
        )
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<Ticket>, StatsError> {
        let unavailable = |reason: String| StatsError::InputUnavailable {
            path: path.to_path_buf(),
            reason,
        };
        let data = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        let tickets = Ticket::parse_list(&data).map_err(|e| unavailable(e.to_string()))?;
        info!("loaded {} tickets from {}", tickets.len(), path.display());
        Ok(tickets)
    }

    /// Accepts either a bare array of tickets or an object with a `tickets` array.
    pub fn parse_list(data: &str) -> serde_json::Result<Vec<Ticket>> {
        #[derive(Deserialize)]
        struct Wrapped {
            tickets: Vec<Ticket>,
        }
        let data = data.trim_start_matches('\u{feff}');
        if data.trim_start().starts_with('{') {
            Ok(serde_json::from_str::<Wrapped>(data)?.tickets)
        } else {
            serde_json::from_str::<Vec<Ticket>>(data)
        }
    }
}
