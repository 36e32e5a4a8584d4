use crate::error::StatsError;
use crate::route::Route;
use crate::ticket::{CarrierCode, Ticket};
use crate::time::Minutes;
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Statistics for the tickets of a single route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteReport {
    pub route: Route,
    pub matched: usize,
    pub min_durations: BTreeMap<CarrierCode, Minutes>,
    pub mean_price: f64,
    pub median_price: f64,
}

impl RouteReport {
    pub fn compute(tickets: &[Ticket], route: &Route) -> Result<RouteReport, StatsError> {
        RouteReport::compute_with(tickets, route, Ticket::duration)
    }

    /// Same as [`RouteReport::compute`] with the duration of each ticket supplied by `duration`.
    pub fn compute_with<F>(tickets: &[Ticket], route: &Route, duration: F) -> Result<RouteReport, StatsError>
    where
        F: Fn(&Ticket) -> Result<Minutes, StatsError>,
    {
        let matching = tickets.iter().filter(|t| route.matches(t)).collect::<Vec<&Ticket>>();
        if matching.is_empty() {
            warn!("no tickets match route {}", route);
        }

        let min_durations = min_durations(&matching, duration)?;
        let mut prices = matching.iter().map(|t| t.price).collect::<Vec<i64>>();
        let mean_price = mean(&prices);
        let median_price = median(&mut prices);

        info!(
            "route {}: {} tickets, {} carriers",
            route,
            matching.len(),
            min_durations.len()
        );

        Ok(RouteReport {
            route: route.clone(),
            matched: matching.len(),
            min_durations,
            mean_price,
            median_price,
        })
    }

    pub fn price_spread(&self) -> f64 {
        self.mean_price - self.median_price
    }
}

/// Shortest duration per carrier. Fails on the first ticket whose duration cannot be computed.
pub fn min_durations<F>(tickets: &[&Ticket], duration: F) -> Result<BTreeMap<CarrierCode, Minutes>, StatsError>
where
    F: Fn(&Ticket) -> Result<Minutes, StatsError>,
{
    let mut best: BTreeMap<CarrierCode, Minutes> = BTreeMap::new();
    for &ticket in tickets {
        let candidate = duration(ticket)?;
        match best.get_mut(&ticket.carrier) {
            Some(current) if candidate < *current => {
                debug!("{}: new minimum {} (was {})", ticket.carrier, candidate, current);
                *current = candidate;
            }
            Some(_) => {}
            None => {
                debug!("{}: first duration {}", ticket.carrier, candidate);
                best.insert(ticket.carrier.clone(), candidate);
            }
        }
    }
    Ok(best)
}

/// Arithmetic mean, 0 for no prices.
pub fn mean(prices: &[i64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    let total = prices.iter().map(|&p| i128::from(p)).sum::<i128>();
    total as f64 / prices.len() as f64
}

/// Median, 0 for no prices. Sorts `prices` in place.
pub fn median(prices: &mut [i64]) -> f64 {
    prices.sort_unstable();
    let size = prices.len();
    match size {
        0 => 0.0,
        _ if size % 2 == 1 => prices[size / 2] as f64,
        _ => (prices[size / 2 - 1] as f64 + prices[size / 2] as f64) / 2.0,
    }
}
