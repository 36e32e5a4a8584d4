use crate::ticket::Ticket;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn ticket(
    carrier: &str,
    origin_name: &str,
    destination_name: &str,
    departure: (&str, &str),
    arrival: (&str, &str),
    price: i64,
) -> Ticket {
    Ticket {
        carrier: id(carrier),
        origin: id(&origin_name[..1]),
        origin_name: id(origin_name),
        destination: id(&destination_name[..1]),
        destination_name: id(destination_name),
        departure_date: departure.0.to_string(),
        departure_time: departure.1.to_string(),
        arrival_date: arrival.0.to_string(),
        arrival_time: arrival.1.to_string(),
        stops: 0,
        price,
    }
}

pub fn add_ticket(
    tickets: &mut Vec<Ticket>,
    carrier: &str,
    origin_name: &str,
    destination_name: &str,
    departure: (&str, &str),
    arrival: (&str, &str),
    price: i64,
) {
    tickets.push(ticket(carrier, origin_name, destination_name, departure, arrival, price));
}

pub fn arb_name(prefix: &'static str) -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from(format!("{}_1", prefix))),
        Just(Arc::from(format!("{}_2", prefix))),
        Just(Arc::from(format!("{}_3", prefix))),
    ]
}

/// A ticket departing on 01.01.24 with a valid arrival up to three days later.
pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
    (
        arb_name("CR"),
        arb_name("AP"),
        arb_name("AP"),
        0..1440u64,
        0..4000u64,
        -100..50_000i64,
    )
        .prop_map(|(carrier, org, dst, dep, len, price)| {
            let arr = dep + len;
            let arrival_date = format!("{:02}.01.24", 1 + arr / 1440);
            let clock = |m: u64| format!("{:02}:{:02}", (m % 1440) / 60, m % 60);
            ticket(
                carrier.as_ref(),
                org.as_ref(),
                dst.as_ref(),
                ("01.01.24", clock(dep).as_str()),
                (arrival_date.as_str(), clock(arr).as_str()),
                price,
            )
        })
}
