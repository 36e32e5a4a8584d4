use crate::report::stats::RouteReport;
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CarrierRow<'a> {
    #[tabled(rename = "Carrier")]
    carrier: &'a str,
    #[tabled(rename = "Min duration")]
    duration: String,
    #[tabled(rename = "Minutes")]
    minutes: u64,
}

fn price_summary(report: &RouteReport) -> String {
    format!(
        "Difference between average and median price: {:.2}\n",
        report.price_spread()
    )
}

/// Table output: one row per carrier, then the price summary.
pub fn render_table(report: &RouteReport) -> String {
    let mut out = format!(
        "{} ({} tickets)\n",
        report.route.to_string().bold(),
        report.matched
    );

    if report.min_durations.is_empty() {
        out.push_str("No matching tickets found.\n");
    } else {
        let rows = report
            .min_durations
            .iter()
            .map(|(carrier, minutes)| CarrierRow {
                carrier,
                duration: minutes.to_string(),
                minutes: minutes.0,
            })
            .collect::<Vec<_>>();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        table.with(Alignment::left());
        out.push_str(&format!("{}\n", table));
    }

    out.push_str(&format!("Average price: {:.2}\n", report.mean_price));
    out.push_str(&format!("Median price:  {:.2}\n", report.median_price));
    out.push_str(&price_summary(report));
    out
}

/// Line-oriented output, stable for scripts.
pub fn render_plain(report: &RouteReport) -> String {
    let mut out = String::from("Minimum flight durations by carrier:\n");
    for (carrier, minutes) in &report.min_durations {
        out.push_str(&format!("Carrier: {}, Min Duration: {} minutes\n", carrier, minutes.0));
    }
    out.push_str(&price_summary(report));
    out
}
