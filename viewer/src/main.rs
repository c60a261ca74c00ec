#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod load;

use abstutil::{prettyprint_usize, Timer};
use anyhow::Result;
use serde::Serialize;
use structopt::StructOpt;

use traffic::{data_gate, Session, StationMarker};

#[derive(StructOpt)]
struct Args {
    /// The path to a station feed in JSON
    #[structopt(long)]
    stations: String,
    /// The path to a CSV file with one trip per row
    #[structopt(long)]
    trips: String,
    /// Minutes since midnight to show trips around, or -1 for any time. Repeat to step through
    /// several selections, like dragging the time slider.
    #[structopt(long = "time", allow_hyphen_values = true)]
    times: Vec<i32>,
    /// Print a short summary per selection, instead of every station as CSV
    #[structopt(long)]
    summary: bool,
}

fn main() -> Result<()> {
    abstutil::logger::setup();

    let mut args = Args::from_iter(abstutil::cli_args());
    if args.times.is_empty() {
        args.times.push(-1);
    }

    let (sender, gate) = data_gate();
    let mut session = Session::new(gate);

    // The first selection may arrive before the data does; it's applied once loading finishes
    session.set_time_filter(args.times[0])?;

    let stations_path = args.stations.clone();
    let trips_path = args.trips.clone();
    let loader = std::thread::spawn(move || {
        let mut timer = Timer::new("load bike-share data");
        sender.deliver(load::load_network(&stations_path, &trips_path, &mut timer));
    });
    futures::executor::block_on(session.wait_until_loaded());
    if loader.join().is_err() {
        bail!("The loading thread panicked");
    }
    if let Some(err) = session.load_error() {
        bail!("Couldn't load bike-share data: {err}");
    }

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for (idx, time) in args.times.iter().enumerate() {
        if idx > 0 {
            session.set_time_filter(*time)?;
        }
        if args.summary {
            print_summary(&session);
        } else {
            write_markers(&mut writer, &session.time_label(), session.markers())?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(session: &Session) {
    let view = match session.view() {
        Some(view) => view,
        None => return,
    };
    println!("{}", session.time_label());
    println!(
        "  {} trips, busiest station has {}",
        prettyprint_usize(view.num_trips),
        prettyprint_usize(view.snapshot.max_total())
    );

    let mut markers = session.markers();
    markers.sort_by_key(|m| std::cmp::Reverse(m.traffic.total()));
    for m in markers.into_iter().take(5) {
        println!("  {}: {}, radius {:.1}", m.short_name, m.tooltip, m.radius);
    }
}

fn write_markers<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    time_label: &str,
    markers: Vec<StationMarker>,
) -> Result<()> {
    for m in markers {
        writer.serialize(MarkerRow {
            time: time_label,
            short_name: m.short_name.as_str(),
            lon: m.pos.x(),
            lat: m.pos.y(),
            arrivals: m.traffic.arrivals,
            departures: m.traffic.departures,
            total_traffic: m.traffic.total(),
            radius: m.radius,
            color: &m.color,
        })?;
    }
    Ok(())
}

#[derive(Serialize)]
struct MarkerRow<'a> {
    time: &'a str,
    short_name: &'a str,
    lon: f64,
    lat: f64,
    arrivals: usize,
    departures: usize,
    total_traffic: usize,
    radius: f64,
    color: &'a str,
}
