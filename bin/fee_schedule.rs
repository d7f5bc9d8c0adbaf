use fee_settlement::schedule::{resolve_fee_schedules, FeeSchedules, JsonFileFeeScheduleSource};

/// we have 1 optional arg, a fee schedule json file
/// prints the schedules a settlement would use, defaults included
fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("usage: fee_schedule [schedules.json]");
        std::process::exit(1);
    }

    let schedules = match args.get(1) {
        Some(path) => resolve_fee_schedules(&JsonFileFeeScheduleSource::new(path)),
        None => FeeSchedules::default(),
    };

    match serde_json::to_string_pretty(&schedules) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("failed to render fee schedules: {err}");
            std::process::exit(1);
        }
    }
}
