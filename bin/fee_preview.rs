use fee_settlement::{
    schedule::{resolve_fee_schedules, FeeSchedules, JsonFileFeeScheduleSource},
    settlement::{compute_fee_settlement, resolve_fee_mode, FeeSettlementInput},
};
use serde_json::json;

// we have 3 args, amount discount mode, and an optional fee schedule json file
// amounts are in minor units, anything that does not parse counts as 0

fn usage() -> ! {
    eprintln!("usage: fee_preview <amount> <discount> <INCLUDED|ADDED|ON_TOP> [schedules.json]");
    std::process::exit(1);
}

fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 4 && args.len() != 5 {
        usage();
    }

    let amount = parse_amount(&args[1]);
    let discount = parse_amount(&args[2]);
    let mode = resolve_fee_mode(&args[3]);

    let schedules = match args.get(4) {
        Some(path) => resolve_fee_schedules(&JsonFileFeeScheduleSource::new(path)),
        None => FeeSchedules::default(),
    };

    let input = FeeSettlementInput::from_raw(amount, discount, mode.into(), &schedules);

    let breakdown = compute_fee_settlement(&input);

    let output = json!({
        "schedules": schedules,
        "breakdown": breakdown,
        "organizer_receives_minor_units": breakdown.organizer_receives_minor_units(),
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("failed to render breakdown: {err}");
            std::process::exit(1);
        }
    }
}
