use waypointkit::{init_logging, parse_args, run, Command, BUILD_DATE, USAGE, VERSION};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match parse_args(&args)? {
        Command::Help => println!("{}", USAGE),
        Command::Version => println!("waypointkit {} (built {})", VERSION, BUILD_DATE),
        Command::Replay(replay_args) => {
            init_logging()?;
            let outcome = run(&replay_args)?;
            print!("{}", outcome.table);
            println!(
                "{} events, {} applied, total distance {} m",
                outcome.events, outcome.changed, outcome.total_distance
            );
        }
    }

    Ok(())
}
