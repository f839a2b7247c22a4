use clap::{Arg, ArgAction, Command};
use fleet_board::{demo, load_config, logging, render, select_by_number};
use fleet_roster::{Dashboard, Tab};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let cli = Command::new("fleet-board")
        .version(fleet_roster::VERSION)
        .about("Train fleet dashboard")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to a roster config TOML file"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("overview")
                .about("Show status counts and train cards")
                .arg(
                    Arg::new("select")
                        .long("select")
                        .help("Train number to show in the detail panel"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("schedule").about("Show the timetable"))
        .subcommand(Command::new("demo").about("Run a scripted add/edit/delete session"));

    let matches = cli.get_matches();
    logging::init(matches.get_flag("json-logs"));

    let config_path = matches.get_one::<PathBuf>("config");
    let config = load_config(config_path.map(PathBuf::as_path))?;

    match matches.subcommand() {
        Some(("overview", args)) => {
            let mut dashboard = Dashboard::from_config(config);
            if let Some(number) = args.get_one::<String>("select") {
                select_by_number(&mut dashboard, number)?;
            }

            if args.get_flag("json") {
                println!("{}", render::overview_json(&dashboard)?);
            } else {
                println!("{}", render::summary(&dashboard.summary()));
                println!("{}", render::train_list(&dashboard));
                println!("{}", render::detail(dashboard.roster()));
            }
        }
        Some(("schedule", _)) => {
            let mut dashboard = Dashboard::from_config(config);
            dashboard.set_tab(Tab::Schedule);
            println!("{}", dashboard.tab().list_title());
            println!("{}", render::schedule(dashboard.roster()));
        }
        Some(("demo", _)) => {
            let report = demo::run(config)?;
            for line in &report.steps {
                println!("- {line}");
            }
            println!();
            println!("{}", render::train_list(&report.dashboard));
        }
        _ => {}
    }

    Ok(())
}
