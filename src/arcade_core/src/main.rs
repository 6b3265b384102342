use arcade_core::{
    logging, render_json, render_text, run_default, Result, TournamentError, TournamentReport,
};

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    seed: Option<u64>,
    json: bool,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let cli = parse_args(&args)?;

    let report = run_default(cli.seed)?;
    print!("{}", render(&report, cli.json)?);
    Ok(())
}

/// Final stdout text, terminated by exactly one newline.
fn render(report: &TournamentReport, json: bool) -> Result<String> {
    if json {
        let mut doc = render_json(report)?;
        doc.push('\n');
        Ok(doc)
    } else {
        Ok(render_text(report))
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--seed=") {
            let seed = value
                .parse::<u64>()
                .map_err(|_| TournamentError::InvalidArgument(format!("bad seed: {value}")))?;
            cli.seed = Some(seed);
        } else if arg == "--json" {
            cli.json = true;
        } else {
            return Err(TournamentError::InvalidArgument(format!("unknown argument: {arg}")));
        }
    }
    Ok(cli)
}
