mod cli;

use terrafix::AddressPath;

fn main() {
    use clap::Parser;
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("TERRAFIX_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let command_result = match cli.command {
        cli::Command::Format(format_cli) => format(format_cli),
        cli::Command::Matches(match_cli) => matches(match_cli),
        cli::Command::Find(match_cli) => find(match_cli),
        cli::Command::Replace(replace_cli) => replace(replace_cli),
    };

    let result = command_result.and_then(|value| output(&cli.output, &value));

    if let Err(e) = result {
        for error in e.chain() {
            eprintln!("{error}")
        }
        std::process::exit(1);
    }
}

pub fn format(cli: cli::FormatCommand) -> anyhow::Result<serde_json::Value> {
    let addresses = cli
        .addresses
        .iter()
        .map(|text| text.parse())
        .collect::<Result<Vec<AddressPath>, _>>()?;

    Ok(serde_json::to_value(addresses)?)
}

pub fn matches(cli: cli::MatchCommand) -> anyhow::Result<serde_json::Value> {
    let reference = parse_reference(&cli.reference)?;
    Ok(reference.matches(&cli.pattern)?.into())
}

pub fn find(cli: cli::MatchCommand) -> anyhow::Result<serde_json::Value> {
    let reference = parse_reference(&cli.reference)?;
    Ok(reference.find_end(&cli.pattern)?.into())
}

pub fn replace(cli: cli::ReplaceCommand) -> anyhow::Result<serde_json::Value> {
    let reference = parse_reference(&cli.reference)?;
    let replaced = reference.replace_str(&cli.prefix, &cli.replacement)?;

    tracing::info!(%reference, %replaced, "replaced");
    Ok(serde_json::to_value(replaced)?)
}

/// An empty reference is allowed and never matches
fn parse_reference(text: &str) -> anyhow::Result<AddressPath> {
    if text.is_empty() {
        return Ok(AddressPath::new());
    }

    Ok(text.parse()?)
}

fn output(output: &cli::OutputArgs, value: &serde_json::Value) -> anyhow::Result<()> {
    match output.format {
        cli::OutputFormat::Yaml => serde_yaml::to_writer(std::io::stdout(), value)?,
        cli::OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), value)?;
            println!();
        }
    };

    Ok(())
}
