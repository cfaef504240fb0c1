use clap::Parser;
use form_api::cli::commands::{cmd_render, cmd_slots, cmd_validate};
use form_api::cli::config::{Cli, Commands, load_config, resolve_settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve settings: CLI > config > defaults
    let settings = resolve_settings(&cli, &config);

    match &cli.command {
        Commands::Render { form } => {
            cmd_render(form, &settings)?;
        }
        Commands::Validate { form, response } => {
            let accepted = cmd_validate(form, response, &settings)?;
            if !accepted {
                std::process::exit(1);
            }
        }
        Commands::Slots { form } => {
            cmd_slots(form)?;
        }
    }

    Ok(())
}
