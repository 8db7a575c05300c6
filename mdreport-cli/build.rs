use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs, reduced to what completions need.
// Build scripts can't access src/ modules.
fn completion_cli() -> Command {
    Command::new("mdreport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown report into a single HTML page with figure galleries")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("figures")
                        .long("figures")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("figures")
                .arg(
                    Arg::new("figures")
                        .long("figures")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("sections"))
        .subcommand(Command::new("generate-css"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    generate_to(Bash, &mut cmd, "mdreport", &outdir)?;
    generate_to(Zsh, &mut cmd, "mdreport", &outdir)?;
    generate_to(Fish, &mut cmd, "mdreport", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
