use anyhow::Result;
use clap::{Parser, Subcommand};
use colour_id::{
    hit_test::LabelTable,
    manifest::{AssetKind, default_manifest},
    palette::ColourKey,
};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for colour_id", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in manifest and the colour -> label table the renderer needs
    Palette,
    Ci,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Palette => palette(),
        Commands::Ci => ci(),
    }
}

fn palette() -> Result<()> {
    let manifest = default_manifest();
    for job in &manifest {
        match &job.kind {
            AssetKind::Part(roles) => println!(
                "{:<18} {:<32} black {} white {}",
                job.label,
                job.path,
                roles.target(ColourKey::Black).to_hex(),
                roles.target(ColourKey::White).to_hex()
            ),
            AssetKind::Button(style) => println!(
                "{:<18} {:<32} fill {} highlight {} outline {}",
                job.label,
                job.path,
                style.fill.to_hex(),
                style.highlight.to_hex(),
                style.outline.to_hex()
            ),
        }
    }

    println!();
    let labels = LabelTable::from_manifest(&manifest)?;
    for ([r, g, b], label) in labels.entries() {
        println!("[{r:>3}, {g:>3}, {b:>3}] => {label}");
    }
    Ok(())
}

/// can run benches, tests, bundle reports and so on...
fn ci() -> Result<()> {
    run_command("cargo", &["fmt", "--all", "--check"])?;
    run_command(
        "cargo",
        &[
            "clippy",
            "--all-targets",
            "--all-features",
            "--",
            "-D",
            "warnings",
        ],
    )?;
    run_command("cargo", &["build", "--all-features"])?;
    run_command("cargo", &["test", "--all-features"])?;
    Ok(())
}

fn run_command(cmd: &str, args: &[&str]) -> Result<()> {
    use std::process::Command;
    let status = Command::new(cmd).args(args).status()?;
    if !status.success() {
        anyhow::bail!("Command failed: {} {}", cmd, args.join(" "));
    }
    Ok(())
}
