// Entrypoint for the seeding utility.
// - Keeps `main` small: build the demo config, confirm, run the sequence.
// - Returns `anyhow::Result` so any failure not handled inline is reported
//   exactly once and the process exits non-zero.

use demoseed_cli::{
    config::SeedConfig,
    seed::run,
    ui::{confirm_seed, ConsoleLog},
};

fn main() -> anyhow::Result<()> {
    let config = SeedConfig::demo();

    if !confirm_seed(&config.base_url)? {
        println!("Aborted, nothing was created.");
        return Ok(());
    }

    let mut log = ConsoleLog::new();
    run(&config, &mut log)?;
    Ok(())
}
