use anyhow::Result;

use scopesweep::app::App;
use scopesweep::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::from_args();
    let app = App::new(cli)?;
    app.run()?;
    Ok(())
}
