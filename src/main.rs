use anyhow::Result;
use clap::Parser;
use letter_icon::icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "letter-icon",
    version,
    about = "Render the extension icons (icon16.png, icon48.png, icon128.png) into the icons directory"
)]
struct Args {}

fn main() -> Result<()> {
    Args::parse();

    icon_gen::generate_icons(&icon_gen::icons_dir())?;
    Ok(())
}
