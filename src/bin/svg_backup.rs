use anyhow::Result;
use letter_icon::{icon_gen, svg};
use std::path::PathBuf;

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(icon_gen::icons_dir);

    let sizes: Vec<u32> = icon_gen::ICONS.iter().map(|(size, _)| *size).collect();
    for path in svg::write_backups(&out_dir, &sizes)? {
        println!("Created {}", path.display());
    }

    println!("Created backup SVG icons");
    Ok(())
}
