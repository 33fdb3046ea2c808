/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use mcutool::file_reader::AsmFileReader;
use mcutool::raw_image;
use std::fs::File;
use std::path::PathBuf;

#[derive(ClapParser)]
#[clap(version = "0.1.0", author = "Connor Nolan")]
struct Opts {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a source file into a flat RAM image (`ram.img`).
    Assemble { input: PathBuf },
    /// Burn the microcode ROM into `rom01.img`/`rom02.img`.
    Burn,
    /// Compile a C-subset source file into assembly text (`source.as`).
    Compile { input: PathBuf },
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let reader = AsmFileReader;

    match opts.command {
        Commands::Assemble { input } => {
            println!("Assembling {}", input.display());
            let bytes = mcutool::assemble_file(&reader, &input)?;
            let mut ram = File::create("ram.img").context("creating ram.img")?;
            let values: Vec<u32> = bytes.iter().map(|&b| b as u32).collect();
            raw_image::write_raw_image(&mut ram, &values).context("writing ram.img")?;
            println!("Successfully assembled {} to ram.img", input.display());
        }
        Commands::Burn => {
            println!("Burning microcode roms");
            let images = mcutool::burn()?;
            let mut rom1 = File::create("rom01.img").context("creating rom01.img")?;
            raw_image::write_raw_image(&mut rom1, &images.rom1).context("writing rom01.img")?;
            let mut rom2 = File::create("rom02.img").context("creating rom02.img")?;
            raw_image::write_raw_image(&mut rom2, &images.rom2).context("writing rom02.img")?;
            println!("Successfully burned microcode to rom01.img and rom02.img");
        }
        Commands::Compile { input } => {
            println!("Compiling {}", input.display());
            let asm = mcutool::compile_file(&reader, &input)?;
            std::fs::write("source.as", &asm).context("writing source.as")?;
            println!("Successfully compiled {} to source.as", input.display());
        }
    }

    Ok(())
}
