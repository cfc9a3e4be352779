// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use rphonevalidator::{PhoneValidator, ValidatorConfig};

#[derive(Debug, Parser)]
#[command(name = "phone-validator")]
#[command(about = "Validate phone numbers and report region, line type and local business hours")]
struct Cli {
    /// JSON file with validator settings; missing keys keep their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct Regions {
    /// Region assumed for numbers written without a country code.
    #[arg(long, env = "PHONE_VALIDATOR_DEFAULT_REGION")]
    default_region: Option<String>,

    /// Region that counts as domestic.
    #[arg(long, env = "PHONE_VALIDATOR_HOME_COUNTRY")]
    home_country: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a single number.
    Validate {
        number: String,
        #[command(flatten)]
        regions: Regions,
    },
    /// Validate several numbers; with no arguments they are read from stdin, one per line.
    Batch {
        numbers: Vec<String>,
        #[command(flatten)]
        regions: Regions,
    },
    /// Show the working week configured for a region.
    BusinessConfig { country_code: String },
    /// List every region with a configured working week.
    Countries,
    /// Print the service status.
    Health,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ValidatorConfig> {
    let Some(path) = path else {
        return Ok(ValidatorConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

fn read_stdin_numbers() -> anyhow::Result<Vec<String>> {
    let mut numbers = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading numbers from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            numbers.push(line.to_string());
        }
    }
    Ok(numbers)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let validator = PhoneValidator::with_config(load_config(cli.config.as_ref())?);

    match cli.command {
        Commands::Validate { number, regions } => print_json(&validator.validate(
            &number,
            regions.default_region.as_deref(),
            regions.home_country.as_deref(),
        )),
        Commands::Batch { numbers, regions } => {
            let numbers = if numbers.is_empty() { read_stdin_numbers()? } else { numbers };
            print_json(&validator.validate_batch(
                &numbers,
                regions.default_region.as_deref(),
                regions.home_country.as_deref(),
            ))
        }
        Commands::BusinessConfig { country_code } => {
            print_json(&validator.business_config(&country_code))
        }
        Commands::Countries => print_json(&validator.supported_countries()),
        Commands::Health => print_json(&validator.health()),
    }
}
