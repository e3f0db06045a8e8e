//Seamless
//Copyright (C) 2024 The Seamless developers
//
//This program is free software: you can redistribute it and/or modify
//it under the terms of the GNU Affero General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//This program is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU Affero General Public License for more details.
//
//You should have received a copy of the GNU Affero General Public License
//along with this program.  If not, see <http://www.gnu.org/licenses/>.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seamless::args::{Args, Command};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Solve(solve) => {
            seamless::solve_file(&solve).with_context(|| format!("Could not solve {}", solve.file().display()))?;
        },
        Command::Info { file } => {
            seamless::info(&file).with_context(|| format!("Could not read {}", file.display()))?;
        },
        Command::List { folder, sort } => {
            seamless::list(&folder, sort)?;
        },
        Command::Example => {
            seamless::example();
        },
    }
    Ok(())
}
