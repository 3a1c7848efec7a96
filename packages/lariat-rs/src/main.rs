mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Commands};
use lariat_ocr::{JsonRegionSource, RegionSource, SnapshotInput};
use lariat_rs::selection::{select_regions_in_path, selected_text};
use lariat_rs::trace::{load_path_points, load_trace, replay_trace};

#[tokio::main]
async fn main() {
  env_logger::init();

  let args = Args::parse();

  if let Err(e) = run(args).await {
    eprintln!("Error: {}", e);
    std::process::exit(1);
  }
}

async fn run(args: Args) -> Result<()> {
  match args.command {
    Commands::Version => {
      println!("lariat {}", env!("CARGO_PKG_VERSION"));
    }
    Commands::Select {
      regions_file,
      path_file,
      text,
    } => {
      let source = JsonRegionSource::new();
      let snapshot = source
        .capture(&SnapshotInput::FilePath(regions_file))
        .await?;
      let points = load_path_points(&path_file)?;

      let selected = select_regions_in_path(&snapshot.regions, &points);
      log::debug!(
        "{} of {} regions selected",
        selected.len(),
        snapshot.regions.len()
      );

      if text {
        println!("{}", selected_text(&snapshot.regions, &selected));
      } else {
        for index in &selected {
          println!("{}", index);
        }
      }
    }
    Commands::Replay {
      regions_file,
      trace_file,
    } => {
      let source = JsonRegionSource::new();
      let snapshot = source
        .capture(&SnapshotInput::FilePath(regions_file))
        .await?;
      let trace = load_trace(&trace_file)?;

      for outcome in replay_trace(&trace, &snapshot.regions) {
        let indices = outcome
          .selected
          .iter()
          .map(|index| index.to_string())
          .collect::<Vec<_>>()
          .join(" ");
        println!("gesture {}: [{}]", outcome.gesture_index, indices);
      }
    }
  }

  Ok(())
}
