use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use wallcrop::api::Wallcrop;
use wallcrop::config::Settings;
use wallcrop::utils::logger::Logger;
use wallcrop::utils::path_utils::full_path;
use wallcrop::commands::{CommandFactory, WallcropCommandFactory};

fn main() {
    let matches = ClapCommand::new("wallcrop")
        .version("0.1")
        .about("Plan face-aware wallpaper crops for target aspect ratios")
        .arg(
            Arg::new("input")
                .help("Input image")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Settings file (defaults to ~/.config/wallcrop.toml when present)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .help("Wallpaper directory, overrides the settings file")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .help("Image size as WIDTHxHEIGHT instead of reading the input image")
                .value_name("WxH")
                .required(false),
        )
        .arg(
            Arg::new("face")
                .short('f')
                .long("face")
                .help("Face bounds as xmin,ymin,xmax,ymax (repeatable)")
                .value_name("BOUNDS")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("ratio")
                .short('r')
                .long("ratio")
                .help("Target ratio as name, WxH or W:H (repeatable)")
                .value_name("RATIO")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("candidates")
                .long("candidates")
                .help("List every candidate crop instead of the best one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate")
                .short('g')
                .long("generate")
                .help("Compute geometries for new wallpapers in the wallpaper directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detections")
                .long("detections")
                .help("JSON file with face detections per image, used by --generate")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("add-ratio")
                .long("add-ratio")
                .help("Add a ratio to every wallpaper already in the sidecar")
                .value_name("RATIO")
                .required(false),
        )
        .arg(
            Arg::new("crop")
                .short('c')
                .long("crop")
                .help("Write the cropped input image")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("geometry")
                .long("geometry")
                .help("Crop geometry as WxH+X+Y, used by --crop")
                .value_name("GEOMETRY")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    Logger::init_global_logger(matches.get_flag("verbose"));

    let mut settings = match Settings::load(matches.get_one::<String>("config").map(|s| s.as_str())) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            process::exit(1);
        }
    };

    if let Some(dir) = matches.get_one::<String>("dir") {
        settings.wallpaper_dir = full_path(dir);
    }

    let app = match Wallcrop::new(settings) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = WallcropCommandFactory::new();

    let command_result = factory.create_command(&matches, &app);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
