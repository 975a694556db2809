use clap::{Parser, Subcommand};
use quader::preset::{Preset, PresetError, PresetStore};
use quader::report::BoxReport;
use quader::solver::{self, BoxDimensions, DerivationMode, DerivationRequest};
use quader::units::{self, parse_quantity, LinearUnit, QuantityKind};
use quader::QuaderConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quader")]
#[command(about = "Box dimension calculator with unit conversion and presets", long_about = None)]
struct Cli {
    /// Config file (default: ./quader.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Unit for values given without one, and for results (mm, cm, m)
    #[arg(short, long, global = true)]
    unit: Option<LinearUnit>,

    /// Preset file (default: per-user QuaderGenerator/QuaderPresets.json)
    #[arg(long, global = true)]
    presets: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Box from length, width and height (e.g. "2" or "200 cm")
    #[command(name = "box")]
    Dimensions {
        #[arg(allow_hyphen_values = true)]
        length: String,
        #[arg(allow_hyphen_values = true)]
        width: String,
        #[arg(allow_hyphen_values = true)]
        height: String,
    },

    /// Derive the height from a volume and the footprint
    Volume {
        #[arg(allow_hyphen_values = true)]
        volume: String,
        #[arg(allow_hyphen_values = true)]
        length: String,
        #[arg(allow_hyphen_values = true)]
        width: String,
    },

    /// Derive the height from a surface area and the footprint
    Surface {
        #[arg(allow_hyphen_values = true)]
        surface_area: String,
        #[arg(allow_hyphen_values = true)]
        length: String,
        #[arg(allow_hyphen_values = true)]
        width: String,
    },

    /// Cube with the given volume or surface area
    Cube {
        #[arg(long, allow_hyphen_values = true, conflicts_with = "surface", required_unless_present = "surface")]
        volume: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        surface: Option<String>,
    },

    /// Convert a value between units
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,

        #[arg(long)]
        from: LinearUnit,

        #[arg(long)]
        to: LinearUnit,

        /// linear, area or volume
        #[arg(long, default_value = "linear")]
        kind: QuantityKind,
    },

    /// Manage saved presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// List all presets
    List,

    /// Show the stored values of a preset
    Show { name: String },

    /// Solve a preset and print the resulting box
    Apply { name: String },

    /// Save a preset, replacing one with the same name
    Save {
        name: String,

        /// dimensions, volume or surface
        mode: DerivationMode,

        /// dimensions: L W H, volume: V L W, surface: A L W (e.g. "200 cm").
        /// Stored in the active --unit.
        #[arg(num_args = 3, required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Delete a preset
    Delete { name: String },
}

struct Context {
    unit: LinearUnit,
    precision: usize,
    json: bool,
    store: PresetStore,
}

fn main() {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    let context = match build_context(&cli) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Dimensions {
            length,
            width,
            height,
        } => solve_direct(&context, &length, &width, &height),
        Commands::Volume {
            volume,
            length,
            width,
        } => solve_from_volume(&context, &volume, &length, &width),
        Commands::Surface {
            surface_area,
            length,
            width,
        } => solve_from_surface(&context, &surface_area, &length, &width),
        Commands::Cube { volume, surface } => solve_cube(&context, volume, surface),
        Commands::Convert {
            value,
            from,
            to,
            kind,
        } => convert_value(&context, value, from, to, kind),
        Commands::Preset { action } => run_preset_action(&context, action),
    };

    if let Err(e) = result {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn build_context(cli: &Cli) -> Result<Context, Box<dyn std::error::Error>> {
    let config = QuaderConfig::discover(cli.config.as_deref())?;

    let store = match &cli.presets {
        Some(path) => PresetStore::new(path),
        None => config.preset_store(),
    };
    log::debug!("Using preset file {}", store.path().display());

    Ok(Context {
        unit: cli.unit.unwrap_or(config.default_unit),
        precision: config.precision,
        json: cli.json,
        store,
    })
}

fn linear(context: &Context, input: &str) -> Result<f64, Box<dyn std::error::Error>> {
    Ok(parse_quantity(input, QuantityKind::Linear, context.unit)?)
}

fn solve_direct(
    context: &Context,
    length: &str,
    width: &str,
    height: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = DerivationRequest::Direct {
        length: linear(context, length)?,
        width: linear(context, width)?,
        height: linear(context, height)?,
    };

    print_box(context, solver::solve(request)?, context.unit)
}

fn solve_from_volume(
    context: &Context,
    volume: &str,
    length: &str,
    width: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = DerivationRequest::FromVolume {
        volume: parse_quantity(volume, QuantityKind::Volume, context.unit)?,
        length: linear(context, length)?,
        width: linear(context, width)?,
    };

    print_box(context, solver::solve(request)?, context.unit)
}

fn solve_from_surface(
    context: &Context,
    surface_area: &str,
    length: &str,
    width: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = DerivationRequest::FromSurface {
        surface_area: parse_quantity(surface_area, QuantityKind::Area, context.unit)?,
        length: linear(context, length)?,
        width: linear(context, width)?,
    };

    print_box(context, solver::solve(request)?, context.unit)
}

fn solve_cube(
    context: &Context,
    volume: Option<String>,
    surface: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let side = match (volume, surface) {
        (Some(volume), _) => solver::cube_side_from_volume(parse_quantity(
            &volume,
            QuantityKind::Volume,
            context.unit,
        )?)?,
        (None, Some(surface)) => solver::cube_side_from_surface_area(parse_quantity(
            &surface,
            QuantityKind::Area,
            context.unit,
        )?)?,
        (None, None) => return Err("Either --volume or --surface is required".into()),
    };

    print_box(context, solver::cube(side)?, context.unit)
}

fn convert_value(
    context: &Context,
    value: f64,
    from: LinearUnit,
    to: LinearUnit,
    kind: QuantityKind,
) -> Result<(), Box<dyn std::error::Error>> {
    let converted = units::convert(value, from, to, kind);

    if context.json {
        let result = serde_json::json!({
            "value": value,
            "from": units::symbol(from, kind),
            "converted": converted,
            "to": units::symbol(to, kind),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} {} = {} {}",
            value,
            units::symbol(from, kind),
            converted,
            units::symbol(to, kind)
        );
    }

    Ok(())
}

fn print_box(
    context: &Context,
    dimensions: BoxDimensions,
    unit: LinearUnit,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = BoxReport::new(&dimensions, unit)?;

    if context.json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.render(context.precision));
    }

    Ok(())
}

fn run_preset_action(
    context: &Context,
    action: PresetAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = &context.store;

    match action {
        PresetAction::List => {
            let presets = store.load();
            if context.json {
                println!("{}", serde_json::to_string_pretty(&presets)?);
            } else {
                println!("Presets ({}):", presets.len());
                for preset in &presets {
                    println!("  - {}", preset);
                }
            }
        }
        PresetAction::Show { name } => {
            let preset = store.get(&name)?;
            if context.json {
                println!("{}", serde_json::to_string_pretty(&preset)?);
            } else {
                println!("Preset: {}", preset.name);
                println!("Mode: {}", preset.mode);
                println!("Unit: {}", preset.unit);
                println!("Values: {}", preset.summary());
            }
        }
        PresetAction::Apply { name } => {
            let preset = store.get(&name)?;
            log::info!("Loaded preset: {} (Unit: {})", preset.name, preset.unit);
            // Results are shown in the unit the preset was saved in
            print_box(context, solver::solve(preset.to_request())?, preset.unit)?;
        }
        PresetAction::Save { name, mode, values } => {
            let inputs: [&str; 3] = match values.as_slice() {
                [a, b, c] => [a.as_str(), b.as_str(), c.as_str()],
                _ => return Err(format!("Expected 3 values, got {}", values.len()).into()),
            };
            let preset = Preset::from_inputs(&name, mode, context.unit, inputs)?;
            let saved_name = preset.name.clone();
            store.add(preset)?;
            println!("Preset saved: {} (Unit: {})", saved_name, context.unit);
        }
        PresetAction::Delete { name } => {
            if !store.delete(&name)? {
                return Err(PresetError::NotFound(name).into());
            }
            println!("Preset deleted: {}", name);
        }
    }

    Ok(())
}
