use clap::Parser;

use hexmap_generator::ascii::{self, AsciiMode};
use hexmap_generator::export;
use hexmap_generator::{generate_world, GenerationParams};

#[derive(Parser, Debug)]
#[command(name = "hexmap_generator")]
#[command(about = "Generate procedural hex tile maps with zones and player starts")]
struct Args {
    /// Width of the map in cells
    #[arg(short = 'W', long, default_value = "20")]
    width: usize,

    /// Height of the map in cells
    #[arg(short = 'H', long, default_value = "20")]
    height: usize,

    /// Random seed (uses a fresh seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of player start positions
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Noise frequency (lower = larger landmasses)
    #[arg(long, default_value = "0.1")]
    noise_scale: f32,

    /// Height multiplier applied to level values
    #[arg(long, default_value = "5.0")]
    height_scale: f32,

    /// Width of the low-noise border band
    #[arg(long, default_value = "3.0")]
    border_size: f32,

    /// Strength of the border falloff
    #[arg(long, default_value = "1.0")]
    border_intensity: f32,

    /// Height level weights, lowest level first (lowest level is water)
    #[arg(long, value_delimiter = ',', default_values_t = vec![1.0, 1.0, 1.0, 1.0, 1.0])]
    weights: Vec<f32>,

    /// Hex cell size in world units
    #[arg(long, default_value = "1.0")]
    hex_size: f32,

    /// Also print the zone id view
    #[arg(long)]
    zones: bool,

    /// Export the model as JSON to this path
    #[arg(long)]
    export: Option<String>,
}

fn main() {
    let args = Args::parse();

    let params = GenerationParams {
        width: args.width,
        height: args.height,
        hex_size: args.hex_size,
        noise_scale: args.noise_scale,
        height_scale: args.height_scale,
        seed: args.seed.unwrap_or(0),
        fix_seed: args.seed.is_some(),
        level_weights: args.weights,
        border_size: args.border_size,
        border_intensity: args.border_intensity,
        player_count: args.players,
    };

    let model = match generate_world(&params) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("Generated map with seed: {}", model.seed);
    println!("Map size: {}x{}", model.width, model.height);
    println!(
        "{} land cells, {} water cells, {} zones, {} start positions",
        model.land_count(),
        model.water_count(),
        model.zone_count,
        model.start_positions().len()
    );
    println!();
    println!("{}", ascii::render_map(&model, AsciiMode::Terrain));

    if args.zones {
        println!("Zones:");
        println!("{}", ascii::render_map(&model, AsciiMode::Zones));
    }

    if let Some(ref path) = args.export {
        match export::export_json(&model, path) {
            Ok(()) => println!("Exported model to: {}", path),
            Err(e) => eprintln!("Failed to export model: {}", e),
        }
    }
}
