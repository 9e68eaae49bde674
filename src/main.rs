//! Ammann Tiling entry point
//!
//! Native builds run a CLI that writes SVG, JSON, a raw triangle mesh or
//! per-generation stats.
//! The browser build starts from `web::run` instead.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::{Parser, ValueEnum};
    use std::io::Write;
    use std::path::PathBuf;

    use ammann_tiling::renderer::vertex::{Vertex, as_bytes};
    use ammann_tiling::renderer::{render_svg, tiling_mesh};
    use ammann_tiling::tiling::GenerationStats;
    use ammann_tiling::{DetailPreset, Result, Settings, Tile};

    #[derive(Clone, Copy, Debug, ValueEnum)]
    pub enum Format {
        Svg,
        Json,
        /// Interleaved position + color f32 triangles, native byte order
        Mesh,
        Stats,
    }

    /// Generate an Ammann-style aperiodic tiling
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    pub struct Args {
        /// JSON settings file; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Canvas width (seed size is width / 2.5)
        #[arg(long)]
        width: Option<f64>,

        /// Canvas height
        #[arg(long)]
        height: Option<f64>,

        /// Deflation depth
        #[arg(short, long)]
        generations: Option<u32>,

        /// Detail preset: low, medium or high
        #[arg(long, value_parser = parse_preset)]
        preset: Option<DetailPreset>,

        /// Fit the tiling to the canvas instead of the default view
        #[arg(long)]
        fit: bool,

        #[arg(short, long, value_enum, default_value_t = Format::Svg)]
        format: Format,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the effective settings as JSON and exit
        #[arg(long)]
        save_config: Option<PathBuf>,
    }

    fn parse_preset(s: &str) -> std::result::Result<DetailPreset, String> {
        DetailPreset::from_str(s).ok_or_else(|| format!("unknown preset '{s}'"))
    }

    impl Args {
        fn settings(&self) -> Result<Settings> {
            let mut settings = match &self.config {
                Some(path) => Settings::load_from(path)?,
                None => Settings::default(),
            };
            if let Some(width) = self.width {
                settings.width = width;
            }
            if let Some(height) = self.height {
                settings.height = height;
            }
            if let Some(preset) = self.preset {
                settings.preset = preset;
                settings.generations = None;
            }
            if self.generations.is_some() {
                settings.generations = self.generations;
            }
            if self.fit {
                settings.fit_to_canvas = true;
            }
            settings.validate()?;
            Ok(settings)
        }
    }

    fn stats_report(stats: &[GenerationStats]) -> String {
        let mut out = String::from("generation\tproduced\tretained\tbig\tsmall\tduplicates\n");
        for s in stats {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                s.generation,
                s.produced,
                s.retained,
                s.big,
                s.small,
                s.duplicates()
            ));
        }
        out
    }

    fn render(
        format: Format,
        tiles: &[Tile],
        stats: &[GenerationStats],
        settings: &Settings,
    ) -> Result<Vec<u8>> {
        Ok(match format {
            Format::Svg => render_svg(tiles, settings).into_bytes(),
            Format::Json => serde_json::to_vec_pretty(tiles)?,
            Format::Mesh => {
                let mesh = tiling_mesh(tiles, settings);
                log::info!(
                    "Mesh: {} vertices, stride {} bytes, color at offset {}",
                    mesh.len(),
                    Vertex::STRIDE,
                    Vertex::COLOR_OFFSET
                );
                as_bytes(&mesh).to_vec()
            }
            Format::Stats => stats_report(stats).into_bytes(),
        })
    }

    pub fn run(args: Args) -> Result<()> {
        let settings = args.settings()?;

        if let Some(path) = &args.save_config {
            return settings.save_to(path);
        }

        let (tiles, stats) = settings.build_tiling()?;
        log::info!(
            "Generated {} tiles in {} generations on a {}x{} canvas",
            tiles.len(),
            settings.generations(),
            settings.width,
            settings.height
        );

        let body = render(args.format, &tiles, &stats, &settings)?;
        match &args.output {
            Some(path) => {
                std::fs::write(path, body)?;
                log::info!("Wrote {:?} to {}", args.format, path.display());
            }
            None => {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                lock.write_all(&body)?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_mesh_output_is_vertex_buffer() {
            let settings = Settings::default();
            let (tiles, stats) = settings.build_tiling().unwrap();
            let bytes = render(Format::Mesh, &tiles, &stats, &settings).unwrap();
            // 4 fill triangles and 6 stroke quads per tile
            assert_eq!(bytes.len(), tiles.len() * (12 + 36) * Vertex::STRIDE);
            let first: Vertex = bytemuck::pod_read_unaligned(&bytes[..Vertex::STRIDE]);
            assert_eq!(first.color, settings.palette.fill(tiles[0].kind()));
        }

        #[test]
        fn test_stats_output_has_row_per_generation() {
            let settings = Settings::default();
            let (tiles, stats) = settings.build_tiling().unwrap();
            let bytes = render(Format::Stats, &tiles, &stats, &settings).unwrap();
            let text = String::from_utf8(bytes).unwrap();
            assert_eq!(text.lines().count(), 1 + settings.generations() as usize);
        }

        #[test]
        fn test_generation_flag_over_cap_rejected() {
            let args = Args::parse_from(["ammann-tiling", "--generations", "40"]);
            assert!(args.settings().is_err());
            let args = Args::parse_from(["ammann-tiling", "--preset", "high"]);
            assert_eq!(args.settings().unwrap().generations(), 6);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();
    let args = cli::Args::parse();
    match cli::run(args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::run, this is just to satisfy the compiler
}
