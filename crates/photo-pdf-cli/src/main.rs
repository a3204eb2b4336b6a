use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use photo_pdf::{DocumentOptions, Session};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photopdf", about = "Combine photos into a PDF", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a PDF with one page per photo
    Generate {
        /// Input image files, in page order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file or directory (directory gets a generated name)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Write the effective options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,
    },

    /// Show photo sizes and where each would be placed
    Info {
        /// Input image files
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Load options from a JSON file (explicit flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// How each photo is fitted to its page
    #[arg(long, value_enum)]
    fit: Option<FitArg>,

    /// Image encoding quality
    #[arg(long, value_enum)]
    quality: Option<QualityArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum FitArg {
    Contain,
    Fill,
    Actual,
}

#[derive(Clone, Copy, ValueEnum)]
enum QualityArg {
    High,
    Medium,
    Low,
}

impl From<PaperArg> for photo_pdf::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for photo_pdf::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<FitArg> for photo_pdf::FitStrategy {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Contain => Self::Contain,
            FitArg::Fill => Self::Fill,
            FitArg::Actual => Self::Actual,
        }
    }
}

impl From<QualityArg> for photo_pdf::QualityLevel {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::High => Self::High,
            QualityArg::Medium => Self::Medium,
            QualityArg::Low => Self::Low,
        }
    }
}

impl LayoutArgs {
    async fn resolve(&self) -> Result<DocumentOptions> {
        let mut options = match &self.config {
            Some(path) => DocumentOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => DocumentOptions::default(),
        };

        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(fit) = self.fit {
            options.fit = fit.into();
        }
        if let Some(quality) = self.quality {
            options.quality = quality.into();
        }

        options.validate()?;
        Ok(options)
    }
}

async fn load_session(input: &[PathBuf], options: DocumentOptions) -> Result<Session> {
    let mut session = Session::new(options);
    let added = session.add_files(input).await?;

    let skipped = input.len() - added.len();
    if skipped > 0 {
        log::warn!("Skipped {} non-image file(s)", skipped);
    }
    if added.is_empty() {
        bail!("No image files among the inputs");
    }
    Ok(session)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            layout,
            save_config,
        } => {
            let options = layout.resolve().await?;
            if let Some(path) = &save_config {
                options.save(path).await?;
                println!("Saved options → {}", path.display());
            }

            let session = load_session(&input, options).await?;
            let document = session.generate().await?;
            let path = photo_pdf::save_document(&document, &output).await?;
            println!(
                "Generated {} page(s) → {}",
                document.page_count,
                path.display()
            );
        }

        Commands::Info { input, layout } => {
            let options = layout.resolve().await?;
            let geometry = options.page_geometry();
            let session = load_session(&input, options).await?;

            println!(
                "Page: {} {:?} ({} x {} mm), fit: {:?}",
                options.paper_size.name(),
                options.orientation,
                geometry.width,
                geometry.height,
                options.fit
            );
            for (index, photo) in session.photos().iter().enumerate() {
                let size = photo_pdf::format_file_size(photo.size_bytes());
                match photo.dimensions() {
                    Some(dims) => {
                        let rect = photo_pdf::compute_placement(options.fit, dims, &geometry);
                        println!(
                            "  {:>3}. {} ({}, {} x {} px) → {:.1} x {:.1} mm at ({:.1}, {:.1})",
                            index + 1,
                            photo.name(),
                            size,
                            dims.0,
                            dims.1,
                            rect.width,
                            rect.height,
                            rect.x,
                            rect.y
                        );
                    }
                    None => println!(
                        "  {:>3}. {} ({}, unreadable image header)",
                        index + 1,
                        photo.name(),
                        size
                    ),
                }
            }
            println!(
                "Total: {} photo(s), {}",
                session.photos().len(),
                photo_pdf::format_file_size(session.photos().total_size_bytes())
            );
        }
    }

    Ok(())
}
