use anyhow::{Context, Result};
use card_layout::{CardSettings, CardUploads, RawOptions, Upload, compute_geometry};
use card_render::{DocRaptorClient, FsIccStore, IccProfileStore, PdfSummary};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

#[derive(Parser)]
#[command(name = "cardt", about = "Greeting card print PDF tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the print markup without calling the rendering service
    Preview {
        #[command(flatten)]
        card: CardArgs,

        /// Output HTML file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a print-ready PDF through DocRaptor
    Generate {
        #[command(flatten)]
        card: CardArgs,

        /// DocRaptor API key
        #[arg(long, env = "DOCRAPTOR_API_KEY", hide_env_values = true)]
        api_key: String,

        /// New ICC profile to store and use as the output intent
        #[arg(long)]
        icc_file: Option<PathBuf>,

        /// Output PDF file (defaults to output_<profile>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage stored ICC profiles
    Icc {
        /// Profile directory
        #[arg(long, default_value = "icc_profiles")]
        icc_dir: PathBuf,

        #[command(subcommand)]
        action: IccAction,
    },

    /// Show page count and page boxes of a rendered PDF
    Inspect {
        /// Input PDF file
        input: PathBuf,
    },
}

#[derive(Subcommand)]
enum IccAction {
    /// List stored profiles
    List,
    /// Store a .icc file
    Add { file: PathBuf },
    /// Delete a stored profile
    Remove { name: String },
}

#[derive(Args)]
struct CardArgs {
    /// Front artwork (png, jpg, jpeg, gif, webp, tiff, tif)
    #[arg(short, long)]
    image: PathBuf,

    /// Back artwork (requires --provide-all-images)
    #[arg(long)]
    back_image: Option<PathBuf>,

    /// Inside spread artwork for folded cards (requires --provide-all-images)
    #[arg(long)]
    inside_image: Option<PathBuf>,

    /// Use the back and inside images instead of placeholders
    #[arg(long)]
    provide_all_images: bool,

    /// JSON file of option fields; flags below override it
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Card type: flat or folded
    #[arg(long)]
    card_type: Option<String>,

    /// PDF profile, e.g. "PDF/X-4"; empty for none
    #[arg(long)]
    pdf_profile: Option<String>,

    /// Image fit: cover, contain, fill, none, scale-down
    #[arg(long)]
    image_fit: Option<String>,

    /// Background color behind every panel
    #[arg(long)]
    background_color: Option<String>,

    /// PDF version passed to the renderer
    #[arg(long)]
    pdf_version: Option<String>,

    /// Add 1/8" bleed and crop marks
    #[arg(long)]
    add_bleed: bool,

    #[arg(long)]
    use_true_black: bool,

    #[arg(long)]
    use_cmyk_colors: bool,

    #[arg(long)]
    force_cmyk: bool,

    /// Sandbox (watermarked) conversion
    #[arg(long)]
    test_mode: bool,

    /// Stored ICC profile to embed as the output intent
    #[arg(long)]
    icc_profile: Option<String>,

    /// ICC profile directory
    #[arg(long, default_value = "icc_profiles")]
    icc_dir: PathBuf,
}

impl CardArgs {
    /// Settings file fields, overridden by explicit flags
    async fn raw_options(&self) -> Result<RawOptions> {
        let mut raw = match &self.settings {
            Some(path) => RawOptions::load(path)
                .await
                .with_context(|| format!("reading {}", path.display()))?,
            None => RawOptions::new(),
        };

        let values = [
            ("card_type", &self.card_type),
            ("pdf_profile", &self.pdf_profile),
            ("image_fit", &self.image_fit),
            ("background_color", &self.background_color),
            ("pdf_version", &self.pdf_version),
        ];
        for (key, value) in values {
            if let Some(value) = value {
                raw.set(key, value.as_str());
            }
        }

        let flags = [
            ("add_bleed", self.add_bleed),
            ("use_true_black", self.use_true_black),
            ("use_cmyk_colors", self.use_cmyk_colors),
            ("force_cmyk", self.force_cmyk),
            ("test_mode", self.test_mode),
        ];
        for (key, set) in flags {
            if set {
                raw.set(key, "true");
            }
        }

        raw.validate()?;
        Ok(raw)
    }

    async fn uploads(&self) -> Result<CardUploads> {
        Ok(CardUploads {
            front: Some(read_upload(&self.image).await?),
            back: read_optional_upload(self.back_image.as_deref()).await?,
            inside: read_optional_upload(self.inside_image.as_deref()).await?,
            provide_all_images: self.provide_all_images,
        })
    }
}

async fn read_upload(path: &Path) -> Result<Upload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Upload::new(file_name, bytes))
}

async fn read_optional_upload(path: Option<&Path>) -> Result<Option<Upload>> {
    match path {
        Some(path) => Ok(Some(read_upload(path).await?)),
        None => Ok(None),
    }
}

/// Validate options and uploads, then resolve settings with the chosen ICC profile
async fn prepare(
    card: &CardArgs,
    icc_bytes: Option<Vec<u8>>,
) -> Result<(CardSettings, card_layout::CardImages)> {
    let raw = card.raw_options().await?;
    let settings = card_layout::resolve_settings(&raw, icc_bytes);
    let images = card.uploads().await?.into_images(settings.card_type)?;
    Ok((settings, images))
}

async fn stored_icc_profile(card: &CardArgs) -> Result<Option<Vec<u8>>> {
    match card.icc_profile.as_deref() {
        Some(name) if !name.is_empty() => {
            let store = FsIccStore::open(&card.icc_dir).await?;
            Ok(card_render::resolve_icc_profile(&store, name).await?)
        }
        _ => Ok(None),
    }
}

/// Page count and per-page boxes, one line each
fn format_summary(summary: &PdfSummary) -> String {
    let mut text = format!("Pages: {}\n", summary.page_count);
    for (index, page) in summary.pages.iter().enumerate() {
        let trim = page.effective_trim();
        text.push_str(&format!(
            "  Page {}: media {:.2} x {:.2} pt, trim {:.2} x {:.2} pt{}\n",
            index + 1,
            page.media.width(),
            page.media.height(),
            trim.width(),
            trim.height(),
            page.bleed
                .map(|b| format!(", bleed {:.2} x {:.2} pt", b.width(), b.height()))
                .unwrap_or_default()
        ));
    }
    text
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { card, output } => {
            let icc_bytes = stored_icc_profile(&card).await?;
            let (settings, images) = prepare(&card, icc_bytes).await?;
            let markup = card_layout::generate_markup(&settings, &images);

            match output {
                Some(path) => {
                    tokio::fs::write(&path, &markup).await?;
                    println!("Preview → {}", path.display());
                }
                None => {
                    let mut stdout = tokio::io::stdout();
                    stdout.write_all(markup.as_bytes()).await?;
                    stdout.flush().await?;
                }
            }
        }

        Commands::Generate {
            card,
            api_key,
            icc_file,
            output,
        } => {
            let client = DocRaptorClient::new(api_key)?;

            // A freshly supplied profile takes precedence over a stored one
            let mut icc_bytes = None;
            if let Some(path) = &icc_file {
                let upload = read_upload(path).await?;
                let store = FsIccStore::open(&card.icc_dir).await?;
                let stored = store.save(&upload.file_name, &upload.bytes).await?;
                icc_bytes = card_render::resolve_icc_profile(&store, &stored).await?;
            }
            if icc_bytes.is_none() {
                icc_bytes = stored_icc_profile(&card).await?;
            }

            let (settings, images) = prepare(&card, icc_bytes).await?;
            let rendered = card_render::generate_card_pdf(&client, &settings, &images).await?;

            let output = output.unwrap_or_else(|| PathBuf::from(&rendered.file_name));
            card_render::save_pdf(&rendered.pdf, &output).await?;

            let geometry = compute_geometry(settings.card_type, settings.add_bleed);
            match card_render::inspect_pdf(&rendered.pdf) {
                Ok(summary) => {
                    print!("{}", format_summary(&summary));
                    if !summary.matches_layout(&geometry) {
                        log::warn!(
                            "Rendered PDF does not match the {} {} x {} layout",
                            settings.card_type,
                            geometry.trim_width,
                            geometry.trim_height
                        );
                    }
                }
                Err(e) => log::warn!("Could not inspect rendered PDF: {}", e),
            }

            println!("Generated {} card → {}", settings.card_type, output.display());
        }

        Commands::Icc { icc_dir, action } => {
            let store = FsIccStore::open(&icc_dir).await?;
            match action {
                IccAction::List => {
                    let profiles = store.list().await?;
                    if profiles.is_empty() {
                        println!("No ICC profiles in {}", icc_dir.display());
                    }
                    for profile in profiles {
                        println!("{}\t{}", profile.name, profile.file_name);
                    }
                }
                IccAction::Add { file } => {
                    let upload = read_upload(&file).await?;
                    let stored = store.save(&upload.file_name, &upload.bytes).await?;
                    println!("Stored {} → {}", file.display(), stored);
                }
                IccAction::Remove { name } => {
                    store.delete(&name).await?;
                    println!("Removed {}", name);
                }
            }
        }

        Commands::Inspect { input } => {
            let summary = card_render::inspect_pdf_file(&input).await?;
            print!("{}", format_summary(&summary));
        }
    }

    Ok(())
}
