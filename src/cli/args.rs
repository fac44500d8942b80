use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "grainpress",
    version,
    about = "Upscale, sharpen, add micro-noise, downscale and re-encode one image as JPEG"
)]
pub struct CliArgs {
    /// Image to read (any format the decoder recognises)
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// JPEG file to write; created or overwritten
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
}
