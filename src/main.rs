use anyhow::{Context, bail};
use ros_vision_rs::image_pipeline::{ConversionConfig, ImageToTexturePipeline};
use ros_vision_rs::logger;

use tracing::{error, info};

const USAGE: &str = "usage: ros_vision_rs <input> <output> [--swap-channels] [--flip-vertical]";

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut paths = Vec::new();
    let mut builder = ConversionConfig::builder();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--swap-channels" => builder = builder.channel_swap(true),
            "--flip-vertical" => builder = builder.flip_vertical(true),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ => paths.push(arg),
        }
    }
    let [input, output] = paths.as_slice() else {
        bail!("{USAGE}");
    };

    let pipeline = ImageToTexturePipeline::new(builder.build());

    info!("Image conversion pipeline initialized");
    info!("Channel swap: {}", pipeline.config().channel_swap);
    info!("Vertical flip: {}", pipeline.config().flip_vertical);

    match pipeline.convert_file(input, output) {
        Ok(texture) => info!(
            "Conversion successful: {}x{} {:?}",
            texture.width(),
            texture.height(),
            texture.format()
        ),
        Err(e) => {
            error!("Conversion failed: {}", e);
            return Err(e).with_context(|| format!("converting {input} to {output}"));
        }
    }

    Ok(())
}
