use anyhow::Result;
use openai_gen::openai::{ImageGenerationService, TextCompletionService};
use openai_gen::{Config, ImageRequest, ImageSize, Model, OpenAi, TextRequest};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TEXT_PROMPT: &str = "Write a one-line greeting for a space station visitor.";
const IMAGE_PROMPT: &str = "A pixel-art space station orbiting a ringed planet";

async fn run(text: &dyn TextCompletionService, images: &dyn ImageGenerationService) -> Result<()> {
    let request = TextRequest::new(TEXT_PROMPT)
        .with_model(Model::Davinci)
        .with_max_tokens(100);
    let response = text.complete(&request).await?;

    match response.response() {
        Some(answer) => info!("Text completion: {}", answer),
        None => warn!("Text completion returned no answers"),
    }
    info!("{}", response.usage());

    let request = ImageRequest::new(IMAGE_PROMPT).with_size(ImageSize::Small);
    let response = images.generate(&request).await?;

    let sprites = response.fetch_sprites().await?;
    if sprites.is_empty() {
        warn!("No images were generated");
    }
    for (i, sprite) in sprites.iter().enumerate() {
        info!(
            "Sprite {}: {}x{}",
            i, sprite.rect.width, sprite.rect.height
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openai_gen=info,demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let ai = OpenAi::from_config(&config);
    info!("Using API at {}", config.base_url);

    if let Err(e) = run(ai.text_completion(), ai.image_generation()).await {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
