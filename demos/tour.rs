//! Runs the four demonstration calls back to back, printing each raw
//! response body. Each call is awaited to completion before the next one
//! starts.

use aipost::openai::{Classification, Completion, Embedding, Image, OpenAI, OpenAIConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let client = OpenAI::from_env()?;

    let image = Image::default().set_prompt("a white siamese cat");
    println!("{}", client.send(&image).await?);

    let completion = Completion::default()
        .set_prompt("This is a test. The AI will continue writing after this sentence.");
    println!("{}", client.send(&completion).await?);

    let embedding = Embedding::default().set_input("This is a test sentence for embedding.");
    println!("{}", client.send(&embedding).await?);

    let classification = Classification::sentiment("I love sunny days but hate the rain.");
    println!("{}", client.send(&classification).await?);

    Ok(())
}
